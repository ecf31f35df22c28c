pub mod classifier;
pub mod presets;
pub mod query;


pub use classifier::*;
pub use presets::*;
pub use query::*;
