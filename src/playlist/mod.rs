pub mod config;
pub mod extractor;
pub mod links;
pub mod metadata;

mod lines;
mod structured;

#[cfg(test)]
mod extractor_tests;

pub use config::*;
pub use extractor::*;
pub use metadata::*;
