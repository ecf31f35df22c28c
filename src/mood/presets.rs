use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;

/// Button moods offered by the UI; trusted by construction and never classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Energetic,
    Melancholy,
    Chill,
    Heartbroken,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Energetic,
        Preset::Melancholy,
        Preset::Chill,
        Preset::Heartbroken,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Preset::Energetic => "Energetic",
            Preset::Melancholy => "Melancholy",
            Preset::Chill => "Chill",
            Preset::Heartbroken => "Heartbroken",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Preset::Energetic => "⚡",
            Preset::Melancholy => "🟣",
            Preset::Chill => "🧘",
            Preset::Heartbroken => "💔",
        }
    }

    /// "Surprise Me": any preset, uniformly
    pub fn surprise() -> Preset {
        let mut rng = rand::thread_rng();
        *Self::ALL.choose(&mut rng).unwrap_or(&Preset::Chill)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|p| p.label()).collect();
                format!("unknown preset mood '{wanted}' (expected one of: {})", names.join(", "))
            })
    }
}
