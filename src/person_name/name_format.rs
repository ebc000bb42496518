use crate::error::AppError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects which rendering of a [`PersonName`](super::PersonName) to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NameFormat {
    /// "Joshua David Weaver"
    #[default]
    Full,
    /// "Joshua D. Weaver"
    MiddleInitial,
    /// "J.D.W."
    Initials,
}

impl NameFormat {
    pub const ALL: [NameFormat; 3] = [
        NameFormat::Full,
        NameFormat::MiddleInitial,
        NameFormat::Initials,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NameFormat::Full => "full",
            NameFormat::MiddleInitial => "middle-initial",
            NameFormat::Initials => "initials",
        }
    }
}

impl fmt::Display for NameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        NameFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or_else(|| AppError::invalid_format(s))
    }
}
