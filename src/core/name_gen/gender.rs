//! Gender tags and the keywords that select them.

use serde::{Deserialize, Serialize};

const MALE_KEYS: [&str; 4] = ["m", "male", "man", "boy"];
const FEMALE_KEYS: [&str; 5] = ["f", "female", "w", "woman", "girl"];

/// Canonical gender used in seed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Map a command keyword to its gender.
    ///
    /// Keywords are matched exactly, so "Boy" is not a keyword.
    pub fn from_keyword(token: &str) -> Option<Self> {
        if MALE_KEYS.contains(&token) {
            Some(Self::Male)
        } else if FEMALE_KEYS.contains(&token) {
            Some(Self::Female)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
