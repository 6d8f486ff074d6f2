//! Race Registry
//!
//! Closed table of playable races with the flags that decide which seed
//! lists a race needs:
//!
//! ```text
//! Race
//!   +-- name: "elf"
//!   +-- is_genderless: false   -> given-name key includes the gender
//!   +-- lacks_surname: false   -> a surname list is loaded as well
//! ```
//!
//! Half-breed composites ("half-elf") are not part of the table; the argument
//! parser expands them into two table entries.

use serde::Serialize;

use super::errors::RaceError;

// ============================================================================
// Race
// ============================================================================

/// A race from the fixed race table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Race {
    name: &'static str,
    is_genderless: bool,
    lacks_surname: bool,
}

impl Race {
    const fn new(name: &'static str, is_genderless: bool, lacks_surname: bool) -> Self {
        Self {
            name,
            is_genderless,
            lacks_surname,
        }
    }

    /// Look up a race by its identifier.
    ///
    /// Matching is exact; "Elf" is not "elf".
    pub fn from_name(name: &str) -> Result<Self, RaceError> {
        RACES
            .iter()
            .find(|race| race.name == name)
            .copied()
            .ok_or_else(|| RaceError::unknown(name))
    }

    /// The default race used when none is given.
    pub fn human() -> Self {
        RACES[0]
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Genderless races share one given-name list.
    pub fn is_genderless(&self) -> bool {
        self.is_genderless
    }

    pub fn lacks_surname(&self) -> bool {
        self.lacks_surname
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

// ============================================================================
// Race Table
// ============================================================================

// human must stay first: `Race::human` indexes it.
static RACES: [Race; 12] = [
    Race::new("human", false, false),
    Race::new("elf", false, false),
    Race::new("dwarf", false, false),
    Race::new("halfling", false, false),
    Race::new("gnome", false, false),
    Race::new("orc", false, true),
    Race::new("goblin", false, true),
    Race::new("dragonborn", false, false),
    Race::new("tiefling", false, false),
    Race::new("aasimar", false, false),
    Race::new("tabaxi", false, true),
    Race::new("warforged", true, true),
];

/// Identifiers of every race in the table.
pub static RACE_KEYS: [&str; 12] = [
    "human",
    "elf",
    "dwarf",
    "halfling",
    "gnome",
    "orc",
    "goblin",
    "dragonborn",
    "tiefling",
    "aasimar",
    "tabaxi",
    "warforged",
];

/// Check whether a token names a race in the table.
pub fn is_race_key(token: &str) -> bool {
    RACE_KEYS.contains(&token)
}

/// All races in table order.
pub fn all() -> &'static [Race] {
    &RACES
}

// ============================================================================
// Tests
// ============================================================================
