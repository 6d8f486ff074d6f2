//! Seed Selection
//!
//! Picks one race and one gender out of a [`ParsedRequest`] and loads the
//! seed lists the name synthesizer needs for that pair.
//!
//! ```text
//! ParsedRequest { races: [elf, human, elf], genders: [female, male] }
//!   -> dedupe    races: [elf, human], genders: [female, male]
//!   -> pick      race: human, gender: female   (independent uniform picks)
//!   -> read      human.female.json + human.surname.json   (joined)
//!   -> SeedSelection
//! ```

use rand::prelude::*;
use rand::rngs::StdRng;
use serde::Serialize;

use super::args_parser::{push_line, ParsedRequest};
use super::errors::{SeedError, SeedResult, SelectionError};
use super::gender::Gender;
use super::races::Race;
use super::seed_store::{SeedKey, SeedStore};

/// Shown to the user when seed retrieval fails; details only go to the log.
pub const SEED_ERROR_MESSAGE: &str = "An error occurred while generating seed data for name generation. This has been logged and will be fixed soon:tm:.";

// ============================================================================
// Seed Selection
// ============================================================================

/// Race, gender and seed lists chosen for one command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedSelection {
    pub selected_race: Option<Race>,
    pub selected_gender: Option<Gender>,
    /// Given-name seeds.
    pub seeds: Vec<String>,
    /// Surname seeds. Empty when the race has no surnames.
    pub surname_seeds: Vec<String>,
    pub message: String,
    pub error: Option<String>,
}

impl SeedSelection {
    fn failed(error: impl ToString) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

// ============================================================================
// Selector
// ============================================================================

/// Selects a race/gender pair and loads its seeds from a [`SeedStore`].
pub struct SeedSelector<S> {
    store: S,
    rng: StdRng,
}

impl<S: SeedStore> SeedSelector<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create with a specific seed for reproducible picks
    pub fn with_seed(store: S, seed: u64) -> Self {
        Self {
            store,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Check the request and pick a race and gender.
    ///
    /// No seeds are read. On failure only `error` is set.
    pub fn validate(&mut self, request: Option<&ParsedRequest>) -> SeedSelection {
        match self.select(request) {
            Ok(selection) => selection,
            Err(e) => SeedSelection::failed(e),
        }
    }

    fn select(&mut self, request: Option<&ParsedRequest>) -> Result<SeedSelection, SelectionError> {
        let request = request.ok_or(SelectionError::MissingRequest)?;
        if request.races.is_empty() {
            return Err(SelectionError::NoRaces);
        }
        if request.genders.is_empty() {
            return Err(SelectionError::NoGenders);
        }

        let races = unique_races(&request.races);
        let genders = unique_genders(&request.genders);

        let race = races[self.rng.gen_range(0..races.len())];
        let gender = genders[self.rng.gen_range(0..genders.len())];

        let mut selection = SeedSelection {
            selected_race: Some(race),
            selected_gender: Some(gender),
            ..SeedSelection::default()
        };

        if races.len() > 1 {
            push_line(
                &mut selection.message,
                &format!("Multiple races specified: generating {} names.", race),
            );
        }
        if genders.len() > 1 {
            push_line(
                &mut selection.message,
                &format!("Multiple genders specified: generating {} names.", gender),
            );
        }

        Ok(selection)
    }

    /// Validate the request and load seeds for the chosen race and gender.
    ///
    /// Retrieval failures are logged and replaced by [`SEED_ERROR_MESSAGE`].
    pub async fn load_seeds(&mut self, request: Option<&ParsedRequest>) -> SeedSelection {
        let mut selection = self.validate(request);
        let (Some(race), Some(gender)) = (selection.selected_race, selection.selected_gender) else {
            return selection;
        };

        let given_key = SeedKey::given(&race, gender);

        match self.fetch(&race, &given_key).await {
            Ok((seeds, surname_seeds)) => {
                selection.seeds = seeds;
                selection.surname_seeds = surname_seeds;
            }
            Err(e) => {
                log::error!(
                    "Error while loading seed data. Key: {}, Race: {}, Gender: {}: {}",
                    given_key,
                    race,
                    gender,
                    e
                );
                if e.is_recoverable() {
                    log::warn!("Seed data for {} {} is missing from the seed store", race, gender);
                }
                selection.error = Some(SEED_ERROR_MESSAGE.to_string());
            }
        }

        selection
    }

    async fn fetch(&self, race: &Race, given_key: &str) -> SeedResult<(Vec<String>, Vec<String>)> {
        if race.lacks_surname() {
            let seeds = self.fetch_list(given_key).await?;
            return Ok((seeds, Vec::new()));
        }

        let surname_key = SeedKey::surname(race);
        tokio::try_join!(self.fetch_list(given_key), self.fetch_list(&surname_key))
    }

    async fn fetch_list(&self, key: &str) -> SeedResult<Vec<String>> {
        let raw = self.store.read(key).await?;
        serde_json::from_str(&raw).map_err(|e| SeedError::parse_failed(key, e))
    }
}

/// Races without repeats, first occurrence kept.
fn unique_races(races: &[Race]) -> Vec<Race> {
    let mut unique: Vec<Race> = Vec::with_capacity(races.len());
    for race in races {
        if !unique.iter().any(|r| r.name() == race.name()) {
            unique.push(*race);
        }
    }
    unique
}

/// Genders without repeats, first occurrence kept.
fn unique_genders(genders: &[Gender]) -> Vec<Gender> {
    let mut unique: Vec<Gender> = Vec::with_capacity(genders.len());
    for gender in genders {
        if !unique.contains(gender) {
            unique.push(*gender);
        }
    }
    unique
}

// ============================================================================
// Tests
// ============================================================================
