//! Name Generator Command Core
//!
//! Interprets the arguments of the name command and gathers the seed word
//! lists the name synthesizer draws from.
//!
//! # Modules
//!
//! - [`args_parser`]: raw command text to [`ParsedRequest`]
//! - [`seeds`]: race/gender selection and seed loading into [`SeedSelection`]
//! - [`seed_store`]: where seed lists come from (directory or memory)
//! - [`races`], [`gender`]: the fixed race and gender tables
//! - [`command`]: both stages run back to back
//!
//! # Example
//!
//! ```ignore
//! use ttttrps_namegen::core::name_gen::{FsSeedStore, NameCommand, SeedSelector};
//!
//! let mut command = NameCommand::new(SeedSelector::new(FsSeedStore::new("data/seeds")));
//! let outcome = command.run("half-elf girl 3").await;
//! ```

pub mod args_parser;
pub mod command;
pub mod errors;
pub mod gender;
pub mod races;
pub mod seed_store;
pub mod seeds;

pub use args_parser::{ArgsParser, ParsedRequest, MAX_NAME_COUNT};
pub use command::{CommandOutcome, NameCommand};
pub use errors::{ArgsError, RaceError, SeedError, SeedStoreError, SelectionError};
pub use gender::Gender;
pub use races::Race;
pub use seed_store::{FsSeedStore, MemorySeedStore, SeedKey, SeedStore};
pub use seeds::{SeedSelection, SeedSelector, SEED_ERROR_MESSAGE};
