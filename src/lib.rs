//! TTTTRPS Name Generator
//!
//! Argument parsing and seed-list selection for the name command of the
//! TTRPG assistant chat bot.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
