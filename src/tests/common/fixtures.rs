//! Test Fixtures
//!
//! Builders for requests used across unit and property tests.

#![allow(dead_code)]

use crate::core::name_gen::{Gender, ParsedRequest, Race};

/// Look up a race that is known to be in the table.
pub fn race(name: &str) -> Race {
    Race::from_name(name).expect("race in table")
}

/// Build a request as if it came from the parser.
pub fn request(races: &[&str], genders: &[Gender]) -> ParsedRequest {
    ParsedRequest {
        races: races.iter().map(|name| race(name)).collect(),
        genders: genders.to_vec(),
        ..ParsedRequest::default()
    }
}
