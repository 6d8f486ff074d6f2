//! Crate-level tests: shared fixtures, mocks, unit and property tests.

mod mocks;
mod property;
mod unit;
