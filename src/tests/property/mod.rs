//! Property-based tests for the name command core
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `args_parser_props`: tokenizing of command text
//!   - Unrecognized input falls back to human/male/1 with two notes
//!   - A single count up to the max is kept; above it is clamped
//!   - A second count always errors and leaves races and genders untouched
//!   - Nested half-breeds expand to one human per `half-`
//!
//! - `seed_selection_props`: race/gender selection
//!   - The chosen race and gender come from the request
//!   - Exactly one "Multiple races" note when more than one race is given
//!   - Seed keys carry a gender only for gendered races
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable.

mod seed_selection_props;
