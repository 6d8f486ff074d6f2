//! Name Command Argument Parser
//!
//! Turns the free-form text after the name command into a [`ParsedRequest`].
//!
//! Tokens are whitespace separated and classified in this order:
//! 1. gender keyword (`m`, `woman`, `girl`, ...)
//! 2. race keyword, including half-breeds (`elf`, `half-orc`, `half-half-elf`)
//! 3. name count (`3`), at most once per command
//!
//! Anything else is ignored. Defaults are applied after all tokens are read.

use serde::Serialize;

use super::errors::ArgsError;
use super::gender::Gender;
use super::races::{self, Race};

// ============================================================================
// Constants
// ============================================================================

/// Upper bound on names per command.
pub const MAX_NAME_COUNT: u32 = 20;

/// Lower bound on names per command.
pub const MIN_NAME_COUNT: u32 = 1;

/// Gender used when the command names none.
pub const DEFAULT_GENDER: Gender = Gender::Male;

const HALF_PREFIX: &str = "half";

// ============================================================================
// Parsed Request
// ============================================================================

/// Structured form of a name command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRequest {
    /// Races in token order. Duplicates are kept.
    pub races: Vec<Race>,
    /// Genders in token order. Duplicates are kept.
    pub genders: Vec<Gender>,
    pub name_count: u32,
    /// Notes for the user, one per line.
    pub message: String,
    /// Set when parsing stopped early.
    pub error: Option<String>,
}

impl Default for ParsedRequest {
    fn default() -> Self {
        Self {
            races: Vec::new(),
            genders: Vec::new(),
            name_count: MIN_NAME_COUNT,
            message: String::new(),
            error: None,
        }
    }
}

impl ParsedRequest {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

// ============================================================================
// Parser
// ============================================================================

/// Parser for name command arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgsParser;

impl ArgsParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse raw command text.
    ///
    /// Never fails: problems are reported through [`ParsedRequest::error`].
    /// When an error is set, defaults are not applied and the request holds
    /// only what was collected before the failing token.
    pub fn parse(&self, raw: &str) -> ParsedRequest {
        let mut request = ParsedRequest::default();

        if let Err(e) = self.parse_into(raw, &mut request) {
            log::debug!("Name command arguments rejected: {:?} ({})", raw, e);
            request.error = Some(e.to_string());
        }

        request
    }

    fn parse_into(&self, raw: &str, request: &mut ParsedRequest) -> Result<(), ArgsError> {
        let mut count_seen = false;

        for token in raw.split_whitespace() {
            if let Some(gender) = Gender::from_keyword(token) {
                request.genders.push(gender);
            } else if is_race_token(token) {
                let parsed = parse_races(token)?;
                request.races.extend(parsed);
            } else if let Some(count) = parse_count(token) {
                if count_seen {
                    return Err(ArgsError::DuplicateCount);
                }
                count_seen = true;
                request.name_count = clamp_count(count, &mut request.message);
            }
        }

        if request.genders.is_empty() {
            request.genders.push(DEFAULT_GENDER);
            push_line(
                &mut request.message,
                &format!("Gender not specified or found; using default ({})", DEFAULT_GENDER),
            );
        }

        if request.races.is_empty() {
            let default_race = Race::human();
            request.races.push(default_race);
            push_line(
                &mut request.message,
                &format!("Race not specified or found; using default ({})", default_race),
            );
        }

        Ok(())
    }
}

// ============================================================================
// Token Classification
// ============================================================================

/// A race name from the table, or any `half...` token except "halfling".
pub fn is_race_token(token: &str) -> bool {
    races::is_race_key(token) || is_halfbreed(token)
}

fn is_halfbreed(token: &str) -> bool {
    token.starts_with(HALF_PREFIX) && token != "halfling"
}

/// Expand a race token into the races it names.
///
/// `half-elf` becomes `[human, elf]`; `half-half-elf` becomes
/// `[human, human, elf]`. A bare `half` or `half-` pairs human with human.
pub fn parse_races(token: &str) -> Result<Vec<Race>, ArgsError> {
    if is_halfbreed(token) {
        return parse_halfbreed(token);
    }

    Ok(vec![Race::from_name(token)?])
}

fn parse_halfbreed(token: &str) -> Result<Vec<Race>, ArgsError> {
    let rest = token.strip_prefix(HALF_PREFIX).unwrap_or(token);
    let rest = rest.strip_prefix('-').unwrap_or(rest);

    let mut expanded = vec![Race::human()];
    if rest.is_empty() {
        expanded.push(Race::human());
    } else {
        expanded.extend(parse_races(rest)?);
    }

    Ok(expanded)
}

/// Parse a count token.
///
/// Only canonical non-negative decimals count: "7" is accepted while "007",
/// "+7" and "-7" are not.
pub fn parse_count(token: &str) -> Option<u64> {
    let value: u64 = token.parse().ok()?;
    (value.to_string() == token).then_some(value)
}

fn clamp_count(count: u64, message: &mut String) -> u32 {
    if count > u64::from(MAX_NAME_COUNT) {
        push_line(
            message,
            &format!("Exceeded max name count; using max ({})", MAX_NAME_COUNT),
        );
        return MAX_NAME_COUNT;
    }

    if count < u64::from(MIN_NAME_COUNT) {
        push_line(
            message,
            &format!("Name count must be at least 1; using minimum ({})", MIN_NAME_COUNT),
        );
        return MIN_NAME_COUNT;
    }

    u32::try_from(count).unwrap_or(MAX_NAME_COUNT)
}

pub(crate) fn push_line(message: &mut String, line: &str) {
    message.push_str(line);
    message.push('\n');
}

// ============================================================================
// Tests
// ============================================================================
