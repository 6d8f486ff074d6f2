//! Name command runner: argument parsing followed by seed selection.

use serde::Serialize;

use super::args_parser::{ArgsParser, ParsedRequest};
use super::seed_store::SeedStore;
use super::seeds::{SeedSelection, SeedSelector};

/// Everything produced for one name command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutcome {
    pub request: ParsedRequest,
    /// Absent when parsing failed.
    pub selection: Option<SeedSelection>,
}

impl CommandOutcome {
    /// First error from parsing or selection.
    pub fn error(&self) -> Option<&str> {
        self.request
            .error
            .as_deref()
            .or_else(|| self.selection.as_ref().and_then(|s| s.error.as_deref()))
    }

    /// Diagnostics from both stages, parser notes first.
    pub fn message(&self) -> String {
        let mut message = self.request.message.clone();
        if let Some(selection) = &self.selection {
            message.push_str(&selection.message);
        }
        message
    }
}

/// Runs name commands against a seed store.
pub struct NameCommand<S> {
    parser: ArgsParser,
    selector: SeedSelector<S>,
}

impl<S: SeedStore> NameCommand<S> {
    pub fn new(selector: SeedSelector<S>) -> Self {
        Self {
            parser: ArgsParser::new(),
            selector,
        }
    }

    /// Parse `args` and, if that succeeded, load seeds for the request.
    pub async fn run(&mut self, args: &str) -> CommandOutcome {
        let request = self.parser.parse(args);
        if request.is_error() {
            return CommandOutcome {
                request,
                selection: None,
            };
        }

        let selection = self.selector.load_seeds(Some(&request)).await;
        log::debug!(
            "Name command {:?}: race={:?} gender={:?} count={} error={:?}",
            args,
            selection.selected_race.map(|r| r.name()),
            selection.selected_gender,
            request.name_count,
            selection.error
        );

        CommandOutcome {
            request,
            selection: Some(selection),
        }
    }
}
