//! # linkviz Script
//!
//! Parser for linkviz command scripts: line-oriented text that drives a
//! visualization session the way a user would through a control panel.
//!
//! ## Usage
//!
//! ```
//! # use linkviz_script::{parse, error::ParseError};
//! # use linkviz_core::control::ControlEvent;
//! fn main() -> Result<(), ParseError> {
//!     let source = "
//!         variant dual
//!         create 3 7 2
//!         insert 1 9   # after the first element
//!     ";
//!
//!     let script = parse(source)?;
//!     assert_eq!(script.events().len(), 3);
//!     assert_eq!(
//!         script.events()[2].inner(),
//!         &ControlEvent::Insert { index: Some(1), value: Some(9) }
//!     );
//!     Ok(())
//! }
//! ```

pub mod error;
mod lint;
mod parser;
mod span;

pub use span::{Span, Spanned};

use log::{debug, info};

use linkviz_core::control::ControlEvent;

use error::{Diagnostic, DiagnosticCollector, ParseError};

/// A successfully parsed script.
#[derive(Debug, Clone, Default)]
pub struct Script {
    events: Vec<Spanned<ControlEvent>>,
    warnings: Vec<Diagnostic>,
}

impl Script {
    /// The commands in source order, each with the span of its line
    pub fn events(&self) -> &[Spanned<ControlEvent>] {
        &self.events
    }

    /// Non-fatal diagnostics found while parsing
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Consumes the script, returning the commands
    pub fn into_events(self) -> Vec<Spanned<ControlEvent>> {
        self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Parse a command script.
///
/// Every line is checked even after an error, so the returned
/// [`ParseError`] lists all problems at once.
///
/// # Errors
///
/// Returns [`ParseError`] if any line has an unknown command or a malformed
/// argument.
pub fn parse(source: &str) -> Result<Script, ParseError> {
    let mut diagnostics = DiagnosticCollector::new();

    let statements = parser::parse_lines(source, &mut diagnostics);
    debug!(statements = statements.len(); "Script lines parsed");

    for statement in &statements {
        lint::check_statement(statement, &mut diagnostics);
    }

    let warnings = diagnostics.finish()?;
    info!(commands = statements.len(), warnings = warnings.len(); "Script parsed");

    Ok(Script {
        events: statements
            .into_iter()
            .map(|statement| statement.event)
            .collect(),
        warnings,
    })
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn check_parse_never_panics(source: &str) -> Result<(), TestCaseError> {
        match parse(source) {
            Ok(script) => {
                for event in script.events() {
                    prop_assert!(event.span().end() <= source.len());
                }
            }
            Err(err) => prop_assert!(err.error_count() > 0),
        }
        Ok(())
    }

    fn check_well_formed_lines_parse(lines: Vec<(u8, i64, i64)>) -> Result<(), TestCaseError> {
        let source = lines
            .iter()
            .map(|(kind, a, b)| match kind % 5 {
                0 => format!("insert {a} {b}"),
                1 => format!("search {a}"),
                2 => format!("delete {a}"),
                3 => format!("modify {a} {b}"),
                _ => "clear".to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n");
        let script = parse(&source).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(script.events().len(), lines.len());
        Ok(())
    }

    proptest! {
        #[test]
        fn parse_never_panics(source in "[ -~\t\n]{0,200}") {
            check_parse_never_panics(&source)?;
        }

        #[test]
        fn well_formed_lines_parse(
            lines in prop::collection::vec((any::<u8>(), -500i64..500, -500i64..500), 0..20)
        ) {
            check_well_formed_lines_parse(lines)?;
        }
    }
}
