//! Checks on parsed statements.
//!
//! These catch arguments that parse fine but that a session would refuse or
//! that cannot mean anything.

use log::debug;

use linkviz_core::check::{USER_VALUE_MAX, USER_VALUE_MIN};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    parser::Statement,
};

/// Reports problems with a statement's arguments.
pub(crate) fn check_statement(statement: &Statement, diagnostics: &mut DiagnosticCollector) {
    for value in &statement.values {
        let given = *value.inner();
        if !(USER_VALUE_MIN..=USER_VALUE_MAX).contains(&given) {
            debug!(value = given, command = statement.event.inner().name(); "Value outside user range");
            diagnostics.emit(
                Diagnostic::warning(format!(
                    "value {given} is outside {USER_VALUE_MIN}..={USER_VALUE_MAX}"
                ))
                .with_code(ErrorCode::E200)
                .with_label(value.span(), "this command will be refused")
                .with_secondary_label(statement.event.span(), "in this command"),
            );
        }
    }

    if let Some(length) = statement.length.as_ref().filter(|l| *l.inner() < 0) {
        diagnostics.emit(
            Diagnostic::error(format!("cannot create {} elements", length.inner()))
                .with_code(ErrorCode::E201)
                .with_label(length.span(), ErrorCode::E201.description())
                .with_help("give a length of zero or more"),
        );
    }
}

#[cfg(test)]
mod tests {
    use linkviz_core::control::ControlEvent;

    use super::*;
    use crate::span::{Span, Spanned};

    fn statement(values: Vec<i64>, length: Option<i64>) -> Statement {
        Statement {
            event: Spanned::new(ControlEvent::Clear, Span::new(0..10)),
            values: values
                .into_iter()
                .enumerate()
                .map(|(i, v)| Spanned::new(v, Span::new(i..i + 1)))
                .collect(),
            length: length.map(|l| Spanned::new(l, Span::new(7..9))),
        }
    }

    #[test]
    fn test_values_in_range_pass() {
        let mut diagnostics = DiagnosticCollector::new();
        check_statement(&statement(vec![1, 50, 100], None), &mut diagnostics);
        assert!(diagnostics.finish().unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_values_warn() {
        let mut diagnostics = DiagnosticCollector::new();
        check_statement(&statement(vec![0, 5, 101], None), &mut diagnostics);
        let warnings = diagnostics.finish().unwrap();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.code() == Some(ErrorCode::E200)));
        assert_eq!(warnings[0].primary_span(), Some(Span::new(0..1)));
    }

    #[test]
    fn test_negative_length_is_error() {
        let mut diagnostics = DiagnosticCollector::new();
        check_statement(&statement(vec![], Some(-2)), &mut diagnostics);
        let err = diagnostics.finish().unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E201));
    }
}
