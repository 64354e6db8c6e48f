//! Control events driving a visualization session.
//!
//! A control surface (the command script, or any other front end) produces
//! [`ControlEvent`]s. Integer parameters are optional because a front end may
//! submit an operation with an empty field; the session decides whether that
//! is acceptable.

use std::fmt;

use crate::list::ListVariant;

/// A single user request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// Discard the current list and start a fresh one of the given variant.
    SelectVariant(ListVariant),

    /// Populate an empty list.
    Create {
        /// Number of elements; defaults to the supplied value count, or the
        /// configured default length when no values are given.
        length: Option<i64>,
        /// Generate every value instead of using `values`.
        random: bool,
        values: Vec<i64>,
    },

    /// Insert `value` after the element at `index` (0 inserts first).
    Insert {
        index: Option<i64>,
        value: Option<i64>,
    },

    /// Highlight every element equal to `value`.
    Search { value: Option<i64> },

    /// Remove the element at `index`.
    Delete { index: Option<i64> },

    /// Replace the value of the element at `index`.
    Modify {
        index: Option<i64>,
        value: Option<i64>,
    },

    /// Remove every element.
    Clear,
}

impl ControlEvent {
    /// Returns the command keyword for this event
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectVariant(_) => "variant",
            Self::Create { .. } => "create",
            Self::Insert { .. } => "insert",
            Self::Search { .. } => "search",
            Self::Delete { .. } => "delete",
            Self::Modify { .. } => "modify",
            Self::Clear => "clear",
        }
    }
}

struct Arg(Option<i64>);

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "_"),
        }
    }
}

impl fmt::Display for ControlEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectVariant(variant) => write!(f, "variant {variant}"),
            Self::Create {
                length,
                random,
                values,
            } => {
                write!(f, "create")?;
                if *random {
                    write!(f, " random")?;
                    if length.is_some() {
                        write!(f, " {}", Arg(*length))?;
                    }
                }
                for value in values {
                    write!(f, " {value}")?;
                }
                Ok(())
            }
            Self::Insert { index, value } => write!(f, "insert {} {}", Arg(*index), Arg(*value)),
            Self::Search { value } => write!(f, "search {}", Arg(*value)),
            Self::Delete { index } => write!(f, "delete {}", Arg(*index)),
            Self::Modify { index, value } => write!(f, "modify {} {}", Arg(*index), Arg(*value)),
            Self::Clear => write!(f, "clear"),
        }
    }
}
