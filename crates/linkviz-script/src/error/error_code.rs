//! Error codes for script diagnostics.
//!
//! - `E1xx` - Syntax errors: the line cannot be turned into a command
//! - `E2xx` - Argument checks: the command parses but will not do what it says

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax Errors (E1xx)
    // =========================================================================
    /// Unknown command.
    ///
    /// The first word of a line is not one of `variant`, `create`, `insert`,
    /// `search`, `delete`, `modify` or `clear`.
    E100,

    /// Invalid integer.
    ///
    /// An argument that must be an integer could not be read as one.
    E101,

    /// Unknown list variant.
    ///
    /// `variant` was given something other than `single`, `dual` or `circular`.
    E102,

    /// Missing argument.
    ///
    /// A command that cannot run without an argument was given none.
    E103,

    /// Unexpected argument.
    ///
    /// A command was given more arguments than it accepts.
    E104,

    // =========================================================================
    // Argument Checks (E2xx)
    // =========================================================================
    /// Value out of range.
    ///
    /// Node values typed by the user must lie in `1..=100`; the session
    /// refuses the command.
    E200,

    /// Negative length.
    ///
    /// `create random` was given a negative length.
    E201,
}

impl ErrorCode {
    /// Returns the code as a string, e.g. `"E100"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
        }
    }

    /// Returns a short description, used as the default label text.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "unknown command",
            ErrorCode::E101 => "invalid integer",
            ErrorCode::E102 => "unknown list variant",
            ErrorCode::E103 => "missing argument",
            ErrorCode::E104 => "unexpected argument",
            ErrorCode::E200 => "value out of range",
            ErrorCode::E201 => "negative length",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E201.to_string(), "E201");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E101.description(), "invalid integer");
        assert_eq!(ErrorCode::E200.description(), "value out of range");
    }
}
