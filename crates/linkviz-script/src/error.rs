//! Diagnostics for command scripts.
//!
//! Every problem found in a script becomes a [`Diagnostic`]: a severity, an
//! optional [`ErrorCode`], a message, labeled source spans and optional help
//! text. Parsing keeps going after an error so one run reports every bad
//! line; the errors are returned together in a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use linkviz_script::error::{Diagnostic, ErrorCode};
//! # use linkviz_script::Span;
//! let diag = Diagnostic::error("unknown command `inset`")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(0..5), "not a command")
//!     .with_help("did you mean `insert`?");
//! assert_eq!(diag.to_string(), "error[E100]: unknown command `inset`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
