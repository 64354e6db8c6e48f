//! Input checking for list operations.
//!
//! Every list operation takes optional integer inputs. The functions here
//! decide what an operation actually receives: either the caller's input as
//! given, or a substitute together with the [`Fallback`] reason that caused
//! the substitution. Nothing in this module fails; callers decide whether a
//! fallback is acceptable (lists clamp silently, a session rejects).

use std::fmt;

use thiserror::Error;

/// Smallest node value a user may type.
pub const USER_VALUE_MIN: i64 = 1;

/// Largest node value a user may type.
pub const USER_VALUE_MAX: i64 = 100;

/// Why a checked input was replaced or refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fallback {
    /// No input was given.
    #[error("no value given")]
    Missing,

    /// The input fell outside the accepted inclusive range.
    #[error("{given} is outside the range {min}..={max}")]
    OutOfRange { given: i64, min: i64, max: i64 },
}

/// An accepted input together with the reason it was substituted, if it was.
///
/// # Examples
///
/// ```
/// # use linkviz_core::check::{self, Fallback};
/// let checked = check::insert_index(Some(9), 3);
/// assert_eq!(*checked.value(), 3);
/// assert_eq!(
///     checked.fallback(),
///     Some(Fallback::OutOfRange { given: 9, min: 0, max: 3 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checked<T> {
    value: T,
    fallback: Option<Fallback>,
}

impl<T> Checked<T> {
    fn accepted(value: T) -> Self {
        Self {
            value,
            fallback: None,
        }
    }

    fn substituted(value: T, reason: Fallback) -> Self {
        Self {
            value,
            fallback: Some(reason),
        }
    }

    /// Returns the value the operation should use
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the check result, returning the value
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the substitution reason, or `None` if the input was used as given
    pub fn fallback(&self) -> Option<Fallback> {
        self.fallback
    }

    /// Returns true if the input was used as given
    pub fn is_accepted(&self) -> bool {
        self.fallback.is_none()
    }
}

impl<T: fmt::Display> fmt::Display for Checked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fallback {
            None => write!(f, "{}", self.value),
            Some(reason) => write!(f, "{} ({reason})", self.value),
        }
    }
}

/// Checks the position after which a value is inserted.
///
/// `0` inserts before the first element and `len` appends. Anything missing
/// or outside `0..=len` is replaced by `len`.
pub fn insert_index(index: Option<i64>, len: usize) -> Checked<usize> {
    let Some(given) = index else {
        return Checked::substituted(len, Fallback::Missing);
    };
    match usize::try_from(given) {
        Ok(position) if position <= len => Checked::accepted(position),
        _ => Checked::substituted(
            len,
            Fallback::OutOfRange {
                given,
                min: 0,
                max: len as i64,
            },
        ),
    }
}

/// Checks a 1-based index that must name an existing element.
///
/// Returns `None` when the list is empty or the index is outside `1..=len`.
pub fn element_index(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index)
        .ok()
        .filter(|position| (1..=len).contains(position))
}

/// Uses the given value, or one produced by `generate` when none was given.
pub fn value_or_generate(value: Option<i64>, generate: impl FnOnce() -> i64) -> Checked<i64> {
    match value {
        Some(value) => Checked::accepted(value),
        None => Checked::substituted(generate(), Fallback::Missing),
    }
}

/// Requires a value inside `min..=max`.
///
/// Used where there is no sensible substitute and the caller must refuse the
/// operation instead.
///
/// ```
/// # use linkviz_core::check::{self, Fallback};
/// assert_eq!(check::require_in_range(Some(42), 1, 100), Ok(42));
/// assert_eq!(check::require_in_range(None, 1, 100), Err(Fallback::Missing));
/// assert!(check::require_in_range(Some(0), 1, 100).is_err());
/// ```
pub fn require_in_range(value: Option<i64>, min: i64, max: i64) -> Result<i64, Fallback> {
    let given = value.ok_or(Fallback::Missing)?;
    if (min..=max).contains(&given) {
        Ok(given)
    } else {
        Err(Fallback::OutOfRange { given, min, max })
    }
}
