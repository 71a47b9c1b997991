use std::fmt;

use thiserror::Error;

/// Public operation that rejected its input, used to phrase error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Less,
    Greater,
    Between,
}

impl Operation {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Less => "less",
            Self::Greater => "greater",
            Self::Between => "between",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the failing operation takes one value or several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    One,
    Many,
}

/// Errors raised by [`Capture`](crate::Capture) and [`Snapshot`](crate::Snapshot).
///
/// Validation always runs before any state change, so a capture that returned
/// one of these is exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// Input was not an integer (booleans included).
    #[error("{operation} expected {}.", integer_phrase(.arity))]
    TypeMismatch {
        operation: Operation,
        arity: Arity,
        found: &'static str,
    },

    /// Integer below 1.
    #[error("{operation} only accepts {}.", positive_phrase(.arity))]
    OutOfRange {
        operation: Operation,
        arity: Arity,
        value: i64,
    },

    /// Integer above the capture's ceiling.
    #[error("{operation} only accepts values up to {ceiling}.")]
    DomainExceeded {
        operation: Operation,
        /// Rejected value. Inputs wider than `i64` are clamped to `i64::MAX`
        /// before validation, so this may be smaller than what was passed.
        value: u64,
        ceiling: u32,
    },
}

pub type Result<T> = std::result::Result<T, CaptureError>;

fn integer_phrase(arity: &Arity) -> &'static str {
    match arity {
        Arity::One => "an integer",
        Arity::Many => "integers",
    }
}

fn positive_phrase(arity: &Arity) -> &'static str {
    match arity {
        Arity::One => "a positive integer",
        Arity::Many => "positive integers",
    }
}
