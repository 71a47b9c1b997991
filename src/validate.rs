use crate::error::{Arity, CaptureError, Operation, Result};

/// Caller input as seen by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    Integer(i64),
    /// Anything that is not a genuine integer; `kind` names what was passed.
    NonInteger { kind: &'static str },
}

/// Conversion of caller input into a [`Candidate`].
///
/// Every integer primitive converts to [`Candidate::Integer`]. Values that do
/// not fit in an `i64` saturate, which keeps them past any ceiling (or below
/// 1) without changing how they are treated. Booleans, floats, characters and
/// strings are never integers here, even where they could be coerced into one.
pub trait IntoCandidate {
    fn into_candidate(self) -> Candidate;
}

impl IntoCandidate for Candidate {
    fn into_candidate(self) -> Candidate {
        self
    }
}

macro_rules! lossless_integer {
    ($($ty:ty),*) => {
        $(
            impl IntoCandidate for $ty {
                fn into_candidate(self) -> Candidate {
                    Candidate::Integer(i64::from(self))
                }
            }
        )*
    };
}

macro_rules! saturating_integer {
    ($($ty:ty),*) => {
        $(
            impl IntoCandidate for $ty {
                #[allow(unused_comparisons)]
                fn into_candidate(self) -> Candidate {
                    let value = i64::try_from(self)
                        .unwrap_or(if self < 0 { i64::MIN } else { i64::MAX });
                    Candidate::Integer(value)
                }
            }
        )*
    };
}

macro_rules! non_integer {
    ($($ty:ty => $kind:literal),*) => {
        $(
            impl IntoCandidate for $ty {
                fn into_candidate(self) -> Candidate {
                    Candidate::NonInteger { kind: $kind }
                }
            }
        )*
    };
}

lossless_integer!(i8, i16, i32, i64, u8, u16, u32);
saturating_integer!(isize, i128, u64, u128, usize);
non_integer!(
    bool => "bool",
    f32 => "float",
    f64 => "float",
    char => "char",
    &str => "string",
    String => "string",
    &String => "string"
);

#[cfg(feature = "json")]
impl IntoCandidate for &serde_json::Value {
    fn into_candidate(self) -> Candidate {
        use serde_json::Value;

        match self {
            Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    Candidate::Integer(value)
                } else if number.is_u64() {
                    Candidate::Integer(i64::MAX)
                } else {
                    Candidate::NonInteger { kind: "float" }
                }
            }
            Value::Bool(_) => Candidate::NonInteger { kind: "bool" },
            Value::String(_) => Candidate::NonInteger { kind: "string" },
            Value::Null => Candidate::NonInteger { kind: "null" },
            Value::Array(_) => Candidate::NonInteger { kind: "array" },
            Value::Object(_) => Candidate::NonInteger { kind: "object" },
        }
    }
}

#[cfg(feature = "json")]
impl IntoCandidate for serde_json::Value {
    fn into_candidate(self) -> Candidate {
        (&self).into_candidate()
    }
}

/// Checks that `candidate` is a positive integer and returns it.
///
/// There is no upper bound here; only [`Capture::add`](crate::Capture::add)
/// enforces the ceiling.
pub(crate) fn validate(candidate: Candidate, operation: Operation, arity: Arity) -> Result<u64> {
    let value = match candidate {
        Candidate::Integer(value) => value,
        Candidate::NonInteger { kind } => {
            return Err(CaptureError::TypeMismatch {
                operation,
                arity,
                found: kind,
            });
        }
    };
    if value < 1 {
        return Err(CaptureError::OutOfRange {
            operation,
            arity,
            value,
        });
    }
    // Positive, so the cast cannot wrap.
    Ok(value as u64)
}
