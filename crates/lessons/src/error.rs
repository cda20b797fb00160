//! Error kinds surfaced by the drills and geometry helpers.

use std::fmt;

/// Fieldless tag for a `DrillError`, handy for matching in tests and reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum ErrorKind {
    TypeMismatch,
    InvalidIndex,
    IndexOutOfRange,
    InvalidNumber,
    DivisionByZero,
    InvalidInput,
    InvalidAge,
    InvalidGrade,
    EmptyInput,
}

/// Errors surfaced by the validation drills.
#[derive(Clone, Debug, PartialEq)]
pub enum DrillError {
    /// Neither a direct numeric add nor float coercion worked.
    TypeMismatch { left: String, right: String },
    /// Index is not an integer.
    InvalidIndex { raw: String },
    /// Index is an integer but outside `[0, len)`.
    IndexOutOfRange { index: i64, len: usize },
    /// Operand text does not parse as a number.
    InvalidNumber { raw: String },
    DivisionByZero,
    /// Age attempt is not an integer.
    InvalidInput { raw: String },
    /// Age is an integer outside the accepted range.
    InvalidAge { age: i64, min: i64, max: i64 },
    /// Grade does not coerce to a number.
    InvalidGrade { raw: String },
    /// Nothing to work with (empty list or blank string).
    EmptyInput,
}

impl DrillError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::InvalidIndex { .. } => ErrorKind::InvalidIndex,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::InvalidAge { .. } => ErrorKind::InvalidAge,
            Self::InvalidGrade { .. } => ErrorKind::InvalidGrade,
            Self::EmptyInput => ErrorKind::EmptyInput,
        }
    }
}

impl fmt::Display for DrillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { left, right } => {
                write!(f, "cannot add {left} and {right}")
            }
            Self::InvalidIndex { raw } => {
                write!(f, "invalid index {raw}: enter an integer")
            }
            Self::IndexOutOfRange { index, len } => {
                if *len == 0 {
                    write!(f, "index {index} out of range (sequence is empty)")
                } else {
                    write!(f, "index {index} out of range (0 to {})", len - 1)
                }
            }
            Self::InvalidNumber { raw } => {
                write!(f, "invalid number {raw:?}: use values like 10 or 3.5")
            }
            Self::DivisionByZero => write!(f, "division by zero is not allowed"),
            Self::InvalidInput { raw } => {
                write!(f, "invalid input {raw}: enter an integer")
            }
            Self::InvalidAge { age, min, max } => {
                write!(f, "age {age} rejected: must be between {min} and {max}")
            }
            Self::InvalidGrade { raw } => {
                write!(f, "invalid grade {raw}: use numbers only")
            }
            Self::EmptyInput => write!(f, "empty input: provide at least one value"),
        }
    }
}

impl std::error::Error for DrillError {}

/// Input outside the domain of a numeric helper.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DomainError {
    /// Square root of a negative (or NaN) number.
    NegativeRadicand { value: f64 },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeRadicand { value } => {
                write!(f, "square root undefined for {value}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(DrillError::EmptyInput.kind(), ErrorKind::EmptyInput);
        let e = DrillError::IndexOutOfRange { index: 3, len: 3 };
        assert_eq!(e.kind(), ErrorKind::IndexOutOfRange);
    }

    #[test]
    fn display_names_the_bounds() {
        let e = DrillError::IndexOutOfRange { index: 3, len: 3 };
        assert_eq!(e.to_string(), "index 3 out of range (0 to 2)");
        let e = DrillError::InvalidAge {
            age: 130,
            min: 0,
            max: 120,
        };
        assert!(e.to_string().contains("between 0 and 120"));
    }
}
