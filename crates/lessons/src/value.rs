//! `Loose`: a tagged stand-in for loosely typed inputs.
//!
//! The drills receive values whose type is only known at runtime (a grade
//! may arrive as `8`, `"10"` or `8.5`). `Loose` keeps the tag explicit and
//! offers the two coercions the drills need.

use std::fmt;
use std::num::IntErrorKind;

use serde::Serialize;

/// A value of runtime-determined type.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
    /// Value of some other type; no coercion accepts it. Holds the type name.
    Opaque(String),
}

impl Loose {
    /// Opaque value of the named type.
    pub fn opaque(type_name: impl Into<String>) -> Self {
        Self::Opaque(type_name.into())
    }

    /// Parse a command-line token: integer first, then float, else text.
    pub fn parse_token(token: &str) -> Self {
        if let Ok(i) = token.parse::<i64>() {
            return Self::Int(i);
        }
        if let Ok(x) = token.parse::<f64>() {
            return Self::Float(x);
        }
        Self::Text(token.to_string())
    }

    pub fn type_name(&self) -> &str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "str",
            Self::Opaque(name) => name,
        }
    }

    /// Numeric value without any text parsing.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Float coercion: numbers convert, text is trimmed then parsed.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            other => other.as_number(),
        }
    }

    /// Integer coercion: floats truncate toward zero, text must be a base-10 integer.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            // `as` saturates, so huge magnitudes still land outside any valid range.
            Self::Float(x) if x.is_nan() => None,
            Self::Float(x) => Some(x.trunc() as i64),
            Self::Text(s) => match s.trim().parse::<i64>() {
                Ok(i) => Some(i),
                Err(e) => match e.kind() {
                    IntErrorKind::PosOverflow => Some(i64::MAX),
                    IntErrorKind::NegOverflow => Some(i64::MIN),
                    _ => None,
                },
            },
            Self::Opaque(_) => None,
        }
    }
}

impl fmt::Display for Loose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Opaque(name) => write!(f, "<{name} object>"),
        }
    }
}

impl From<i64> for Loose {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Loose {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Loose {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Loose {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Loose {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_coercion_trims_text() {
        assert_eq!(Loose::from(" 10 ").to_f64(), Some(10.0));
        assert_eq!(Loose::from("3.5").to_f64(), Some(3.5));
        assert_eq!(Loose::from("x").to_f64(), None);
        assert_eq!(Loose::opaque("object").to_f64(), None);
        assert!(Loose::from("inf").to_f64().unwrap().is_infinite());
    }

    #[test]
    fn int_coercion_truncates_floats_only() {
        assert_eq!(Loose::from(2.9).to_i64(), Some(2));
        assert_eq!(Loose::from(-2.9).to_i64(), Some(-2));
        assert_eq!(Loose::from("2.5").to_i64(), None);
        assert_eq!(Loose::from("40").to_i64(), Some(40));
        assert_eq!(Loose::from(f64::NAN).to_i64(), None);
        assert_eq!(Loose::from(1e20).to_i64(), Some(i64::MAX));
        assert_eq!(Loose::from(-1e20).to_i64(), Some(i64::MIN));
        assert_eq!(Loose::from("99999999999999999999").to_i64(), Some(i64::MAX));
        assert_eq!(Loose::from("-99999999999999999999").to_i64(), Some(i64::MIN));
    }

    #[test]
    fn parse_token_prefers_integers() {
        assert_eq!(Loose::parse_token("5"), Loose::Int(5));
        assert_eq!(Loose::parse_token("5.5"), Loose::Float(5.5));
        assert_eq!(Loose::parse_token("abc"), Loose::from("abc"));
    }

    #[test]
    fn display_quotes_text() {
        assert_eq!(Loose::from("a").to_string(), "\"a\"");
        assert_eq!(Loose::from(10.0).to_string(), "10.0");
        assert_eq!(Loose::opaque("object").to_string(), "<object object>");
    }
}
