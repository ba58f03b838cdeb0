//! # Literal Values
//!
//! Payload of literal tokens and `Literal` expression nodes. The set is
//! closed: the scanner only ever produces nil, booleans, numbers and strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A literal payload.
///
/// ## Example
///
/// ```rust
/// use lox_ast::LiteralValue;
///
/// assert_eq!(LiteralValue::from(3.0).to_string(), "3");
/// assert_eq!(LiteralValue::from(2.5).to_string(), "2.5");
/// assert_eq!(LiteralValue::Nil.to_string(), "nil");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum LiteralValue {
    #[default]
    Nil,
    Bool(bool),
    Number(f64),
    Str(String),
}

impl LiteralValue {
    /// Returns true for `Nil`.
    pub fn is_nil(&self) -> bool {
        matches!(self, LiteralValue::Nil)
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Nil => write!(f, "nil"),
            LiteralValue::Bool(b) => write!(f, "{b}"),
            // f64's Display already drops a zero fraction: 3.0 prints as "3".
            LiteralValue::Number(n) => write!(f, "{n}"),
            LiteralValue::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        LiteralValue::Bool(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        LiteralValue::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        LiteralValue::Str(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        LiteralValue::Str(value)
    }
}
