//! Contract call arguments and tagged responses

use super::identity::Principal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric error code carried by `Response::Err`
///
/// Codes are scoped to the contract that returned them.
pub type ErrorCode = u32;

/// Value passed into or returned from a contract call
///
/// Serialized untagged so scenario files can use plain literals. Strings
/// always deserialize as `Text`; contracts accept `Text` wherever a
/// principal is expected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Text(String),
    Principal(Principal),
    List(Vec<Value>),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Signed view of an integer value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::UInt(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    /// Unsigned view of an integer value
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Value::UInt(u) => Some(*u),
            Value::Int(i) => u64::try_from(*i).ok(),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Principal(p) => Some(p.as_str()),
            _ => None,
        }
    }

    pub fn as_principal(&self) -> Option<Principal> {
        self.as_text().map(Principal::from)
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    fn as_wide_int(&self) -> Option<i128> {
        match self {
            Value::Int(i) => Some(i128::from(*i)),
            Value::UInt(u) => Some(i128::from(*u)),
            _ => None,
        }
    }
}

// Integers compare by numeric value and text compares by content, so a
// scenario literal `2` matches a `UInt(2)` returned by a contract.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            _ => {
                if let (Some(a), Some(b)) = (self.as_wide_int(), other.as_wide_int()) {
                    return a == b;
                }
                match (self.as_text(), other.as_text()) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                }
            }
        }
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::UInt(u) => write!(f, "u{}", u),
            Value::Text(s) => write!(f, "\"{}\"", s),
            Value::Principal(p) => write!(f, "'{}", p),
            Value::List(items) => {
                write!(f, "(list")?;
                for item in items {
                    write!(f, " {}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::UInt(u)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Principal> for Value {
    fn from(p: Principal) -> Self {
        Value::Principal(p)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

/// Tagged result of a contract call: `{ "type": "ok" | "err", "value": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Response {
    Ok(Value),
    Err(ErrorCode),
}

impl Response {
    pub fn ok<V: Into<Value>>(value: V) -> Self {
        Response::Ok(value.into())
    }

    pub fn err(code: ErrorCode) -> Self {
        Response::Err(code)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Response::Err(_))
    }

    /// Success value, if any
    pub fn value(&self) -> Option<&Value> {
        match self {
            Response::Ok(v) => Some(v),
            Response::Err(_) => None,
        }
    }

    /// Error code, if any
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Response::Ok(_) => None,
            Response::Err(code) => Some(*code),
        }
    }
}

impl<E: Into<ErrorCode>> From<std::result::Result<Value, E>> for Response {
    fn from(result: std::result::Result<Value, E>) -> Self {
        match result {
            Ok(v) => Response::Ok(v),
            Err(e) => Response::Err(e.into()),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Ok(v) => write!(f, "(ok {})", v),
            Response::Err(code) => write!(f, "(err u{})", code),
        }
    }
}
