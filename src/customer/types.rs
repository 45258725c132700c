//! Core types for the customer subsystem.

use crate::geo::Location;
use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Customer identifier: any JSON scalar found in `user_id`.
///
/// Ordering is total: `Null < Bool < Number < Text`. Numbers compare by
/// value, text compares lexicographically. Bools are their own kind and
/// are not ordered as 0/1 among the numbers.
///
/// Display uses JSON spelling (`null`, `true`, `false`), and text is shown
/// unquoted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CustomerId {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl CustomerId {
    fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Number(_) => 2,
            Self::Text(_) => 3,
        }
    }
}

fn cmp_numbers(a: &serde_json::Number, b: &serde_json::Number) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x.cmp(&y);
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x.cmp(&y);
    }
    // Mixed sign beyond i64, or a float on either side.
    let x = a.as_f64().unwrap_or(f64::NAN);
    let y = b.as_f64().unwrap_or(f64::NAN);
    x.total_cmp(&y)
}

impl Ord for CustomerId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => cmp_numbers(a, b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for CustomerId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CustomerId {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CustomerId {}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self::Number(id.into())
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A customer record read from one input line.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub location: Location,
}

impl Customer {
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>, location: impl Into<Location>) -> Self {
        Self { id: id.into(), name: name.into(), location: location.into() }
    }

    /// Output line for this customer, without the trailing newline.
    pub fn display_line(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}

/// A non-blank input line that could not be read as a customer.
///
/// Carries the offending line verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to parse: \"{line}\"")]
pub struct CustomerParsingError {
    pub line: String,
}

impl CustomerParsingError {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }
}
