use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered attribute bag: string keys mapped to flexible values.
///
/// `BTreeMap` keeps keys sorted, so serialized output and iteration order
/// are reproducible across runs.
pub type AttrMap = BTreeMap<String, AttrValue>;

/// A flexible attribute value that supports common JSON types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A 64-bit floating-point value.
    Float(f64),
    /// A text value.
    String(String),
    /// An ordered list of attribute values.
    List(Vec<AttrValue>),
    /// A string-keyed map of attribute values.
    Map(BTreeMap<String, AttrValue>),
}

impl AttrValue {
    /// Return the text content if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Return the numeric content of an integer or float value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Return the boolean content if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Collect the string elements of a list value.
    ///
    /// Non-string elements are skipped; a non-list value yields `None`.
    pub fn as_str_list(&self) -> Option<Vec<&str>> {
        match self {
            Self::List(items) => Some(items.iter().filter_map(AttrValue::as_str).collect()),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::List(items) => {
                let parts: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            Self::Map(_) => write!(f, "{{...}}"),
        }
    }
}
