//! Value: the payload of one keyed change.
//!
//! The controller only ever writes three shapes to the host: booleans
//! (markers such as "in view", "open", "shrunk"), floats (counter displays,
//! the scroll offset), and text (the lightbox source, the theme name).

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    /// Boolean marker
    Bool(bool),

    /// Scalar float
    Float(f32),

    /// Text / string
    Text(String),
}

impl Value {
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}
