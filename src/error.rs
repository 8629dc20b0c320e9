use crate::error::ParseError::BadJson;

/// Errors raised when building model values from JSON text.
#[derive(Debug)]
pub enum ParseError {
    /// The text was not valid JSON, or a record was missing a required
    /// attribute. This variant wraps the [`serde_json::Error`] that was
    /// returned when trying to parse.
    BadJson(serde_json::Error),
    /// The JSON parsed but its top-level shape was not the expected one.
    /// The given string names the shape that was found instead.
    BadShape(String),
}

impl From<serde_json::Error> for ParseError {
    fn from(value: serde_json::Error) -> Self {
        BadJson(value)
    }
}
