use std::{error::Error, fmt::Display, num::ParseIntError, str::Utf8Error};

/// Errors that may occur when interpreting a reply line.
#[derive(Debug)]
pub enum ReplyError {
    /// An integer value was expected but the payload is not a decimal number.
    NotNumeric(String),
    /// The payload parsed, but the value is outside the documented range for
    /// the queried function.
    UnexpectedValue(String),
}

impl From<Utf8Error> for ReplyError {
    fn from(value: Utf8Error) -> Self {
        ReplyError::NotNumeric(format!("Invalid UTF8: {}", value))
    }
}

impl From<ParseIntError> for ReplyError {
    fn from(value: ParseIntError) -> Self {
        ReplyError::NotNumeric(format!("Invalid integer: {}", value))
    }
}

impl Display for ReplyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplyError::NotNumeric(detail) => write!(f, "{}", detail),
            ReplyError::UnexpectedValue(detail) => write!(f, "{}", detail),
        }
    }
}

impl Error for ReplyError {}
