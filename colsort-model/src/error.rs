use std::fmt::{self, Display};

/// Error produced when parsing a [`SortDirection`](crate::SortDirection)
/// from a string that is neither `"ascending"` nor `"descending"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    token: String,
}

impl ParseDirectionError {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The rejected input.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid sort direction: {:?}", self.token)
    }
}

impl std::error::Error for ParseDirectionError {}
