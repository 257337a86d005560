//! Direction of an active column sort.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseDirectionError;

/// Direction a column is sorted in.
///
/// The default is [`Ascending`](SortDirection::Ascending): toggling a
/// column that is not yet the active sort column always starts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortDirection {
    /// Smallest values first.
    #[default]
    Ascending,
    /// Largest values first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Canonical lowercase token, as used in serialized forms and the
    /// `aria-sort` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(SortDirection::Ascending),
            "descending" => Ok(SortDirection::Descending),
            other => Err(ParseDirectionError::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipping_alternates_between_both_directions() {
        assert_eq!(SortDirection::Ascending.flipped(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.flipped(), SortDirection::Ascending);
    }

    #[test]
    fn display_matches_canonical_tokens() {
        assert_eq!(SortDirection::Ascending.to_string(), "ascending");
        assert_eq!(SortDirection::Descending.to_string(), "descending");
    }

    #[test]
    fn parses_canonical_tokens() {
        assert_eq!("ascending".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
        assert_eq!("descending".parse::<SortDirection>().unwrap(), SortDirection::Descending);
    }

    #[test]
    fn rejects_unknown_tokens() {
        let err = "upwards".parse::<SortDirection>().unwrap_err();
        assert_eq!(err.token(), "upwards");
        // Case matters: the tokens are the canonical serialized forms.
        assert!("Ascending".parse::<SortDirection>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_lowercase_tokens() {
        let json = serde_json::to_string(&SortDirection::Descending).unwrap();
        assert_eq!(json, "\"descending\"");
        let back: SortDirection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SortDirection::Descending);
    }
}
