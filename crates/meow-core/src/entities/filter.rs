//! Filter kind - the closed set of predicates the reader applies

use crate::entities::MessageRecord;

/// Reader filter kind
///
/// `Any` requires at least one tracked reaction; `Fire`/`Tomato`/`Sob`
/// require that specific counter to be positive; `None` applies no reaction
/// condition. Every kind additionally requires visible content (non-empty
/// text or a non-empty attachment URL).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Any,
    Fire,
    Tomato,
    Sob,
    None,
}

impl FilterKind {
    /// Whether a record passes this filter
    pub fn matches(self, record: &MessageRecord) -> bool {
        if !record.has_visible_content() {
            return false;
        }
        match self {
            Self::Any => record.has_any_react(),
            Self::Fire => record.fire_reacts > 0,
            Self::Tomato => record.tomato_reacts > 0,
            Self::Sob => record.sob_reacts > 0,
            Self::None => true,
        }
    }
}

/// Error when parsing a FilterKind from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter kind: {0}")]
pub struct FilterKindParseError(pub String);

impl std::str::FromStr for FilterKind {
    type Err = FilterKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(Self::Any),
            "fire" => Ok(Self::Fire),
            "tomato" => Ok(Self::Tomato),
            "sob" => Ok(Self::Sob),
            "none" => Ok(Self::None),
            other => Err(FilterKindParseError(other.to_string())),
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Any => "any",
            Self::Fire => "fire",
            Self::Tomato => "tomato",
            Self::Sob => "sob",
            Self::None => "none",
        };
        write!(f, "{s}")
    }
}
