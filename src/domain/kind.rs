use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// The flavor of note a reader session is browsing.
///
/// The flavor only affects presentation (banner artwork and accent color);
/// parsing and selection are identical for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReaderKind {
    /// A todo list.
    Todo,
    /// A reading list.
    Read,
    /// A question list.
    Ques,
}

impl ReaderKind {
    /// The full lowercase name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Read => "read",
            Self::Ques => "ques",
        }
    }
}

impl fmt::Display for ReaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not a recognized reader kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reader kind '{0}' (expected 't', 'r' or 'q')")]
pub struct ParseKindError(String);

impl FromStr for ReaderKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "t" | "todo" => Ok(Self::Todo),
            "r" | "read" => Ok(Self::Read),
            "q" | "ques" => Ok(Self::Ques),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}
