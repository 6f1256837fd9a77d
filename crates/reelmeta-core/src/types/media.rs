use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MetaError;

/// What kind of media a title names.
///
/// The parser only ever promotes a title to [`MediaType::Tv`]; telling a
/// movie apart from an unclassified title needs a metadata provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    #[default]
    Unknown,
    Movie,
    Tv,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Movie => write!(f, "Movie"),
            Self::Tv => write!(f, "TV"),
        }
    }
}

impl FromStr for MediaType {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unknown" | "" => Ok(Self::Unknown),
            "movie" | "film" => Ok(Self::Movie),
            "tv" | "series" | "show" => Ok(Self::Tv),
            _ => Err(MetaError::unknown("media type", s)),
        }
    }
}
