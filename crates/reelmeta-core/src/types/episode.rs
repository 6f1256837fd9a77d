use std::fmt;

use serde::{Deserialize, Serialize};

/// A season or episode number, optionally widened to an inclusive range.
///
/// `end` is only ever set when it is strictly greater than `begin`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberSpan {
    /// First number of the span.
    pub begin: Option<u32>,
    /// Last number of the span, when the release covers more than one.
    pub end: Option<u32>,
}

impl NumberSpan {
    /// A span holding a single number.
    #[must_use]
    pub fn single(begin: u32) -> Self {
        Self {
            begin: Some(begin),
            end: None,
        }
    }

    /// Returns `true` once a begin number has been determined.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.begin.is_some()
    }

    /// Number of units covered: 0 when unset, otherwise `end - begin + 1`.
    #[must_use]
    pub fn total(&self) -> u32 {
        match (self.begin, self.end) {
            (None, _) => 0,
            (Some(_), None) => 1,
            (Some(begin), Some(end)) => end - begin + 1,
        }
    }

    /// Folds a newly found number into the span.
    ///
    /// The first number becomes `begin`; a later, strictly greater one becomes
    /// `end`. For single-file inputs a span wider than `limit` units is
    /// collapsed back to `begin`. Returns `false` when the number was rejected.
    pub fn record(&mut self, value: u32, single_file: bool, limit: u32) -> bool {
        let Some(begin) = self.begin else {
            self.begin = Some(value);
            return true;
        };
        if value <= begin {
            return false;
        }
        self.end = Some(value);
        if single_file && self.total() > limit {
            self.end = None;
        }
        true
    }

    /// Returns `true` if `n` lies inside the span.
    #[must_use]
    pub fn contains(&self, n: u32) -> bool {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => (begin..=end).contains(&n),
            (Some(begin), None) => begin == n,
            (None, _) => false,
        }
    }

    /// Expands the span into every number it covers.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u32> {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => (begin..=end).collect(),
            (Some(begin), None) => vec![begin],
            (None, _) => Vec::new(),
        }
    }

    /// Zero-padded label such as `S01` or `E01-E05`; empty when unset.
    #[must_use]
    pub fn label(&self, prefix: char) -> String {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => format!("{prefix}{begin:02}-{prefix}{end:02}"),
            (Some(begin), None) => format!("{prefix}{begin:02}"),
            (None, _) => String::new(),
        }
    }
}

impl fmt::Display for NumberSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => write!(f, "{begin:02}-{end:02}"),
            (Some(begin), None) => write!(f, "{begin:02}"),
            (None, _) => Ok(()),
        }
    }
}
