use regex::Regex;

use crate::error::Result;

/// Detects re-release markers such as `03v2`, `12 v3`, `S01E05v2` or `[v2]`.
#[derive(Debug, Clone)]
pub struct VersionDetector {
    re_version: Regex,
    re_token_suffix: Regex,
}

impl VersionDetector {
    /// # Errors
    ///
    /// Returns `MetaError::Regex` if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_version: Regex::new(
                r"(?i)(?:(?:^|[\s._\[(\-])(?:S\d{1,3})?(?:EP?)?\d{1,4}\s?|\[)V(\d{1,2})(?:$|[\s._\])\-])",
            )?,
            re_token_suffix: Regex::new(r"(?i)^(.*\d)V\d{1,2}$")?,
        })
    }

    /// Version number in `text`; 1 when no marker is present.
    pub fn detect(&self, text: &str) -> u32 {
        self.re_version
            .captures(text)
            .and_then(|c| c[1].parse::<u32>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(1)
    }

    /// Drops a version suffix from a single token: `03v2` → `03`, `S01E05v2` → `S01E05`.
    pub fn strip_suffix<'a>(&self, token: &'a str) -> &'a str {
        self.re_token_suffix
            .captures(token)
            .and_then(|c| c.get(1))
            .map_or(token, |m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_version_markers() {
        let detector = VersionDetector::new().unwrap();
        assert_eq!(detector.detect("Show - 03v2 [1080p]"), 2);
        assert_eq!(detector.detect("Show 12 v3 1080p"), 3);
        assert_eq!(detector.detect("Show.S01E05v2.1080p"), 2);
        assert_eq!(detector.detect("Show [v2] 1080p"), 2);
        assert_eq!(detector.detect("Show 05v2"), 2);
    }

    #[test]
    fn defaults_to_one() {
        let detector = VersionDetector::new().unwrap();
        assert_eq!(detector.detect("Movie 2019 1080p"), 1);
        assert_eq!(detector.detect("Vendetta 2019"), 1);
        assert_eq!(detector.detect(""), 1);
    }

    #[test]
    fn strips_token_suffix() {
        let detector = VersionDetector::new().unwrap();
        assert_eq!(detector.strip_suffix("03v2"), "03");
        assert_eq!(detector.strip_suffix("S01E05V2"), "S01E05");
        assert_eq!(detector.strip_suffix("Vendetta"), "Vendetta");
        assert_eq!(detector.strip_suffix("v2"), "v2");
    }
}
