use regex::Regex;

use crate::error::Result;

/// Chinese or Arabic numeral characters accepted inside `第N季` style markers.
const CN_NUM: &str = "[0-9零〇一二两三四五六七八九十百]+";

/// Season, episode and resolution patterns shared by several classifiers.
///
/// `Regex` is reference counted internally, so handing each classifier its
/// own clone is cheap.
#[derive(Debug, Clone)]
pub struct Patterns {
    /// `S01`, `-S02`, `S01-S03`, `S1-3`
    pub season: Regex,
    /// `Season2`
    pub season_word: Regex,
    /// `S01E02`, `S01E01-E05`, `S01E01E02`, `S01E01-S01E03`
    pub season_episode: Regex,
    /// `E05`, `EP05`, `-E06`, `E01-E05`, `E01-05`
    pub episode: Regex,
    /// `01-26`
    pub episode_range: Regex,
    /// `第二季`, `第1-3季`
    pub cn_season: Regex,
    /// `第12集`, `第3话`
    pub cn_episode: Regex,
    /// Whole-token Chinese season/episode markers, including `共24集`.
    pub cn_marker: Regex,
    /// `1080p`, `BD1080P`, `1920x1080`
    pub resolution: Regex,
    /// `4K`, `8K`, `2K` and the named buckets `FullHD`, `FHD`, `QHD`.
    /// `UHD` is left to the source classifier.
    pub resolution_k: Regex,
}

impl Patterns {
    /// # Errors
    ///
    /// Returns `MetaError::Regex` if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            season: Regex::new(r"(?i)^-?S(\d{1,3})(?:-S?(\d{1,3}))?$")?,
            season_word: Regex::new(r"(?i)^SEASON(\d{1,3})$")?,
            season_episode: Regex::new(
                r"(?i)^S(\d{1,3})EP?(\d{1,4})(?:-?(?:S\d{1,3})?EP?(\d{1,4}))?$",
            )?,
            episode: Regex::new(r"(?i)^-?EP?(\d{1,4})(?:-(?:EP?)?(\d{1,4}))?$")?,
            episode_range: Regex::new(r"^(\d{1,4})-(\d{1,4})$")?,
            cn_season: Regex::new(&format!(
                r"第\s*({CN_NUM})\s*(?:[-~至到]\s*({CN_NUM}))?\s*季"
            ))?,
            cn_episode: Regex::new(&format!(
                r"第\s*({CN_NUM})\s*(?:[-~至到]\s*({CN_NUM}))?\s*[集话話]"
            ))?,
            cn_marker: Regex::new(&format!(
                r"^(?:第\s*{CN_NUM}\s*(?:[-~至到]\s*{CN_NUM})?\s*[季集话話]|共\s*{CN_NUM}\s*[季集话話])$"
            ))?,
            resolution: Regex::new(r"(?i)^[SBUHD]*(\d{3,4}[PI]+)|\d{3,4}X(\d{3,4})")?,
            resolution_k: Regex::new(r"(?i)^([248]K|FULLHD|FHD|QHD)$")?,
        })
    }

    /// Any token that names a season or an episode.
    pub fn is_season_or_episode(&self, token: &str) -> bool {
        self.season.is_match(token)
            || self.season_word.is_match(token)
            || self.season_episode.is_match(token)
            || self.episode.is_match(token)
            || self.episode_range.is_match(token)
            || self.cn_marker.is_match(token)
    }

    pub fn is_resolution(&self, token: &str) -> bool {
        self.resolution_k.is_match(token) || self.resolution.is_match(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_and_episode_tokens() {
        let p = Patterns::new().unwrap();
        for token in ["S01", "-S02", "S01-S03", "Season2", "S01E02", "E05", "EP12", "01-26", "第二季", "第12集", "共24集"] {
            assert!(p.is_season_or_episode(token), "{token}");
        }
        for token in ["Show", "2019", "SEASON", "1080p", "Sherlock"] {
            assert!(!p.is_season_or_episode(token), "{token}");
        }
    }

    #[test]
    fn combined_token_captures() {
        let p = Patterns::new().unwrap();
        let caps = p.season_episode.captures("S01E01-E05").unwrap();
        assert_eq!(&caps[1], "01");
        assert_eq!(&caps[2], "01");
        assert_eq!(&caps[3], "05");
        let caps = p.cn_season.captures("第1-3季").unwrap();
        assert_eq!(&caps[1], "1");
        assert_eq!(&caps[2], "3");
    }

    #[test]
    fn resolution_tokens() {
        let p = Patterns::new().unwrap();
        for token in ["1080p", "1080P", "BD1080P", "720i", "1920x1080", "4K", "2k", "FullHD", "fhd"] {
            assert!(p.is_resolution(token), "{token}");
        }
        for token in ["1080", "x264", "H265", "S01", "UHD"] {
            assert!(!p.is_resolution(token), "{token}");
        }
    }
}
