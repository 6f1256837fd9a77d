use regex::Regex;

use crate::error::Result;

/// Cleans a raw name before tokenization.
///
/// Strips the media file extension, a leading bracketed tag, year ranges,
/// file sizes and embedded dates. Also recognises the handful of names that
/// are nothing but a bare episode or season number.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    extensions: Vec<String>,
    re_leading_tag: Regex,
    re_year_range: Regex,
    re_file_size: Regex,
    re_date: Regex,
    re_bare_season: Regex,
}

/// What a whole-name shortcut decided, bypassing the token pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// The name is just an episode number (`03.mkv`).
    Episode(u32),
    /// The name is just a season marker (`Season 2`, `S03`).
    Season(u32),
}

impl Preprocessor {
    /// Builds a preprocessor recognising the given extensions (with leading dot).
    ///
    /// # Errors
    ///
    /// Returns `MetaError::Regex` if a pattern fails to compile.
    pub fn new(extensions: &[String]) -> Result<Self> {
        Ok(Self {
            extensions: extensions.iter().map(|e| e.to_ascii_lowercase()).collect(),
            re_leading_tag: Regex::new(r"^[\[【].+?[\]】]")?,
            re_year_range: Regex::new(r"([\s.]+)(\d{4})-(\d{4})")?,
            re_file_size: Regex::new(r"(?i)\b\d+(?:\.\d+)?\s*[MGT]i?B\b")?,
            re_date: Regex::new(r"\b\d{4}[\s._-]\d{1,2}[\s._-]\d{1,2}\b")?,
            re_bare_season: Regex::new(r"(?i)^(?:Season\s+|S)(\d{1,3})$")?,
        })
    }

    /// Splits off a known media extension, case-insensitively.
    ///
    /// Returns the stem and whether an extension was removed.
    pub fn strip_extension<'a>(&self, name: &'a str) -> (&'a str, bool) {
        for ext in &self.extensions {
            let Some(cut) = name.len().checked_sub(ext.len()) else {
                continue;
            };
            if cut == 0 {
                continue;
            }
            if name.get(cut..).is_some_and(|tail| tail.eq_ignore_ascii_case(ext)) {
                return (&name[..cut], true);
            }
        }
        (name, false)
    }

    /// Whole-name shortcuts applied to the extension-less stem.
    pub fn shortcut(&self, stem: &str, is_file: bool) -> Option<Shortcut> {
        let stem = stem.trim();
        if is_file && stem.len() < 5 && stem.bytes().all(|b| b.is_ascii_digit()) {
            return stem.parse().ok().map(Shortcut::Episode);
        }
        self.re_bare_season
            .captures(stem)
            .and_then(|c| c[1].parse().ok())
            .map(Shortcut::Season)
    }

    /// Removes decoration that would otherwise confuse the token pipeline.
    pub fn clean(&self, stem: &str) -> String {
        let text = self.re_leading_tag.replace(stem, "");
        let text = self.re_year_range.replace_all(&text, "${1}${2}");
        let text = self.re_file_size.replace_all(&text, "");
        let text = self.re_date.replace_all(&text, "");
        text.trim().to_string()
    }
}
