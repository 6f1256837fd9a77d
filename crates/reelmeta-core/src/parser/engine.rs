//! # Parser Engine
//!
//! Wires the preprocessor, the detectors, the classifier chain and the
//! post-processor into a single reusable [`MetaParser`].

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use tracing::{debug, trace, warn};

use crate::error::{MetaError, Result};
use crate::parser::classify;
use crate::parser::context::{Claim, ParseContext, TokenClassifier};
use crate::parser::numerals::is_digits;
use crate::parser::postprocess::PostProcessor;
use crate::parser::preprocess::{Preprocessor, Shortcut};
use crate::parser::release_group::ReleaseGroupMatcher;
use crate::parser::tokenizer::Tokenizer;
use crate::parser::version::VersionDetector;
use crate::types::{
    AudioCodec, Effect, MediaType, MetaInfo, NumberSpan, Resolution, SourceType, VideoCodec,
};

/// Extensions recognised as media files by default.
pub const DEFAULT_MEDIA_EXTENSIONS: &[&str] = &[
    ".mp4", ".mkv", ".ts", ".iso", ".rmvb", ".avi", ".mov", ".mpeg", ".mpg", ".wmv", ".3gp",
    ".asf", ".m4v", ".flv", ".m2ts", ".strm", ".tp", ".f4v",
];

/// Configuration for the parser.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Four-digit numbers inside this window are release years.
    pub year_window: RangeInclusive<u16>,
    /// Widest season span a single file may claim before it collapses to its first season.
    pub season_span_limit: u32,
    /// Widest episode span a single file may claim before it collapses to its first episode.
    pub episode_span_limit: u32,
    /// File extensions (with leading dot) stripped before parsing.
    pub media_extensions: Vec<String>,
    /// Release-group names recognised on top of the built-in catalog, matched literally.
    pub extra_release_groups: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            year_window: 1901..=2049,
            season_span_limit: 1,
            episode_span_limit: 2,
            media_extensions: DEFAULT_MEDIA_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            extra_release_groups: Vec::new(),
        }
    }
}

impl ParserConfig {
    /// Create a new parser configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the plausible release-year window.
    pub fn with_year_window(mut self, window: RangeInclusive<u16>) -> Self {
        self.year_window = window;
        self
    }

    /// Set the season span limit for single-file inputs.
    pub fn with_season_span_limit(mut self, limit: u32) -> Self {
        self.season_span_limit = limit;
        self
    }

    /// Set the episode span limit for single-file inputs.
    pub fn with_episode_span_limit(mut self, limit: u32) -> Self {
        self.episode_span_limit = limit;
        self
    }

    /// Replace the list of recognised media extensions.
    pub fn with_media_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.media_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Add a release-group name to look for.
    pub fn with_release_group(mut self, name: impl Into<String>) -> Self {
        self.extra_release_groups.push(name.into());
        self
    }

    /// Check the configuration for values the parser cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `MetaError::InvalidConfig` for an empty year window, a zero span
    /// limit or an extension without its leading dot.
    pub fn validate(&self) -> Result<()> {
        if self.year_window.is_empty() {
            return Err(MetaError::InvalidConfig(format!(
                "year window {}..={} is empty",
                self.year_window.start(),
                self.year_window.end()
            )));
        }
        if self.season_span_limit == 0 || self.episode_span_limit == 0 {
            return Err(MetaError::InvalidConfig(
                "span limits must be at least 1".to_string(),
            ));
        }
        if let Some(ext) = self.media_extensions.iter().find(|e| !e.starts_with('.')) {
            return Err(MetaError::InvalidConfig(format!(
                "media extension {ext:?} must start with '.'"
            )));
        }
        Ok(())
    }
}

/// Release-name parser. Immutable after construction and safe to share
/// between threads; every parse keeps its state on the stack.
#[derive(Debug)]
pub struct MetaParser {
    config: ParserConfig,
    preprocessor: Preprocessor,
    groups: ReleaseGroupMatcher,
    version: VersionDetector,
    classifiers: Vec<Box<dyn TokenClassifier>>,
    post: PostProcessor,
}

impl MetaParser {
    /// Create a parser with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `MetaError::Regex` if a built-in pattern fails to compile.
    pub fn new() -> Result<Self> {
        Self::with_config(ParserConfig::default())
    }

    /// Create a parser with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `MetaError::InvalidConfig` if the configuration does not
    /// validate, or `MetaError::Regex` if a pattern fails to compile.
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            preprocessor: Preprocessor::new(&config.media_extensions)?,
            groups: ReleaseGroupMatcher::new(&config.extra_release_groups)?,
            version: VersionDetector::new()?,
            classifiers: classify::default_chain()?,
            post: PostProcessor::new()?,
            config,
        })
    }

    /// Parse a release or file name. Never fails: whatever could not be
    /// recognised is simply left unset.
    ///
    /// # Examples
    /// ```
    /// use reelmeta_core::parser::MetaParser;
    ///
    /// let parser = MetaParser::new().unwrap();
    /// let meta = parser.parse("The.Long.Season.2017.2160p.WEB-DL.H265.AAC-XXX");
    ///
    /// assert_eq!(meta.en_title.as_deref(), Some("The Long Season"));
    /// assert_eq!(meta.year, Some(2017));
    /// assert_eq!(meta.release_groups, vec!["XXX"]);
    /// ```
    pub fn parse(&self, title: &str) -> MetaInfo {
        let mut meta = MetaInfo::new(title);
        let (stem, is_file) = self.preprocessor.strip_extension(title.trim());
        meta.is_file = is_file;

        if let Some(shortcut) = self.preprocessor.shortcut(stem, is_file) {
            meta.processed = stem.trim().to_string();
            meta.media_type = MediaType::Tv;
            match shortcut {
                Shortcut::Episode(n) => meta.episode = NumberSpan::single(n),
                Shortcut::Season(n) => meta.season = NumberSpan::single(n),
            }
            debug!(title, ?shortcut, "whole-name shortcut");
            return meta;
        }

        meta.processed = self.preprocessor.clean(stem);
        meta.release_groups = self.groups.find_all(&meta.processed);
        meta.version = self.version.detect(&meta.processed);

        let tokens = self.prepare_tokens(&meta.processed, &meta.release_groups);
        let mut cx = ParseContext::new(meta, Tokenizer::from_tokens(tokens), &self.config);
        while let Some(token) = cx.tokens.advance().map(str::to_string) {
            for classifier in &self.classifiers {
                if classifier.classify(&token, &mut cx) == Claim::Consumed {
                    trace!(classifier = classifier.name(), token = %token, "claimed");
                    break;
                }
            }
        }

        let mut meta = cx.into_meta();
        self.post.run(&mut meta);
        debug!(
            title,
            cn_title = ?meta.cn_title,
            en_title = ?meta.en_title,
            year = ?meta.year,
            season_episode = %meta.season_episode_label(),
            media_type = %meta.media_type,
            "parsed"
        );
        meta
    }

    /// Split the processed name and normalise tokens once: version suffixes
    /// go, and a trailing `-GROUP` is detached from technical tokens.
    fn prepare_tokens(&self, processed: &str, groups: &[String]) -> Vec<String> {
        let mut tokens = Tokenizer::split(processed);
        let last = tokens.len().saturating_sub(1);
        for (i, token) in tokens.iter_mut().enumerate() {
            let stripped = self.version.strip_suffix(token);
            let detached = match stripped.rsplit_once('-') {
                Some((head, tail))
                    if !head.is_empty()
                        && !tail.is_empty()
                        && (groups.iter().any(|g| g.eq_ignore_ascii_case(tail))
                            || (i == last && is_technical(head) && !is_technical(stripped))) =>
                {
                    head
                }
                _ => stripped,
            };
            if detached.len() != token.len() {
                *token = detached.to_string();
            }
        }
        tokens
    }

    /// Get the parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}

/// Tokens that can carry a release-group suffix: codecs, sources, effects,
/// resolutions and bare numbers.
fn is_technical(token: &str) -> bool {
    is_digits(token)
        || AudioCodec::lookup(token).is_some()
        || token.parse::<VideoCodec>().is_ok()
        || token.parse::<SourceType>().is_ok()
        || token.parse::<Effect>().is_ok()
        || token.parse::<Resolution>().is_ok()
}

static DEFAULT_PARSER: LazyLock<Result<MetaParser>> = LazyLock::new(MetaParser::new);

/// Convenience function to parse a name with the default configuration.
pub fn parse(title: &str) -> MetaInfo {
    match &*DEFAULT_PARSER {
        Ok(parser) => parser.parse(title),
        Err(err) => {
            warn!(error = %err, "default parser unavailable");
            MetaInfo::new(title)
        }
    }
}
