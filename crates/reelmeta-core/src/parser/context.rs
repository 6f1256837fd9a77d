//! Mutable state threaded through the classifier chain for one parse.

use std::fmt;

use super::engine::ParserConfig;
use super::tokenizer::Tokenizer;
use crate::types::{MediaType, MetaInfo};

/// What the previously classified token turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    ChineseTitle,
    EnglishTitle,
    /// A lone season/episode word such as `第` or `集`.
    SeasonEpisodeWord,
    Part,
    Year,
    Resolution,
    Season,
    /// The literal word `SEASON`, awaiting a number.
    SeasonKeyword,
    Episode,
    /// The literal word `EPISODE`, awaiting a number.
    EpisodeKeyword,
    Source,
    Effect,
    Platform,
    VideoCodec,
    AudioCodec,
}

/// Outcome of offering a token to one classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// Not mine; offer the token to the next classifier.
    Pass,
    /// Handled; skip the remaining classifiers for this token.
    Consumed,
}

/// Flags and buffers carried between tokens.
#[derive(Debug, Clone, Default)]
pub struct ParseState {
    pub last_kind: Option<TokenKind>,
    /// Upper-cased text of the last technical token, used by two-token combinations.
    pub last_token: String,
    /// Set once title accumulation must end.
    pub stop_name: bool,
    /// Set once a second Chinese token was offered to the Chinese title.
    pub stop_cn_continuation: bool,
    /// A numeral seen while no title existed yet.
    pub unknown_name: Option<String>,
    /// Raw text of the last audio codec match, for channel extensions.
    pub audio_label: Option<String>,
}

/// Everything a classifier can read or mutate.
pub struct ParseContext<'a> {
    pub meta: MetaInfo,
    pub tokens: Tokenizer,
    pub state: ParseState,
    pub config: &'a ParserConfig,
}

impl<'a> ParseContext<'a> {
    pub fn new(meta: MetaInfo, tokens: Tokenizer, config: &'a ParserConfig) -> Self {
        Self {
            meta,
            tokens,
            state: ParseState::default(),
            config,
        }
    }

    /// Records `kind` as the last token kind and stops title accumulation.
    pub fn settle(&mut self, kind: TokenKind) {
        self.state.last_kind = Some(kind);
        self.state.stop_name = true;
    }

    pub fn last_is(&self, kind: TokenKind) -> bool {
        self.state.last_kind == Some(kind)
    }

    pub fn mark_tv(&mut self) {
        self.meta.media_type = MediaType::Tv;
    }

    /// Folds `value` into the season span, honouring the single-file limit.
    pub fn record_season(&mut self, value: u32) -> bool {
        let limit = self.config.season_span_limit;
        self.meta.season.record(value, self.meta.is_file, limit)
    }

    /// Folds `value` into the episode span, honouring the single-file limit.
    pub fn record_episode(&mut self, value: u32) -> bool {
        let limit = self.config.episode_span_limit;
        self.meta.episode.record(value, self.meta.is_file, limit)
    }

    pub fn is_release_group(&self, token: &str) -> bool {
        self.meta
            .release_groups
            .iter()
            .any(|g| g.eq_ignore_ascii_case(token))
    }

    pub fn is_media_extension(&self, token: &str) -> bool {
        self.config
            .media_extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').eq_ignore_ascii_case(token))
    }

    pub fn into_meta(self) -> MetaInfo {
        self.meta
    }
}

/// One stage of the ordered classification chain.
///
/// Classifiers are consulted in a fixed order for every token; the first one
/// that returns [`Claim::Consumed`] ends the round for that token.
pub trait TokenClassifier: fmt::Debug + Send + Sync {
    /// Short name used in trace output.
    fn name(&self) -> &'static str;

    fn classify(&self, token: &str, cx: &mut ParseContext<'_>) -> Claim;
}
