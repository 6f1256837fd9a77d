use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::episode::NumberSpan;
use super::media::MediaType;
use super::platform::StreamingPlatform;
use super::quality::{AudioCodec, Effect, Resolution, SourceType, VideoCodec};

/// The primary output of the reelmeta parsing engine.
///
/// Everything the parser could extract from one release/file name. Fields
/// that were not recognised stay at their default; a record is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaInfo {
    /// Original input string.
    pub original: String,

    /// Preprocessed string the tokenizer ran on.
    pub processed: String,

    /// `true` when a known media file extension was stripped.
    pub is_file: bool,

    /// Chinese title.
    pub cn_title: Option<String>,

    /// English (or other Latin-script) title.
    pub en_title: Option<String>,

    /// Release year.
    pub year: Option<u16>,

    /// Movie/TV classification.
    pub media_type: MediaType,

    /// Acquisition medium.
    pub source: Option<SourceType>,

    /// Enhancement flags.
    pub effects: BTreeSet<Effect>,

    /// Video resolution.
    pub resolution: Option<Resolution>,

    /// Video codec.
    pub video_codec: Option<VideoCodec>,

    /// 10-bit colour depth marker.
    pub ten_bit: bool,

    /// Audio codec.
    pub audio_codec: Option<AudioCodec>,

    /// Audio channel layout (e.g. `5.1`).
    pub audio_channels: Option<String>,

    /// Streaming service of a WEB release.
    pub platform: Option<StreamingPlatform>,

    /// Release groups found in the name, in order of appearance.
    pub release_groups: Vec<String>,

    /// Disc/part marker (e.g. `CD1`, `Part2`).
    pub part: Option<String>,

    /// Re-release version (`v2` = 2); 1 when unmarked.
    pub version: u32,

    /// Season number(s).
    pub season: NumberSpan,

    /// Episode number(s).
    pub episode: NumberSpan,
}

impl MetaInfo {
    /// Creates a new empty `MetaInfo` for the given input.
    #[must_use]
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            processed: String::new(),
            is_file: false,
            cn_title: None,
            en_title: None,
            year: None,
            media_type: MediaType::Unknown,
            source: None,
            effects: BTreeSet::new(),
            resolution: None,
            video_codec: None,
            ten_bit: false,
            audio_codec: None,
            audio_channels: None,
            platform: None,
            release_groups: Vec::new(),
            part: None,
            version: 1,
            season: NumberSpan::default(),
            episode: NumberSpan::default(),
        }
    }

    /// Preferred title: the Chinese title wins over the English one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.cn_title.as_deref().or(self.en_title.as_deref())
    }

    /// Returns `true` if either title was extracted.
    #[must_use]
    pub fn has_title(&self) -> bool {
        self.cn_title.is_some() || self.en_title.is_some()
    }

    /// Returns `true` once any strong signal (year, resolution, source type,
    /// season or episode) has been found.
    #[must_use]
    pub fn has_anchor(&self) -> bool {
        self.year.is_some()
            || self.resolution.is_some()
            || self.source.is_some()
            || self.season.is_set()
            || self.episode.is_set()
    }

    /// `S01`, `S01-S03`, or empty.
    #[must_use]
    pub fn season_label(&self) -> String {
        self.season.label('S')
    }

    /// `E01`, `E01-E05`, or empty.
    #[must_use]
    pub fn episode_label(&self) -> String {
        self.episode.label('E')
    }

    /// Season and episode labels joined by a space, skipping whichever is unset.
    #[must_use]
    pub fn season_episode_label(&self) -> String {
        [self.season_label(), self.episode_label()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Every season number the release covers.
    #[must_use]
    pub fn season_list(&self) -> Vec<u32> {
        self.season.to_vec()
    }

    /// Every episode number the release covers.
    #[must_use]
    pub fn episode_list(&self) -> Vec<u32> {
        self.episode.to_vec()
    }

    #[must_use]
    pub fn total_seasons(&self) -> u32 {
        self.season.total()
    }

    #[must_use]
    pub fn total_episodes(&self) -> u32 {
        self.episode.total()
    }

    #[must_use]
    pub fn is_in_season(&self, n: u32) -> bool {
        self.season.contains(n)
    }

    #[must_use]
    pub fn is_in_episode(&self, n: u32) -> bool {
        self.episode.contains(n)
    }

    /// Source type followed by effect labels, e.g. `UHD BluRay DIY DV HDR10`.
    #[must_use]
    pub fn edition(&self) -> String {
        self.source
            .iter()
            .map(ToString::to_string)
            .chain(self.effects.iter().rev().map(ToString::to_string))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for MetaInfo {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl std::fmt::Display for MetaInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MetaInfo(")?;
        if let Some(title) = self.title() {
            write!(f, "title={title:?}")?;
        }
        if let Some(year) = self.year {
            write!(f, ", year={year}")?;
        }
        let se = self.season_episode_label();
        if !se.is_empty() {
            write!(f, ", {se}")?;
        }
        if let Some(ref res) = self.resolution {
            write!(f, ", res={res}")?;
        }
        write!(f, ", type={}", self.media_type)?;
        write!(f, ")")
    }
}
