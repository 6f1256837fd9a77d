//! # Reelmeta Core
//!
//! Turns movie and TV release names (torrent titles, scene names, media file
//! names) into structured metadata: Chinese and English titles, year, season
//! and episode spans, resolution, source, effects, codecs, streaming platform,
//! release groups, part and version.
//!
//! Parsing never fails. Anything the rules cannot recognise is left unset on
//! the returned [`MetaInfo`].
//!
//! ## Quick Start
//!
//! ```rust
//! use reelmeta_core::{MediaType, Resolution, SourceType};
//!
//! let meta = reelmeta_core::parse("24 S01 1080p WEB-DL AAC2.0 H.264-BTN");
//!
//! assert_eq!(meta.title(), Some("24"));
//! assert_eq!(meta.season_label(), "S01");
//! assert_eq!(meta.media_type, MediaType::Tv);
//! assert_eq!(meta.resolution, Some(Resolution::P1080));
//! assert_eq!(meta.source, Some(SourceType::WebDl));
//! ```
pub mod error;
pub mod parser;
pub mod types;

// Re-export primary API
pub use error::{MetaError, Result};
pub use parser::{MetaParser, ParserConfig, parse};
pub use types::{
    AudioCodec, Effect, MediaType, MetaInfo, NumberSpan, Resolution, SourceType,
    StreamingPlatform, VideoCodec,
};
