//! The parsing pipeline: preprocessing, detectors, tokenization, the
//! classifier chain and post-processing.

pub mod classify;
pub mod context;
pub mod engine;
pub mod numerals;
pub mod postprocess;
pub mod preprocess;
pub mod release_group;
pub mod tokenizer;
pub mod version;

pub use context::{Claim, ParseContext, ParseState, TokenClassifier, TokenKind};
pub use engine::{DEFAULT_MEDIA_EXTENSIONS, MetaParser, ParserConfig, parse};
pub use release_group::{RELEASE_GROUP_CATALOG, ReleaseGroupMatcher};
pub use tokenizer::Tokenizer;
