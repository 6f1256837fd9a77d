//! The ordered token classifiers.
//!
//! Order matters: part markers are checked before titles so `CD2` never ends
//! up in a title, and seasons before episodes so `S01` is not read as an
//! episode range.

pub mod audio;
pub mod episode;
pub mod part;
pub mod patterns;
pub mod platform;
pub mod resolution;
pub mod season;
pub mod source;
pub mod title;
pub mod video;
pub mod year;

pub use audio::AudioClassifier;
pub use episode::EpisodeClassifier;
pub use part::PartClassifier;
pub use patterns::Patterns;
pub use platform::PlatformClassifier;
pub use resolution::ResolutionClassifier;
pub use season::SeasonClassifier;
pub use source::SourceClassifier;
pub use title::TitleClassifier;
pub use video::VideoClassifier;
pub use year::YearClassifier;

use super::context::TokenClassifier;
use crate::error::Result;

/// Builds the default classifier chain in consultation order.
///
/// # Errors
///
/// Returns `MetaError::Regex` if a pattern fails to compile.
pub fn default_chain() -> Result<Vec<Box<dyn TokenClassifier>>> {
    let patterns = Patterns::new()?;
    Ok(vec![
        Box::new(PartClassifier::new()?),
        Box::new(TitleClassifier::new(patterns.clone())),
        Box::new(YearClassifier),
        Box::new(ResolutionClassifier::new(patterns.clone())),
        Box::new(SeasonClassifier::new(patterns.clone())),
        Box::new(EpisodeClassifier::new(patterns)),
        Box::new(SourceClassifier),
        Box::new(PlatformClassifier),
        Box::new(VideoClassifier),
        Box::new(AudioClassifier),
    ])
}
