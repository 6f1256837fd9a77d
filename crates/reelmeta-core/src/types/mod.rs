pub mod episode;
pub mod media;
pub mod platform;
pub mod quality;
pub mod result;

pub use episode::NumberSpan;
pub use media::MediaType;
pub use platform::StreamingPlatform;
pub use quality::{AudioCodec, Effect, Resolution, SourceType, VideoCodec};
pub use result::MetaInfo;
