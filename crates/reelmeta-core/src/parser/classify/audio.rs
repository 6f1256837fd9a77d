use crate::parser::context::{Claim, ParseContext, TokenClassifier, TokenKind};
use crate::parser::numerals::is_digits;
use crate::types::AudioCodec;

/// Longest run of tokens tried as one audio codec (`DTS-HD MA 5 1`).
const MAX_WINDOW: usize = 4;

const JOINERS: &[&str] = &["-", " ", ".", ""];

/// Audio codecs, possibly spread over several tokens (`DTS-HD MA`, `DDP5 1`),
/// with an optional channel layout.
#[derive(Debug, Clone, Default)]
pub struct AudioClassifier;

struct AudioMatch {
    width: usize,
    codec: AudioCodec,
    channels: Option<String>,
    label: String,
}

impl AudioClassifier {
    /// Longest window starting at the current token that resolves to a codec.
    fn longest(cx: &ParseContext<'_>) -> Option<AudioMatch> {
        let start = cx.tokens.index()?;
        let mut best = None;
        for width in 1..=MAX_WINDOW {
            let window = cx.tokens.range(start..start + width);
            if window.len() < width {
                break;
            }
            let joiners = if width == 1 { &[""][..] } else { JOINERS };
            let found = joiners.iter().find_map(|&joiner| {
                let label = window.join(joiner);
                AudioCodec::lookup(&label).map(|(codec, channels)| AudioMatch {
                    width,
                    codec,
                    channels,
                    label,
                })
            });
            if found.is_some() {
                best = found;
            }
        }
        best
    }

    /// A bare number after an audio token may extend its channel layout:
    /// `Atmos 7 1` → `Atmos7.1`.
    fn extend(token: &str, cx: &mut ParseContext<'_>) -> bool {
        let Some(label) = cx.state.audio_label.clone() else {
            return false;
        };
        let candidates = if label.ends_with(|c: char| c.is_ascii_digit()) {
            vec![format!("{label}.{token}")]
        } else {
            vec![format!("{label}{token}"), format!("{label} {token}")]
        };
        for candidate in candidates {
            if let Some((_, channels)) = AudioCodec::lookup(&candidate) {
                if channels.is_some() {
                    cx.meta.audio_channels = channels;
                }
                cx.state.audio_label = Some(candidate);
                return true;
            }
        }
        false
    }

    fn apply(found: AudioMatch, cx: &mut ParseContext<'_>) {
        match cx.meta.audio_codec {
            None => {
                cx.meta.audio_codec = Some(found.codec);
                cx.meta.audio_channels = found.channels;
            }
            Some(existing) if found.codec == AudioCodec::Atmos && existing != AudioCodec::Atmos => {
                cx.meta.audio_codec = Some(AudioCodec::Atmos);
                if found.channels.is_some() {
                    cx.meta.audio_channels = found.channels;
                }
            }
            Some(_) => {
                if cx.meta.audio_channels.is_none() {
                    cx.meta.audio_channels = found.channels;
                }
            }
        }
        cx.state.audio_label = Some(found.label);
    }
}

impl TokenClassifier for AudioClassifier {
    fn name(&self) -> &'static str {
        "audio"
    }

    fn classify(&self, token: &str, cx: &mut ParseContext<'_>) -> Claim {
        if !cx.meta.has_anchor() {
            return Claim::Pass;
        }

        if let Some(found) = Self::longest(cx) {
            for _ in 1..found.width {
                cx.tokens.advance();
            }
            Self::apply(found, cx);
        } else if !(is_digits(token) && cx.last_is(TokenKind::AudioCodec) && Self::extend(token, cx)) {
            return Claim::Pass;
        }

        cx.state.last_token = token.to_ascii_uppercase();
        cx.settle(TokenKind::AudioCodec);
        Claim::Consumed
    }
}
