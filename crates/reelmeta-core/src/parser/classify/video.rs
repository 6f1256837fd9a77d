use crate::parser::context::{Claim, ParseContext, TokenClassifier, TokenKind};
use crate::parser::numerals::is_digits;
use crate::types::VideoCodec;

/// Prefixes that name a codec once the following number arrives (`H 264`, `VC 1`).
const SPLIT_PREFIXES: &[&str] = &["H", "X", "VC", "MPEG"];

const TEN_BIT_MARKERS: &[&str] = &["10BIT", "10-BIT", "HI10", "HI10P"];

#[derive(Debug, Clone, Default)]
pub struct VideoClassifier;

impl TokenClassifier for VideoClassifier {
    fn name(&self) -> &'static str {
        "video"
    }

    fn classify(&self, token: &str, cx: &mut ParseContext<'_>) -> Claim {
        if !cx.meta.has_anchor() {
            return Claim::Pass;
        }
        let upper = token.to_ascii_uppercase();

        if TEN_BIT_MARKERS.contains(&upper.as_str()) {
            cx.meta.ten_bit = true;
            cx.settle(TokenKind::VideoCodec);
            return Claim::Consumed;
        }

        let codec = if let Ok(codec) = token.parse::<VideoCodec>() {
            Some(codec)
        } else if SPLIT_PREFIXES.contains(&upper.as_str()) {
            None
        } else if is_digits(token)
            && cx.last_is(TokenKind::VideoCodec)
            && SPLIT_PREFIXES.contains(&cx.state.last_token.as_str())
        {
            let Ok(codec) = format!("{}{token}", cx.state.last_token).parse::<VideoCodec>() else {
                return Claim::Pass;
            };
            Some(codec)
        } else {
            return Claim::Pass;
        };

        if let Some(codec) = codec {
            cx.meta.video_codec.get_or_insert(codec);
        }
        cx.state.last_token = upper;
        cx.settle(TokenKind::VideoCodec);
        Claim::Consumed
    }
}
