use crate::parser::context::{Claim, ParseContext, TokenClassifier, TokenKind};
use crate::types::StreamingPlatform;

/// Tokens that show a release came off a streaming service.
const WEB_FAMILY: &[&str] = &["WEB", "DL", "WEBDL", "WEB-DL", "WEBRIP", "WEB-RIP"];

/// Streaming platform codes (`NF`, `AMZN`, `Apple TV`), only accepted next to
/// a WEB source token so that a title word like `It` is not mistaken for iTunes.
#[derive(Debug, Clone, Default)]
pub struct PlatformClassifier;

/// Where in the token list a platform name was found.
struct PlatformMatch {
    platform: StreamingPlatform,
    start: usize,
    len: usize,
    uses_next: bool,
}

impl PlatformClassifier {
    fn find(token: &str, cx: &ParseContext<'_>) -> Option<PlatformMatch> {
        let index = cx.tokens.index()?;
        if let Ok(platform) = token.parse() {
            return Some(PlatformMatch {
                platform,
                start: index,
                len: 1,
                uses_next: false,
            });
        }
        for sep in [" ", "-"] {
            if let Some(prev) = cx.tokens.previous() {
                if let Ok(platform) = format!("{prev}{sep}{token}").parse() {
                    return Some(PlatformMatch {
                        platform,
                        start: index - 1,
                        len: 2,
                        uses_next: false,
                    });
                }
            }
            if let Some(next) = cx.tokens.peek(1) {
                if let Ok(platform) = format!("{token}{sep}{next}").parse() {
                    return Some(PlatformMatch {
                        platform,
                        start: index,
                        len: 2,
                        uses_next: true,
                    });
                }
            }
        }
        None
    }

    /// A WEB-family token within `len` tokens on either side of the match.
    fn near_web_source(found: &PlatformMatch, cx: &ParseContext<'_>) -> bool {
        let from = found.start.saturating_sub(found.len);
        let to = found.start + 2 * found.len;
        cx.tokens.range(from..to).iter().any(|t| {
            let upper = t.to_ascii_uppercase();
            WEB_FAMILY.contains(&upper.as_str())
        })
    }
}

impl TokenClassifier for PlatformClassifier {
    fn name(&self) -> &'static str {
        "platform"
    }

    fn classify(&self, token: &str, cx: &mut ParseContext<'_>) -> Claim {
        if !cx.meta.has_title() {
            return Claim::Pass;
        }
        let Some(found) = Self::find(token, cx) else {
            return Claim::Pass;
        };
        if !Self::near_web_source(&found, cx) {
            return Claim::Pass;
        }

        cx.meta.platform.get_or_insert(found.platform);
        if found.uses_next {
            cx.tokens.advance();
        }
        cx.settle(TokenKind::Platform);
        Claim::Consumed
    }
}
