use crate::parser::context::{Claim, ParseContext, TokenClassifier, TokenKind};
use crate::types::{Effect, SourceType};

/// Source type and effect flags, including the split forms `WEB DL`,
/// `BLU RAY` and `UHD BluRay REMUX`.
#[derive(Debug, Clone, Default)]
pub struct SourceClassifier;

impl SourceClassifier {
    /// Two-token combinations that refine the source found so far.
    fn combine(upper: &str, cx: &ParseContext<'_>) -> Option<SourceType> {
        let source = cx.meta.source;
        let after = |word: &str| cx.last_is(TokenKind::Source) && cx.state.last_token == word;
        match upper {
            "DL" if after("WEB") && matches!(source, None | Some(SourceType::Web)) => {
                Some(SourceType::WebDl)
            }
            "RAY" if after("BLU") => match source {
                Some(SourceType::Uhd) => Some(SourceType::UhdBluRay),
                None | Some(SourceType::BluRay) => Some(SourceType::BluRay),
                _ => None,
            },
            "REMUX" => match source {
                Some(SourceType::BluRay) => Some(SourceType::BluRayRemux),
                Some(SourceType::UhdBluRay) => Some(SourceType::UhdBluRayRemux),
                _ => None,
            },
            "BLURAY" | "BLU-RAY" if source == Some(SourceType::Uhd) => Some(SourceType::UhdBluRay),
            _ => None,
        }
    }

    /// Single-token lookup. Plain words like `Blu` or `Web` are only held back
    /// while they could still belong to the title.
    fn source(token: &str, cx: &ParseContext<'_>) -> Option<SourceType> {
        if cx.state.stop_name {
            token.parse().ok()
        } else {
            SourceType::from_token(token)
        }
    }
}

impl TokenClassifier for SourceClassifier {
    fn name(&self) -> &'static str {
        "source"
    }

    fn classify(&self, token: &str, cx: &mut ParseContext<'_>) -> Claim {
        if !cx.meta.has_title() {
            return Claim::Pass;
        }
        let upper = token.to_ascii_uppercase();

        if let Some(combined) = Self::combine(&upper, cx) {
            cx.meta.source = Some(combined);
        } else if let Some(source) = Self::source(token, cx) {
            cx.meta.source.get_or_insert(source);
        } else if let Ok(effect) = token.parse::<Effect>() {
            cx.meta.effects.insert(effect);
            cx.state.last_token = upper;
            cx.settle(TokenKind::Effect);
            return Claim::Consumed;
        } else {
            return Claim::Pass;
        }

        cx.state.last_token = upper;
        cx.settle(TokenKind::Source);
        Claim::Consumed
    }
}
