use regex::Regex;

use crate::error::Result;
use crate::parser::context::{Claim, ParseContext, TokenClassifier, TokenKind};

/// Disc and part markers: `CD1`, `Part2`, `DISC 3`, `Part II`.
#[derive(Debug, Clone)]
pub struct PartClassifier {
    re_part: Regex,
}

impl PartClassifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_part: Regex::new(
                r"(?i)^(?:PART[0-9ABI]{0,2}|CD[0-9]{0,2}|DVD[0-9]{0,2}|DISK[0-9]{0,2}|DISC[0-9]{0,2})$",
            )?,
        })
    }
}

/// A short identifier that can follow a bare part word.
fn is_part_suffix(token: &str) -> bool {
    let bytes = token.as_bytes();
    match bytes {
        [d] if d.is_ascii_digit() => true,
        [b'0', d] if d.is_ascii_digit() => true,
        _ => matches!(
            token.to_ascii_uppercase().as_str(),
            "A" | "B" | "C" | "I" | "II" | "III"
        ),
    }
}

impl TokenClassifier for PartClassifier {
    fn name(&self) -> &'static str {
        "part"
    }

    fn classify(&self, token: &str, cx: &mut ParseContext<'_>) -> Claim {
        if !cx.meta.has_title() || !cx.meta.has_anchor() || !self.re_part.is_match(token) {
            return Claim::Pass;
        }

        let first = cx.meta.part.is_none();
        if first {
            cx.meta.part = Some(token.to_string());
        }
        let suffix = cx
            .tokens
            .peek(1)
            .filter(|t| is_part_suffix(t))
            .map(str::to_string);
        if let Some(suffix) = suffix {
            if first {
                cx.meta.part = Some(format!("{token}{suffix}"));
            }
            cx.tokens.advance();
        }
        cx.state.last_kind = Some(TokenKind::Part);
        Claim::Consumed
    }
}
