use super::patterns::Patterns;
use crate::parser::context::{Claim, ParseContext, TokenClassifier, TokenKind};
use crate::parser::numerals::is_digits;
use crate::types::Resolution;

#[derive(Debug, Clone)]
pub struct ResolutionClassifier {
    patterns: Patterns,
}

impl ResolutionClassifier {
    pub fn new(patterns: Patterns) -> Self {
        Self { patterns }
    }

    /// Normalised resolution text captured from `token`, e.g. `2160p` or `4k`.
    fn capture(&self, token: &str) -> Option<String> {
        if let Some(caps) = self.patterns.resolution_k.captures(token) {
            return Some(caps[1].to_ascii_lowercase());
        }
        let caps = self.patterns.resolution.captures(token)?;
        let raw = caps.get(1).or_else(|| caps.get(2))?.as_str();
        let mut value = raw.to_ascii_lowercase();
        if is_digits(&value) {
            value.push('p');
        }
        Some(value)
    }
}

impl TokenClassifier for ResolutionClassifier {
    fn name(&self) -> &'static str {
        "resolution"
    }

    fn classify(&self, token: &str, cx: &mut ParseContext<'_>) -> Claim {
        if !cx.meta.has_title() {
            return Claim::Pass;
        }
        let Some(value) = self.capture(token) else {
            return Claim::Pass;
        };
        if cx.meta.resolution.is_none() {
            cx.meta.resolution = value.parse::<Resolution>().ok();
        }
        cx.settle(TokenKind::Resolution);
        Claim::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_resolution_text() {
        let classifier = ResolutionClassifier::new(Patterns::new().unwrap());
        assert_eq!(classifier.capture("1080P").as_deref(), Some("1080p"));
        assert_eq!(classifier.capture("BD2160p").as_deref(), Some("2160p"));
        assert_eq!(classifier.capture("1920x1080").as_deref(), Some("1080p"));
        assert_eq!(classifier.capture("4K").as_deref(), Some("4k"));
        assert_eq!(classifier.capture("FullHD").as_deref(), Some("fullhd"));
        assert_eq!(classifier.capture("QHD").as_deref(), Some("qhd"));
        assert_eq!(classifier.capture("UHD"), None);
        assert_eq!(classifier.capture("x265"), None);
    }
}
