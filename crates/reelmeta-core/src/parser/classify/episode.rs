use super::patterns::Patterns;
use crate::parser::context::{Claim, ParseContext, TokenClassifier, TokenKind};
use crate::parser::numerals::{is_digits, parse_number};

/// Episode markers, combined `SxxEyy` tokens and bare episode numerals.
#[derive(Debug, Clone)]
pub struct EpisodeClassifier {
    patterns: Patterns,
}

impl EpisodeClassifier {
    pub fn new(patterns: Patterns) -> Self {
        Self { patterns }
    }

    /// Marker tokens whose meaning does not depend on context.
    fn marked(&self, token: &str, cx: &mut ParseContext<'_>) -> bool {
        if let Some(caps) = self.patterns.season_episode.captures(token) {
            if let Ok(season) = caps[1].parse() {
                cx.record_season(season);
            }
            for episode in [caps.get(2), caps.get(3)].into_iter().flatten() {
                if let Ok(value) = episode.as_str().parse() {
                    cx.record_episode(value);
                }
            }
            return true;
        }
        if let Some(caps) = self.patterns.cn_episode.captures(token) {
            for episode in [caps.get(1), caps.get(2)].into_iter().flatten() {
                if let Some(value) = parse_number(episode.as_str()) {
                    cx.record_episode(value);
                }
            }
            return true;
        }
        let caps = self
            .patterns
            .episode_range
            .captures(token)
            .or_else(|| self.patterns.episode.captures(token));
        if let Some(caps) = caps {
            for episode in [caps.get(1), caps.get(2)].into_iter().flatten() {
                if let Ok(value) = episode.as_str().parse() {
                    cx.record_episode(value);
                }
            }
            return true;
        }
        false
    }

    /// Bare numerals, which only count as episodes in the right context.
    fn numeral(token: &str, cx: &mut ParseContext<'_>) -> bool {
        let Ok(value) = token.parse::<u32>() else {
            return false;
        };
        let len = token.len();
        let episode = cx.meta.episode;

        // Closing number of an open range: `E01 05` → 1-5.
        if let (Some(begin), None) = (episode.begin, episode.end) {
            if cx.last_is(TokenKind::Episode) && len < 5 && value > begin {
                cx.record_episode(value);
                return true;
            }
        }

        if episode.begin.is_none() && (2..4).contains(&len) {
            let after_technical = matches!(
                cx.state.last_kind,
                Some(TokenKind::Year | TokenKind::Resolution | TokenKind::VideoCodec)
            );
            let buffered = cx.state.unknown_name.as_deref() == Some(token);
            if !after_technical && !buffered {
                cx.record_episode(value);
                Self::take_range_end(token, value, cx);
                return true;
            }
        }

        if episode.begin.is_none() && len < 5 && cx.last_is(TokenKind::EpisodeKeyword) {
            cx.record_episode(value);
            return true;
        }
        false
    }

    /// Consumes a following numeral of the same width as the range end: `01 12`.
    fn take_range_end(token: &str, begin: u32, cx: &mut ParseContext<'_>) {
        let end = cx
            .tokens
            .peek(1)
            .filter(|next| next.len() == token.len() && is_digits(next))
            .and_then(|next| next.parse::<u32>().ok())
            .filter(|&end| end > begin);
        if let Some(end) = end {
            cx.record_episode(end);
            cx.tokens.advance();
        }
    }
}

impl TokenClassifier for EpisodeClassifier {
    fn name(&self) -> &'static str {
        "episode"
    }

    fn classify(&self, token: &str, cx: &mut ParseContext<'_>) -> Claim {
        let determined = if is_digits(token) {
            Self::numeral(token, cx)
        } else if token.eq_ignore_ascii_case("EPISODE") {
            if !cx.meta.episode.is_set() {
                cx.state.last_kind = Some(TokenKind::EpisodeKeyword);
            }
            return Claim::Pass;
        } else {
            self.marked(token, cx)
        };

        if !determined {
            return Claim::Pass;
        }
        cx.mark_tv();
        cx.settle(TokenKind::Episode);
        Claim::Consumed
    }
}
