use super::patterns::Patterns;
use crate::parser::context::{Claim, ParseContext, TokenClassifier, TokenKind};
use crate::parser::numerals::{is_digits, parse_number};
use crate::types::MediaType;

/// Season markers: `S01`, `S01-S03`, `-S02`, `Season 2`, `第二季`.
///
/// Combined `S01E02` tokens are left to the episode classifier.
#[derive(Debug, Clone)]
pub struct SeasonClassifier {
    patterns: Patterns,
}

impl SeasonClassifier {
    pub fn new(patterns: Patterns) -> Self {
        Self { patterns }
    }

    /// Begin and optional end numbers named by `token`.
    fn span(&self, token: &str) -> Option<(u32, Option<u32>)> {
        if let Some(caps) = self.patterns.season.captures(token) {
            let begin = caps[1].parse().ok()?;
            let end = caps.get(2).and_then(|m| m.as_str().parse().ok());
            return Some((begin, end));
        }
        if let Some(caps) = self.patterns.season_word.captures(token) {
            return Some((caps[1].parse().ok()?, None));
        }
        if let Some(caps) = self.patterns.cn_season.captures(token) {
            let begin = parse_number(&caps[1])?;
            let end = caps.get(2).and_then(|m| parse_number(m.as_str()));
            return Some((begin, end));
        }
        None
    }
}

impl TokenClassifier for SeasonClassifier {
    fn name(&self) -> &'static str {
        "season"
    }

    fn classify(&self, token: &str, cx: &mut ParseContext<'_>) -> Claim {
        if self.patterns.season_episode.is_match(token) {
            return Claim::Pass;
        }

        if let Some((begin, end)) = self.span(token) {
            cx.record_season(begin);
            if let Some(end) = end {
                cx.record_season(end);
            }
        } else if is_digits(token) {
            let awaited = cx.last_is(TokenKind::SeasonKeyword)
                && !cx.meta.season.is_set()
                && token.len() < 3;
            let Some(value) = token.parse::<u32>().ok().filter(|_| awaited) else {
                return Claim::Pass;
            };
            cx.record_season(value);
        } else if token.eq_ignore_ascii_case("SEASON") {
            if !cx.meta.season.is_set() {
                cx.state.last_kind = Some(TokenKind::SeasonKeyword);
            }
            return Claim::Pass;
        } else {
            if cx.meta.media_type == MediaType::Tv && !cx.meta.season.is_set() {
                cx.meta.season.begin = Some(1);
            }
            return Claim::Pass;
        }

        cx.mark_tv();
        cx.settle(TokenKind::Season);
        Claim::Consumed
    }
}
