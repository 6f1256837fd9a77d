//! Title accumulation.
//!
//! Chinese and Latin-script tokens are gathered into separate titles until a
//! technical token freezes them. Numerals are the hard part: `Iron Man 3`
//! keeps its number while `Show 05` hands it on to the episode classifier.

use super::patterns::Patterns;
use crate::parser::context::{Claim, ParseContext, TokenClassifier, TokenKind};
use crate::parser::numerals::{is_chinese, is_digits, roman_value};
use crate::types::{Effect, SourceType};

/// Single characters that mark a Chinese season/episode expression.
const SEASON_EPISODE_CHARS: &[char] = &['共', '第', '季', '集', '话', '話', '期'];

/// Chinese tokens that always belong to the title.
const MOVIE_WORDS: &[&str] = &["剧场版", "劇場版", "电影版", "電影版"];

/// Title words after which a small number is part of the title.
const SERIAL_WORDS: &[&str] = &["PART", "VOL", "VOLUME", "CHAPTER", "NO"];

/// Appends a space to an English title ending in "Season" so the cleanup
/// pass does not strip the word as a bare season marker.
pub(crate) fn pad_trailing_season(en_title: &mut Option<String>) {
    if let Some(en) = en_title.as_mut().filter(|en| {
        en.len() >= 6
            && en.is_char_boundary(en.len() - 6)
            && en[en.len() - 6..].eq_ignore_ascii_case("SEASON")
    }) {
        en.push(' ');
    }
}

#[derive(Debug, Clone)]
pub struct TitleClassifier {
    patterns: Patterns,
}

impl TitleClassifier {
    pub fn new(patterns: Patterns) -> Self {
        Self { patterns }
    }

    /// Tokens that end the title without being claimed here.
    fn is_technical(&self, token: &str) -> bool {
        self.patterns.is_resolution(token)
            || SourceType::from_token(token).is_some()
            || token.parse::<Effect>().is_ok()
    }

    /// A numeral buffered before any title existed is placed now.
    fn flush_unknown(cx: &mut ParseContext<'_>) {
        let Some(unknown) = cx.state.unknown_name.take() else {
            return;
        };
        if cx.meta.cn_title.is_some() {
            return;
        }
        match cx.meta.en_title.as_mut() {
            None => cx.meta.en_title = Some(unknown),
            Some(en) => {
                if cx.meta.year.map(|y| y.to_string()).as_deref() != Some(unknown.as_str()) {
                    en.push(' ');
                    en.push_str(&unknown);
                }
            }
        }
        cx.state.last_kind = Some(TokenKind::EnglishTitle);
    }

    fn chinese(token: &str, cx: &mut ParseContext<'_>) {
        cx.state.last_kind = Some(TokenKind::ChineseTitle);
        if cx.meta.cn_title.is_none() {
            cx.meta.cn_title = Some(token.to_string());
            return;
        }
        if cx.state.stop_cn_continuation {
            return;
        }
        let movie_word = MOVIE_WORDS.iter().any(|w| token.contains(w));
        let noise = token.contains('版') || token.contains("字幕");
        if movie_word || (!noise && !token.contains(SEASON_EPISODE_CHARS)) {
            if let Some(cn) = cx.meta.cn_title.as_mut() {
                cn.push(' ');
                cn.push_str(token);
            }
        }
        cx.state.stop_cn_continuation = true;
    }

    /// Whether a small number after an English title belongs to it.
    fn in_serial_context(&self, cx: &ParseContext<'_>) -> bool {
        let next_is_year_or_season = cx.tokens.peek(1).is_some_and(|next| {
            let year = next.len() == 4
                && next
                    .parse::<u16>()
                    .is_ok_and(|y| cx.config.year_window.contains(&y));
            year || self.patterns.season.is_match(next) || self.patterns.season_episode.is_match(next)
        });
        let after_serial_word = cx
            .meta
            .en_title
            .as_deref()
            .and_then(|en| en.rsplit(' ').next())
            .is_some_and(|last| SERIAL_WORDS.iter().any(|w| last.eq_ignore_ascii_case(w)));
        next_is_year_or_season || after_serial_word
    }

    fn numeral(&self, token: &str, roman: bool, cx: &mut ParseContext<'_>) -> Claim {
        if cx.last_is(TokenKind::SeasonEpisodeWord) {
            return Claim::Pass;
        }
        if !cx.meta.has_title() {
            if cx.state.unknown_name.is_none() {
                cx.state.unknown_name = Some(token.to_string());
            }
            return Claim::Pass;
        }
        if !roman && token.starts_with('0') {
            return Claim::Pass;
        }
        if roman || token.len() < 4 {
            let fold = roman
                || match cx.state.last_kind {
                    Some(TokenKind::EnglishTitle) => {
                        token.len() == 1
                            || token.parse::<u32>().is_ok_and(|n| n > 100)
                            || self.in_serial_context(cx)
                    }
                    _ => false,
                };
            if !fold {
                return Claim::Pass;
            }
            let title = match cx.state.last_kind {
                Some(TokenKind::EnglishTitle) => cx.meta.en_title.as_mut(),
                Some(TokenKind::ChineseTitle) if roman => cx.meta.cn_title.as_mut(),
                _ => None,
            };
            let Some(title) = title else {
                return Claim::Pass;
            };
            title.push(' ');
            title.push_str(token);
            return Claim::Consumed;
        }
        if token.len() == 4 && cx.state.unknown_name.is_none() {
            cx.state.unknown_name = Some(token.to_string());
        }
        Claim::Pass
    }
}

impl TokenClassifier for TitleClassifier {
    fn name(&self) -> &'static str {
        "title"
    }

    fn classify(&self, token: &str, cx: &mut ParseContext<'_>) -> Claim {
        Self::flush_unknown(cx);

        if cx.state.stop_name {
            return Claim::Pass;
        }
        if token.eq_ignore_ascii_case("AKA") {
            cx.state.stop_name = true;
            return Claim::Consumed;
        }
        if !token.chars().any(char::is_alphanumeric) || cx.is_release_group(token) {
            return Claim::Pass;
        }
        if token.chars().count() == 1 && token.contains(SEASON_EPISODE_CHARS) {
            cx.state.last_kind = Some(TokenKind::SeasonEpisodeWord);
            return Claim::Pass;
        }
        if self.patterns.is_season_or_episode(token) {
            pad_trailing_season(&mut cx.meta.en_title);
            cx.state.stop_name = true;
            return Claim::Pass;
        }
        if self.is_technical(token) {
            cx.state.stop_name = true;
            return Claim::Pass;
        }
        if is_chinese(token) {
            Self::chinese(token, cx);
            return Claim::Pass;
        }

        let roman = roman_value(token).is_some();
        if is_digits(token) || roman {
            return self.numeral(token, roman, cx);
        }
        if cx.is_media_extension(token) {
            return Claim::Pass;
        }

        match cx.meta.en_title.as_mut() {
            Some(en) => {
                en.push(' ');
                en.push_str(token);
            }
            None => cx.meta.en_title = Some(token.to_string()),
        }
        cx.state.last_kind = Some(TokenKind::EnglishTitle);
        Claim::Pass
    }
}
