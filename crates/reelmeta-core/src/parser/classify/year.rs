use super::title::pad_trailing_season;
use crate::parser::context::{Claim, ParseContext, TokenClassifier, TokenKind};

/// Four-digit release years inside the configured window.
///
/// When a second year shows up, the first one was part of the title
/// (`Blade Runner 2049 2017`). It is appended to the running title before
/// the new year takes its place, so no year found in the name is dropped.
#[derive(Debug, Clone, Default)]
pub struct YearClassifier;

impl TokenClassifier for YearClassifier {
    fn name(&self) -> &'static str {
        "year"
    }

    fn classify(&self, token: &str, cx: &mut ParseContext<'_>) -> Claim {
        if !cx.meta.has_title() || token.len() != 4 {
            return Claim::Pass;
        }
        let Ok(year) = token.parse::<u16>() else {
            return Claim::Pass;
        };
        if !cx.config.year_window.contains(&year) {
            return Claim::Pass;
        }

        if let Some(previous) = cx.meta.year {
            if let Some(en) = cx.meta.en_title.as_mut() {
                let trimmed_len = en.trim_end().len();
                en.truncate(trimmed_len);
                en.push(' ');
                en.push_str(&previous.to_string());
            } else if let Some(cn) = cx.meta.cn_title.as_mut() {
                cn.push(' ');
                cn.push_str(&previous.to_string());
            }
        } else {
            pad_trailing_season(&mut cx.meta.en_title);
        }

        cx.meta.year = Some(year);
        cx.settle(TokenKind::Year);
        Claim::Consumed
    }
}
