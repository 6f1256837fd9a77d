use regex::Regex;

use crate::error::Result;
use crate::parser::numerals::is_digits;
use crate::types::{Effect, MediaType, MetaInfo, NumberSpan};

/// Words and markers that leak into titles and carry no title information.
const TITLE_NOISE: &str = concat!(
    r"(?i)^PTS|^JADE|^AOD|^CHC|^[A-Z]{1,4}TV[\-0-9UVHDK]*",
    r"|HBO$|\s+HBO|\d{1,2}th|\d{1,2}bit|NETFLIX|AMAZON|IMAX|^3D|\s+3D|^BBC\s+|\s+BBC|BBC$|DISNEY\+?|XXX|\s+DC$",
    r"|[第\s共]+[0-9一二三四五六七八九十\-\s至到~]+季",
    r"|[第\s共]+[0-9一二三四五六七八九十百零\-\s至到~]+[集话話]",
    r"|连载|日剧|美剧|电视剧|动画片|动漫|欧美|西德|日韩|超高清|高清|无水印|下载|蓝光|翡翠台|梦幻天堂·龙网|★?\d*月?新番",
    r"|最终季|合集|[多中国英葡法俄日韩德意西印泰台港粤双文语简繁体特效内封官译外挂]+字幕|版本|出品|台版|港版|\w+字幕组|\w+字幕社",
    r"|未删减版|UNCUT$|UNRATE$|WITH EXTRAS$|RERIP$|SUBBED$|PROPER$|REPACK$|SEASON$|EPISODE$|Complete$|Extended$|Extended Version$",
    r"|S\d{2}\s*-\s*S\d{2}|S\d{2}|\s+S\d{1,2}|EP?\d{2,4}\s*-\s*EP?\d{2,4}|EP?\d{2,4}|\s+EP?\d{1,4}",
    r"|CD[\s.]*[1-9]|DVD[\s.]*[1-9]|DISK[\s.]*[1-9]|DISC[\s.]*[1-9]",
    r"|[248]K|\d{3,4}[PIX]+",
);

/// Lowest numeric title kept as a title when nothing else anchors the name.
const NUMERIC_TITLE_FLOOR: u32 = 1800;

/// Final cleanup once every token has been classified.
#[derive(Debug, Clone)]
pub struct PostProcessor {
    re_noise: Regex,
    re_diy: Regex,
}

impl PostProcessor {
    /// # Errors
    ///
    /// Returns `MetaError::Regex` if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_noise: Regex::new(TITLE_NOISE)?,
            re_diy: Regex::new(r"(?:^|[-@.\s\[])D[Ii]Y(?:$|[@.\s\]\-])")?,
        })
    }

    pub fn run(&self, meta: &mut MetaInfo) {
        if meta.source.is_some_and(|s| s.is_bluray()) && self.re_diy.is_match(&meta.original) {
            meta.effects.insert(Effect::Diy);
        }

        let cn = meta.cn_title.take();
        meta.cn_title = self.clean_title(cn, meta);
        let en = meta.en_title.take();
        meta.en_title = self.clean_title(en, meta).map(|en| title_case_if_lower(&en));

        if meta
            .part
            .as_deref()
            .is_some_and(|p| p.eq_ignore_ascii_case("PART"))
        {
            meta.part = None;
        }
    }

    fn clean_title(&self, title: Option<String>, meta: &mut MetaInfo) -> Option<String> {
        let title = title?;
        let stripped = self.re_noise.replace_all(&title, "");
        let cleaned = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
        if cleaned.is_empty() {
            return None;
        }

        let number = is_digits(&cleaned)
            .then(|| cleaned.parse::<u32>().ok())
            .flatten()
            .filter(|&n| n < NUMERIC_TITLE_FLOOR);
        if let Some(n) = number {
            let anchored = meta.year.is_some()
                || meta.season.is_set()
                || meta.resolution.is_some()
                || meta.source.is_some()
                || meta.audio_codec.is_some()
                || meta.video_codec.is_some();
            if !anchored {
                if !meta.episode.is_set() {
                    meta.episode = NumberSpan::single(n);
                    meta.media_type = MediaType::Tv;
                    return None;
                }
                if meta.is_in_episode(n) {
                    return None;
                }
            }
        }
        Some(cleaned)
    }
}

/// `the long season` → `The Long Season`; mixed-case titles are left alone.
fn title_case_if_lower(title: &str) -> String {
    let has_letters = title.chars().any(char::is_alphabetic);
    if !has_letters || title.chars().any(char::is_uppercase) {
        return title.to_string();
    }
    title
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SourceType;

    fn post() -> PostProcessor {
        PostProcessor::new().unwrap()
    }

    #[test]
    fn strips_noise_and_collapses_whitespace() {
        let mut meta = MetaInfo::new("x");
        meta.year = Some(2019);
        meta.en_title = Some("The Long Season ".into());
        meta.cn_title = Some("流浪地球  国语中字".into());
        post().run(&mut meta);
        assert_eq!(meta.en_title.as_deref(), Some("The Long Season"));
        assert_eq!(meta.cn_title.as_deref(), Some("流浪地球 国语中字"));
    }

    #[test]
    fn chinese_season_ranges_are_noise() {
        let mut meta = MetaInfo::new("x");
        meta.season = NumberSpan { begin: Some(1), end: Some(3) };
        meta.cn_title = Some("三体第一至三季".into());
        post().run(&mut meta);
        assert_eq!(meta.cn_title.as_deref(), Some("三体"));

        let mut meta = MetaInfo::new("x");
        meta.episode = NumberSpan { begin: Some(1), end: Some(12) };
        meta.cn_title = Some("三体 第1~12集".into());
        post().run(&mut meta);
        assert_eq!(meta.cn_title.as_deref(), Some("三体"));
    }

    #[test]
    fn trailing_season_word_is_noise() {
        let mut meta = MetaInfo::new("x");
        meta.season = NumberSpan::single(2);
        meta.en_title = Some("Show Season".into());
        post().run(&mut meta);
        assert_eq!(meta.en_title.as_deref(), Some("Show"));
    }

    #[test]
    fn unanchored_numeric_title_becomes_episode() {
        let mut meta = MetaInfo::new("x");
        meta.en_title = Some("12".into());
        post().run(&mut meta);
        assert_eq!(meta.en_title, None);
        assert_eq!(meta.episode, NumberSpan::single(12));
        assert_eq!(meta.media_type, MediaType::Tv);
    }

    #[test]
    fn anchored_numeric_title_is_kept() {
        let mut meta = MetaInfo::new("x");
        meta.en_title = Some("24".into());
        meta.season = NumberSpan::single(1);
        post().run(&mut meta);
        assert_eq!(meta.en_title.as_deref(), Some("24"));
    }

    #[test]
    fn diy_only_for_bluray_sources() {
        let mut meta = MetaInfo::new("Movie 2019 1080p BluRay DIY-Group");
        meta.source = Some(SourceType::BluRay);
        post().run(&mut meta);
        assert!(meta.effects.contains(&Effect::Diy));

        let mut meta = MetaInfo::new("Movie 2019 1080p WEB-DL DIY-Group");
        meta.source = Some(SourceType::WebDl);
        post().run(&mut meta);
        assert!(meta.effects.is_empty());
    }

    #[test]
    fn bare_part_is_cleared() {
        let mut meta = MetaInfo::new("x");
        meta.part = Some("Part".into());
        post().run(&mut meta);
        assert_eq!(meta.part, None);
    }

    #[test]
    fn lower_case_titles_are_title_cased() {
        assert_eq!(title_case_if_lower("the long season"), "The Long Season");
        assert_eq!(title_case_if_lower("iCarly"), "iCarly");
        assert_eq!(title_case_if_lower("24"), "24");
    }
}
