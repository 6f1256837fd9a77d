//! End-to-end parses of real-world release names.

use reelmeta_core::{
    AudioCodec, Effect, MediaType, MetaInfo, MetaParser, NumberSpan, ParserConfig, Resolution,
    SourceType, StreamingPlatform, VideoCodec,
};

fn parse(title: &str) -> MetaInfo {
    reelmeta_core::parse(title)
}

#[test]
fn title_ending_in_season_is_not_a_tv_show() {
    let meta = parse("The Long Season 2017 2160p WEB-DL H265 AAC-XXX");
    assert_eq!(meta.en_title.as_deref(), Some("The Long Season"));
    assert_eq!(meta.year, Some(2017));
    assert_eq!(meta.media_type, MediaType::Unknown);
    assert_eq!(meta.resolution, Some(Resolution::P2160));
    assert_eq!(meta.source, Some(SourceType::WebDl));
    assert_eq!(meta.video_codec, Some(VideoCodec::H265));
    assert_eq!(meta.audio_codec, Some(AudioCodec::Aac));
    assert!(meta.release_groups.iter().any(|g| g == "XXX"));
}

#[test]
fn season_marker_after_title_ending_in_season() {
    let meta = parse("Cherry Season S01 2014 2160p WEB-DL H265 AAC-XXX");
    assert_eq!(meta.en_title.as_deref(), Some("Cherry Season"));
    assert_eq!(meta.media_type, MediaType::Tv);
    assert_eq!(meta.season_label(), "S01");
    assert_eq!(meta.year, Some(2014));
    assert_eq!(meta.resolution, Some(Resolution::P2160));
    assert_eq!(meta.source, Some(SourceType::WebDl));
    assert_eq!(meta.video_codec, Some(VideoCodec::H265));
    assert_eq!(meta.audio_codec, Some(AudioCodec::Aac));
}

#[test]
fn numeric_title_followed_by_season() {
    let meta = parse("24 S01 1080p WEB-DL AAC2.0 H.264-BTN");
    assert_eq!(meta.en_title.as_deref(), Some("24"));
    assert_eq!(meta.media_type, MediaType::Tv);
    assert_eq!(meta.season_label(), "S01");
    assert_eq!(meta.resolution, Some(Resolution::P1080));
    assert_eq!(meta.source, Some(SourceType::WebDl));
    assert_eq!(meta.audio_codec, Some(AudioCodec::Aac));
    assert_eq!(meta.audio_channels.as_deref(), Some("2.0"));
    assert_eq!(meta.video_codec, Some(VideoCodec::H264));
    assert_eq!(meta.release_groups, vec!["BTN"]);
}

#[test]
fn chinese_title_keeps_fused_digits() {
    let meta = parse("新精武门1991 (1991).mkv");
    assert_eq!(meta.cn_title.as_deref(), Some("新精武门1991"));
    assert_eq!(meta.en_title, None);
    assert_eq!(meta.year, Some(1991));
    assert!(meta.is_file);
    assert_eq!(meta.processed, "新精武门1991 (1991)");
}

#[test]
fn empty_input_yields_defaults() {
    let meta = parse("");
    assert_eq!(meta, MetaInfo::new(""));
    assert_eq!(meta.media_type, MediaType::Unknown);
    assert_eq!(meta.title(), None);
    assert_eq!(meta.season_episode_label(), "");
}

#[test]
fn parsing_is_idempotent() {
    for title in [
        "The Long Season 2017 2160p WEB-DL H265 AAC-XXX",
        "24 S01 1080p WEB-DL AAC2.0 H.264-BTN",
        "新精武门1991 (1991).mkv",
        "[Group] Show - 05v2 [1080p].mkv",
        "",
    ] {
        let first = parse(title);
        let second = parse(&first.original);
        assert_eq!(first, second, "{title}");
    }
}

#[test]
fn year_inside_window_is_extracted() {
    for (title, year) in [
        ("Some Movie 1999 720p BluRay", 1999),
        ("Another.Film.2021.1080p.WEB-DL", 2021),
        ("Old Picture 1925", 1925),
    ] {
        assert_eq!(parse(title).year, Some(year), "{title}");
    }
    assert_eq!(parse("Future Movie 2077 1080p").year, None);
}

#[test]
fn season_episode_token_forces_tv() {
    for (title, season, episode) in [
        ("Name S03E07 720p", 3, 7),
        ("Other.Show.S10E120.1080p.WEB", 10, 120),
        ("Show S01E01-E02 1080p", 1, 1),
    ] {
        let meta = parse(title);
        assert_eq!(meta.media_type, MediaType::Tv, "{title}");
        assert_eq!(meta.season.begin, Some(season), "{title}");
        assert_eq!(meta.episode.begin, Some(episode), "{title}");
    }
}

#[test]
fn labels_round_trip() {
    let meta = parse("Show.S01-S03.1080p.BluRay");
    assert_eq!(meta.season_label(), "S01-S03");
    assert_eq!(meta.total_seasons(), 3);
    assert_eq!(meta.season_list(), vec![1, 2, 3]);

    let meta = parse("Show.S02E05.1080p.BluRay");
    assert_eq!(meta.season_label(), "S02");
    assert_eq!(meta.episode_label(), "E05");
}

#[test]
fn single_file_spans_collapse() {
    let meta = parse("Show.S01-S03.1080p.BluRay.mkv");
    assert_eq!(meta.season, NumberSpan::single(1));

    let meta = parse("Show.S01E01-E02.1080p.mkv");
    assert_eq!(meta.episode_label(), "E01-E02");
}

#[test]
fn two_token_season_range() {
    let meta = parse("Show S01 -S02 1080p WEB-DL");
    assert_eq!(meta.season_label(), "S01-S02");
}

#[test]
fn bilingual_uhd_remux() {
    let meta = parse("流浪地球 The Wandering Earth 2019 2160p UHD BluRay REMUX HDR HEVC Atmos-CHD");
    assert_eq!(meta.cn_title.as_deref(), Some("流浪地球"));
    assert_eq!(meta.en_title.as_deref(), Some("The Wandering Earth"));
    assert_eq!(meta.title(), Some("流浪地球"));
    assert_eq!(meta.year, Some(2019));
    assert_eq!(meta.source, Some(SourceType::UhdBluRayRemux));
    assert!(meta.effects.contains(&Effect::Hdr));
    assert_eq!(meta.video_codec, Some(VideoCodec::H265));
    assert_eq!(meta.audio_codec, Some(AudioCodec::Atmos));
    assert_eq!(meta.release_groups, vec!["CHD"]);
    assert_eq!(meta.edition(), "UHD BluRay REMUX HDR");
}

#[test]
fn chinese_season_and_episode_markers() {
    let meta = parse("三体 第一季 第05集 2160p WEB-DL");
    assert_eq!(meta.cn_title.as_deref(), Some("三体"));
    assert_eq!(meta.season_label(), "S01");
    assert_eq!(meta.episode_label(), "E05");
    assert_eq!(meta.media_type, MediaType::Tv);
}

#[test]
fn small_numbers_stay_in_titles() {
    let meta = parse("Kill Bill Vol 2 2004 1080p BluRay");
    assert_eq!(meta.en_title.as_deref(), Some("Kill Bill Vol 2"));
    assert_eq!(meta.year, Some(2004));
    assert!(!meta.episode.is_set());

    let meta = parse("Rocky IV 1985 1080p BluRay");
    assert_eq!(meta.en_title.as_deref(), Some("Rocky IV"));
}

#[test]
fn second_year_folds_the_first_into_the_title() {
    let meta = parse("Blade Runner 2049 2017 2160p BluRay");
    assert_eq!(meta.en_title.as_deref(), Some("Blade Runner 2049"));
    assert_eq!(meta.year, Some(2017));

    let meta = parse("Show 2019 2020 2021");
    assert_eq!(meta.en_title.as_deref(), Some("Show 2019 2020"));
    assert_eq!(meta.year, Some(2021));
}

#[test]
fn split_source_words_after_the_title() {
    for (title, source) in [
        ("Movie.2019.1080p.Blu.Ray.x264", SourceType::BluRay),
        ("Movie.2019.1080p.Web.DL.x264", SourceType::WebDl),
        ("Movie.2019.2160p.UHD.Blu.Ray.HEVC", SourceType::UhdBluRay),
        ("Movie.2019.1080p.BLU.RAY.x264", SourceType::BluRay),
        ("Movie.2019.1080p.WEB.DL.x264", SourceType::WebDl),
    ] {
        assert_eq!(parse(title).source, Some(source), "{title}");
    }
}

#[test]
fn plain_source_words_inside_a_title_stay_there() {
    let meta = parse("Charlotte's Web 2006 1080p BluRay x264");
    assert_eq!(meta.en_title.as_deref(), Some("Charlotte's Web"));
    assert_eq!(meta.source, Some(SourceType::BluRay));
}

#[test]
fn named_resolutions() {
    assert_eq!(parse("Movie 2020 FullHD").resolution, Some(Resolution::P1080));
    assert_eq!(parse("Movie 2020 FHD WEB-DL").resolution, Some(Resolution::P1080));
    assert_eq!(parse("Movie 2020 QHD").resolution, Some(Resolution::P1440));
}

#[test]
fn chinese_season_range_leaves_the_title_clean() {
    let meta = parse("三体第一至三季 2160p WEB-DL");
    assert_eq!(meta.cn_title.as_deref(), Some("三体"));
    assert_eq!(meta.season_label(), "S01-S03");
    assert_eq!(meta.media_type, MediaType::Tv);
}

#[test]
fn bare_episode_numbers() {
    let meta = parse("[Group] Show Name - 12 [1080p]");
    assert_eq!(meta.en_title.as_deref(), Some("Show Name"));
    assert_eq!(meta.episode_label(), "E12");
    assert_eq!(meta.media_type, MediaType::Tv);

    let meta = parse("Show 01 12 1080p");
    assert_eq!(meta.episode_label(), "E01-E12");
}

#[test]
fn part_markers_after_an_anchor() {
    let meta = parse("Movie 2019 1080p BluRay CD1");
    assert_eq!(meta.part.as_deref(), Some("CD1"));

    let meta = parse("Movie 2019 1080p Part 2");
    assert_eq!(meta.part.as_deref(), Some("Part2"));
}

#[test]
fn platform_next_to_web_source() {
    let meta = parse("Show S01E01 1080p AMZN WEB-DL DDP5.1 H.264");
    assert_eq!(meta.platform, Some(StreamingPlatform::Amazon));
    assert_eq!(meta.audio_codec, Some(AudioCodec::Eac3));
    assert_eq!(meta.audio_channels.as_deref(), Some("5.1"));
}

#[test]
fn atmos_wins_over_its_carrier() {
    let meta = parse("Movie 2019 2160p BluRay TrueHD 7.1 Atmos");
    assert_eq!(meta.audio_codec, Some(AudioCodec::Atmos));
    assert_eq!(meta.audio_channels.as_deref(), Some("7.1"));
}

#[test]
fn ten_bit_and_diy() {
    let meta = parse("Show S01E01 1080p WEB-DL 10bit HEVC");
    assert!(meta.ten_bit);
    assert_eq!(meta.video_codec, Some(VideoCodec::H265));

    let meta = parse("Movie 2019 1080p BluRay DIY-CHD");
    assert!(meta.effects.contains(&Effect::Diy));
}

#[test]
fn aka_ends_the_title() {
    let meta = parse("Movie AKA Other Title 2019 1080p");
    assert_eq!(meta.en_title.as_deref(), Some("Movie"));
    assert_eq!(meta.year, Some(2019));
}

#[test]
fn custom_year_window() {
    let parser =
        MetaParser::with_config(ParserConfig::new().with_year_window(1950..=2100)).unwrap();
    assert_eq!(parser.parse("Future Movie 2077 1080p").year, Some(2077));
}

#[test]
fn parse_result_is_serializable() {
    let meta = parse("Show.Name.S02E11.1080p.NF.WEB-DL.DDP5.1.H.264-NTb");
    let json = serde_json::to_string(&meta).unwrap();
    let back: MetaInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(meta, back);
}
