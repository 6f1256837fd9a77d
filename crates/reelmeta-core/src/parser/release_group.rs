use regex::Regex;

use crate::error::Result;

/// Known release groups, keyed by the tracker site that hosts them.
///
/// Each entry is a regex fragment; all fragments are joined into a single
/// case-insensitive alternation.
pub const RELEASE_GROUP_CATALOG: &[(&str, &[&str])] = &[
    ("0ff", &["FF(?:(?:A|WE)B|CD|E(?:DU|B)|TV)"]),
    ("audiences", &["Audies", "AD(?:Audio|E(?:|book)|Music|Web)"]),
    ("beitai", &["BeiTai"]),
    ("btschool", &["Bts(?:CHOOL|HD|PAD|TV)", "Zone"]),
    ("carpt", &["CarPT"]),
    ("chdbits", &["CHD(?:|Bits|PAD|(?:|HK)TV|WEB)", "StBOX", "OneHD", "Lee", "xiaopie"]),
    ("eastgame", &["(?:(?:iNT|(?:HALFC|Mini(?:S|H|FH)D))-|)TLF"]),
    ("gainbound", &["(?:DG|GBWE)B"]),
    ("hares", &["Hares(?:|(?:M|T)V|Web)"]),
    ("hdarea", &["HDA(?:pad|rea|TV)", "EPiC"]),
    ("hdchina", &["HDC(?:|hina|TV)", "k9611", "tudou", "iHD"]),
    ("hddolby", &["D(?:ream|BTV)", "(?:HD|QHstudI)o"]),
    ("hdfans", &["beAst(?:|TV)"]),
    ("hdhome", &["HDH(?:|ome|Pad|TV|WEB)"]),
    ("hdpt", &["HDPT(?:|Web)"]),
    ("hdsky", &["HDS(?:|ky|TV|Pad|WEB)", "AQLJ"]),
    ("hdzone", &["HDZ(?:|one)"]),
    ("hhanclub", &["HHWEB"]),
    ("htpt", &["HTPT"]),
    ("keepfrds", &["FRDS", "Yumi", "cXcY"]),
    ("lemonhd", &["L(?:eague(?:(?:C|H)D|(?:M|T)V|NF|WEB)|HD)", "i18n", "CiNT"]),
    ("mteam", &["MTeam(?:|TV)", "MPAD"]),
    ("ourbits", &["Our(?:Bits|TV)", "FLTTH", "Ao", "PbK", "MGs", "iLove(?:HD|TV)"]),
    ("piggo", &["PiGo(?:NF|(?:H|WE)B)"]),
    ("pterclub", &["PTer(?:|DIY|Game|(?:M|T)V|WEB)"]),
    ("pthome", &["PTH(?:|Audio|eBook|music|ome|tv|WEB)"]),
    ("ptsbao", &["PTsbao", "OPS", "F(?:Fans(?:AIeNcE|BD|D(?:VD|IY)|TV|WEB)|HDMv)", "SGXT"]),
    ("putao", &["PuTao"]),
    ("springsunday", &["CMCT(?:|V)"]),
    ("sharkpt", &["Shark(?:|WEB|DIY|TV|MV)"]),
    ("tjupt", &["TJUPT"]),
    ("totheglory", &["TTG", "WiKi", "NGB", "DoA", "(?:ARi|ExRE)N"]),
    ("ubits", &["UB(?:its|WEB|TV)"]),
    ("frog", &["FROG(?:E|Web|)"]),
    (
        "scene",
        &[
            "B(?:MDru|eyondHD|TN)",
            "C(?:fandora|trlhd|MRG)",
            "DON",
            "EVO",
            "FLUX",
            "HONE(?:|yG)",
            "N(?:oGroup|T(?:b|G))",
            "PandaMoon",
            "SMURF",
            "T(?:EPES|aengoo|rollHD)",
            "XXX",
        ],
    ),
    (
        "anime",
        &[
            "ANi",
            "HYSUB",
            "KTXP",
            "LoliHouse",
            "MCE",
            "Nekomoe kissaten",
            "SweetSub",
            "MingY",
            "(?:Lilith|NC)-Raws",
            "织梦字幕组",
            "枫叶字幕组",
            "猎户手抄部",
            "喵萌奶茶屋",
            "漫猫字幕社",
            "霜庭云花Sub",
            "北宇治字幕组",
            "氢气烤肉架",
            "云歌字幕组",
            "萌樱字幕组",
            "极影字幕社",
            "悠哈璃羽字幕社",
            "❀拨雪寻春❀",
            "沸羊羊(?:制作|字幕组)",
            "(?:桜|樱)都字幕组",
        ],
    ),
];

/// Finds release-group names delimited inside a processed title.
#[derive(Debug, Clone)]
pub struct ReleaseGroupMatcher {
    re_group: Regex,
}

impl ReleaseGroupMatcher {
    /// Compiles the catalog plus `extra` group names, which are matched literally.
    ///
    /// # Errors
    ///
    /// Returns `MetaError::Regex` if the combined pattern fails to compile.
    pub fn new(extra: &[String]) -> Result<Self> {
        let alternatives = RELEASE_GROUP_CATALOG
            .iter()
            .flat_map(|(_, patterns)| patterns.iter().map(|p| format!("(?:{p})")))
            .chain(
                extra
                    .iter()
                    .filter(|name| !name.trim().is_empty())
                    .map(|name| regex::escape(name.trim())),
            )
            .collect::<Vec<_>>()
            .join("|");
        let re_group = Regex::new(&format!(
            r"(?i)[-@\[￡【&](?P<name>{alternatives})[@.\s\]\[】&]"
        ))?;
        Ok(Self { re_group })
    }

    /// All group names in `text`, de-duplicated case-insensitively, in order of appearance.
    ///
    /// The closing delimiter of one match may open the next one, so
    /// `-CHD@HDSky.` yields both groups.
    pub fn find_all(&self, text: &str) -> Vec<String> {
        let padded = format!("{text} ");
        let mut found: Vec<String> = Vec::new();
        let mut pos = 0;
        while let Some(caps) = self.re_group.captures_at(&padded, pos) {
            let Some(name) = caps.name("name") else {
                break;
            };
            if !found.iter().any(|g| g.eq_ignore_ascii_case(name.as_str())) {
                found.push(name.as_str().to_string());
            }
            pos = name.end();
        }
        found
    }
}
