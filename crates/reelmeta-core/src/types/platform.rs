use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MetaError;

/// Streaming service a WEB release was captured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreamingPlatform {
    Netflix,
    Amazon,
    AppleTv,
    DisneyPlus,
    HboMax,
    Hulu,
    Peacock,
    ParamountPlus,
    Crunchyroll,
    Hidive,
    ITunes,
    YouTube,
    Bilibili,
    BGlobal,
    Iqiyi,
    Youku,
    WeTv,
    Mgtv,
    Baha,
    FriDay,
    Kktv,
    LineTv,
    Viu,
    Abema,
    UNext,
    Hami,
}

impl fmt::Display for StreamingPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Netflix => "Netflix",
            Self::Amazon => "Amazon",
            Self::AppleTv => "Apple TV+",
            Self::DisneyPlus => "Disney+",
            Self::HboMax => "HBO Max",
            Self::Hulu => "Hulu",
            Self::Peacock => "Peacock",
            Self::ParamountPlus => "Paramount+",
            Self::Crunchyroll => "Crunchyroll",
            Self::Hidive => "HIDIVE",
            Self::ITunes => "iTunes",
            Self::YouTube => "YouTube",
            Self::Bilibili => "Bilibili",
            Self::BGlobal => "B-Global",
            Self::Iqiyi => "iQIYI",
            Self::Youku => "Youku",
            Self::WeTv => "WeTV",
            Self::Mgtv => "MGTV",
            Self::Baha => "Baha",
            Self::FriDay => "friDay",
            Self::Kktv => "KKTV",
            Self::LineTv => "LINE TV",
            Self::Viu => "Viu",
            Self::Abema => "ABEMA",
            Self::UNext => "U-NEXT",
            Self::Hami => "Hami Video",
        };
        f.write_str(label)
    }
}

impl FromStr for StreamingPlatform {
    type Err = MetaError;

    /// Matches release-name codes and full names, case-insensitively.
    ///
    /// Multi-word names are accepted joined by a space or a hyphen, which is
    /// how the platform classifier recombines adjacent tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase().replace('-', " ");
        match key.as_str() {
            "NF" | "NETFLIX" => Ok(Self::Netflix),
            "AMZN" | "AMAZON" | "AMAZON PRIME" => Ok(Self::Amazon),
            "ATVP" | "ATV+" | "APPLETV" | "APPLETV+" | "APPLE TV" | "APPLE TV+" => {
                Ok(Self::AppleTv)
            }
            "DSNP" | "DSNY" | "DISNEY+" | "DISNEYPLUS" | "DISNEY PLUS" => Ok(Self::DisneyPlus),
            "HMAX" | "HBOMAX" | "HBO MAX" => Ok(Self::HboMax),
            "HULU" => Ok(Self::Hulu),
            "PCOK" | "PEACOCK" => Ok(Self::Peacock),
            "PMTP" | "PARAMOUNT+" | "PARAMOUNTPLUS" | "PARAMOUNT PLUS" => Ok(Self::ParamountPlus),
            "CR" | "CRUNCHYROLL" => Ok(Self::Crunchyroll),
            "HIDI" | "HIDIVE" => Ok(Self::Hidive),
            "IT" | "ITUNES" => Ok(Self::ITunes),
            "YT" | "YOUTUBE" => Ok(Self::YouTube),
            "BILI" | "BILIBILI" => Ok(Self::Bilibili),
            "B GLOBAL" | "BGLOBAL" => Ok(Self::BGlobal),
            "IQ" | "IQIYI" => Ok(Self::Iqiyi),
            "YK" | "YOUKU" => Ok(Self::Youku),
            "TX" | "TENCENT" | "WETV" => Ok(Self::WeTv),
            "MGTV" => Ok(Self::Mgtv),
            "BAHA" | "BAHAMUT" => Ok(Self::Baha),
            "FRIDAY" => Ok(Self::FriDay),
            "KKTV" => Ok(Self::Kktv),
            "LINETV" | "LINE TV" => Ok(Self::LineTv),
            "VIU" => Ok(Self::Viu),
            "ABEMA" | "ABEMATV" | "ABEMA TV" => Ok(Self::Abema),
            "UNEXT" | "U NEXT" => Ok(Self::UNext),
            "HAMI" | "HAMI VIDEO" => Ok(Self::Hami),
            _ => Err(MetaError::unknown("streaming platform", s)),
        }
    }
}
