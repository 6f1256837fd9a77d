use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MetaError;

/// Upper-cases `s` and drops the separators release names use interchangeably.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '.' | ' ' | '_' | ':'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Video resolution bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resolution {
    P240,
    P360,
    P480,
    P540,
    P576,
    /// 720p: High Definition
    P720,
    /// 1080p/1080i: Full HD
    P1080,
    /// 1440p: QHD, also what release names call "2K"
    P1440,
    /// 2160p: Ultra HD / 4K
    P2160,
    /// 4320p: 8K
    P4320,
}

impl Resolution {
    /// Vertical pixel count of the bucket.
    #[must_use]
    pub fn height(self) -> u32 {
        match self {
            Self::P240 => 240,
            Self::P360 => 360,
            Self::P480 => 480,
            Self::P540 => 540,
            Self::P576 => 576,
            Self::P720 => 720,
            Self::P1080 => 1080,
            Self::P1440 => 1440,
            Self::P2160 => 2160,
            Self::P4320 => 4320,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}p", self.height())
    }
}

impl FromStr for Resolution {
    type Err = MetaError;

    /// Accepts `1080p`, `1080i`, `1080`, `1920x1080`, `FullHD`, `4K`, `UHD`, `2K`, `8K`…
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let height = match lower.as_str() {
            "fullhd" | "fhd" => "1080",
            "qhd" | "2k" => "1440",
            "uhd" | "4k" => "2160",
            "8k" => "4320",
            other => other
                .rsplit_once('x')
                .map_or(other, |(_, h)| h)
                .trim_end_matches(['p', 'i']),
        };
        match height {
            "240" => Ok(Self::P240),
            "360" => Ok(Self::P360),
            "480" => Ok(Self::P480),
            "540" => Ok(Self::P540),
            "576" => Ok(Self::P576),
            "720" => Ok(Self::P720),
            "1080" => Ok(Self::P1080),
            "1440" => Ok(Self::P1440),
            "2160" => Ok(Self::P2160),
            "4320" => Ok(Self::P4320),
            _ => Err(MetaError::unknown("resolution", s)),
        }
    }
}

/// Acquisition medium of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceType {
    BluRay,
    UhdBluRay,
    BluRayRemux,
    UhdBluRayRemux,
    Uhd,
    Remux,
    BdRip,
    WebDl,
    WebRip,
    Web,
    Hdtv,
    UhdTv,
    HdDvd,
    DvdRip,
    HdRip,
}

/// Source words that are also ordinary English and only count when shouted.
const AMBIGUOUS_SOURCE_WORDS: &[&str] = &["WEB", "BLU"];

impl SourceType {
    /// Resolves a single release-name token.
    ///
    /// Unlike [`FromStr`], plain words such as `Web` are only accepted in
    /// upper case so that titles like "Charlotte's Web" survive.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let source = token.parse().ok()?;
        let ambiguous = AMBIGUOUS_SOURCE_WORDS
            .iter()
            .any(|w| token.eq_ignore_ascii_case(w));
        if ambiguous && token != token.to_ascii_uppercase() {
            return None;
        }
        Some(source)
    }

    /// Any disc-sourced BluRay variant (rips excluded).
    #[must_use]
    pub fn is_bluray(self) -> bool {
        matches!(
            self,
            Self::BluRay | Self::UhdBluRay | Self::BluRayRemux | Self::UhdBluRayRemux
        )
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::BluRay => "BluRay",
            Self::UhdBluRay => "UHD BluRay",
            Self::BluRayRemux => "BluRay REMUX",
            Self::UhdBluRayRemux => "UHD BluRay REMUX",
            Self::Uhd => "UHD",
            Self::Remux => "REMUX",
            Self::BdRip => "BDRip",
            Self::WebDl => "WEB-DL",
            Self::WebRip => "WEBRip",
            Self::Web => "WEB",
            Self::Hdtv => "HDTV",
            Self::UhdTv => "UHDTV",
            Self::HdDvd => "HDDVD",
            Self::DvdRip => "DVDRip",
            Self::HdRip => "HDRip",
        };
        f.write_str(label)
    }
}

impl FromStr for SourceType {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "BLURAY" | "BLU" | "BD" => Ok(Self::BluRay),
            "UHDBLURAY" => Ok(Self::UhdBluRay),
            "BLURAYREMUX" | "BDREMUX" => Ok(Self::BluRayRemux),
            "UHDBLURAYREMUX" => Ok(Self::UhdBluRayRemux),
            "UHD" => Ok(Self::Uhd),
            "REMUX" => Ok(Self::Remux),
            "BDRIP" | "BRRIP" => Ok(Self::BdRip),
            "WEBDL" => Ok(Self::WebDl),
            "WEBRIP" => Ok(Self::WebRip),
            "WEB" => Ok(Self::Web),
            "HDTV" => Ok(Self::Hdtv),
            "UHDTV" => Ok(Self::UhdTv),
            "HDDVD" => Ok(Self::HdDvd),
            "DVDRIP" => Ok(Self::DvdRip),
            "HDRIP" => Ok(Self::HdRip),
            _ => Err(MetaError::unknown("source type", s)),
        }
    }
}

/// Visual/packaging enhancement flag; several may apply to one release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Effect {
    Sdr,
    Hdr,
    Hdr10,
    Hdr10Plus,
    DolbyVision,
    Hlg,
    Edr,
    ThreeD,
    Repack,
    Hq,
    /// Fan-authored BluRay disc.
    Diy,
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Sdr => "SDR",
            Self::Hdr => "HDR",
            Self::Hdr10 => "HDR10",
            Self::Hdr10Plus => "HDR10+",
            Self::DolbyVision => "DV",
            Self::Hlg => "HLG",
            Self::Edr => "EDR",
            Self::ThreeD => "3D",
            Self::Repack => "REPACK",
            Self::Hq => "HQ",
            Self::Diy => "DIY",
        };
        f.write_str(label)
    }
}

impl FromStr for Effect {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        match key.as_str() {
            "SDR" => Ok(Self::Sdr),
            "HDR" => Ok(Self::Hdr),
            "HDR10" => Ok(Self::Hdr10),
            "HDR10+" | "HDR10PLUS" => Ok(Self::Hdr10Plus),
            "DOLBY" | "DOVI" | "DV" | "DOLBYVISION" => Ok(Self::DolbyVision),
            "HLG" => Ok(Self::Hlg),
            "EDR" => Ok(Self::Edr),
            "3D" => Ok(Self::ThreeD),
            "REPACK" => Ok(Self::Repack),
            "HQ" => Ok(Self::Hq),
            "DIY" => Ok(Self::Diy),
            // HDR followed by any other generation number
            k if k.len() > 3
                && k.starts_with("HDR")
                && k[3..].chars().all(|c| c.is_ascii_digit()) =>
            {
                Ok(Self::Hdr)
            }
            _ => Err(MetaError::unknown("effect", s)),
        }
    }
}

/// Video codec. Bit depth is tracked separately on the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoCodec {
    H264,
    H265,
    H266,
    Av1,
    Vp9,
    Vc1,
    Mpeg2,
    Mpeg4,
    Xvid,
    DivX,
    AvsPlus,
    Avs2,
    Avs3,
}

impl fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::H264 => "H.264",
            Self::H265 => "H.265",
            Self::H266 => "H.266",
            Self::Av1 => "AV1",
            Self::Vp9 => "VP9",
            Self::Vc1 => "VC-1",
            Self::Mpeg2 => "MPEG-2",
            Self::Mpeg4 => "MPEG-4",
            Self::Xvid => "Xvid",
            Self::DivX => "DivX",
            Self::AvsPlus => "AVS+",
            Self::Avs2 => "AVS2",
            Self::Avs3 => "AVS3",
        };
        f.write_str(label)
    }
}

impl FromStr for VideoCodec {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "H264" | "X264" | "AVC" => Ok(Self::H264),
            "H265" | "X265" | "HEVC" => Ok(Self::H265),
            "H266" | "X266" | "VVC" => Ok(Self::H266),
            "AV1" => Ok(Self::Av1),
            "VP9" => Ok(Self::Vp9),
            "VC1" => Ok(Self::Vc1),
            "MPEG2" => Ok(Self::Mpeg2),
            "MPEG4" => Ok(Self::Mpeg4),
            "XVID" => Ok(Self::Xvid),
            "DIVX" => Ok(Self::DivX),
            "AVS+" | "AVSPLUS" => Ok(Self::AvsPlus),
            "AVS2" => Ok(Self::Avs2),
            "AVS3" => Ok(Self::Avs3),
            _ => Err(MetaError::unknown("video codec", s)),
        }
    }
}

/// Audio codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCodec {
    Aac,
    Ac3,
    Eac3,
    DolbyDigital,
    Dts,
    DtsHd,
    DtsHdMa,
    DtsHdHra,
    DtsX,
    TrueHd,
    Atmos,
    Flac,
    Lpcm,
    Opus,
    Vorbis,
    Mp3,
    Av3a,
}

const ATMOS: &str = "ATMOS";

impl AudioCodec {
    /// Resolves a codec string that may carry a trailing channel layout
    /// (`DDP5.1`, `AAC2.0`, `DTS-HD.MA.5.1`) and an Atmos marker anywhere in it.
    ///
    /// Atmos always wins over the codec it is combined with. Returns the codec
    /// and the channel layout, if one was present.
    #[must_use]
    pub fn lookup(raw: &str) -> Option<(Self, Option<String>)> {
        let upper = raw.trim().to_ascii_uppercase();
        if let Some(pos) = upper.find(ATMOS) {
            let rest = format!("{}{}", &upper[..pos], &upper[pos + ATMOS.len()..]);
            let rest = rest.trim_matches(['-', '.', ' ']);
            if rest.is_empty() {
                return Some((Self::Atmos, None));
            }
            if is_channel_layout(rest) {
                return Some((Self::Atmos, Some(rest.to_string())));
            }
            return Self::lookup_plain(rest).map(|(_, channels)| (Self::Atmos, channels));
        }
        Self::lookup_plain(&upper)
    }

    fn lookup_plain(s: &str) -> Option<(Self, Option<String>)> {
        if let Ok(codec) = s.parse::<Self>() {
            return Some((codec, None));
        }
        let (head, channels) = split_channels(s)?;
        head.parse::<Self>()
            .ok()
            .map(|codec| (codec, Some(channels.to_string())))
    }
}

fn is_channel_layout(s: &str) -> bool {
    match s.as_bytes() {
        [d] => d.is_ascii_digit(),
        [a, b'.', b] => a.is_ascii_digit() && b.is_ascii_digit(),
        _ => false,
    }
}

/// Splits a trailing `N` or `N.N` channel layout off a codec string.
fn split_channels(s: &str) -> Option<(&str, &str)> {
    let bytes = s.as_bytes();
    let n = bytes.len();
    let start = if n >= 3
        && bytes[n - 1].is_ascii_digit()
        && bytes[n - 2] == b'.'
        && bytes[n - 3].is_ascii_digit()
    {
        n - 3
    } else if n >= 1 && bytes[n - 1].is_ascii_digit() {
        n - 1
    } else {
        return None;
    };
    let head = &s[..start];
    let head = head.strip_suffix(['-', '.', ' ']).unwrap_or(head);
    if head.is_empty() {
        return None;
    }
    Some((head, &s[start..]))
}

impl fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Aac => "AAC",
            Self::Ac3 => "AC3",
            Self::Eac3 => "EAC3",
            Self::DolbyDigital => "DD",
            Self::Dts => "DTS",
            Self::DtsHd => "DTS-HD",
            Self::DtsHdMa => "DTS-HD MA",
            Self::DtsHdHra => "DTS-HD HRA",
            Self::DtsX => "DTS:X",
            Self::TrueHd => "TrueHD",
            Self::Atmos => "Atmos",
            Self::Flac => "FLAC",
            Self::Lpcm => "LPCM",
            Self::Opus => "Opus",
            Self::Vorbis => "Vorbis",
            Self::Mp3 => "MP3",
            Self::Av3a => "AV3A",
        };
        f.write_str(label)
    }
}

impl FromStr for AudioCodec {
    type Err = MetaError;

    /// Codec names only; use [`AudioCodec::lookup`] for strings with channels or Atmos.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "AAC" => Ok(Self::Aac),
            "AC3" => Ok(Self::Ac3),
            "EAC3" | "DDP" | "DD+" | "DDPLUS" => Ok(Self::Eac3),
            "DD" | "DOLBYDIGITAL" => Ok(Self::DolbyDigital),
            "DTS" => Ok(Self::Dts),
            "DTSHD" => Ok(Self::DtsHd),
            "DTSHDMA" | "DTSMA" => Ok(Self::DtsHdMa),
            "DTSHDHRA" | "DTSHDHR" | "DTSHR" => Ok(Self::DtsHdHra),
            "DTSX" => Ok(Self::DtsX),
            "TRUEHD" => Ok(Self::TrueHd),
            "ATMOS" => Ok(Self::Atmos),
            "FLAC" => Ok(Self::Flac),
            "LPCM" | "PCM" => Ok(Self::Lpcm),
            "OPUS" => Ok(Self::Opus),
            "VORBIS" => Ok(Self::Vorbis),
            "MP3" => Ok(Self::Mp3),
            "AV3A" => Ok(Self::Av3a),
            _ => Err(MetaError::unknown("audio codec", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_synonyms_share_a_bucket() {
        for input in ["1080p", "1080i", "1080P", "FullHD", "fhd", "1920x1080", "1080"] {
            assert_eq!(input.parse::<Resolution>().unwrap(), Resolution::P1080, "{input}");
        }
        assert_eq!("4K".parse::<Resolution>().unwrap(), Resolution::P2160);
        assert_eq!("UHD".parse::<Resolution>().unwrap(), Resolution::P2160);
        assert_eq!("2k".parse::<Resolution>().unwrap(), Resolution::P1440);
        assert_eq!("8K".parse::<Resolution>().unwrap(), Resolution::P4320);
        assert!("999p".parse::<Resolution>().is_err());
    }

    #[test]
    fn resolution_display() {
        assert_eq!(Resolution::P1080.to_string(), "1080p");
        assert_eq!(Resolution::P2160.to_string(), "2160p");
        assert!(Resolution::P2160 > Resolution::P720);
    }

    #[test]
    fn source_type_lookup() {
        assert_eq!("WEB-DL".parse::<SourceType>().unwrap(), SourceType::WebDl);
        assert_eq!("webdl".parse::<SourceType>().unwrap(), SourceType::WebDl);
        assert_eq!("Blu-ray".parse::<SourceType>().unwrap(), SourceType::BluRay);
        assert_eq!("BDRemux".parse::<SourceType>().unwrap(), SourceType::BluRayRemux);
        assert!("WEB-DL".parse::<SourceType>().is_ok_and(|s| !s.is_bluray()));
        assert!(SourceType::UhdBluRay.is_bluray());
        assert!(!SourceType::BdRip.is_bluray());
        assert!("MKV".parse::<SourceType>().is_err());
    }

    #[test]
    fn source_from_token_requires_shouted_plain_words() {
        assert_eq!(SourceType::from_token("WEB"), Some(SourceType::Web));
        assert_eq!(SourceType::from_token("Web"), None);
        assert_eq!(SourceType::from_token("BluRay"), Some(SourceType::BluRay));
        assert_eq!(SourceType::from_token("web-dl"), Some(SourceType::WebDl));
    }

    #[test]
    fn effect_lookup() {
        assert_eq!("HDR10+".parse::<Effect>().unwrap(), Effect::Hdr10Plus);
        assert_eq!("DoVi".parse::<Effect>().unwrap(), Effect::DolbyVision);
        assert_eq!("HDR12".parse::<Effect>().unwrap(), Effect::Hdr);
        assert_eq!("3d".parse::<Effect>().unwrap(), Effect::ThreeD);
        assert!("HDRip".parse::<Effect>().is_err());
    }

    #[test]
    fn video_codec_lookup() {
        for (input, expected) in [
            ("x264", VideoCodec::H264),
            ("H.264", VideoCodec::H264),
            ("AVC", VideoCodec::H264),
            ("HEVC", VideoCodec::H265),
            ("h265", VideoCodec::H265),
            ("VC-1", VideoCodec::Vc1),
            ("MPEG2", VideoCodec::Mpeg2),
            ("AVS+", VideoCodec::AvsPlus),
        ] {
            assert_eq!(input.parse::<VideoCodec>().unwrap(), expected, "failed for input: {input}");
        }
        assert_eq!(VideoCodec::H265.to_string(), "H.265");
    }

    #[test]
    fn audio_lookup_splits_channels() {
        assert_eq!(
            AudioCodec::lookup("DDP5.1"),
            Some((AudioCodec::Eac3, Some("5.1".into())))
        );
        assert_eq!(
            AudioCodec::lookup("AAC2.0"),
            Some((AudioCodec::Aac, Some("2.0".into())))
        );
        assert_eq!(
            AudioCodec::lookup("DTS-HD.MA.5.1"),
            Some((AudioCodec::DtsHdMa, Some("5.1".into())))
        );
        assert_eq!(AudioCodec::lookup("AC3"), Some((AudioCodec::Ac3, None)));
        assert_eq!(AudioCodec::lookup("AAC"), Some((AudioCodec::Aac, None)));
        assert_eq!(AudioCodec::lookup("H264"), None);
        assert_eq!(AudioCodec::lookup("5"), None);
    }

    #[test]
    fn atmos_always_wins() {
        assert_eq!(AudioCodec::lookup("TrueHD Atmos"), Some((AudioCodec::Atmos, None)));
        assert_eq!(
            AudioCodec::lookup("DDP5.1.Atmos"),
            Some((AudioCodec::Atmos, Some("5.1".into())))
        );
        assert_eq!(
            AudioCodec::lookup("TrueHD.Atmos.7.1"),
            Some((AudioCodec::Atmos, Some("7.1".into())))
        );
        assert_eq!(
            AudioCodec::lookup("Atmos7.1"),
            Some((AudioCodec::Atmos, Some("7.1".into())))
        );
        assert_eq!(AudioCodec::lookup("Atmos-Foo"), None);
    }

    #[test]
    fn quality_enum_serialization_roundtrip() {
        let res = Resolution::P1080;
        let json = serde_json::to_string(&res).unwrap();
        let back: Resolution = serde_json::from_str(&json).unwrap();
        assert_eq!(res, back);

        let ac = AudioCodec::DtsHdMa;
        let json = serde_json::to_string(&ac).unwrap();
        let back: AudioCodec = serde_json::from_str(&json).unwrap();
        assert_eq!(ac, back);
    }
}
