use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::chart::CourseSet;

/// Source format a record was built from
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SongKind {
    /// Line-based chart file
    Tja,
    /// Zipped beatmap archive
    Osu,
}

impl std::fmt::Display for SongKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

/// Localized variants of a title or subtitle. `None` means no variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStrings {
    pub ja: Option<String>,
    pub en: Option<String>,
    pub cn: Option<String>,
    pub tw: Option<String>,
    pub ko: Option<String>,
}

impl LanguageStrings {
    /// Language codes in chart field-suffix order
    pub const CODES: [&'static str; 5] = ["en", "cn", "tw", "ja", "ko"];

    /// Build from a lookup of each language code.
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        Self {
            en: lookup("en"),
            cn: lookup("cn"),
            tw: lookup("tw"),
            ja: lookup("ja"),
            ko: lookup("ko"),
        }
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        match code {
            "ja" => self.ja.as_deref(),
            "en" => self.en.as_deref(),
            "cn" => self.cn.as_deref(),
            "tw" => self.tw.as_deref(),
            "ko" => self.ko.as_deref(),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        Self::CODES.iter().all(|code| self.get(code).is_none())
    }
}

/// Caller-assigned identity of a record within a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SongContext {
    pub id: u32,
    pub category_id: u32,
}

impl SongContext {
    pub fn new(id: u32, category_id: u32) -> Self {
        Self { id, category_id }
    }
}

/// One song entry of `songs.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongRecord {
    pub id: u32,
    pub title_lang: LanguageStrings,
    pub subtitle_lang: LanguageStrings,
    pub courses: CourseSet,
    pub enabled: bool,
    pub title: String,
    pub subtitle: Option<String>,
    pub category_id: u32,
    #[serde(rename = "type")]
    pub kind: SongKind,
    /// Playback start offset in seconds. Always 0.
    pub offset: f64,
    /// Not supported by the importer; always 0.
    pub skin_id: u32,
    /// Song-select preview start in seconds
    pub preview: f64,
    /// Playback volume multiplier (1.0 = unchanged)
    pub volume: f64,
    /// Not supported by the importer; always 0.
    pub maker_id: u32,
    pub lyrics: bool,
    /// Highscore key
    pub hash: String,
    /// Position in song select; equal to `id`.
    pub order: u32,
    #[serde(rename = "generatedOn")]
    pub generated_on: DateTime<Local>,
}
