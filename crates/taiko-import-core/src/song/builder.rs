use chrono::Local;
use uuid::Uuid;

use crate::chart::CourseSet;
use crate::error::{Error, Result};
use crate::song::{LanguageStrings, SongContext, SongKind, SongRecord};

/// Collects parsed fields and produces a finished `SongRecord`.
///
/// Identity (id, order, category), the enabled flag and the creation
/// timestamp are stamped here for both source formats. A record without a
/// content hash receives a random v4 UUID instead.
#[derive(Debug, Clone)]
pub struct SongRecordBuilder {
    kind: SongKind,
    context: SongContext,
    title: String,
    subtitle: Option<String>,
    title_lang: LanguageStrings,
    subtitle_lang: LanguageStrings,
    preview: f64,
    volume: f64,
    courses: CourseSet,
    hash: Option<String>,
}

impl SongRecordBuilder {
    pub fn new(kind: SongKind, context: SongContext, title: impl Into<String>) -> Self {
        Self {
            kind,
            context,
            title: title.into(),
            subtitle: None,
            title_lang: LanguageStrings::default(),
            subtitle_lang: LanguageStrings::default(),
            preview: 0.0,
            volume: 1.0,
            courses: CourseSet::default(),
            hash: None,
        }
    }

    pub fn subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = subtitle;
        self
    }

    pub fn title_lang(mut self, strings: LanguageStrings) -> Self {
        self.title_lang = strings;
        self
    }

    pub fn subtitle_lang(mut self, strings: LanguageStrings) -> Self {
        self.subtitle_lang = strings;
        self
    }

    /// Preview start in seconds
    pub fn preview(mut self, seconds: f64) -> Self {
        self.preview = seconds;
        self
    }

    /// Volume multiplier; non-positive or non-finite values fall back to 1.0.
    pub fn volume(mut self, multiplier: f64) -> Self {
        self.volume = if multiplier.is_finite() && multiplier > 0.0 {
            multiplier
        } else {
            1.0
        };
        self
    }

    pub fn courses(mut self, courses: CourseSet) -> Self {
        self.courses = courses;
        self
    }

    pub fn content_hash(mut self, hash: String) -> Self {
        self.hash = Some(hash);
        self
    }

    /// Finish the record. Fails with `Error::NoCourses` if no tier is populated.
    pub fn build(self) -> Result<SongRecord> {
        if self.courses.is_empty() {
            return Err(Error::NoCourses);
        }

        let hash = self
            .hash
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Ok(SongRecord {
            id: self.context.id,
            title_lang: self.title_lang,
            subtitle_lang: self.subtitle_lang,
            courses: self.courses,
            enabled: true,
            title: self.title,
            subtitle: self.subtitle,
            category_id: self.context.category_id,
            kind: self.kind,
            offset: 0.0,
            skin_id: 0,
            preview: self.preview,
            volume: self.volume,
            maker_id: 0,
            lyrics: false,
            hash,
            order: self.context.id,
            generated_on: Local::now(),
        })
    }
}

/// Convert a percentage volume (100 = unchanged) into a multiplier.
///
/// 0 means the field was absent or left at its authoring default.
pub fn volume_from_percent(percent: f64) -> f64 {
    if percent.is_finite() && percent > 0.0 {
        percent / 100.0
    } else {
        1.0
    }
}

/// `"<artist> - <source>"`, or just the artist, or nothing. Blank parts count as absent.
pub fn compose_subtitle(artist: Option<&str>, source: Option<&str>) -> Option<String> {
    let artist = artist.map(str::trim).filter(|s| !s.is_empty());
    let source = source.map(str::trim).filter(|s| !s.is_empty());

    match (artist, source) {
        (Some(artist), Some(source)) => Some(format!("{} - {}", artist, source)),
        (Some(artist), None) => Some(artist.to_string()),
        (None, _) => None,
    }
}
