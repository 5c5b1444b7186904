use tracing::debug;

use crate::chart::{Course, CourseSet, DifficultyTier};
use crate::error::{Error, Result};
use crate::song::{
    LanguageStrings, SongContext, SongKind, SongRecord, SongRecordBuilder, volume_from_percent,
};
use crate::tja::{TjaDocument, content_hash, float_field, string_field};

/// Build a song record from a chart document.
///
/// The record's hash is derived from the document text, so reprocessing an
/// unchanged file yields the same highscore key.
pub fn parse(document: &TjaDocument, context: SongContext) -> Result<SongRecord> {
    if document.is_empty() {
        return Err(Error::EmptyChart);
    }

    parse_lines(document.lines(), context)?
        .content_hash(content_hash(document.text()))
        .build()
}

/// Collect every record field except the hash from chart lines.
pub fn parse_lines<S: AsRef<str>>(lines: &[S], context: SongContext) -> Result<SongRecordBuilder> {
    let title = string_field(lines, "title")
        .filter(|title| !title.trim().is_empty())
        .ok_or(Error::MissingField("title"))?
        .replace("feat", "ft");

    // The chart's own OFFSET field is not trusted; the record keeps 0.
    Ok(SongRecordBuilder::new(SongKind::Tja, context, title)
        .subtitle(string_field(lines, "subtitle"))
        .title_lang(language_strings(lines, "title"))
        .subtitle_lang(language_strings(lines, "subtitle"))
        .preview(float_field(lines, "demostart"))
        .volume(volume_from_percent(float_field(lines, "songvol")))
        .courses(courses(lines)))
}

fn language_strings<S: AsRef<str>>(lines: &[S], field: &str) -> LanguageStrings {
    LanguageStrings::from_lookup(|code| string_field(lines, &format!("{}{}", field, code)))
}

pub fn courses<S: AsRef<str>>(lines: &[S]) -> CourseSet {
    let mut courses = CourseSet::new();
    for tier in DifficultyTier::ALL {
        if let Some(course) = find_course(lines, tier) {
            courses.set(tier, course);
        }
    }
    courses
}

/// Course of `tier`, read from the first `LEVEL:` at or after its marker line.
///
/// Blocks have no end marker, so the search runs to the end of the file. A
/// tier whose block lacks its own `LEVEL:` picks up the next tier's value.
/// A level that is not a number leaves the tier absent.
pub fn find_course<S: AsRef<str>>(lines: &[S], tier: DifficultyTier) -> Option<Course> {
    let start = lines
        .iter()
        .position(|line| tier.is_course_marker(line.as_ref()))?;

    let level = string_field(&lines[start..], "level")?;
    let Some(level) = level.trim().parse::<f64>().ok().filter(|v| v.is_finite()) else {
        debug!("Ignoring course {}: level {:?} is not a number", tier, level);
        return None;
    };
    let stars = level.max(0.0) as u32;
    debug!("Found course {} with level {}", tier, stars);

    Some(Course::new(stars))
}
