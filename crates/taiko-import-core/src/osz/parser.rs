use std::fs::{self, File};
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};

use encoding_rs::UTF_8;
use tracing::debug;
use zip::ZipArchive;

use crate::chart::{Course, CourseSet, DifficultyTier, classify};
use crate::config::{files, mode};
use crate::error::{Error, Result};
use crate::osz::IniDocument;
use crate::song::{SongContext, SongKind, SongRecord, SongRecordBuilder, compose_subtitle};

/// A parsed archive: the record plus the payloads to place in the song folder.
#[derive(Debug, Clone)]
pub struct ParsedArchive {
    pub record: SongRecord,
    pub audio: Vec<u8>,
    /// Raw beatmap bytes of every populated tier, in tier order
    pub beatmaps: Vec<(DifficultyTier, Vec<u8>)>,
}

impl ParsedArchive {
    /// Write `main.mp3` and one `<Tier>.osu` per course into `dir`.
    pub fn extract_to<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(self.beatmaps.len() + 1);
        for (tier, payload) in &self.beatmaps {
            let path = dir.join(tier.beatmap_file_name());
            fs::write(&path, payload)?;
            written.push(path);
        }

        let audio_path = dir.join(files::AUDIO_FILE);
        fs::write(&audio_path, &self.audio)?;
        written.push(audio_path);

        Ok(written)
    }
}

/// A beatmap entry that passed the game-mode filter
struct Beatmap {
    name: String,
    ini: IniDocument,
    payload: Vec<u8>,
}

/// Reads beatmap archives for a single game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OszParser {
    game_mode: u8,
}

impl Default for OszParser {
    fn default() -> Self {
        Self::new(mode::TAIKO)
    }
}

impl OszParser {
    pub fn new(game_mode: u8) -> Self {
        Self { game_mode }
    }

    pub fn game_mode(&self) -> u8 {
        self.game_mode
    }

    pub fn open<P: AsRef<Path>>(&self, path: P, context: SongContext) -> Result<ParsedArchive> {
        let file = File::open(path)?;
        self.parse(BufReader::new(file), context)
    }

    pub fn parse<R: Read + Seek>(&self, reader: R, context: SongContext) -> Result<ParsedArchive> {
        let mut archive = ZipArchive::new(reader)?;

        let mut audio_index = None;
        let mut beatmap_indices = Vec::new();
        for index in 0..archive.len() {
            let entry = archive.by_index(index)?;
            if entry.is_dir() {
                continue;
            }
            let name = file_name(entry.name()).to_lowercase();
            if audio_index.is_none() && name.ends_with(files::AUDIO_EXTENSION) {
                audio_index = Some(index);
            }
            if name.contains(files::BEATMAP_EXTENSION) {
                beatmap_indices.push(index);
            }
        }

        let audio_index = audio_index.ok_or(Error::NoAudio)?;
        if beatmap_indices.is_empty() {
            return Err(Error::NoBeatmaps);
        }

        let mut beatmaps = Vec::new();
        for index in beatmap_indices {
            let beatmap = read_beatmap(&mut archive, index)?;
            if self.matches_mode(&beatmap.ini) {
                beatmaps.push(beatmap);
            } else {
                debug!("Skipping {}: not a mode {} beatmap", beatmap.name, self.game_mode);
            }
        }

        let Some(first) = beatmaps.first() else {
            return Err(Error::NoModeBeatmaps(self.game_mode));
        };

        let builder = song_metadata(&first.ini, context)?;
        let (courses, payloads) = collect_courses(beatmaps);
        let record = builder.courses(courses).build()?;

        let mut audio = Vec::new();
        archive.by_index(audio_index)?.read_to_end(&mut audio)?;

        Ok(ParsedArchive {
            record,
            audio,
            beatmaps: payloads,
        })
    }

    fn matches_mode(&self, ini: &IniDocument) -> bool {
        ini.get("general", "mode")
            .and_then(|value| value.parse::<u8>().ok())
            == Some(self.game_mode)
    }
}

/// Last path segment of an archive entry name
fn file_name(entry_name: &str) -> &str {
    entry_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(entry_name)
}

fn read_beatmap<R: Read + Seek>(archive: &mut ZipArchive<R>, index: usize) -> Result<Beatmap> {
    let mut entry = archive.by_index(index)?;
    let name = file_name(entry.name()).to_string();

    let mut payload = Vec::new();
    entry.read_to_end(&mut payload)?;

    let (text, _, _) = UTF_8.decode(&payload);
    let ini = IniDocument::parse(&text);

    Ok(Beatmap { name, ini, payload })
}

/// Song-level fields from a beatmap's `[General]` and `[Metadata]` sections.
fn song_metadata(ini: &IniDocument, context: SongContext) -> Result<SongRecordBuilder> {
    if !ini.has_section("general") {
        return Err(Error::MissingSection("general"));
    }
    if !ini.has_section("metadata") {
        return Err(Error::MissingSection("metadata"));
    }

    let title = ini
        .get_non_blank("metadata", "title")
        .ok_or(Error::MissingField("title"))?;

    // PreviewTime is in milliseconds; -1 marks an unset preview.
    let preview = ini
        .get("general", "previewtime")
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|ms| ms.is_finite() && *ms > 0.0)
        .map(|ms| ms / 1000.0)
        .unwrap_or(0.0);

    let subtitle = compose_subtitle(
        ini.get("metadata", "artist"),
        ini.get("metadata", "source"),
    );

    Ok(SongRecordBuilder::new(SongKind::Osu, context, title)
        .subtitle(subtitle)
        .preview(preview))
}

/// Assign beatmaps to tiers. The first rated beatmap of a tier wins; a
/// beatmap without a usable rating leaves the slot open for later ones.
fn collect_courses(beatmaps: Vec<Beatmap>) -> (CourseSet, Vec<(DifficultyTier, Vec<u8>)>) {
    let mut courses = CourseSet::new();
    let mut payloads = Vec::new();

    for beatmap in beatmaps {
        let Some(tier) = classify(&beatmap.name) else {
            debug!("No difficulty tier for {}", beatmap.name);
            continue;
        };

        if courses.contains(tier) {
            debug!("Ignoring {}: {} already taken", beatmap.name, tier);
            continue;
        }

        let stars = beatmap
            .ini
            .get("difficulty", "overalldifficulty")
            .and_then(|value| value.parse::<u32>().ok());

        match stars {
            Some(stars) => {
                courses.set(tier, Course::new(stars));
                payloads.push((tier, beatmap.payload));
            }
            None => debug!("Ignoring {}: no integer OverallDifficulty", beatmap.name),
        }
    }

    payloads.sort_by_key(|(tier, _)| *tier);
    (courses, payloads)
}
