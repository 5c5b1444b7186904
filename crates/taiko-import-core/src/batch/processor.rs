use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};
use wana_kana::ConvertJapanese;

use crate::batch::{SongSource, write_songs_json};
use crate::config::{ProcessorConfig, files};
use crate::error::{Error, Result};
use crate::osz::OszParser;
use crate::song::{SongContext, SongRecord};
use crate::tja::{self, TjaDocument};

/// An input that produced no record
#[derive(Debug)]
pub struct SourceFailure {
    pub source: PathBuf,
    pub error: Error,
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Produced records in id order
    pub records: Vec<SongRecord>,
    pub failures: Vec<SourceFailure>,
    /// Location of the written `songs.json`
    pub songs_file: PathBuf,
}

impl BatchSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Converts sources one at a time into `<output_dir>/Category <id>/`.
///
/// Archives are unpacked through a single scratch directory, so a processor
/// must not run two batches into the same output directory concurrently.
#[derive(Debug, Clone)]
pub struct SongProcessor {
    config: ProcessorConfig,
    parser: OszParser,
}

impl SongProcessor {
    pub fn new(config: ProcessorConfig) -> Self {
        let parser = OszParser::new(config.game_mode);
        Self { config, parser }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn output_dir(&self) -> PathBuf {
        self.config.category_dir()
    }

    fn scratch_dir(&self) -> PathBuf {
        self.output_dir().join(files::SCRATCH_DIR)
    }

    fn song_dir(&self, id: u32) -> PathBuf {
        self.output_dir().join(id.to_string())
    }

    /// Create the output directory and remove song folders of earlier runs.
    pub fn prepare_output(&self) -> Result<()> {
        let output_dir = self.output_dir();
        fs::create_dir_all(&output_dir)?;

        let stale: Vec<PathBuf> = fs::read_dir(&output_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_dir())
            .collect();

        if !stale.is_empty() {
            info!("Cleaning up output directory..");
            for dir in stale {
                fs::remove_dir_all(dir)?;
            }
        }

        Ok(())
    }

    /// Convert every source and write `songs.json`.
    ///
    /// A failing source is recorded in the summary and skipped. Ids are
    /// consumed only by produced records. Only output-directory failures
    /// abort the batch.
    pub fn process(&self, sources: &[SongSource]) -> Result<BatchSummary> {
        self.prepare_output()?;
        info!("Processing {} songs!", sources.len());

        let mut summary = BatchSummary::default();
        let mut next_id = self.config.start_id;

        for source in sources {
            let context = SongContext::new(next_id, self.config.category_id);
            match self.process_source(source, context) {
                Ok(record) => {
                    info!("[{}] {} OK!", record.id, record.title);
                    summary.records.push(record);
                    next_id += 1;
                }
                Err(e) => {
                    if e.is_content_error() {
                        warn!("{}: {}", source.path().display(), e);
                    } else {
                        error!("{}: {}", source.path().display(), e);
                    }
                    summary.failures.push(SourceFailure {
                        source: source.path().to_path_buf(),
                        error: e,
                    });
                }
            }
        }

        summary.songs_file = self.output_dir().join(files::SONGS_FILE);
        write_songs_json(&summary.songs_file, &summary.records)?;

        let scratch = self.scratch_dir();
        if scratch.exists() {
            if let Err(e) = fs::remove_dir_all(&scratch) {
                warn!("Failed to remove {}: {}", scratch.display(), e);
            }
        }

        info!(
            "Done! {} songs written, {} failed",
            summary.records.len(),
            summary.failures.len()
        );
        Ok(summary)
    }

    /// Convert one source into its song folder.
    ///
    /// On failure the song folder is removed, so the id can be reused by the
    /// next source.
    pub fn process_source(&self, source: &SongSource, context: SongContext) -> Result<SongRecord> {
        let song_dir = self.song_dir(context.id);
        let result = self.convert_source(source, &song_dir, context);

        if result.is_err() && song_dir.exists() {
            if let Err(e) = fs::remove_dir_all(&song_dir) {
                warn!("Failed to remove {}: {}", song_dir.display(), e);
            }
        }
        result
    }

    fn convert_source(
        &self,
        source: &SongSource,
        song_dir: &Path,
        context: SongContext,
    ) -> Result<SongRecord> {
        let record = match source {
            SongSource::Chart { chart, audio } => self.process_chart(chart, audio, song_dir, context)?,
            SongSource::Archive(path) => self.process_archive(path, song_dir, context)?,
        };

        if self.config.generate_markers {
            create_marker(song_dir, &marker_name(&source.name()))?;
        }
        Ok(record)
    }

    fn process_chart(
        &self,
        chart: &Path,
        audio: &Path,
        song_dir: &Path,
        context: SongContext,
    ) -> Result<SongRecord> {
        let document = TjaDocument::load(chart)?;
        let record = tja::parse(&document, context)?;

        fs::create_dir_all(song_dir)?;
        fs::copy(audio, song_dir.join(files::AUDIO_FILE))?;
        fs::copy(chart, song_dir.join(files::CHART_FILE))?;

        Ok(record)
    }

    fn process_archive(
        &self,
        archive: &Path,
        song_dir: &Path,
        context: SongContext,
    ) -> Result<SongRecord> {
        let scratch = self.scratch_dir();
        reset_dir(&scratch)?;

        let parsed = self.parser.open(archive, context)?;
        parsed.extract_to(&scratch)?;
        move_dir_contents(&scratch, song_dir)?;

        Ok(parsed.record)
    }
}

/// Empty `dir`, creating it if needed.
fn reset_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

fn move_dir_contents(from: &Path, to: &Path) -> Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        fs::rename(entry.path(), to.join(entry.file_name()))?;
    }
    Ok(())
}

/// Romanized song name, so folders stay recognizable on hosts that mangle
/// Japanese file names.
fn marker_name(name: &str) -> String {
    name.to_romaji()
}

/// Empty file named after the song, to make folders recognizable.
fn create_marker(song_dir: &Path, name: &str) -> Result<()> {
    if name.is_empty() {
        return Ok(());
    }
    let path = song_dir.join(name);
    if !path.exists() {
        File::create(path)?;
    }
    Ok(())
}
