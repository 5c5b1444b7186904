use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::files;
use crate::error::Result;

/// One input unit of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SongSource {
    /// A song folder holding a chart and its audio
    Chart { chart: PathBuf, audio: PathBuf },
    /// A beatmap archive
    Archive(PathBuf),
}

impl SongSource {
    /// Path identifying this source in reports
    pub fn path(&self) -> &Path {
        match self {
            Self::Chart { chart, .. } => chart,
            Self::Archive(path) => path,
        }
    }

    /// Display name: the chart or archive file stem
    pub fn name(&self) -> String {
        self.path()
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Song folder source, if `dir` holds both a chart and audio.
    pub fn from_song_dir<P: AsRef<Path>>(dir: P) -> Result<Option<Self>> {
        let dir = dir.as_ref();
        let chart = preferred_file(dir, files::CHART_FILE, files::CHART_EXTENSION)?;
        let audio = preferred_file(dir, files::AUDIO_FILE, files::AUDIO_EXTENSION)?;

        Ok(match (chart, audio) {
            (Some(chart), Some(audio)) => Some(Self::Chart { chart, audio }),
            _ => None,
        })
    }
}

/// Song folders and archives directly inside `dir`, sorted by path.
pub fn discover_sources<P: AsRef<Path>>(dir: P) -> Result<Vec<SongSource>> {
    let mut sources = Vec::new();

    for path in sorted_entries(dir.as_ref())? {
        if path.is_dir() {
            match SongSource::from_song_dir(&path)? {
                Some(source) => sources.push(source),
                None => debug!("Skipping {}: no chart and audio pair", path.display()),
            }
        } else if has_extension(&path, files::ARCHIVE_EXTENSION) {
            sources.push(SongSource::Archive(path));
        }
    }

    Ok(sources)
}

/// `dir/<conventional>` if present, else the first file with `extension`.
fn preferred_file(dir: &Path, conventional: &str, extension: &str) -> io::Result<Option<PathBuf>> {
    let candidate = dir.join(conventional);
    if candidate.is_file() {
        return Ok(Some(candidate));
    }

    Ok(sorted_entries(dir)?
        .into_iter()
        .find(|path| path.is_file() && has_extension(path, extension)))
}

fn sorted_entries(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort();
    Ok(entries)
}

/// Case-insensitive extension check; `extension` includes the dot.
fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(extension))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_prefers_conventional_names() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.tja"), "").unwrap();
        fs::write(dir.path().join("main.tja"), "").unwrap();
        fs::write(dir.path().join("song.mp3"), "").unwrap();

        let source = SongSource::from_song_dir(dir.path()).unwrap().unwrap();
        assert_eq!(
            source,
            SongSource::Chart {
                chart: dir.path().join("main.tja"),
                audio: dir.path().join("song.mp3"),
            }
        );
    }

    #[test]
    fn test_requires_chart_and_audio() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("song.tja"), "").unwrap();
        assert!(SongSource::from_song_dir(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert!(has_extension(Path::new("Song.OSZ"), ".osz"));
        assert!(has_extension(Path::new("x/Song.Tja"), ".tja"));
        assert!(!has_extension(Path::new("Song.osz.part"), ".osz"));
    }

    #[test]
    fn test_source_name() {
        let source = SongSource::Archive(PathBuf::from("in/123 Artist - Title.osz"));
        assert_eq!(source.name(), "123 Artist - Title");
    }
}
