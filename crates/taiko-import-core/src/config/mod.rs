//! Configuration and fixed conventions.
//!
//! - `ProcessorConfig` - batch settings (ids, category, output location)
//! - File naming conventions shared by the parsers and the batch stage
//! - Archive game-mode constants

mod processor;

pub use processor::*;

/// File names and extensions used by the importer and expected by the front-end.
pub mod files {
    /// Audio file name inside every song folder.
    pub const AUDIO_FILE: &str = "main.mp3";

    /// Chart file name inside every line-format song folder.
    pub const CHART_FILE: &str = "main.tja";

    /// Record list written next to the song folders.
    pub const SONGS_FILE: &str = "songs.json";

    /// Scratch directory used while extracting archives.
    pub const SCRATCH_DIR: &str = "temp";

    pub const AUDIO_EXTENSION: &str = ".mp3";
    pub const CHART_EXTENSION: &str = ".tja";
    pub const BEATMAP_EXTENSION: &str = ".osu";
    pub const ARCHIVE_EXTENSION: &str = ".osz";
}

/// Archive beatmap rulesets.
pub mod mode {
    /// `General.Mode` value of the taiko ruleset.
    pub const TAIKO: u8 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_conventions() {
        assert!(files::AUDIO_FILE.ends_with(files::AUDIO_EXTENSION));
        assert!(files::CHART_FILE.ends_with(files::CHART_EXTENSION));
        assert_eq!(mode::TAIKO, 1);
    }
}
