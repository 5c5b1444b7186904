use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Empty chart file")]
    EmptyChart,

    #[error("Could not find {0}!")]
    MissingField(&'static str),

    #[error("Could not find section [{0}]")]
    MissingSection(&'static str),

    #[error("Archive contains no mp3 file!")]
    NoAudio,

    #[error("Archive contains no beatmaps!")]
    NoBeatmaps,

    #[error("Archive contains no beatmaps for game mode {0}")]
    NoModeBeatmaps(u8),

    #[error("Failed to find courses!")]
    NoCourses,

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the failure came from the input's content rather than from
    /// reading or writing files.
    pub fn is_content_error(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Archive(_) | Self::Json(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
