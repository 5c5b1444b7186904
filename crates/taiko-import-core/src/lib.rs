pub mod batch;
pub mod chart;
pub mod config;
pub mod error;
pub mod osz;
pub mod song;
pub mod tja;

pub use batch::{BatchSummary, SongProcessor, SongSource, discover_sources};
pub use chart::{Course, CourseSet, DifficultyTier, classify};
pub use config::ProcessorConfig;
pub use error::{Error, Result};
pub use osz::{OszParser, ParsedArchive};
pub use song::{LanguageStrings, SongContext, SongKind, SongRecord};
pub use tja::{TjaDocument, content_hash};
