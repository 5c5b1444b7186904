//! Difficulty tiers and course data.
//!
//! - `DifficultyTier` - the five fixed tiers (Easy, Normal, Hard, Oni, Ura)
//! - `classify` - tier detection from beatmap file names
//! - `Course`, `CourseSet` - per-tier ratings of a song

mod classifier;
mod course;
mod difficulty;

pub use classifier::*;
pub use course::*;
pub use difficulty::*;
