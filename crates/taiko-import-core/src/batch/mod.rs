//! Batch conversion of a folder of songs.
//!
//! - `SongSource` - one input unit (chart folder or archive)
//! - `discover_sources` - input enumeration
//! - `SongProcessor` - sequential conversion into the output tree
//! - `write_songs_json` - Shift-JIS record list for the front-end import

mod output;
mod processor;
mod source;

pub use output::*;
pub use processor::*;
pub use source::*;
