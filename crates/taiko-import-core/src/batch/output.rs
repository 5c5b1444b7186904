use std::fs;
use std::path::Path;

use encoding_rs::SHIFT_JIS;
use tracing::warn;

use crate::error::Result;
use crate::song::SongRecord;

/// Serialize records as one JSON array, encoded as Shift-JIS.
pub fn format_songs_json(records: &[SongRecord]) -> Result<Vec<u8>> {
    let json = serde_json::to_string(records)?;

    let (bytes, _, had_unmappable) = SHIFT_JIS.encode(&json);
    if had_unmappable {
        warn!("Some characters have no Shift-JIS form and were written as numeric references");
    }

    Ok(bytes.into_owned())
}

pub fn write_songs_json<P: AsRef<Path>>(path: P, records: &[SongRecord]) -> Result<()> {
    fs::write(path, format_songs_json(records)?)?;
    Ok(())
}
