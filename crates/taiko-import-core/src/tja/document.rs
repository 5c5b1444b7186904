use std::fs;
use std::path::Path;

use encoding_rs::SHIFT_JIS;
use tracing::warn;

use crate::error::Result;

/// A chart file decoded into text and lines.
///
/// Charts are Shift-JIS unless they carry a byte order mark, in which case the
/// BOM's encoding is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TjaDocument {
    text: String,
    lines: Vec<String>,
}

impl TjaDocument {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path.as_ref())?;
        let (document, had_errors) = Self::decode(&bytes);
        if had_errors {
            warn!(
                "Chart {} contains bytes that are not valid Shift-JIS",
                path.as_ref().display()
            );
        }
        Ok(document)
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::decode(bytes).0
    }

    fn decode(bytes: &[u8]) -> (Self, bool) {
        let (text, _, had_errors) = SHIFT_JIS.decode(bytes);
        (Self::from_text(text.into_owned()), had_errors)
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = text.lines().map(str::to_string).collect();
        Self { text, lines }
    }

    /// Full decoded text, without a byte order mark
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
