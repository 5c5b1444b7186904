use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum DifficultyTier {
    Easy = 0,
    Normal = 1,
    Hard = 2,
    Oni = 3,
    Ura = 4,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 5] = [
        Self::Easy,
        Self::Normal,
        Self::Hard,
        Self::Oni,
        Self::Ura,
    ];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Name as written in chart files and output file names ("Oni")
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// File name of the extracted beatmap payload for this tier ("Oni.osu")
    pub fn beatmap_file_name(&self) -> String {
        format!("{}{}", self.name(), crate::config::files::BEATMAP_EXTENSION)
    }

    /// Whether a chart line opens this tier's course block.
    ///
    /// Accepts `course:<name>` and `course:<ordinal>` prefixes, ignoring ASCII
    /// case. No whitespace is tolerated around the colon.
    pub fn is_course_marker(&self, line: &str) -> bool {
        let by_name = format!("course:{}", self.name());
        let by_ordinal = format!("course:{}", self.ordinal());
        starts_with_ignore_case(line, &by_name) || starts_with_ignore_case(line, &by_ordinal)
    }
}

impl std::fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub(crate) fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.is_char_boundary(prefix.len())
        && text[..prefix.len()].eq_ignore_ascii_case(prefix)
}
