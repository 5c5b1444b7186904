//! Difficulty detection from beatmap file names.
//!
//! Mappers name their difficulties freely, so a bracketed hint such as
//! `Artist - Title (mapper) [Inner Oni].osu` is preferred. Rules are evaluated
//! in tier order and the first match wins. The Oni rule refuses an "oni" that
//! directly follows "inner " so that "Inner Oni" falls through to Ura.
//!
//! Names without any bracket, like `3 - inner oni.osu`, fall back to whole
//! words in the segment after the last `" - "`.

use std::sync::LazyLock;

use fancy_regex::Regex;
use tracing::{debug, warn};

use super::DifficultyTier;

pub const EASY_PATTERN: &str = r"^.*\[.*(ea(s|z)y|kantan|簡単).*\].*$";
pub const NORMAL_PATTERN: &str = r"^.*\[.*(normal|futsu{1,2}|普通).*\].*$";
pub const HARD_PATTERN: &str = r"^.*\[.*(hard|muzukashii|難しい).*\].*$";
pub const ONI_PATTERN: &str = r"^.*\[.*((?<!inner\s)oni|extreme|marathon).*\].*$";
pub const URA_PATTERN: &str = r"^.*\[.*((inner oni)|ura|insane).*\].*$";

struct Rule {
    tier: DifficultyTier,
    bracketed: Regex,
    bare: Regex,
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    [
        (DifficultyTier::Easy, EASY_PATTERN),
        (DifficultyTier::Normal, NORMAL_PATTERN),
        (DifficultyTier::Hard, HARD_PATTERN),
        (DifficultyTier::Oni, ONI_PATTERN),
        (DifficultyTier::Ura, URA_PATTERN),
    ]
    .into_iter()
    .filter_map(|(tier, pattern)| {
        let bracketed = compile(pattern)?;
        let bare = compile(&bare_pattern(pattern))?;
        Some(Rule {
            tier,
            bracketed,
            bare,
        })
    })
    .collect()
});

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(&format!("(?i){}", pattern)) {
        Ok(regex) => Some(regex),
        Err(e) => {
            warn!("Invalid difficulty pattern {:?}: {}", pattern, e);
            None
        }
    }
}

/// Replace the bracket requirement of a rule with word boundaries around its
/// term alternation.
fn bare_pattern(pattern: &str) -> String {
    let terms = pattern
        .replacen(r"^.*\[.*", "", 1)
        .replacen(r".*\].*$", "", 1);
    format!(r"\b(?:{})\b", terms)
}

/// Difficulty segment of a bracketless name: `3 - inner oni.osu` -> `inner oni`
fn bare_segment(name: &str) -> Option<&str> {
    if name.contains('[') || name.contains(']') {
        return None;
    }
    let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);
    stem.rsplit(" - ").next()
}

/// Classify a beatmap name into a difficulty tier.
///
/// Bracketed hints are checked for all five tiers. A name carrying brackets
/// that match no rule stays unclassified; only names without brackets are
/// searched for whole terms in their difficulty segment.
pub fn classify(name: &str) -> Option<DifficultyTier> {
    let lowered = name.to_lowercase();
    let tier = first_match(&lowered, |rule| &rule.bracketed).or_else(|| {
        let segment = bare_segment(&lowered)?;
        first_match(segment, |rule| &rule.bare)
    });
    debug!("Classified {:?} as {:?}", name, tier);
    tier
}

fn first_match(name: &str, regex: impl Fn(&Rule) -> &Regex) -> Option<DifficultyTier> {
    RULES
        .iter()
        .find(|rule| regex(*rule).is_match(name).unwrap_or(false))
        .map(|rule| rule.tier)
}
