//! `name:value` field lookups over chart lines.
//!
//! The first line starting with the field name (ASCII case ignored) wins.
//! Because matching is by prefix, `title` also matches a `TITLEEN:` line
//! that appears before `TITLE:`.

use crate::chart::starts_with_ignore_case;

/// Decorative prefixes some chart authors put in front of values.
const DECORATION_PREFIXES: [&str; 2] = ["--", "++"];

/// Value of the first line starting with `name`, after the first colon.
///
/// A leading `--` and then a leading `++` are stripped from the value. A
/// matching line without a colon yields an empty value.
pub fn string_field<S: AsRef<str>>(lines: &[S], name: &str) -> Option<String> {
    let line = lines
        .iter()
        .map(|line| line.as_ref())
        .find(|line| starts_with_ignore_case(line, name))?;

    let mut value = line.split_once(':').map(|(_, value)| value).unwrap_or("");
    for prefix in DECORATION_PREFIXES {
        value = value.strip_prefix(prefix).unwrap_or(value);
    }

    Some(value.to_string())
}

/// Numeric value of a field. Missing or unparsable fields resolve to 0.
pub fn float_field<S: AsRef<str>>(lines: &[S], name: &str) -> f64 {
    string_field(lines, name)
        .map(|value| parse_float(&value))
        .unwrap_or(0.0)
}

/// Culture-invariant float parse (`.` decimal separator). Failures resolve to 0.
pub fn parse_float(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_first_match_wins() {
        let lines = lines("TITLE:First\nTITLE:Second\n");
        assert_eq!(string_field(&lines, "title"), Some("First".to_string()));
    }

    #[test]
    fn test_case_insensitive_name() {
        let lines = lines("Title:Song\nsubtitle:--Artist\n");
        assert_eq!(string_field(&lines, "TITLE"), Some("Song".to_string()));
        assert_eq!(string_field(&lines, "subtitle"), Some("Artist".to_string()));
    }

    #[test]
    fn test_prefix_matching_includes_longer_names() {
        let lines = lines("TITLEEN:English\nTITLE:Original\n");
        assert_eq!(string_field(&lines, "title"), Some("English".to_string()));
        assert_eq!(string_field(&lines, "titleen"), Some("English".to_string()));
    }

    #[test]
    fn test_decoration_prefixes() {
        let lines = lines("A:--x\nB:++y\nC:--++z\nD:++--w\nE:-x\n");
        assert_eq!(string_field(&lines, "a").as_deref(), Some("x"));
        assert_eq!(string_field(&lines, "b").as_deref(), Some("y"));
        assert_eq!(string_field(&lines, "c").as_deref(), Some("z"));
        assert_eq!(string_field(&lines, "d").as_deref(), Some("--w"));
        assert_eq!(string_field(&lines, "e").as_deref(), Some("-x"));
    }

    #[test]
    fn test_splits_at_first_colon_only() {
        let lines = lines("TITLE:Re:Zero\n");
        assert_eq!(string_field(&lines, "title").as_deref(), Some("Re:Zero"));
    }

    #[test]
    fn test_missing_field() {
        let lines = lines("TITLE:Song\n");
        assert_eq!(string_field(&lines, "subtitle"), None);
        assert_eq!(float_field(&lines, "demostart"), 0.0);
    }

    #[test]
    fn test_no_inner_whitespace_tolerance() {
        let lines = lines(" TITLE:Song\n");
        assert_eq!(string_field(&lines, "title"), None);
    }

    #[test]
    fn test_float_field() {
        let lines = lines("DEMOSTART:12.5\nSONGVOL: 80 \nBPM:abc\n");
        assert_eq!(float_field(&lines, "demostart"), 12.5);
        assert_eq!(float_field(&lines, "songvol"), 80.0);
        assert_eq!(float_field(&lines, "bpm"), 0.0);
    }

    #[test]
    fn test_parse_float_rejects_locale_and_non_finite() {
        assert_eq!(parse_float("1,5"), 0.0);
        assert_eq!(parse_float("inf"), 0.0);
        assert_eq!(parse_float("NaN"), 0.0);
        assert_eq!(parse_float("+3"), 3.0);
    }
}
