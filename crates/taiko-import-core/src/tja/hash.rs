use base64::{Engine, engine::general_purpose::STANDARD};
use md5::{Digest, Md5};

/// Highscore key of a chart.
///
/// MD5 of the UTF-8 text, rendered as lowercase hex, then base64 of that hex
/// string with the `=` padding removed. The front-end keys stored scores by
/// this value, so the recipe must not change.
pub fn content_hash(text: &str) -> String {
    let digest = Md5::digest(text.as_bytes());
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();

    STANDARD
        .encode(hex.as_bytes())
        .trim_end_matches('=')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_of_empty_text() {
        // md5("") = d41d8cd98f00b204e9800998ecf8427e
        assert_eq!(content_hash(""), "ZDQxZDhjZDk4ZjAwYjIwNGU5ODAwOTk4ZWNmODQyN2U");
    }

    #[test]
    fn test_hash_known_value() {
        assert_eq!(
            content_hash("TITLE:Example\n"),
            "YzA0ZDA2M2ZjNzcyZmFjYjZhMzA0NGYzNzE2ODY5MDc"
        );
    }

    #[test]
    fn test_hash_is_deterministic() {
        let text = "TITLE:さくらんぼ\nLEVEL:8\n";
        assert_eq!(content_hash(text), content_hash(text));
        assert_ne!(content_hash(text), content_hash("TITLE:other\n"));
    }

    #[test]
    fn test_hash_has_no_padding() {
        assert!(!content_hash("anything").ends_with('='));
        assert_eq!(content_hash("anything").len(), 43);
    }
}
