use std::collections::HashMap;

/// Sections of a beatmap file, keyed by lowercase section and key names.
///
/// Lines that are not a section header or a `key: value` pair are skipped,
/// as are lines before the first section. When a key repeats within a section
/// the first value is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: HashMap<String, HashMap<String, String>>,
}

impl IniDocument {
    pub fn parse(content: &str) -> Self {
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with("//") {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                let name = name.trim().to_lowercase();
                sections.entry(name.clone()).or_default();
                current = Some(name);
                continue;
            }

            let Some(section) = current.as_ref() else {
                continue;
            };

            if let Some((key, value)) = line.split_once(':') {
                let key = key.trim().to_lowercase();
                if key.is_empty() {
                    continue;
                }
                sections
                    .entry(section.clone())
                    .or_default()
                    .entry(key)
                    .or_insert_with(|| value.trim().to_string());
            }
        }

        Self { sections }
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(&section.to_lowercase())
    }

    /// Value of `key` in `section`, both matched without regard to case
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(&section.to_lowercase())?
            .get(&key.to_lowercase())
            .map(String::as_str)
    }

    /// Non-blank value of `key` in `section`
    pub fn get_non_blank(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|value| !value.is_empty())
    }
}
