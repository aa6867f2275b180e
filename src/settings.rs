//! # Transpose Settings
//!
//! The viewer's transposition state as an explicit value: a signed semitone
//! offset and a flat-spelling preference. Saved songs and live session
//! documents store it as
//!
//! ```text
//! transpose: -2
//! useFlats: true
//! ```
//!
//! Both fields are optional on the wire; documents written before flat
//! support carry only `transpose`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::transpose::transpose;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransposeSettings {
    pub transpose: i64,
    #[serde(alias = "use-flats")]
    pub use_flats: bool,
}

impl TransposeSettings {
    pub fn new(transpose: i64, use_flats: bool) -> Self {
        Self {
            transpose,
            use_flats,
        }
    }

    pub fn transpose_up(&mut self) {
        self.transpose = self.transpose.saturating_add(1);
    }

    pub fn transpose_down(&mut self) {
        self.transpose = self.transpose.saturating_sub(1);
    }

    pub fn toggle_flats(&mut self) {
        self.use_flats = !self.use_flats;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when applying these settings cannot change any text
    pub fn is_identity(&self) -> bool {
        self.transpose.rem_euclid(12) == 0 && !self.use_flats
    }

    /// Offset as displayed next to the transpose buttons: `+2`, `-3`, `0`
    pub fn label(&self) -> String {
        if self.transpose > 0 {
            format!("+{}", self.transpose)
        } else {
            self.transpose.to_string()
        }
    }

    /// Unsaved-changes check against the last persisted settings
    pub fn differs_from(&self, saved: &TransposeSettings) -> bool {
        self != saved
    }

    /// Transpose a tab sheet with these settings.
    ///
    /// # Example
    /// ```
    /// use tabshift::TransposeSettings;
    ///
    /// let mut settings = TransposeSettings::default();
    /// settings.transpose_up();
    /// settings.toggle_flats();
    /// assert_eq!(settings.apply("[ch]C[/ch]"), "[ch]Db[/ch]");
    /// ```
    pub fn apply(&self, source: &str) -> String {
        if self.is_identity() {
            return source.to_string();
        }
        transpose(source, self.transpose, self.use_flats)
    }

    pub fn from_yaml(content: &str) -> Result<Self, TabError> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| TabError::Settings(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, TabError> {
        serde_yaml::to_string(self).map_err(|e| TabError::Settings(e.to_string()))
    }

    pub fn from_json(content: &str) -> Result<Self, TabError> {
        serde_json::from_str(content).map_err(|e| TabError::Settings(e.to_string()))
    }

    /// Read a YAML settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TabError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| TabError::io(path, e))?;
        let settings = Self::from_yaml(&content)?;
        log::debug!("loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }
}

/// Parse a semitone offset as typed by a user, accepting a leading `+`.
pub fn parse_offset(s: &str) -> Result<i64, TabError> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    // Reject "+-3" and similar
    if trimmed.starts_with('+') && digits.starts_with(['+', '-']) {
        return Err(TabError::InvalidOffset(s.to_string()));
    }
    digits
        .parse()
        .map_err(|_| TabError::InvalidOffset(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let settings = TransposeSettings::default();
        assert_eq!(settings.transpose, 0);
        assert!(!settings.use_flats);
        assert!(settings.is_identity());
        assert_eq!(settings.apply("[ch]Bb[/ch] text"), "[ch]Bb[/ch] text");
    }

    #[test]
    fn test_actions() {
        let mut settings = TransposeSettings::default();
        settings.transpose_up();
        settings.transpose_up();
        settings.transpose_down();
        settings.toggle_flats();
        assert_eq!(settings, TransposeSettings::new(1, true));

        settings.reset();
        assert_eq!(settings, TransposeSettings::default());
    }

    #[test]
    fn test_actions_saturate() {
        let mut settings = TransposeSettings::new(i64::MAX, false);
        settings.transpose_up();
        assert_eq!(settings.transpose, i64::MAX);

        let mut settings = TransposeSettings::new(i64::MIN, false);
        settings.transpose_down();
        assert_eq!(settings.transpose, i64::MIN);
    }

    #[test]
    fn test_identity_is_periodic() {
        assert!(TransposeSettings::new(12, false).is_identity());
        assert!(TransposeSettings::new(-24, false).is_identity());
        assert!(!TransposeSettings::new(1, false).is_identity());
        assert!(!TransposeSettings::new(0, true).is_identity());
    }

    #[test]
    fn test_label() {
        assert_eq!(TransposeSettings::new(2, false).label(), "+2");
        assert_eq!(TransposeSettings::new(-3, false).label(), "-3");
        assert_eq!(TransposeSettings::new(0, true).label(), "0");
    }

    #[test]
    fn test_differs_from_saved() {
        let saved = TransposeSettings::new(2, false);
        let mut current = saved;
        assert!(!current.differs_from(&saved));
        current.toggle_flats();
        assert!(current.differs_from(&saved));
    }

    #[test]
    fn test_apply_flats_at_zero_respells() {
        let settings = TransposeSettings::new(0, true);
        assert_eq!(settings.apply("[ch]A#[/ch]"), "[ch]Bb[/ch]");
    }

    #[test]
    fn test_from_yaml() {
        let settings = TransposeSettings::from_yaml("transpose: -2\nuseFlats: true\n").unwrap();
        assert_eq!(settings, TransposeSettings::new(-2, true));

        let settings = TransposeSettings::from_yaml("use-flats: true").unwrap();
        assert_eq!(settings, TransposeSettings::new(0, true));

        let settings = TransposeSettings::from_yaml("").unwrap();
        assert_eq!(settings, TransposeSettings::default());
    }

    #[test]
    fn test_from_yaml_rejects_bad_types() {
        let result = TransposeSettings::from_yaml("transpose: up");
        assert!(matches!(result, Err(TabError::Settings(_))));
    }

    #[test]
    fn test_yaml_round_trip() {
        let settings = TransposeSettings::new(5, true);
        let yaml = settings.to_yaml().unwrap();
        assert!(yaml.contains("useFlats: true"));
        assert_eq!(TransposeSettings::from_yaml(&yaml).unwrap(), settings);
    }

    #[test]
    fn test_from_json_song_document() {
        let settings = TransposeSettings::from_json(r#"{"transpose": 3}"#).unwrap();
        assert_eq!(settings, TransposeSettings::new(3, false));

        let settings =
            TransposeSettings::from_json(r#"{"transpose": -1, "useFlats": true}"#).unwrap();
        assert_eq!(settings, TransposeSettings::new(-1, true));

        assert!(TransposeSettings::from_json("{").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = TransposeSettings::load("/definitely/not/here.yaml");
        assert!(matches!(result, Err(TabError::Io { .. })));
    }

    #[test]
    fn test_parse_offset() {
        assert_eq!(parse_offset("+2").unwrap(), 2);
        assert_eq!(parse_offset("-3").unwrap(), -3);
        assert_eq!(parse_offset(" 0 ").unwrap(), 0);
        assert!(matches!(parse_offset("two"), Err(TabError::InvalidOffset(_))));
        assert!(parse_offset("+-3").is_err());
        assert!(parse_offset("").is_err());
    }
}
