//! Card configuration.
//!
//! Everything the card shows that is not layout: texts, recipients, splash
//! timing, heart count and the burst. Cards are read from JSON; every field
//! is optional and falls back to the built-in card.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::burst::BurstConfig;
use crate::error::{CardError, CardResult};
use crate::particles::{HEART_COUNT, MAX_HEART_COUNT};
use crate::shell::SPLASH_DELAY;

/// Image shown when a recipient does not name one.
pub const DEFAULT_IMAGE: &str = "/2.jpg";

/// File name looked up under the user's config directory.
const CARD_FILE: &str = "card.json";

fn default_image() -> String {
    DEFAULT_IMAGE.to_string()
}

/// Who an envelope is addressed to, and the photo inside it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    /// Opaque image reference handed to the renderer as-is
    #[serde(default = "default_image")]
    pub image: String,
}

impl Recipient {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }

    /// Alt text for the revealed photo.
    pub fn alt_text(&self) -> String {
        format!("For {}", self.name)
    }
}

/// A complete greeting card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub title: String,
    pub splash_caption: String,
    pub hint: String,
    pub footer: String,
    pub window_title: String,
    pub recipients: Vec<Recipient>,
    pub splash_delay_ms: u64,
    pub heart_count: usize,
    pub burst: BurstConfig,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            title: "How it Started ?".to_string(),
            splash_caption: "Crafting Magic".to_string(),
            hint: "Tap an envelope to reveal".to_string(),
            footer: "With Love From Babbu & Chotu".to_string(),
            window_title: "A Special Letter | For Bhavesh & Gunjan".to_string(),
            recipients: vec![
                Recipient::new("Bbhavesh", "/2.jpg"),
                Recipient::new("Gunjan", "/3.jpg"),
            ],
            splash_delay_ms: SPLASH_DELAY.as_millis() as u64,
            heart_count: HEART_COUNT,
            burst: BurstConfig::default(),
        }
    }
}

impl CardConfig {
    /// Parse and validate a card from JSON text.
    pub fn from_json(json: &str) -> CardResult<Self> {
        let card: CardConfig = serde_json::from_str(json)?;
        card.validate()?;
        Ok(card)
    }

    /// Read, parse and validate a card file.
    pub fn load(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let card = Self::from_json(&json)?;
        tracing::info!(
            "Loaded card from {:?} ({} recipients)",
            path,
            card.recipients.len()
        );
        Ok(card)
    }

    /// Load `path` if given, else the user's card file if present, else the
    /// built-in card.
    pub fn load_or_default(path: Option<&Path>) -> CardResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(path),
            _ => {
                tracing::debug!("No card file found, using the built-in card");
                Ok(Self::default())
            }
        }
    }

    /// `<config_dir>/lovenote/card.json`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lovenote").join(CARD_FILE))
    }

    /// Reject cards that cannot be shown.
    pub fn validate(&self) -> CardResult<()> {
        if self.recipients.is_empty() {
            return Err(CardError::Invalid("a card needs at least one recipient".into()));
        }
        if let Some(index) = self.recipients.iter().position(|r| r.name.trim().is_empty()) {
            return Err(CardError::Invalid(format!("recipient {} has an empty name", index)));
        }
        if self.heart_count > MAX_HEART_COUNT {
            return Err(CardError::Invalid(format!(
                "heart_count {} exceeds {}",
                self.heart_count, MAX_HEART_COUNT
            )));
        }
        self.burst.validate()
    }

    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_card_is_valid() {
        let card = CardConfig::default();
        assert!(card.validate().is_ok());
        assert_eq!(card.recipients.len(), 2);
        assert_eq!(card.recipients[0], Recipient::new("Bbhavesh", "/2.jpg"));
        assert_eq!(card.recipients[1], Recipient::new("Gunjan", "/3.jpg"));
        assert_eq!(card.splash_delay(), Duration::from_millis(2000));
        assert_eq!(card.heart_count, 20);
    }

    #[test]
    fn empty_json_is_the_default_card() {
        let card = CardConfig::from_json("{}").unwrap();
        assert_eq!(card, CardConfig::default());
    }

    #[test]
    fn partial_json_fills_from_defaults() {
        let card = CardConfig::from_json(
            r#"{"title": "Hello", "recipients": [{"name": "Ada"}], "burst": {"particle_count": 30}}"#,
        )
        .unwrap();
        assert_eq!(card.title, "Hello");
        assert_eq!(card.footer, CardConfig::default().footer);
        assert_eq!(card.recipients, vec![Recipient::new("Ada", DEFAULT_IMAGE)]);
        assert_eq!(card.burst.particle_count, 30);
        assert_eq!(card.burst.colors, BurstConfig::default().colors);
    }

    #[test]
    fn rejects_cards_without_recipients() {
        let err = CardConfig::from_json(r#"{"recipients": []}"#).unwrap_err();
        assert!(matches!(err, CardError::Invalid(_)));
    }

    #[test]
    fn rejects_oversized_counts() {
        let err = CardConfig::from_json(r#"{"heart_count": 4000000000000000000}"#).unwrap_err();
        assert!(matches!(err, CardError::Invalid(_)));

        let err = CardConfig::from_json(r#"{"burst": {"particle_count": 4000000000000000000}}"#)
            .unwrap_err();
        assert!(matches!(err, CardError::Invalid(_)));

        let card = CardConfig::from_json(r#"{"heart_count": 200, "burst": {"particle_count": 1000}}"#)
            .unwrap();
        assert_eq!(card.heart_count, MAX_HEART_COUNT);
    }

    #[test]
    fn rejects_blank_recipient_names() {
        let err = CardConfig::from_json(r#"{"recipients": [{"name": "  "}]}"#).unwrap_err();
        assert!(matches!(err, CardError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = CardConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CardError::Parse(_)));
    }

    #[test]
    fn loads_card_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("card.json");
        std::fs::write(&path, r#"{"footer": "With Love", "heart_count": 12}"#).unwrap();

        let card = CardConfig::load_or_default(Some(path.as_path())).unwrap();
        assert_eq!(card.footer, "With Love");
        assert_eq!(card.heart_count, 12);
        assert_eq!(card.recipients, CardConfig::default().recipients);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = CardConfig::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CardError::Io(_)));
    }

    #[test]
    fn alt_text_names_recipient() {
        assert_eq!(Recipient::new("Gunjan", "/3.jpg").alt_text(), "For Gunjan");
    }
}
