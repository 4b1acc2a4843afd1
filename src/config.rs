use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Unknown selection strategy: '{0}' (expected ordinal or date-hash)")]
    InvalidStrategy(String),
}

/// The 66 canonical book names, lowercase, single-spaced.
pub const CANONICAL_BOOKS: [&str; 66] = [
    "genesis", "exodus", "leviticus", "numbers", "deuteronomy",
    "joshua", "judges", "ruth", "1 samuel", "2 samuel",
    "1 kings", "2 kings", "1 chronicles", "2 chronicles",
    "ezra", "nehemiah", "esther", "job", "psalms", "proverbs",
    "ecclesiastes", "song of solomon", "isaiah", "jeremiah",
    "lamentations", "ezekiel", "daniel", "hosea", "joel",
    "amos", "obadiah", "jonah", "micah", "nahum", "habakkuk",
    "zephaniah", "haggai", "zechariah", "malachi",
    "matthew", "mark", "luke", "john", "acts",
    "romans", "1 corinthians", "2 corinthians",
    "galatians", "ephesians", "philippians",
    "colossians", "1 thessalonians", "2 thessalonians",
    "1 timothy", "2 timothy", "titus", "philemon",
    "hebrews", "james",
    "1 peter", "2 peter",
    "1 john", "2 john", "3 john",
    "jude", "revelation",
];

pub const BIBLE_TAG: &str = "bible";
pub const COMMUNITY_TAG: &str = "community";

// Immutable reference data for the content policy.
// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub min_text_chars: usize,
    pub max_text_chars: usize,
    pub max_author_chars: usize,
    /// Minimum number of letters before the all-caps heuristic applies.
    pub shout_min_letters: usize,
    /// Token count that must be exceeded before the repetition heuristic applies.
    pub repetition_token_threshold: usize,
    pub repetition_max_distinct: usize,
    pub banned_phrases: BTreeSet<String>,
    pub allowed_tags: BTreeSet<String>,
    pub scripture_books: BTreeSet<String>,
}

impl PolicyConfig {
    pub fn v0() -> Self {
        Self {
            min_text_chars: 4,
            max_text_chars: 500,
            max_author_chars: 120,
            shout_min_letters: 6,
            repetition_token_threshold: 6,
            repetition_max_distinct: 3,
            banned_phrases: ["kill yourself", "suicide"].into_iter().map(String::from).collect(),
            allowed_tags: [BIBLE_TAG, COMMUNITY_TAG].into_iter().map(String::from).collect(),
            scripture_books: CANONICAL_BOOKS.into_iter().map(String::from).collect(),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let f = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(f)?)
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::v0()
    }
}

/// Which date-to-index mapping the selector uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    #[default]
    Ordinal,
    DateHash,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Ordinal => f.write_str("ordinal"),
            StrategyKind::DateHash => f.write_str("date-hash"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ordinal" => Ok(StrategyKind::Ordinal),
            "date-hash" | "hash" => Ok(StrategyKind::DateHash),
            _ => Err(ConfigError::InvalidStrategy(s.to_string())),
        }
    }
}

/// Host-facing settings: where collections live and how distribution behaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub approved_path: PathBuf,
    pub rejected_path: PathBuf,
    pub strategy: StrategyKind,
    pub default_tz: String,
    pub max_feed_days: u32,
    pub policy: PolicyConfig,
}

impl ServiceConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let f = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(f)?)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            approved_path: PathBuf::from("quotes_approved.json"),
            rejected_path: PathBuf::from("quotes_rejected.json"),
            strategy: StrategyKind::Ordinal,
            default_tz: "UTC".into(),
            max_feed_days: 31,
            policy: PolicyConfig::v0(),
        }
    }
}
