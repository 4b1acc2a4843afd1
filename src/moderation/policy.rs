use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::{PolicyConfig, BIBLE_TAG};
use crate::moderation::scripture::ScriptureReference;
use crate::types::identifiers::normalize;
use crate::types::quote::QuoteRecord;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://|www\.").expect("url pattern is valid"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").expect("email pattern is valid")
});

/// Outcome of running the content policy. `reasons` is empty iff `ok`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl ValidationResult {
    fn from_reasons(reasons: Vec<String>) -> Self {
        Self {
            ok: reasons.is_empty(),
            reasons,
        }
    }
}

/// Structural and content rules for submitted quotes.
///
/// Only the presence gate short-circuits. Every later rule is evaluated
/// so a submitter sees all violations at once, in a fixed order.
#[derive(Debug, Clone, Default)]
pub struct ContentPolicy {
    config: PolicyConfig,
}

impl ContentPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Validate a loosely-typed record.
    pub fn validate(&self, value: &Value) -> ValidationResult {
        let Some(obj) = value.as_object() else {
            return ValidationResult::from_reasons(vec!["not an object".to_string()]);
        };

        self.validate_fields(
            str_field(obj, "text"),
            str_field(obj, "author"),
            str_field(obj, "tag"),
        )
    }

    /// Validate an already-typed record through the same rules.
    pub fn validate_record(&self, record: &QuoteRecord) -> ValidationResult {
        self.validate_fields(
            Some(record.text.as_str()),
            Some(record.author.as_str()),
            Some(record.tag.as_str()),
        )
    }

    fn validate_fields(
        &self,
        text: Option<&str>,
        author: Option<&str>,
        tag: Option<&str>,
    ) -> ValidationResult {
        let mut reasons = Vec::new();

        // 1. Presence gate
        let (text, author, tag) = (non_blank(text), non_blank(author), non_blank(tag));
        if text.is_none() {
            reasons.push("missing/empty text".to_string());
        }
        if author.is_none() {
            reasons.push("missing/empty author".to_string());
        }
        if tag.is_none() {
            reasons.push("missing/empty tag".to_string());
        }
        let (Some(text), Some(author), Some(tag)) = (text, author, tag) else {
            return ValidationResult::from_reasons(reasons);
        };

        self.check_lengths(text, author, &mut reasons);
        check_unsafe_content(text, &mut reasons);
        self.check_shouting(text, &mut reasons);
        self.check_repetition(text, &mut reasons);
        self.check_banned(text, author, &mut reasons);

        let tag_norm = normalize(tag);
        if !self.config.allowed_tags.contains(&tag_norm) {
            let allowed: Vec<&str> = self.config.allowed_tags.iter().map(String::as_str).collect();
            reasons.push(format!(
                "tag not allowed: '{tag}' (allowed: {})",
                allowed.join(", ")
            ));
        }

        if tag_norm == BIBLE_TAG {
            self.check_scripture(author, &mut reasons);
        }

        ValidationResult::from_reasons(reasons)
    }

    fn check_lengths(&self, text: &str, author: &str, reasons: &mut Vec<String>) {
        let text_len = text.chars().count();
        if text_len < self.config.min_text_chars {
            reasons.push("text too short".to_string());
        }
        if text_len > self.config.max_text_chars {
            reasons.push("text too long".to_string());
        }
        if author.chars().count() > self.config.max_author_chars {
            reasons.push("author too long".to_string());
        }
    }

    fn check_shouting(&self, text: &str, reasons: &mut Vec<String>) {
        let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
        if letters.len() >= self.config.shout_min_letters
            && !letters.is_empty()
            && letters.iter().all(|c| c.is_uppercase())
        {
            reasons.push("text looks like all-caps shouting".to_string());
        }
    }

    fn check_repetition(&self, text: &str, reasons: &mut Vec<String>) {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();
        if words.len() > self.config.repetition_token_threshold {
            let distinct: HashSet<&str> = words.iter().copied().collect();
            if distinct.len() <= self.config.repetition_max_distinct {
                reasons.push("too repetitive/low variety".to_string());
            }
        }
    }

    fn check_banned(&self, text: &str, author: &str, reasons: &mut Vec<String>) {
        let mut hits = BTreeSet::new();
        for field in [normalize(text), normalize(author)] {
            for phrase in &self.config.banned_phrases {
                let phrase = normalize(phrase);
                if !phrase.is_empty() && field.contains(&phrase) {
                    hits.insert(phrase);
                }
            }
        }

        if !hits.is_empty() {
            let hits: Vec<String> = hits.into_iter().collect();
            reasons.push(format!("banned content: {}", hits.join(", ")));
        }
    }

    fn check_scripture(&self, author: &str, reasons: &mut Vec<String>) {
        let Some(reference) = ScriptureReference::parse(author) else {
            reasons.push(
                "invalid scripture reference in author (expected 'Book C:V', e.g. 'John 3:16 (KJV)')"
                    .to_string(),
            );
            return;
        };

        if !self.config.scripture_books.contains(&reference.book) {
            let sample: Vec<&str> = self
                .config
                .scripture_books
                .iter()
                .take(6)
                .map(String::as_str)
                .collect();
            reasons.push(format!(
                "unknown scripture book: '{}' (sample known: {} …)",
                reference.book,
                sample.join(", ")
            ));
        }
        if reference.chapter == 0 || reference.verse == 0 {
            reasons.push("chapter and verse must be positive integers".to_string());
        }
    }
}

fn check_unsafe_content(text: &str, reasons: &mut Vec<String>) {
    if URL_RE.is_match(text) {
        reasons.push("contains URL".to_string());
    }
    if EMAIL_RE.is_match(text) {
        reasons.push("contains email address".to_string());
    }
}

fn str_field<'a>(obj: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    obj.get(name).and_then(Value::as_str)
}

fn non_blank(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.trim().is_empty())
}
