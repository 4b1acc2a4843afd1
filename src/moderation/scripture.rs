use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::identifiers::normalize;

/// `Book C:V` with an optional leading 1-3 and an optional `(TRANS)` suffix.
static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<book>(?:[1-3]\s*)?[A-Za-z][A-Za-z\s]+?)\s+(?P<chap>[0-9]+):(?P<verse>[0-9]+)\s*(?:\((?P<trans>[A-Za-z0-9\-]+)\))?\s*$",
    )
    .expect("scripture reference pattern is valid")
});

/// A parsed `Book Chapter:Verse (Translation)` reference.
///
/// `book` is lowercased and whitespace-collapsed. Membership in the
/// canonical book list is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptureReference {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub translation: Option<String>,
}

impl ScriptureReference {
    /// Parse a whole field. `None` means the field is not a reference;
    /// it is never an error.
    pub fn parse(field: &str) -> Option<Self> {
        let caps = REFERENCE_RE.captures(field)?;

        let book = normalize(caps.name("book")?.as_str());
        let chapter = caps.name("chap")?.as_str().parse().ok()?;
        let verse = caps.name("verse")?.as_str().parse().ok()?;
        let translation = caps.name("trans").map(|m| m.as_str().to_string());

        Some(Self {
            book,
            chapter,
            verse,
            translation,
        })
    }
}

