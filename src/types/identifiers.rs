use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::quote::QuoteRecord;

/// Lowercase, trim, and collapse internal whitespace runs to a single space.
pub fn normalize(s: &str) -> String {
    s.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Identity token for a quote.
///
/// Two quotes share a key iff their normalized text and normalized author
/// are equal. The tag never participates. The token is a one-way content
/// hash so it can be persisted or transmitted without leaking the quote.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DedupKey(String);

impl DedupKey {
    pub fn new(text: &str, author: &str) -> Self {
        let line = format!("{}||{}", normalize(text), normalize(author));

        let mut hasher = Sha256::new();
        hasher.update(line.as_bytes());

        DedupKey(hex::encode(hasher.finalize()))
    }

    pub fn for_record(record: &QuoteRecord) -> Self {
        Self::new(&record.text, &record.author)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
