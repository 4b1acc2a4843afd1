use serde::{Deserialize, Serialize};

use crate::config::{BIBLE_TAG, COMMUNITY_TAG};
use crate::moderation::ContentPolicy;
use crate::store::store::{ApprovedStore, StoreError};
use crate::types::identifiers::{normalize, DedupKey};
use crate::types::quote::QuoteRecord;

/// A quote as submitted by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub text: String,
    pub author: String,
    pub tag: String,
}

impl Submission {
    /// The record that will be moderated and stored.
    /// Anything not tagged bible is community; the raw tag is kept as `orig_tag`.
    pub fn effective_record(&self) -> QuoteRecord {
        let tag_norm = normalize(&self.tag);
        if tag_norm == BIBLE_TAG {
            QuoteRecord::new(&self.text, &self.author, tag_norm)
        } else {
            QuoteRecord {
                orig_tag: Some(self.tag.clone()),
                ..QuoteRecord::new(&self.text, &self.author, COMMUNITY_TAG)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub accepted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_as: Option<String>,
}

impl SubmitResult {
    fn rejected(reasons: Vec<String>) -> Self {
        Self {
            accepted: false,
            reasons: Some(reasons),
            stored_as: None,
        }
    }

    fn accepted(tag: &str) -> Self {
        Self {
            accepted: true,
            reasons: None,
            stored_as: Some(tag.to_string()),
        }
    }
}

/// Moderate a submission and, if new, append it to the approved store.
///
/// A duplicate is still reported as accepted but is not written again.
/// The store is read strictly here so a malformed collection is never
/// overwritten by a single-record save.
pub fn submit<A: ApprovedStore + ?Sized>(
    policy: &ContentPolicy,
    store: &A,
    submission: &Submission,
    auto_store: bool,
) -> Result<SubmitResult, StoreError> {
    let record = submission.effective_record();

    let verdict = policy.validate_record(&record);
    if !verdict.ok {
        tracing::warn!(reasons = ?verdict.reasons, "submission rejected");
        return Ok(SubmitResult::rejected(verdict.reasons));
    }

    let mut approved = store.load()?;
    let key = DedupKey::for_record(&record);
    if approved.iter().any(|existing| DedupKey::for_record(existing) == key) {
        tracing::debug!(key = key.as_str(), "duplicate submission, nothing stored");
        return Ok(SubmitResult::accepted(&record.tag));
    }

    let stored_as = record.tag.clone();
    if auto_store {
        approved.push(record);
        store.save(&approved)?;
    }

    Ok(SubmitResult::accepted(&stored_as))
}
