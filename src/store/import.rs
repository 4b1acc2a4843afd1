use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::moderation::ContentPolicy;
use crate::store::store::{read_required_list, ApprovedStore, RejectedRecord, RejectionLog, StoreError};
use crate::types::identifiers::DedupKey;
use crate::types::quote::QuoteRecord;

/// Counts reported by a batch import. Identical for dry and real runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub added: usize,
    pub rejected: usize,
    pub duplicate_skipped: usize,
}

/// Moderate a batch of candidates against the approved collection.
///
/// Both collections are loaded strictly: a malformed file aborts the
/// import before anything is written. On a dry run nothing is saved.
pub fn import_batch<A, R>(
    policy: &ContentPolicy,
    incoming: &[Value],
    approved_store: &A,
    rejection_log: &R,
    dry_run: bool,
) -> Result<ImportSummary, StoreError>
where
    A: ApprovedStore + ?Sized,
    R: RejectionLog + ?Sized,
{
    let mut approved = approved_store.load()?;
    let mut rejects = rejection_log.load()?;

    tracing::debug!(
        incoming = incoming.len(),
        approved = approved.len(),
        dry_run,
        "starting batch import"
    );

    let mut seen: HashSet<DedupKey> = approved.iter().map(DedupKey::for_record).collect();
    let mut summary = ImportSummary::default();

    for candidate in incoming {
        let verdict = policy.validate(candidate);
        let record = match QuoteRecord::from_validated(candidate) {
            Some(record) if verdict.ok => record,
            _ => {
                rejects.push(RejectedRecord {
                    record: candidate.clone(),
                    reasons: verdict.reasons,
                });
                summary.rejected += 1;
                continue;
            }
        };

        // Keys are tracked on dry runs too so in-batch duplicates count the same.
        if !seen.insert(DedupKey::for_record(&record)) {
            summary.duplicate_skipped += 1;
            continue;
        }

        approved.push(record);
        summary.added += 1;
    }

    if !dry_run {
        approved_store.save(&approved)?;
        rejection_log.save(&rejects)?;
    }

    tracing::info!(
        added = summary.added,
        rejected = summary.rejected,
        duplicate_skipped = summary.duplicate_skipped,
        dry_run,
        "batch import finished"
    );

    Ok(summary)
}

/// Import from a JSON list file. The file must exist and hold a list.
pub fn import_file<A, R>(
    policy: &ContentPolicy,
    input: &Path,
    approved_store: &A,
    rejection_log: &R,
    dry_run: bool,
) -> Result<ImportSummary, StoreError>
where
    A: ApprovedStore + ?Sized,
    R: RejectionLog + ?Sized,
{
    let incoming: Vec<Value> = read_required_list(input)?;
    import_batch(policy, &incoming, approved_store, rejection_log, dry_run)
}
