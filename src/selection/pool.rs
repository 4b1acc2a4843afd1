use std::collections::BTreeSet;

use crate::types::identifiers::normalize;
use crate::types::quote::{Feed, PooledQuote, QuoteRecord, Source};

/// Built-in records first, then approved ones, each in its own order,
/// filtered to `feed` unless it is the wildcard.
pub fn compose_pool<'a>(
    built_in: &'a [QuoteRecord],
    approved: &'a [QuoteRecord],
    feed: Feed,
) -> Vec<PooledQuote<'a>> {
    let tagged = |records: &'a [QuoteRecord], source: Source| {
        records.iter().map(move |record| PooledQuote { record, source })
    };

    let pool: Vec<PooledQuote<'a>> = tagged(built_in, Source::BuiltIn)
        .chain(tagged(approved, Source::Approved))
        .filter(|q| feed.admits(&q.record.normalized_tag()))
        .collect();

    tracing::debug!(
        feed = %feed,
        built_in = built_in.len(),
        approved = approved.len(),
        pooled = pool.len(),
        "composed quote pool"
    );

    pool
}

/// Distinct normalized tags present in `records`, sorted.
pub fn available_tags(records: &[QuoteRecord]) -> Vec<String> {
    records
        .iter()
        .map(QuoteRecord::normalized_tag)
        .filter(|t| !t.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Keep records whose normalized tag is one of `tags` (compared normalized).
pub fn filter_by_tags<'a, S: AsRef<str>>(
    pool: &[PooledQuote<'a>],
    tags: &[S],
) -> Vec<PooledQuote<'a>> {
    let wanted: BTreeSet<String> = tags.iter().map(|t| normalize(t.as_ref())).collect();
    pool.iter()
        .filter(|q| wanted.contains(&q.record.normalized_tag()))
        .copied()
        .collect()
}

/// Keep records whose normalized author contains the normalized needle.
pub fn filter_by_author<'a>(pool: &[PooledQuote<'a>], needle: &str) -> Vec<PooledQuote<'a>> {
    let needle = normalize(needle);
    pool.iter()
        .filter(|q| normalize(&q.record.author).contains(&needle))
        .copied()
        .collect()
}
