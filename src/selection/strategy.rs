use chrono::{Datelike, NaiveDate};
use sha2::{Digest, Sha256};

use crate::config::StrategyKind;

/// Maps a calendar date onto an index in `0..pool_len`.
///
/// Callers guarantee `pool_len > 0`.
pub trait SelectionStrategy {
    fn index_for(&self, date: NaiveDate, pool_len: usize) -> usize;
}

/// v0: day ordinal modulo pool size.
/// ordinal(0001-01-01) = 1, so consecutive days walk the pool cyclically.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalStrategy;

impl SelectionStrategy for OrdinalStrategy {
    fn index_for(&self, date: NaiveDate, pool_len: usize) -> usize {
        debug_assert!(pool_len > 0);
        let ordinal = i64::from(date.num_days_from_ce());
        ordinal.rem_euclid(pool_len as i64) as usize
    }
}

/// sha256("YYYY-MM-DD") read as a big-endian integer, modulo pool size.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateHashStrategy;

impl SelectionStrategy for DateHashStrategy {
    fn index_for(&self, date: NaiveDate, pool_len: usize) -> usize {
        debug_assert!(pool_len > 0);
        let canonical = date.format("%Y-%m-%d").to_string();

        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        let digest = hasher.finalize();

        // Horner reduction keeps the remainder below pool_len at every step.
        let modulus = pool_len as u128;
        let rem = digest
            .iter()
            .fold(0u128, |acc, b| (acc * 256 + u128::from(*b)) % modulus);
        rem as usize
    }
}

impl SelectionStrategy for StrategyKind {
    fn index_for(&self, date: NaiveDate, pool_len: usize) -> usize {
        match self {
            StrategyKind::Ordinal => OrdinalStrategy.index_for(date, pool_len),
            StrategyKind::DateHash => DateHashStrategy.index_for(date, pool_len),
        }
    }
}
