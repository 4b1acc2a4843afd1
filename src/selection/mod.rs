pub mod distribution;
pub mod pool;
pub mod strategy;

use chrono::NaiveDate;
use thiserror::Error;

use crate::config::StrategyKind;
pub use distribution::{build_feed, daily_pick, DistributionError};
pub use pool::{available_tags, compose_pool, filter_by_author, filter_by_tags};
pub use strategy::{DateHashStrategy, OrdinalStrategy, SelectionStrategy};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
	#[error("Cannot select from an empty pool")]
	EmptyPool,
}

/// Picks exactly one pool member per calendar date.
///
/// The mapping depends only on the date and the pool length. Growing or
/// shrinking the pool reshuffles which date lands on which record.
#[derive(Debug, Clone, Copy)]
pub struct DailySelector<S = StrategyKind> {
	strategy: S,
}

impl Default for DailySelector<StrategyKind> {
	fn default() -> Self {
		Self {
			strategy: StrategyKind::Ordinal,
		}
	}
}

impl<S> DailySelector<S>
where
	S: SelectionStrategy,
{
	pub fn new(strategy: S) -> Self {
		Self { strategy }
	}

	pub fn index(&self, date: NaiveDate, pool_len: usize) -> Result<usize, SelectionError> {
		if pool_len == 0 {
			return Err(SelectionError::EmptyPool);
		}

		let idx = self.strategy.index_for(date, pool_len);
		debug_assert!(idx < pool_len, "index {idx} out of range for pool of {pool_len}");
		Ok(idx)
	}

	pub fn pick<'p, T>(&self, date: NaiveDate, pool: &'p [T]) -> Result<&'p T, SelectionError> {
		let idx = self.index(date, pool.len())?;
		Ok(&pool[idx])
	}
}
