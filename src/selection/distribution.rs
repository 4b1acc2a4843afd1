use chrono::{Days, NaiveDate};
use thiserror::Error;

use crate::selection::{DailySelector, SelectionError, SelectionStrategy};
use crate::types::quote::{DailyQuote, Feed, FeedPage, PooledQuote};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DistributionError {
    #[error("No quotes in feed '{0}'")]
    EmptyFeed(Feed),
    #[error("Invalid day count: {days} (expected 1..={max})")]
    InvalidDays { days: u32, max: u32 },
    #[error("Date out of range: {0} + {1} days")]
    DateOutOfRange(NaiveDate, u32),
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),
}

/// The quote for one resolved date. `tz` is echoed, never interpreted.
pub fn daily_pick<S: SelectionStrategy>(
    selector: &DailySelector<S>,
    pool: &[PooledQuote<'_>],
    feed: Feed,
    date: NaiveDate,
    tz: &str,
) -> Result<DailyQuote, DistributionError> {
    if pool.is_empty() {
        return Err(DistributionError::EmptyFeed(feed));
    }

    let pooled = selector.pick(date, pool)?;
    Ok(DailyQuote::from_pooled(date, tz, pooled))
}

/// Quotes for `days` consecutive dates starting at `start`.
pub fn build_feed<S: SelectionStrategy>(
    selector: &DailySelector<S>,
    pool: &[PooledQuote<'_>],
    feed: Feed,
    start: NaiveDate,
    days: u32,
    max_days: u32,
    tz: &str,
) -> Result<FeedPage, DistributionError> {
    if days == 0 || days > max_days {
        return Err(DistributionError::InvalidDays { days, max: max_days });
    }
    if pool.is_empty() {
        return Err(DistributionError::EmptyFeed(feed));
    }

    let mut items = Vec::with_capacity(days as usize);
    for offset in 0..days {
        let date = start
            .checked_add_days(Days::new(u64::from(offset)))
            .ok_or(DistributionError::DateOutOfRange(start, offset))?;
        items.push(daily_pick(selector, pool, feed, date, tz)?);
    }

    Ok(FeedPage {
        tz: tz.to_string(),
        days,
        feed,
        items,
    })
}
