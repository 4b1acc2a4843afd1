use std::path::Path;

use chrono::NaiveDate;
use serde_json::Value;

use crate::catalog::builtin_quotes;
use crate::config::ServiceConfig;
use crate::moderation::ContentPolicy;
use crate::selection::{build_feed, compose_pool, daily_pick, DailySelector, DistributionError};
use crate::store::{
    import_batch, import_file, submit, ApprovedStore, ImportSummary, JsonApprovedStore,
    JsonRejectionLog, RejectionLog, StoreError, SubmitResult, Submission,
};
use crate::types::quote::{DailyQuote, Feed, FeedPage, QuoteRecord};

/// Everything a host needs to serve picks and accept quotes.
///
/// Holds no caches: every read composes a fresh pool from the built-ins
/// and whatever the approved store returns right now.
pub struct QuoteService<A, R> {
    policy: ContentPolicy,
    built_in: Vec<QuoteRecord>,
    approved: A,
    rejections: R,
    selector: DailySelector,
    default_tz: String,
    max_feed_days: u32,
}

impl QuoteService<JsonApprovedStore, JsonRejectionLog> {
    /// File-backed service using the paths from `config`.
    pub fn from_config(config: ServiceConfig) -> Self {
        let approved = JsonApprovedStore::new(config.approved_path.clone());
        let rejections = JsonRejectionLog::new(config.rejected_path.clone());
        Self::new(config, builtin_quotes(), approved, rejections)
    }
}

impl<A, R> QuoteService<A, R>
where
    A: ApprovedStore,
    R: RejectionLog,
{
    pub fn new(config: ServiceConfig, built_in: Vec<QuoteRecord>, approved: A, rejections: R) -> Self {
        Self {
            policy: ContentPolicy::new(config.policy),
            built_in,
            approved,
            rejections,
            selector: DailySelector::new(config.strategy),
            default_tz: config.default_tz,
            max_feed_days: config.max_feed_days,
        }
    }

    pub fn policy(&self) -> &ContentPolicy {
        &self.policy
    }

    pub fn approved_store(&self) -> &A {
        &self.approved
    }

    pub fn rejection_log(&self) -> &R {
        &self.rejections
    }

    /// The quote for `date`. `tz` is only echoed; it defaults to the configured label.
    pub fn pick(&self, feed: Feed, date: NaiveDate, tz: Option<&str>) -> Result<DailyQuote, DistributionError> {
        let approved = self.approved.load_or_empty();
        let pool = compose_pool(&self.built_in, &approved, feed);
        daily_pick(&self.selector, &pool, feed, date, tz.unwrap_or(self.default_tz.as_str()))
    }

    pub fn feed(
        &self,
        feed: Feed,
        start: NaiveDate,
        days: u32,
        tz: Option<&str>,
    ) -> Result<FeedPage, DistributionError> {
        let approved = self.approved.load_or_empty();
        let pool = compose_pool(&self.built_in, &approved, feed);
        build_feed(
            &self.selector,
            &pool,
            feed,
            start,
            days,
            self.max_feed_days,
            tz.unwrap_or(self.default_tz.as_str()),
        )
    }

    pub fn submit(&self, submission: &Submission, auto_store: bool) -> Result<SubmitResult, StoreError> {
        submit(&self.policy, &self.approved, submission, auto_store)
    }

    pub fn import(&self, incoming: &[Value], dry_run: bool) -> Result<ImportSummary, StoreError> {
        import_batch(&self.policy, incoming, &self.approved, &self.rejections, dry_run)
    }

    pub fn import_file(&self, input: &Path, dry_run: bool) -> Result<ImportSummary, StoreError> {
        import_file(&self.policy, input, &self.approved, &self.rejections, dry_run)
    }
}
