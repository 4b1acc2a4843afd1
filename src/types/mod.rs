pub mod identifiers;
pub mod quote;

pub use identifiers::{normalize, DedupKey};
pub use quote::{DailyQuote, Feed, FeedPage, PooledQuote, QuoteRecord, Source, UnknownFeed};
