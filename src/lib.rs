//! Deterministic quote-of-the-day engine.
//!
//! `quote-core` provides content moderation for submitted quotes (including
//! scripture reference checks), content-hash deduplication, pool composition
//! across built-in and approved collections, and date-keyed selection. Picks
//! are deterministic: the same date and pool always yield the same quote.
//!
//! Timezone resolution, HTTP and CLI surfaces are left to the host; the core
//! receives an already-resolved calendar date.

pub mod catalog;
pub mod config;
pub mod moderation;
pub mod selection;
pub mod service;
pub mod store;
pub mod types;

pub use service::QuoteService;
