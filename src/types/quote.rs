use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::types::identifiers::normalize;

/// A single quote as stored in a collection.
///
/// `source` is deliberately absent: provenance is attached by the pool
/// composer and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub text: String,
    pub author: String,
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orig_tag: Option<String>,
}

impl QuoteRecord {
    pub fn new(text: impl Into<String>, author: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            tag: tag.into(),
            orig_tag: None,
        }
    }

    pub fn normalized_tag(&self) -> String {
        normalize(&self.tag)
    }

    /// Build a record from a loosely-typed value that already passed the
    /// content policy. The tag is stored in normalized form.
    ///
    /// Returns `None` if the value is not a mapping with string `text`,
    /// `author` and `tag` fields.
    pub fn from_validated(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let text = obj.get("text")?.as_str()?;
        let author = obj.get("author")?.as_str()?;
        let tag = obj.get("tag")?.as_str()?;
        let orig_tag = obj.get("orig_tag").and_then(Value::as_str).map(str::to_string);

        Some(Self {
            text: text.to_string(),
            author: author.to_string(),
            tag: normalize(tag),
            orig_tag,
        })
    }
}

/// Where a pooled quote came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "built-in")]
    BuiltIn,
    #[serde(rename = "approved")]
    Approved,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::BuiltIn => "built-in",
            Source::Approved => "approved",
        }
    }
}

/// Named subset of the pool. `Both` is the wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feed {
    #[default]
    Bible,
    Community,
    Both,
}

impl Feed {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feed::Bible => "bible",
            Feed::Community => "community",
            Feed::Both => "both",
        }
    }

    /// Whether a record with this normalized tag belongs to the feed.
    pub fn admits(&self, normalized_tag: &str) -> bool {
        match self {
            Feed::Both => true,
            other => other.as_str() == normalized_tag,
        }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown feed: '{0}' (expected bible, community or both)")]
pub struct UnknownFeed(pub String);

impl FromStr for Feed {
    type Err = UnknownFeed;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "bible" => Ok(Feed::Bible),
            "community" => Ok(Feed::Community),
            "both" => Ok(Feed::Both),
            _ => Err(UnknownFeed(s.to_string())),
        }
    }
}

/// Internal: a record in a composed pool, borrowing from its collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PooledQuote<'a> {
    pub record: &'a QuoteRecord,
    pub source: Source,
}

/// A quote resolved for one calendar date. Fully owned and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyQuote {
    pub date: NaiveDate,
    pub tz: String,
    pub text: String,
    pub author: String,
    pub tag: String,
    pub source: Source,
}

impl DailyQuote {
    pub fn from_pooled(date: NaiveDate, tz: impl Into<String>, pooled: &PooledQuote<'_>) -> Self {
        Self {
            date,
            tz: tz.into(),
            text: pooled.record.text.clone(),
            author: pooled.record.author.clone(),
            tag: pooled.record.tag.clone(),
            source: pooled.source,
        }
    }
}

/// A run of consecutive daily quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPage {
    pub tz: String,
    pub days: u32,
    pub feed: Feed,
    pub items: Vec<DailyQuote>,
}
