use std::path::PathBuf;

use quote_core::config::{ConfigError, PolicyConfig, ServiceConfig, StrategyKind, CANONICAL_BOOKS};
use quote_core::types::Feed;

#[test]
fn v0_policy_defaults() {
    let policy = PolicyConfig::v0();
    assert_eq!(policy.min_text_chars, 4);
    assert_eq!(policy.max_text_chars, 500);
    assert_eq!(policy.max_author_chars, 120);
    assert_eq!(policy.scripture_books.len(), 66);
    assert_eq!(CANONICAL_BOOKS.len(), 66);
    assert!(policy.allowed_tags.contains("bible"));
    assert!(policy.allowed_tags.contains("community"));
    assert_eq!(policy.allowed_tags.len(), 2);
    assert_eq!(policy, PolicyConfig::default());
}

#[test]
fn partial_policy_json_fills_defaults() {
    let policy = PolicyConfig::from_json_str(r#"{"banned_phrases": ["spoiler"], "max_text_chars": 280}"#).unwrap();
    assert_eq!(policy.max_text_chars, 280);
    assert_eq!(policy.min_text_chars, 4);
    assert_eq!(policy.banned_phrases.len(), 1);
    assert_eq!(policy.scripture_books.len(), 66);
}

#[test]
fn service_config_from_json() {
    let config = ServiceConfig::from_json_str(
        r#"{"approved_path": "/var/lib/qod/approved.json", "strategy": "date-hash", "max_feed_days": 14}"#,
    )
    .unwrap();
    assert_eq!(config.approved_path, PathBuf::from("/var/lib/qod/approved.json"));
    assert_eq!(config.rejected_path, PathBuf::from("quotes_rejected.json"));
    assert_eq!(config.strategy, StrategyKind::DateHash);
    assert_eq!(config.max_feed_days, 14);
    assert_eq!(config.default_tz, "UTC");
    assert_eq!(config.policy, PolicyConfig::v0());
}

#[test]
fn service_config_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("qod.json");
    std::fs::write(&path, r#"{"default_tz": "America/Chicago"}"#).unwrap();

    let config = ServiceConfig::from_path(&path).unwrap();
    assert_eq!(config.default_tz, "America/Chicago");

    let missing = ServiceConfig::from_path(&dir.path().join("missing.json"));
    assert!(matches!(missing, Err(ConfigError::Io(_))));
}

#[test]
fn strategy_and_feed_parse_from_strings() {
    assert_eq!("ordinal".parse::<StrategyKind>().unwrap(), StrategyKind::Ordinal);
    assert_eq!(" Date-Hash ".parse::<StrategyKind>().unwrap(), StrategyKind::DateHash);
    assert!(matches!("random".parse::<StrategyKind>(), Err(ConfigError::InvalidStrategy(_))));
    assert_eq!(StrategyKind::DateHash.to_string(), "date-hash");

    assert_eq!("Bible".parse::<Feed>().unwrap(), Feed::Bible);
    assert_eq!("both".parse::<Feed>().unwrap(), Feed::Both);
    assert!("movies".parse::<Feed>().is_err());
    assert_eq!(Feed::Community.to_string(), "community");
    assert_eq!(Feed::default(), Feed::Bible);
}
