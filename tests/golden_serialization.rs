use chrono::NaiveDate;
use quote_core::store::{ImportSummary, SubmitResult};
use quote_core::types::{DailyQuote, Feed, FeedPage, QuoteRecord, Source};
use serde_json::json;

fn compact(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn golden_daily_quote() {
    let q = DailyQuote {
        date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        tz: "UTC".to_string(),
        text: "Jesus wept.".to_string(),
        author: "John 11:35 (KJV)".to_string(),
        tag: "bible".to_string(),
        source: Source::BuiltIn,
    };

    const EXPECTED_JSON: &str = r#"{
      "date": "2025-01-01",
      "tz": "UTC",
      "text": "Jesus wept.",
      "author": "John 11:35 (KJV)",
      "tag": "bible",
      "source": "built-in"
    }"#;

    let json_str = serde_json::to_string_pretty(&q).unwrap();
    assert_eq!(compact(&json_str), compact(EXPECTED_JSON));

    let back: DailyQuote = serde_json::from_str(&json_str).unwrap();
    assert_eq!(back, q);
}

#[test]
fn golden_feed_page() {
    let page = FeedPage {
        tz: "UTC".to_string(),
        days: 1,
        feed: Feed::Community,
        items: vec![DailyQuote {
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            tz: "UTC".to_string(),
            text: "Talk is cheap.".to_string(),
            author: "Linus Torvalds".to_string(),
            tag: "community".to_string(),
            source: Source::Approved,
        }],
    };

    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(
        value,
        json!({
            "tz": "UTC",
            "days": 1,
            "feed": "community",
            "items": [{
                "date": "2025-01-02",
                "tz": "UTC",
                "text": "Talk is cheap.",
                "author": "Linus Torvalds",
                "tag": "community",
                "source": "approved"
            }]
        })
    );
}

#[test]
fn golden_persisted_record_omits_absent_fields() {
    let plain = QuoteRecord::new("Be still.", "Psalms 46:10", "bible");
    assert_eq!(
        serde_json::to_value(&plain).unwrap(),
        json!({"text": "Be still.", "author": "Psalms 46:10", "tag": "bible"})
    );

    let coerced = QuoteRecord {
        orig_tag: Some("Tech".into()),
        ..QuoteRecord::new("Talk is cheap.", "Linus Torvalds", "community")
    };
    assert_eq!(
        serde_json::to_value(&coerced).unwrap(),
        json!({"text": "Talk is cheap.", "author": "Linus Torvalds", "tag": "community", "orig_tag": "Tech"})
    );
}

#[test]
fn golden_submit_results() {
    let accepted = SubmitResult {
        accepted: true,
        reasons: None,
        stored_as: Some("community".to_string()),
    };
    assert_eq!(
        serde_json::to_string(&accepted).unwrap(),
        r#"{"accepted":true,"stored_as":"community"}"#
    );

    let rejected = SubmitResult {
        accepted: false,
        reasons: Some(vec!["text too short".to_string()]),
        stored_as: None,
    };
    assert_eq!(
        serde_json::to_string(&rejected).unwrap(),
        r#"{"accepted":false,"reasons":["text too short"]}"#
    );
}

#[test]
fn golden_import_summary() {
    let summary = ImportSummary {
        added: 3,
        rejected: 2,
        duplicate_skipped: 1,
    };
    assert_eq!(
        serde_json::to_string(&summary).unwrap(),
        r#"{"added":3,"rejected":2,"duplicate_skipped":1}"#
    );
}
