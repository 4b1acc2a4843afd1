use quote_core::moderation::ContentPolicy;
use quote_core::store::{submit, ApprovedStore, JsonApprovedStore, MemoryList, Submission};
use quote_core::types::QuoteRecord;
use tempfile::tempdir;

fn submission(text: &str, author: &str, tag: &str) -> Submission {
    Submission {
        text: text.to_string(),
        author: author.to_string(),
        tag: tag.to_string(),
    }
}

#[test]
fn non_bible_tags_are_coerced_to_community() {
    let s = submission("Talk is cheap.", "Linus Torvalds", "Tech");
    let record = s.effective_record();
    assert_eq!(record.tag, "community");
    assert_eq!(record.orig_tag.as_deref(), Some("Tech"));

    let s = submission("Jesus wept.", "John 11:35", " Bible");
    let record = s.effective_record();
    assert_eq!(record.tag, "bible");
    assert_eq!(record.orig_tag, None);
}

#[test]
fn accepted_submission_is_stored() {
    let policy = ContentPolicy::default();
    let store = MemoryList::<QuoteRecord>::new();

    let result = submit(&policy, &store, &submission("Talk is cheap.", "Linus Torvalds", "tech"), true).unwrap();
    assert!(result.accepted);
    assert_eq!(result.reasons, None);
    assert_eq!(result.stored_as.as_deref(), Some("community"));

    let stored = store.load().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].tag, "community");
    assert_eq!(stored[0].orig_tag.as_deref(), Some("tech"));
}

#[test]
fn duplicate_submission_is_accepted_once_stored_once() {
    let policy = ContentPolicy::default();
    let store = MemoryList::<QuoteRecord>::new();

    let first = submit(&policy, &store, &submission("Talk is cheap.", "Linus Torvalds", "community"), true).unwrap();
    let second = submit(&policy, &store, &submission("  TALK is cheap. ", "linus   torvalds", "other"), true).unwrap();

    assert!(first.accepted);
    assert!(second.accepted);
    assert_eq!(second.stored_as.as_deref(), Some("community"));
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn rejected_submission_reports_reasons_and_stores_nothing() {
    let policy = ContentPolicy::default();
    let store = MemoryList::<QuoteRecord>::new();

    let result = submit(&policy, &store, &submission("Verse text", "Jon 3:16", "bible"), true).unwrap();
    assert!(!result.accepted);
    assert_eq!(result.stored_as, None);
    let reasons = result.reasons.unwrap();
    assert!(reasons.iter().any(|r| r.contains("unknown scripture book")));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn auto_store_off_validates_only() {
    let policy = ContentPolicy::default();
    let store = MemoryList::<QuoteRecord>::new();

    let result = submit(&policy, &store, &submission("Be still.", "Psalms 46:10", "bible"), false).unwrap();
    assert!(result.accepted);
    assert_eq!(result.stored_as.as_deref(), Some("bible"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn malformed_store_is_not_overwritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quotes_approved.json");
    std::fs::write(&path, "{\"not\": \"a list\"}").unwrap();

    let policy = ContentPolicy::default();
    let store = JsonApprovedStore::new(&path);

    let result = submit(&policy, &store, &submission("Be still.", "Psalms 46:10", "bible"), true);
    assert!(result.is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"not\": \"a list\"}");
}
