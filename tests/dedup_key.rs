use quote_core::types::{normalize, DedupKey, QuoteRecord};

#[test]
fn normalize_collapses_and_lowercases() {
    assert_eq!(normalize(" Les Brown "), "les brown");
    assert_eq!(normalize("Les\t\n  BROWN"), "les brown");
    assert_eq!(normalize("   "), "");
}

#[test]
fn key_ignores_case_and_whitespace() {
    assert_eq!(DedupKey::new(" Les Brown ", "x"), DedupKey::new("les brown", "X"));
}

#[test]
fn key_ignores_tag() {
    let a = QuoteRecord::new("Jesus wept.", "John 11:35", "bible");
    let b = QuoteRecord::new("jesus  wept.", "john 11:35", "community");
    assert_eq!(DedupKey::for_record(&a), DedupKey::for_record(&b));
}

#[test]
fn key_distinguishes_text_and_author() {
    assert_ne!(DedupKey::new("a quote", "someone"), DedupKey::new("a quote", "someone else"));
    assert_ne!(DedupKey::new("a quote", "someone"), DedupKey::new("another quote", "someone"));
}

#[test]
fn key_does_not_leak_content() {
    let key = DedupKey::new("Talk is cheap. Show me the code.", "Linus Torvalds");
    assert_eq!(key.as_str().len(), 64);
    assert!(key.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    assert!(!key.as_str().contains("talk"));
}
