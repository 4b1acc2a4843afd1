//! Curated built-in quotes. Order is significant: it fixes pool indices.

use crate::types::quote::QuoteRecord;

const BUILTIN: [(&str, &str, &str); 16] = [
    ("Programs must be written for people to read.", "Harold Abelson", "tech"),
    ("The fear of the LORD is the beginning of wisdom.", "Proverbs 9:10 (KJV)", "bible"),
    ("Talk is cheap. Show me the code.", "Linus Torvalds", "tech"),
    ("Jesus wept.", "John 11:35 (KJV)", "bible"),
    ("Do or do not. There is no try.", "yoda", "Star Wars"),
    (
        "Don't let anyone ever make you feel like you don't deserve what you want.",
        "Heath Ledger",
        "inspiration",
    ),
    (
        "It ain't about how hard you hit, it's about how you can get hit and keep moving forward, how much you can take and keep moving forward. That's how winning is done!",
        "Rocky Balboa",
        "movies",
    ),
    ("Every passing second is another chance to turn it all around", "Vanilla Sky", "movies"),
    (
        "Agent Smith: ... Why do you persist?\nNeo: Because I choose to.",
        "The Matrix",
        "movies",
    ),
    (
        "You are a god among insects. Never let anyone tell you different.",
        "Magneto",
        "movies",
    ),
    ("The gods envy us ... We will never be here again.", "Achilles", "movies"),
    (
        "Shoot for the moon. Even if you miss, you’ll land among the stars.",
        "Les Brown",
        "motivation",
    ),
    (
        "Too many of us are not living our dreams because we are living our fears.",
        "Les Brown",
        "fear",
    ),
    ("It’s not over until you win.", "Les Brown", "perseverance"),
    (
        "You don’t have to be great to get started, but you have to get started to be great.",
        "Les Brown",
        "action",
    ),
    (
        "Other people’s opinion of you does not have to become your reality.",
        "Les Brown",
        "self-belief",
    ),
];

/// The built-in collection, in its fixed order.
///
/// Tags here are free-form and are not held to the submission whitelist.
pub fn builtin_quotes() -> Vec<QuoteRecord> {
    BUILTIN
        .iter()
        .map(|(text, author, tag)| QuoteRecord::new(*text, *author, *tag))
        .collect()
}
