//! Hash and word fixtures.
//!
//! - [`zero_hash`] sends every key to bucket 0 (worst-case chaining).
//! - [`first_byte_hash`] groups keys by their leading byte.
//! - [`colliding_hash`] sends every key to a caller-chosen bucket.
//! - [`SAMPLE_WORDS`] and [`word_file`] stand in for a word list on disk.

/// Hash function that maps every key to 0.
pub fn zero_hash(_bytes: &[u8]) -> u64 {
    0
}

/// Hash function returning the first byte, or 0 for empty input.
pub fn first_byte_hash(bytes: &[u8]) -> u64 {
    bytes.first().copied().map_or(0, u64::from)
}

/// Closure that maps every key to `bucket`, for any key type.
pub fn colliding_hash<K: ?Sized>(bucket: u64) -> impl Fn(&K) -> u64 + Clone {
    move |_: &K| bucket
}

/// A small word list with shared prefixes, equal lengths and one word
/// longer than a fixed key can hold.
pub const SAMPLE_WORDS: &[&str] = &[
    "apple",
    "apricot",
    "banana",
    "blueberry",
    "cherry",
    "date",
    "elderberry",
    "fig",
    "grape",
    "kiwi",
    "lemon",
    "lime",
    "mango",
    "nectarine",
    "orange",
    "papaya",
    "pear",
    "plum",
    "quince",
    "raspberry",
    "strawberry",
    "tangerine",
    "watermelon",
    "pneumonoultramicroscopicsilicovolcanoconiosis-and-then-some-more-letters",
];

/// [`SAMPLE_WORDS`] joined by newlines, without a trailing newline, as a
/// word file would be laid out on disk.
pub fn word_file() -> String {
    SAMPLE_WORDS.join("\n")
}
