//! Word-list lookup workloads for benchmarking chainslot.
//!
//! The workload loads a newline separated word file, stores every word as
//! a [`FixedKey`] in a [`HashTable`], and then looks up uniformly random
//! words:
//!
//! - [`parse_words`] / [`load_word_file`]: split a word file into words.
//! - [`unique_keys`]: fixed keys in file order, duplicates dropped.
//! - [`build_table`]: a table over those keys with a chosen [`HashKind`].
//! - [`run_lookups`]: a seeded random lookup run with a [`LookupReport`].
//! - [`synthetic_words`]: deterministic word lists when no file is at hand.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use chainslot_table::{ByteHash, FixedKey, HashKind, HashTable, TableConfig, TableError};
use indexmap::IndexSet;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// The table type every workload builds: fixed keys, no payload.
pub type WordTable = HashTable<FixedKey, (), ByteHash>;

/// Split a word file into words.
///
/// Every `\n` ends a word and whatever follows the last `\n` is one more
/// word, so a trailing newline yields a final empty word. Empty input
/// yields no words.
pub fn parse_words(contents: &[u8]) -> Vec<&[u8]> {
    if contents.is_empty() {
        return Vec::new();
    }
    contents.split(|&b| b == b'\n').collect()
}

/// Read the whole word file at `path`.
pub fn load_word_file(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    let path = path.as_ref();
    let contents = fs::read(path)?;
    log::debug!("read {} bytes from {}", contents.len(), path.display());
    Ok(contents)
}

/// Convert words to fixed keys in input order, keeping the first
/// occurrence of each key (after truncation to [`FixedKey::MAX_LEN`]).
pub fn unique_keys<'a, I>(words: I) -> IndexSet<FixedKey>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    words.into_iter().map(FixedKey::from_bytes).collect()
}

/// Build a table with `config` hashing by `kind` and insert every key.
pub fn build_table(
    kind: HashKind,
    keys: &IndexSet<FixedKey>,
    config: &TableConfig,
) -> Result<WordTable, TableError> {
    let mut table = HashTable::with_config(kind.hasher(), config)?;
    let inserted = populate(&mut table, keys.iter().copied())?;
    log::debug!(
        "built {kind} table with {inserted} keys: {}",
        table.stats()
    );
    Ok(table)
}

/// Insert every key with a unit value. Returns how many were new.
pub fn populate<I>(table: &mut WordTable, keys: I) -> Result<usize, TableError>
where
    I: IntoIterator<Item = FixedKey>,
{
    let mut inserted = 0;
    for key in keys {
        inserted += usize::from(table.insert(key, ())?);
    }
    Ok(inserted)
}

/// Outcome of [`run_lookups`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LookupReport {
    /// Lookups performed.
    pub lookups: usize,
    /// Lookups that found their key.
    pub hits: usize,
    /// Wall time spent in the lookup loop.
    pub elapsed: Duration,
}

impl LookupReport {
    /// Mean time per lookup in nanoseconds, 0 when nothing ran.
    pub fn nanos_per_lookup(&self) -> f64 {
        if self.lookups == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.lookups as f64
    }
}

/// Look up `lookups` keys drawn uniformly from `keys` with a ChaCha8 RNG
/// seeded by `seed`.
pub fn run_lookups(
    table: &WordTable,
    keys: &IndexSet<FixedKey>,
    lookups: usize,
    seed: u64,
) -> LookupReport {
    let start = Instant::now();
    let mut hits = 0;
    if !keys.is_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..lookups {
            let index = rng.gen_range(0..keys.len());
            if let Some(key) = keys.get_index(index) {
                hits += usize::from(table.contains_key(key));
            }
        }
    }
    LookupReport {
        lookups: if keys.is_empty() { 0 } else { lookups },
        hits,
        elapsed: start.elapsed(),
    }
}

/// `count` pseudo-random lowercase words of 3 to 12 letters, joined by
/// newlines like a word file. The same seed always gives the same text.
pub fn synthetic_words(count: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(count * 8);
    for i in 0..count {
        if i > 0 {
            out.push(b'\n');
        }
        let len = rng.gen_range(3..=12);
        out.extend((0..len).map(|_| rng.gen_range(b'a'..=b'z')));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainslot_test_utils::{word_file, SAMPLE_WORDS};

    #[test]
    fn empty_input_has_no_words() {
        assert!(parse_words(b"").is_empty());
    }

    #[test]
    fn final_segment_is_a_word() {
        assert_eq!(parse_words(b"a\nbc"), vec![&b"a"[..], &b"bc"[..]]);
        assert_eq!(parse_words(b"a\n"), vec![&b"a"[..], &b""[..]]);
        assert_eq!(parse_words(b"\n"), vec![&b""[..], &b""[..]]);
    }

    #[test]
    fn unique_keys_keep_file_order() {
        let words = parse_words(b"pear\nfig\npear\nkiwi");
        let keys = unique_keys(words);
        let order: Vec<String> = keys.iter().map(FixedKey::to_string).collect();
        assert_eq!(order, ["pear", "fig", "kiwi"]);
    }

    #[test]
    fn sample_file_builds_complete_table() {
        let contents = word_file();
        let keys = unique_keys(parse_words(contents.as_bytes()));
        assert_eq!(keys.len(), SAMPLE_WORDS.len());
        let table = build_table(HashKind::Elf, &keys, &TableConfig::default()).unwrap();
        assert_eq!(table.len(), keys.len());
        let report = run_lookups(&table, &keys, 1000, 7);
        assert_eq!(report.lookups, 1000);
        assert_eq!(report.hits, 1000);
    }

    #[test]
    fn populate_counts_only_new_keys() {
        let mut table: WordTable = HashTable::new(HashKind::Crc32c.hasher());
        let keys = [FixedKey::new("a"), FixedKey::new("b"), FixedKey::new("a")];
        assert_eq!(populate(&mut table, keys), Ok(2));
    }

    #[test]
    fn lookups_without_keys_do_nothing() {
        let table: WordTable = HashTable::new(HashKind::Zero.hasher());
        let report = run_lookups(&table, &IndexSet::new(), 50, 1);
        assert_eq!(report.lookups, 0);
        assert_eq!(report.nanos_per_lookup(), 0.0);
    }

    #[test]
    fn synthetic_words_are_deterministic() {
        let a = synthetic_words(100, 3);
        assert_eq!(a, synthetic_words(100, 3));
        assert_ne!(a, synthetic_words(100, 4));
        let words = parse_words(&a);
        assert_eq!(words.len(), 100);
        assert!(words
            .iter()
            .all(|w| (3..=12).contains(&w.len()) && w.iter().all(u8::is_ascii_lowercase)));
    }

    #[test]
    fn load_missing_file_is_an_error() {
        assert!(load_word_file("/definitely/not/here/words.txt").is_err());
    }
}
