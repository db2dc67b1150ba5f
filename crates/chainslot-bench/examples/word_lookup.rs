//! Word-list lookup driver.
//!
//! Loads a newline separated word file, stores every word in a hash table
//! and times uniformly random lookups.
//!
//! ```text
//! cargo run --release -p chainslot-bench --example word_lookup -- \
//!     [WORD_FILE] [HASH] [LOOKUPS] [SEED]
//! ```
//!
//! Defaults: `words.txt`, `crc32c`, 1 000 000 lookups, seed 42. Without a
//! word file, 100 000 synthetic words are used instead. Pass `all` as the
//! hash to compare every function.

use std::process::ExitCode;

use chainslot_bench::{
    build_table, load_word_file, parse_words, run_lookups, synthetic_words, unique_keys,
};
use chainslot_table::{HashKind, TableConfig};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = args.first().map_or("words.txt", String::as_str);
    let hash = args.get(1).map_or("crc32c", String::as_str);
    let lookups: usize = match args.get(2).map(|s| s.parse()) {
        None => 1_000_000,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            eprintln!("invalid lookup count: {e}");
            return ExitCode::FAILURE;
        }
    };
    let seed: u64 = match args.get(3).map(|s| s.parse()) {
        None => 42,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            eprintln!("invalid seed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let kinds: Vec<HashKind> = if hash == "all" {
        HashKind::ALL.to_vec()
    } else {
        match hash.parse() {
            Ok(kind) => vec![kind],
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        }
    };

    let contents = match load_word_file(path) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cannot read {path} ({e}), using 100000 synthetic words");
            synthetic_words(100_000, seed)
        }
    };
    let keys = unique_keys(parse_words(&contents));
    println!("=== chainslot word lookup ===");
    println!("{} unique words, {lookups} lookups, seed {seed}\n", keys.len());

    let mut config = TableConfig::default();
    config.list.validate_on_mutation = false;

    for kind in kinds {
        let table = match build_table(kind, &keys, &config) {
            Ok(table) => table,
            Err(e) => {
                eprintln!("{kind}: {e}");
                return ExitCode::FAILURE;
            }
        };
        let report = run_lookups(&table, &keys, lookups, seed);
        println!(
            "  {:>10}: {:>8.1} ns/lookup, {}/{} hits | {}",
            kind.name(),
            report.nanos_per_lookup(),
            report.hits,
            report.lookups,
            table.stats(),
        );
    }

    ExitCode::SUCCESS
}
