//! Benchmark fixtures for the loam container library.
//!
//! Provides deterministic key and text corpora so bench runs are
//! comparable across machines and revisions.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Build `n` distinct printable keys, deterministically.
///
/// Keys are short ("k" plus a base-36 counter), matching the small-key
/// profile the string map is tuned for.
pub fn key_corpus(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let mut k = String::from("k");
            let mut v = i;
            loop {
                let d = (v % 36) as u32;
                k.push(char::from_digit(d, 36).unwrap());
                v /= 36;
                if v == 0 {
                    break;
                }
            }
            k
        })
        .collect()
}

/// A paragraph of delimiter-separated words for tokenizer benchmarks.
pub fn word_corpus(words: usize) -> String {
    let vocabulary = [
        "arena", "cursor", "span", "token", "probe", "slot", "string", "bucket",
    ];
    let mut out = String::new();
    for i in 0..words {
        if i > 0 {
            out.push(if i % 8 == 7 { ',' } else { ' ' });
        }
        out.push_str(vocabulary[i % vocabulary.len()]);
    }
    out
}
