// Criterion benchmarks for wordrank-suggest.
//
// Uses the fixture corpus from tests/data plus a synthetic vocabulary large
// enough for truncated enumeration to matter. Set WORDRANK_CORPUS_PATH to a
// real frequency list to benchmark against it instead.
//
// Run:
//   cargo bench -p wordrank-suggest
//   WORDRANK_CORPUS_PATH=/path/to/frequencies.txt cargo bench -p wordrank-suggest

use criterion::{Criterion, criterion_group, criterion_main};
use wordrank_suggest::{ChainedSuggester, FrequencySuggester, SuggestionSource};

// ---------------------------------------------------------------------------
// Corpus discovery
// ---------------------------------------------------------------------------

fn find_corpus() -> std::path::PathBuf {
    if let Ok(path) = std::env::var("WORDRANK_CORPUS_PATH") {
        let path = std::path::PathBuf::from(path);
        if path.is_file() {
            return path;
        }
        eprintln!("[suggest_bench] {} not found, using fixture", path.display());
    }
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/frequencies.txt")
}

/// Every three-letter lowercase word, ranked in a scrambled but fixed order.
fn synthetic_vocabulary() -> Vec<(String, u32)> {
    let letters: Vec<char> = ('a'..='z').collect();
    let mut words = Vec::with_capacity(26 * 26 * 26);
    for &a in &letters {
        for &b in &letters {
            for &c in &letters {
                let word: String = [a, b, c].iter().collect();
                let rank = (words.len() as u32).wrapping_mul(7919) % 100_003;
                words.push((word, rank));
            }
        }
    }
    words
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_load_corpus(c: &mut Criterion) {
    let path = find_corpus();
    c.bench_function("load_corpus", |b| {
        b.iter(|| {
            std::hint::black_box(FrequencySuggester::from_path(&path).expect("corpus"));
        });
    });
}

fn bench_suggest_top(c: &mut Criterion) {
    let suggester =
        FrequencySuggester::from_entries(synthetic_vocabulary()).expect("synthetic vocabulary");

    c.bench_function("suggest_top_5_single_letter", |b| {
        b.iter(|| std::hint::black_box(suggester.suggest_top("t", 5)));
    });
    c.bench_function("suggest_top_5_empty_prefix", |b| {
        b.iter(|| std::hint::black_box(suggester.suggest_top("", 5)));
    });
    c.bench_function("match_all_single_letter", |b| {
        b.iter(|| std::hint::black_box(suggester.trie().matches("t")));
    });
}

fn bench_chained(c: &mut Criterion) {
    let recent = FrequencySuggester::from_entries([("thanks", 1), ("therapy", 2)]).expect("recent");
    let common = FrequencySuggester::from_path(find_corpus()).expect("corpus");
    let chain = ChainedSuggester::default().with_source(recent).with_source(common);

    c.bench_function("chained_suggest_top_5", |b| {
        b.iter(|| std::hint::black_box(chain.suggest_top("th", 5)));
    });
}

criterion_group!(benches, bench_load_corpus, bench_suggest_top, bench_chained);
criterion_main!(benches);
