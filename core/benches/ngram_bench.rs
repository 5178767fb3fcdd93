use criterion::{criterion_group, criterion_main, Criterion};
use ngram_core::tokenizer::generate_ngrams;
use ngram_core::SearchEngine;

const ARTICLE: &str = "Go and Java are both statically typed, compiled languages used to build \
large backend systems. Go favours small binaries, fast builds and goroutines, while Java \
leans on the JVM, a mature garbage collector and a vast ecosystem of libraries.";

fn bench_ngrams(c: &mut Criterion) {
    c.bench_function("generate_ngrams_article", |b| b.iter(|| generate_ngrams(ARTICLE)));
}

fn bench_search(c: &mut Criterion) {
    let mut engine = SearchEngine::default();
    for i in 0..500 {
        let text = format!("{ARTICLE} revision {i}");
        engine.add_text(&format!("https://medium.com/article-{i}"), &text).expect("fresh id");
    }
    c.bench_function("search_500_docs", |b| b.iter(|| engine.search("goroutines and the garbage collector")));
}

criterion_group!(benches, bench_ngrams, bench_search);
criterion_main!(benches);
