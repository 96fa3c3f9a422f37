// fredlex - A lexer for the FRED Modeling Language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Performance benchmarks for the FRED lexer.
//!
//! Run with: cargo bench
//!
//! Results are saved to target/criterion/ with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fredlex::fred::{Classifier, FredLexer, Vocabulary};
use fredlex::lexer::Verbatim;
use fredlex::TokenKind;

// ============================================================================
// Benchmark Inputs
// ============================================================================

const CONDITION: &str = r#"# Influenza
condition INF {
  start_state = S
  transmission_mode = respiratory

  state S {
    wait(0)
    default(S)
  }

  state E {
    wait(24 * lognormal(2.5, 0.1))
    if (bernoulli(0.33)) then next(Is)
    default(Ia)
  }
}

variables {
  global trans_rate = 1.0e-3
  personal days_sick
}
"#;

/// Repeat the sample model `count` times.
fn model(count: usize) -> String {
    CONDITION.repeat(count)
}

// ============================================================================
// Lexer Benchmarks
// ============================================================================

fn bench_tokenize(c: &mut Criterion) {
    let lexer = FredLexer::new().unwrap();
    let mut group = c.benchmark_group("tokenize");

    for (name, count) in [("small", 1), ("medium", 50), ("large", 1000)] {
        let source = model(count);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("fred", name), &source, |b, src| {
            b.iter(|| lexer.tokenize(black_box(src)))
        });
    }

    group.finish();
}

fn bench_classifier_overhead(c: &mut Criterion) {
    let lexer = FredLexer::new().unwrap();
    let source = model(50);
    let mut group = c.benchmark_group("classifier");
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("verbatim", |b| {
        b.iter(|| lexer.table().tokens(black_box(&source), Verbatim).count())
    });
    group.bench_function("vocabulary", |b| {
        b.iter(|| lexer.tokens(black_box(&source)).count())
    });

    group.finish();
}

// ============================================================================
// Micro Benchmarks
// ============================================================================

fn bench_micro(c: &mut Criterion) {
    let classifier = Classifier::new(Vocabulary::fred());
    let lexer = FredLexer::new().unwrap();
    let mut group = c.benchmark_group("micro");

    group.bench_function("reclassify_keyword", |b| {
        b.iter(|| classifier.reclassify(TokenKind::Name, black_box("condition")))
    });
    group.bench_function("reclassify_plain_name", |b| {
        b.iter(|| classifier.reclassify(TokenKind::Name, black_box("days_sick")))
    });
    group.bench_function("error_tokens", |b| {
        let source = ":".repeat(1000);
        b.iter(|| lexer.tokenize(black_box(&source)))
    });
    group.bench_function("build_table", |b| b.iter(FredLexer::new));

    group.finish();
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_classifier_overhead,
    bench_micro
);
criterion_main!(benches);
