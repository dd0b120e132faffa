// ABOUTME: Criterion benchmarks for rounding and locale-aware formatting
// ABOUTME: Measures round, format_currency, format_number, and page serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the numeric helpers and formatters.
//!
//! Compares the free functions, which resolve locale and currency on every
//! call, against a `NumberFormatter` that resolves them once.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use app_shared::config::FormatConfig;
use app_shared::formatters::{format_currency, format_number, format_percent, NumberFormatter};
use app_shared::numeric::{is_numeric, round};
use app_shared::{ApiResponse, PaginatedResponse};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const SAMPLE_VALUES: [f64; 6] = [0.0, 1.005, 1999.9, -42.125, 1_234_567.891, 98_765_432.1];

fn bench_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("round");

    for decimals in [0, 2, 6] {
        group.bench_with_input(
            BenchmarkId::from_parameter(decimals),
            &decimals,
            |b, &decimals| {
                b.iter(|| {
                    for value in SAMPLE_VALUES {
                        black_box(round(black_box(value), decimals));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_format_currency(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_currency");

    for (currency, locale) in [("USD", "en-US"), ("EUR", "de-DE"), ("INR", "en-IN")] {
        group.bench_function(format!("{currency}_{locale}"), |b| {
            b.iter(|| {
                for value in SAMPLE_VALUES {
                    black_box(format_currency(black_box(value), currency, locale).unwrap());
                }
            });
        });
    }

    let formatter = NumberFormatter::new(&FormatConfig::default()).unwrap();
    group.bench_function("formatter_USD_en-US", |b| {
        b.iter(|| {
            for value in SAMPLE_VALUES {
                black_box(formatter.currency(black_box(value)));
            }
        });
    });

    group.finish();
}

fn bench_format_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_number");

    for locale in ["en-US", "fr-FR", "sv-SE"] {
        group.bench_function(locale, |b| {
            b.iter(|| {
                for value in SAMPLE_VALUES {
                    black_box(format_number(black_box(value), locale).unwrap());
                }
            });
        });
    }

    group.bench_function("percent", |b| {
        b.iter(|| {
            for value in SAMPLE_VALUES {
                black_box(format_percent(black_box(value), 1));
            }
        });
    });

    group.finish();
}

fn bench_is_numeric(c: &mut Criterion) {
    let inputs = ["42", " 3.5 ", "-1e3", "0x1A", "12px", "Infinity", ""];

    c.bench_function("is_numeric", |b| {
        b.iter(|| {
            for input in inputs {
                black_box(is_numeric(black_box(input)));
            }
        });
    });
}

fn bench_page_serialization(c: &mut Criterion) {
    let amounts: Vec<String> = (0..100)
        .map(|i| format_currency(f64::from(i) * 10.25, "USD", "en-US").unwrap())
        .collect();
    let response = ApiResponse::new(PaginatedResponse::new(amounts, 1_000, 1, 100));

    c.bench_function("serialize_paginated_amounts", |b| {
        b.iter(|| serde_json::to_vec(black_box(&response)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_round,
    bench_format_currency,
    bench_format_number,
    bench_is_numeric,
    bench_page_serialization,
);
criterion_main!(benches);
