// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation and layout selection.
//!
//! Measures the performance of:
//! - Wrap-around navigation over the artwork ring
//! - Width classification for the two-pane layout

use art_space::domain::gallery::{next, previous, ArtworkIndex, GalleryState};
use art_space::domain::layout::Breakpoints;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Benchmark navigation operations (next/previous).
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("next_full_cycle", |b| {
        b.iter(|| {
            let mut index = ArtworkIndex::FIRST;
            for _ in 0..4 {
                index = next(black_box(index));
            }
            black_box(index);
        });
    });

    group.bench_function("previous_full_cycle", |b| {
        b.iter(|| {
            let mut index = ArtworkIndex::FIRST;
            for _ in 0..4 {
                index = previous(black_box(index));
            }
            black_box(index);
        });
    });

    group.bench_function("state_advance_retreat", |b| {
        let mut state = GalleryState::new();
        b.iter(|| {
            black_box(state.advance());
            black_box(state.retreat());
        });
    });

    group.finish();
}

/// Benchmark layout selection across a sweep of widths.
fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_selection");
    let breakpoints = Breakpoints::default();

    group.bench_function("layout_for_sweep", |b| {
        b.iter(|| {
            for width in (320..=1600).step_by(40) {
                black_box(breakpoints.layout_for(black_box(width as f32)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_navigate, bench_layout);
criterion_main!(benches);
