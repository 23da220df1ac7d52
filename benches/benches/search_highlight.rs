// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_options::{NormalizeOptions, RawOption, normalize};
use understory_search::{
    ContainsMatcher, FilterOptions, FoldedMatcher, HighlightOptions, filter_tree, highlight,
    normalize_text, search_text,
};

const WORDS: &[&str] = &[
    "São", "Paulo", "Đà", "Nẵng", "Zürich", "Kraków", "Málaga", "Reykjavík", "Ørsted", "Łódź",
    "Genève", "Córdoba", "Hà", "Nội", "Brno", "Porto",
];

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn pick(&mut self) -> &'static str {
        WORDS[(self.next_u64() % WORDS.len() as u64) as usize]
    }
}

fn gen_labels(count: usize, words: usize) -> Vec<String> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| (0..words).map(|_| rng.pick()).collect::<Vec<_>>().join(" "))
        .collect()
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    for &words in &[2usize, 16, 128] {
        let label = gen_labels(1, words).pop().unwrap_or_default();
        group.throughput(Throughput::Bytes(label.len() as u64));
        group.bench_function(format!("normalize_w{words}"), |b| {
            b.iter(|| black_box(normalize_text(&label).len()));
        });
        group.bench_function(format!("search_w{words}"), |b| {
            b.iter(|| black_box(search_text(&label, "nang").len()));
        });
        let options = HighlightOptions::new().tag("mark").class_name("hit");
        group.bench_function(format!("highlight_w{words}"), |b| {
            b.iter(|| {
                let spans = search_text(&label, "zurich");
                black_box(highlight(&label, &spans, &options).len())
            });
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_tree");
    for &count in &[100usize, 1000] {
        let items: Vec<RawOption> = gen_labels(count, 3)
            .into_iter()
            .enumerate()
            .map(|(i, label)| RawOption::leaf(i as i64, label))
            .collect();
        let tree = normalize(&items, &NormalizeOptions::default()).unwrap();
        let opts = FilterOptions::default();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("folded_n{count}"), |b| {
            b.iter(|| black_box(filter_tree(&tree, "lodz", &FoldedMatcher, &opts).len()));
        });
        group.bench_function(format!("contains_n{count}"), |b| {
            b.iter(|| black_box(filter_tree(&tree, "łódź", &ContainsMatcher, &opts).len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_text, bench_filter);
criterion_main!(benches);
