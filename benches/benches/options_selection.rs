// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_options::{NormalizeOptions, RawOption, TreeMode, Value, normalize};
use understory_selection::{SelectMode, SelectionStore, is_equals, toggle_values};

/// `groups` groups of `per_group` options each, as a flat marker list.
fn gen_flat(groups: usize, per_group: usize) -> Vec<RawOption> {
    let mut out = Vec::with_capacity(groups * (per_group + 1));
    for g in 0..groups {
        out.push(RawOption::group(format!("g{g}"), format!("Group {g}")));
        for i in 0..per_group {
            let id = (g * per_group + i) as i64;
            out.push(RawOption::leaf(id, format!("Option {id}")));
        }
    }
    out
}

/// The same shape as [`gen_flat`], with children referencing their group.
fn gen_referenced(groups: usize, per_group: usize) -> Vec<RawOption> {
    let mut out = Vec::with_capacity(groups * (per_group + 1));
    for g in 0..groups {
        let gid = format!("g{g}");
        out.push(RawOption::leaf(gid.clone(), format!("Group {g}")));
        for i in 0..per_group {
            let id = (g * per_group + i) as i64;
            out.push(RawOption::leaf(id, format!("Option {id}")).with_attr("parent", gid.as_str()));
        }
    }
    out
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for &(groups, per_group) in &[(10usize, 10usize), (50, 20), (100, 50)] {
        let n = groups * (per_group + 1);
        group.throughput(Throughput::Elements(n as u64));

        let flat = gen_flat(groups, per_group);
        let opts = NormalizeOptions::new(TreeMode::FlatGroups);
        group.bench_function(format!("flat_groups_n{n}"), |b| {
            b.iter(|| black_box(normalize(&flat, &opts).unwrap().leaf_count()));
        });

        let referenced = gen_referenced(groups, per_group);
        let opts = NormalizeOptions::new(TreeMode::ChildReference);
        group.bench_function(format!("child_reference_n{n}"), |b| {
            b.iter(|| black_box(normalize(&referenced, &opts).unwrap().leaf_count()));
        });
    }
    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle");
    for &per_group in &[10usize, 100, 1000] {
        let members: Vec<Value> = (0..per_group as i64).map(Value::Int).collect();
        let half: Vec<Value> = members.iter().step_by(2).cloned().collect();
        group.throughput(Throughput::Elements(per_group as u64));

        group.bench_function(format!("fill_group_n{per_group}"), |b| {
            b.iter(|| black_box(toggle_values(&members, &half, -1).len()));
        });
        group.bench_function(format!("capped_fill_n{per_group}"), |b| {
            b.iter(|| black_box(toggle_values(&members, &half, per_group as i64 / 2 + 1).len()));
        });
        group.bench_function(format!("is_equals_n{per_group}"), |b| {
            let mut reversed = members.clone();
            reversed.reverse();
            b.iter(|| black_box(is_equals(&members, &reversed)));
        });
    }

    let tree = normalize(&gen_flat(20, 50), &NormalizeOptions::default()).unwrap();
    group.bench_function("store_group_clicks", |b| {
        b.iter_batched(
            || SelectionStore::new(SelectMode::Multiple, 0, Vec::<Value>::new()),
            |mut store| {
                for node in &tree {
                    store.toggle(node);
                }
                black_box(store.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_toggle);
criterion_main!(benches);
