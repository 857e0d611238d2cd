use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeSet;
use wing_tree::{InOrder, LeftWing, PreOrder, RightWing, Tree};

const N: usize = 10_000;

type Item = (i64, u32);
type Pred = fn(&Item, &Item) -> bool;
type Treap = Tree<Item, Pred, Pred>;

fn taller(a: &Item, b: &Item) -> bool {
    a.1 > b.1
}

fn key_less(a: &Item, b: &Item) -> bool {
    a.0 < b.0
}

fn treap() -> Treap {
    Tree::with_predicates(taller as Pred, key_less as Pred)
}

// ─── Helper functions to generate key sequences ─────────────────────────────

/// Deterministic pseudo-random stream from a simple LCG.
fn lcg(seed: u64, n: usize) -> impl Iterator<Item = u64> {
    let mut x = seed;
    (0..n).map(move |_| {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        x >> 33
    })
}

fn with_priorities(keys: impl Iterator<Item = i64>) -> Vec<Item> {
    keys.zip(lcg(54321, N)).map(|(key, priority)| (key, priority as u32)).collect()
}

fn ordered_items(n: usize) -> Vec<Item> {
    with_priorities(0..n as i64)
}

fn reverse_ordered_items(n: usize) -> Vec<Item> {
    with_priorities((0..n as i64).rev())
}

fn random_items(n: usize) -> Vec<Item> {
    with_priorities(lcg(12345, n).map(|x| x as i64))
}

// ─── Insert Benchmarks ──────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion) {
    for (name, items) in [
        ("insert_ordered", ordered_items(N)),
        ("insert_reverse", reverse_ordered_items(N)),
        ("insert_random", random_items(N)),
    ] {
        let mut group = c.benchmark_group(name);

        group.bench_function(BenchmarkId::new("Tree", N), |b| {
            b.iter(|| {
                let mut tree = treap();
                for &item in &items {
                    tree.insert(item);
                }
                tree
            });
        });

        group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for &item in &items {
                    set.insert(item);
                }
                set
            });
        });

        group.finish();
    }
}

fn bench_insert_at_hint(c: &mut Criterion) {
    let items = ordered_items(N);
    let mut group = c.benchmark_group("insert_at_hint");

    group.bench_function(BenchmarkId::new("Tree/previous", N), |b| {
        b.iter(|| {
            let mut tree = treap();
            let mut hint = tree.end();
            for &item in &items {
                hint = tree.insert_at(hint, item);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("Tree/none", N), |b| {
        b.iter(|| {
            let mut tree = treap();
            tree.extend(items.iter().copied());
            tree
        });
    });

    group.finish();
}

// ─── Traversal Benchmarks ───────────────────────────────────────────────────

fn bench_traverse(c: &mut Criterion) {
    let items = random_items(N);
    let mut tree = treap();
    tree.extend(items.iter().copied());
    let set: BTreeSet<Item> = items.into_iter().collect();

    let mut group = c.benchmark_group("traverse");

    group.bench_function(BenchmarkId::new("Tree/in_left", N), |b| {
        b.iter(|| tree.traverse::<InOrder, LeftWing>().fold(0i64, |acc, &(key, _)| acc.wrapping_add(key)));
    });

    group.bench_function(BenchmarkId::new("Tree/in_right", N), |b| {
        b.iter(|| tree.traverse::<InOrder, RightWing>().fold(0i64, |acc, &(key, _)| acc.wrapping_add(key)));
    });

    group.bench_function(BenchmarkId::new("Tree/pre_left", N), |b| {
        b.iter(|| tree.traverse::<PreOrder, LeftWing>().fold(0i64, |acc, &(key, _)| acc.wrapping_add(key)));
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| set.iter().fold(0i64, |acc, &(key, _)| acc.wrapping_add(key)));
    });

    group.finish();
}

fn bench_accessor_walk(c: &mut Criterion) {
    let mut tree = treap();
    tree.extend(random_items(N));

    c.bench_function("accessor_leftmost_and_back", |b| {
        b.iter(|| {
            let Some(mut cursor) = tree.root_accessor() else {
                return 0;
            };
            while cursor.down_wing::<LeftWing>() {}
            let depth = cursor.depth().unwrap_or_default();
            cursor.root();
            depth
        });
    });
}

// ─── Erase Benchmarks ───────────────────────────────────────────────────────

fn bench_erase(c: &mut Criterion) {
    let items = random_items(N);
    let mut group = c.benchmark_group("erase_all");

    group.bench_function(BenchmarkId::new("Tree/one_by_one", N), |b| {
        b.iter_batched(
            || {
                let mut tree = treap();
                tree.extend(items.iter().copied());
                tree
            },
            |mut tree| {
                while !tree.is_empty() {
                    tree.remove(tree.begin());
                }
                tree
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("Tree/range", N), |b| {
        b.iter_batched(
            || {
                let mut tree = treap();
                tree.extend(items.iter().copied());
                tree
            },
            |mut tree| {
                tree.erase(tree.begin(), tree.end());
                tree
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || items.iter().copied().collect::<BTreeSet<_>>(),
            |mut set| {
                while set.pop_first().is_some() {}
                set
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_insert_at_hint, bench_traverse, bench_accessor_walk, bench_erase);
criterion_main!(benches);
