use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_btreeset_get(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = BTreeSet::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        set.insert(key);
        values.push(key);
    }

    c.bench_function("bench btreeset get", move |b| {
        b.iter(|| {
            for key in &values {
                black_box(set.get(key));
            }
        })
    });
}

macro_rules! search_tree_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use search_trees::$module_name::$type_name;
                use rand::Rng;
                use super::NUM_OF_OPERATIONS;
                use criterion::{Criterion, black_box};

                pub fn bench_insert(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut tree = $type_name::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            tree.insert(rng.next_u32());
                        }
                    }));
                }

                pub fn bench_insert_ascending(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert ascending", stringify!($module_name)), |b| b.iter(|| {
                        let mut tree = $type_name::new();
                        for key in 0..NUM_OF_OPERATIONS {
                            tree.insert(key);
                        }
                    }));
                }

                pub fn bench_search(c: &mut Criterion) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut tree = $type_name::new();
                    let mut values = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        tree.insert(key);
                        values.push(key);
                    }

                    c.bench_function(&format!("bench {} search", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &values {
                            black_box(tree.search(key));
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreeset_insert,
            bench_btreeset_get,
            $(
                $module_name::bench_insert,
                $module_name::bench_insert_ascending,
                $module_name::bench_search,
            )*
        );
    }
}

search_tree_benches!(
    bst: Bst,
    avl_tree: AvlTree,
    red_black_tree: RedBlackTree,
);

criterion_main!(benches);
