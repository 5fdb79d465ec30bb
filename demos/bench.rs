#[macro_use]
extern crate bencher;

use bencher::{black_box, Bencher};
use rand::{thread_rng, RngCore};
use sparse_index_set::SparseIndexSet;

const BITS: usize = 2 << 16;

fn bench_sparse_index_set(b: &mut Bencher) {
    let mut r = thread_rng();
    let mut set = SparseIndexSet::new(BITS);
    b.iter(|| {
        set.clear();
        for _ in 0..1000 {
            set.insert((r.next_u32() as usize) % BITS);
        }
        for x in set.iter() {
            black_box(x);
        }
    });
}

fn bench_hash_set(b: &mut Bencher) {
    let mut r = thread_rng();
    let mut set = std::collections::HashSet::new();
    b.iter(|| {
        set.clear();
        for _ in 0..1000 {
            set.insert((r.next_u32() as usize) % BITS);
        }
        for x in set.iter() {
            black_box(x);
        }
    });
}

fn bench_bit_set(b: &mut Bencher) {
    let mut r = thread_rng();
    let mut set = bit_set::BitSet::with_capacity(BITS);
    b.iter(|| {
        set.clear();
        for _ in 0..1000 {
            set.insert((r.next_u32() as usize) % BITS);
        }
        for x in set.iter() {
            black_box(x);
        }
    });
}

benchmark_group!(
    benches,
    bench_sparse_index_set,
    bench_hash_set,
    bench_bit_set
);
benchmark_main!(benches);
