use sparse_index_set::{index_set, SparseIndexSet};

fn main() {
    let mut set: SparseIndexSet<u32> = index_set![64; 4, 32, 16, 24, 63];
    assert!(set.contains(32));
    assert!(set.contains(63));

    set.insert(25);
    set.remove(4);

    println!("Set contents:");
    for x in set.iter() {
        println!("{x}");
    }
}
