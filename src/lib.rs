//! A fixed-capacity set of unsigned integers that trades space for speed.
//!
//! [`SparseIndexSet`] holds values in `0..capacity` and supports insertion,
//! removal, lookup, and clearing in constant time. Clearing never touches
//! the backing arrays, which makes the set cheap to reuse in hot loops.
//!
//! ```
//! use sparse_index_set::SparseIndexSet;
//!
//! let mut set: SparseIndexSet<u32> = SparseIndexSet::new(64);
//! set.insert(3);
//! set.insert(42);
//! assert!(set.contains(42));
//!
//! set.clear();
//! assert!(!set.contains(3));
//! ```

mod error;
mod sparse_index_set;

pub use error::{Error, Result};
pub use sparse_index_set::{Iter, SparseIndexSet};

/// Builds a [`SparseIndexSet`] with the given capacity and members.
///
/// ```
/// use sparse_index_set::{index_set, SparseIndexSet};
///
/// let set: SparseIndexSet<u32> = index_set![64; 4, 32, 16];
/// assert!(set.contains(32));
/// assert_eq!(set.len(), 3);
/// ```
#[macro_export]
macro_rules! index_set {
    ($capacity:expr) => {
        $crate::SparseIndexSet::new($capacity)
    };
    ($capacity:expr; $($value:expr),* $(,)?) => {{
        let mut set = $crate::SparseIndexSet::new($capacity);
        $(
            set.insert($value);
        )*
        set
    }};
}
