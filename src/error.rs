use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors reported by the checked operations of [`SparseIndexSet`](crate::SparseIndexSet).
///
/// Values are widened to `u64` so the error type does not depend on the
/// member type of the set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("failed to allocate storage for a set of capacity {capacity}")]
    Allocation { capacity: usize },

    #[error("value {value} is out of range for a set of capacity {capacity}")]
    OutOfRange { value: u64, capacity: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            Error::OutOfRange {
                value: 9,
                capacity: 4
            }
            .to_string(),
            "value 9 is out of range for a set of capacity 4"
        );
        assert_eq!(
            Error::Allocation { capacity: 12 }.to_string(),
            "failed to allocate storage for a set of capacity 12"
        );
    }
}
