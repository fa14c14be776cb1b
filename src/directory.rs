//! Ordered post directory enumeration.
//!
//! The directory is addressed by the dense ID range `[0, count)` derived
//! from the ledger's post count. Ascending order is a display contract:
//! consumers render posts oldest-created-index-first.
//!
//! IDs shift on deletion, so the range is re-derived from a fresh count on
//! every refresh and never patched incrementally.

use crate::error::{ChainpressError, Result};
use crate::ledger::binding::ContractBinding;
use crate::ledger::types::{Post, PostId};
use tracing::warn;

/// Returns the enumerable post IDs for a directory of `count` posts.
///
/// Empty for `count == 0`, otherwise `0, 1, ..., count - 1` ascending.
/// Pure and deterministic.
pub fn range(count: u64) -> Vec<PostId> {
    (0..count).map(PostId::new).collect()
}

/// Fetches the full directory for the given count, in range order.
///
/// A post that vanishes between the count read and its own read (a
/// concurrent deletion) is skipped rather than aborting the listing; the
/// next refresh converges the view. Any other read failure aborts.
pub async fn fetch(binding: &ContractBinding, count: u64) -> Result<Vec<Post>> {
    let mut posts = Vec::with_capacity(count as usize);
    for id in range(count) {
        match binding.read_post(id).await {
            Ok(post) => posts.push(post),
            Err(ChainpressError::PostNotFound { id }) => {
                warn!(%id, "post vanished during directory fetch, skipping");
            }
            Err(other) => return Err(other),
        }
    }
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_empty_for_zero() {
        assert!(range(0).is_empty());
    }

    #[test]
    fn test_range_is_ascending_and_dense() {
        let ids = range(4);
        assert_eq!(
            ids,
            vec![
                PostId::new(0),
                PostId::new(1),
                PostId::new(2),
                PostId::new(3)
            ]
        );
    }

    #[test]
    fn test_range_length_matches_count() {
        for count in [1u64, 2, 17, 100] {
            assert_eq!(range(count).len() as u64, count);
        }
    }

    #[test]
    fn test_range_is_idempotent() {
        assert_eq!(range(12), range(12));
    }
}
