//! Parent-pointer elimination forests
//!
//! The forest over matrix columns is stored as a flat parent array of
//! length n+1: entry `i` holds the parent of column `i`, and the extra
//! slot `n` is a sentinel root that is its own parent. Top-level columns
//! point at the sentinel. Only ancestor walks and rank lookups are ever
//! needed downstream, so no child lists are materialized here.

use crate::EtreeError;

/// Validated elimination forest over columns `0..n` with sentinel root `n`
///
/// Invariants, checked once at construction:
/// - the array holds n+1 entries and the sentinel slot is a fixed point
/// - every parent id is at most n
/// - the forest is heap ordered (`parent > node`), which is how
///   elimination trees of real matrices always come out and which makes
///   cycles impossible
///
/// All algorithms borrow the tree read-only; a call can never leave the
/// caller's forest changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EliminationTree {
    parents: Vec<usize>,
}

impl EliminationTree {
    /// Validate a raw parent array (length n+1, sentinel in slot n)
    pub fn from_parents(parents: Vec<usize>) -> Result<Self, EtreeError> {
        if parents.is_empty() {
            return Err(EtreeError::Empty);
        }
        let n = parents.len() - 1;
        if parents[n] != n {
            return Err(EtreeError::SentinelNotFixed {
                found: parents[n],
                len: n,
            });
        }
        for (node, &parent) in parents[..n].iter().enumerate() {
            if parent > n {
                return Err(EtreeError::ParentOutOfRange {
                    node,
                    parent,
                    len: n,
                });
            }
            if parent <= node {
                return Err(EtreeError::NotHeapOrdered { node, parent });
            }
        }
        Ok(Self { parents })
    }

    /// Number of columns n in the forest (excluding the sentinel)
    pub fn len(&self) -> usize {
        self.parents.len() - 1
    }

    /// Whether the forest has no columns at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parent of `node`, or `None` for top-level columns
    pub fn parent(&self, node: usize) -> Option<usize> {
        let parent = self.parents[node];
        (parent != self.len()).then_some(parent)
    }

    /// Raw parent array including the sentinel slot
    pub fn parents(&self) -> &[usize] {
        &self.parents
    }

    /// Number of top-level columns (trees in the forest)
    pub fn num_roots(&self) -> usize {
        let n = self.len();
        self.parents[..n].iter().filter(|&&p| p == n).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_forest() {
        let et = EliminationTree::from_parents(vec![2, 2, 4, 4, 5, 5]).unwrap();
        assert_eq!(et.len(), 5);
        assert_eq!(et.parent(0), Some(2));
        assert_eq!(et.parent(4), None);
        assert_eq!(et.num_roots(), 1);
    }

    #[test]
    fn accepts_empty_forest() {
        let et = EliminationTree::from_parents(vec![0]).unwrap();
        assert_eq!(et.len(), 0);
        assert!(et.is_empty());
    }

    #[test]
    fn rejects_missing_sentinel_slot() {
        assert_eq!(
            EliminationTree::from_parents(vec![]),
            Err(EtreeError::Empty)
        );
    }

    #[test]
    fn rejects_moved_sentinel() {
        assert_eq!(
            EliminationTree::from_parents(vec![1, 2, 0]),
            Err(EtreeError::SentinelNotFixed { found: 0, len: 2 })
        );
    }

    #[test]
    fn rejects_out_of_range_parent() {
        assert_eq!(
            EliminationTree::from_parents(vec![7, 2, 2]),
            Err(EtreeError::ParentOutOfRange {
                node: 0,
                parent: 7,
                len: 2
            })
        );
    }

    #[test]
    fn rejects_backward_parent() {
        // 2 -> 0 points backwards, which no elimination tree produces
        assert_eq!(
            EliminationTree::from_parents(vec![1, 3, 0, 3]),
            Err(EtreeError::NotHeapOrdered { node: 2, parent: 0 })
        );
    }

    #[test]
    fn rejects_self_loop() {
        assert_eq!(
            EliminationTree::from_parents(vec![0, 2]),
            Err(EtreeError::NotHeapOrdered { node: 0, parent: 0 })
        );
    }

    #[test]
    fn counts_roots_in_a_forest() {
        // Two trees: 0 -> 1, 2 -> 3, with 1 and 3 top-level
        let et = EliminationTree::from_parents(vec![1, 4, 3, 4, 4]).unwrap();
        assert_eq!(et.num_roots(), 2);
    }
}
