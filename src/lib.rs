//! # Relaxed Supernode Identification
//!
//! This library implements the symbolic preprocessing step that groups
//! columns of a sparse matrix into *relaxed supernodes* ahead of sparse
//! LU factorization: runs of consecutive columns that the numeric phase
//! can process as one dense block, amortizing per-column bookkeeping
//! overhead.
//!
//! ## Pipeline
//!
//! 1. **Postorder numbering**: compute a postorder permutation of the
//!    elimination forest (children before parents)
//! 2. **Renumbering**: re-express the forest in postorder rank space
//! 3. **Descendant counting**: one forward sweep gives the strict
//!    descendant count of every node
//! 4. **Chain identification**: greedily absorb ancestors whose subtree
//!    stays under the relaxation threshold, validate that each chain
//!    maps onto a contiguous original column range, and fall back to
//!    per-leaf singletons when it does not
//!
//! The computation is purely combinatorial: integer arrays only, no
//! floating-point arithmetic, no numeric pivoting decisions.
//!
//! ## Usage Example
//!
//! ```
//! use sparsym::{relaxed_supernodes, EliminationTree};
//!
//! // Forest over columns 0..5: 0 -> 2 <- 1, 2 -> 4 <- 3, 4 is a root.
//! let etree = EliminationTree::from_parents(vec![2, 2, 4, 4, 5, 5])?;
//! let snodes = relaxed_supernodes(&etree, 3);
//! assert_eq!(snodes.relax_end(0), Some(2)); // columns 0..=2 form one block
//! # Ok::<(), sparsym::EtreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - each implements a stage of the symbolic pipeline
pub mod etree;     // Validated parent-pointer elimination forests
pub mod postorder; // Postorder permutations and their inverses
pub mod relax;     // Relaxed supernode identification

// Re-exports for convenience
pub use etree::EliminationTree;
pub use postorder::{InversePostorder, Postorder};
pub use relax::{relaxed_supernodes, relaxed_supernodes_postordered, RelaxedSupernodes, EMPTY};

use thiserror::Error;

/// Errors produced while validating an elimination forest
///
/// Validation happens once, at [`EliminationTree::from_parents`]; every
/// algorithm past that boundary is total and cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EtreeError {
    /// The parent array is empty, so there is no sentinel slot
    #[error("parent array is empty: missing sentinel slot")]
    Empty,

    /// The sentinel entry is not its own parent
    #[error("sentinel entry must be its own parent: entry {len} holds {found}")]
    SentinelNotFixed {
        /// Value found in the sentinel slot
        found: usize,
        /// Forest size n (the expected sentinel value)
        len: usize,
    },

    /// A parent id lies outside the valid node range
    #[error("parent {parent} of node {node} is out of range for a forest of {len} columns")]
    ParentOutOfRange {
        /// Offending node
        node: usize,
        /// Its recorded parent
        parent: usize,
        /// Forest size n
        len: usize,
    },

    /// A node's parent does not come after it in column order
    ///
    /// Elimination forests are heap ordered: the parent of column j is
    /// the later column that absorbs its fill, so `parent > j` holds for
    /// every well-formed input. Heap order also rules out cycles.
    #[error("node {node} has parent {parent}, but elimination forests require parent > node")]
    NotHeapOrdered {
        /// Offending node
        node: usize,
        /// Its recorded parent
        parent: usize,
    },
}
