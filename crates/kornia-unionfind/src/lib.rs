#![deny(missing_docs)]
//! # Kornia UnionFind
//!
//! A disjoint-set (union-find) over a fixed universe of `n` indices, with path
//! halving on lookups and union by size on merges.
//!
//! ```
//! use kornia_unionfind::UnionFind;
//!
//! let mut uf = UnionFind::new(4);
//! assert!(uf.unite(0, 1));
//! assert!(!uf.unite(1, 0));
//! assert_eq!(uf.find(1), uf.find(0));
//! assert_eq!(uf.set_size(0), 2);
//! assert_eq!(uf.num_sets(), 3);
//! ```

/// Error types for the union-find.
pub mod error;

/// Disjoint-set data structure.
pub mod union_find;

pub use crate::error::UnionFindError;
pub use crate::union_find::UnionFind;
