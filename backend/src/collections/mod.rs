//! Array-backed collections used by the grid engine

pub mod union_find;

pub use union_find::UnionFind;
