//! Weighted quick-union (disjoint-set) over elements `0..n`
//!
//! Each node stores a parent pointer; each root stores the size of its
//! tree. `union` hangs the smaller tree under the larger one and `find`
//! compresses the path it walks, so both operations run in amortized
//! near-constant time.
//!
//! # Critical Invariants
//!
//! - `size[r]` is only meaningful when `r` is a root
//! - Sum of root sizes equals `len()`
//! - The structure never allocates after construction

/// Disjoint-set forest with union by size and path compression.
///
/// # Example
/// ```
/// use percolation_core_rs::collections::UnionFind;
///
/// let mut uf = UnionFind::new(5);
/// assert_eq!(uf.component_count(), 5);
///
/// uf.union(0, 1);
/// uf.union(2, 3);
/// assert!(uf.connected(0, 1));
/// assert!(!uf.connected(0, 2));
///
/// uf.union(1, 3);
/// assert!(uf.connected(0, 2));
/// assert_eq!(uf.component_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Create `n` singleton sets `{0}, {1}, ..., {n-1}`
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Find the root of the set containing `x`
    ///
    /// Every node on the walked path is re-pointed at the root. Iterative
    /// so that long chains on large grids cannot overflow the stack.
    ///
    /// # Panics
    /// Panics if `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets containing `x` and `y`
    ///
    /// The root of the smaller tree is attached under the root of the
    /// larger one. On equal sizes `y`'s root goes under `x`'s root.
    ///
    /// # Returns
    /// `true` if two distinct sets were merged, `false` if `x` and `y`
    /// were already connected.
    ///
    /// # Panics
    /// Panics if `x >= len()` or `y >= len()`.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        if self.size[root_x] < self.size[root_y] {
            self.parent[root_x] = root_y;
            self.size[root_y] += self.size[root_x];
        } else {
            self.parent[root_y] = root_x;
            self.size[root_x] += self.size[root_y];
        }

        self.components -= 1;
        true
    }

    /// `true` if `x` and `y` are in the same set
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Size of the set containing `x`
    pub fn component_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}
