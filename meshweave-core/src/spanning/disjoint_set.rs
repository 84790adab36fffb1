//! Array-backed union-find over node indices.
//!
//! `find` compresses every visited link onto the representative. `union`
//! repoints the representative of the right-hand partition at the parent link
//! the left-hand node held before the call, which need not be a
//! representative; later `find` calls still converge because they follow and
//! then flatten the chain.

#[derive(Clone, Debug, Default)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    partitions: usize,
}

impl DisjointSet {
    /// A set of `count` singleton partitions `0..count`.
    pub(crate) fn new(count: usize) -> Self {
        let mut set = Self {
            parent: Vec::with_capacity(count),
            partitions: 0,
        };
        for _ in 0..count {
            set.add();
        }
        set
    }

    /// Appends a new singleton partition and returns its index.
    pub(crate) fn add(&mut self) -> usize {
        let index = self.parent.len();
        self.parent.push(index);
        self.partitions += 1;
        index
    }

    /// Number of disjoint partitions.
    pub(crate) const fn partitions(&self) -> usize {
        self.partitions
    }

    pub(crate) fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the partition of `right` into that of `left`. Returns `false`
    /// when both were already in the same partition.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> bool {
        let link = self.parent[left];
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }
        self.parent[right_root] = link;
        self.partitions -= 1;
        true
    }

    #[cfg(test)]
    pub(crate) fn parent_of(&self, node: usize) -> usize {
        self.parent[node]
    }
}
