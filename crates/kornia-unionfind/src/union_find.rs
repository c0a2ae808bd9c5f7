use crate::error::UnionFindError;

/// A disjoint-set (union-find) data structure over the indices `0..len`.
///
/// Lookups through [`UnionFind::find`] apply path halving, merges attach the
/// root of the smaller set below the root of the larger one. Together they
/// give amortized near-constant time per operation.
///
/// Passing an index outside `0..len` to one of the panicking methods is a
/// caller bug and aborts with an [`UnionFindError::IndexOutOfRange`] message.
/// Use the `try_*` variants to get the error back instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<usize>,
    // only meaningful at roots
    size: Vec<usize>,
    num_sets: usize,
}

impl UnionFind {
    /// Creates a new UnionFind structure with `len` singleton sets.
    pub fn new(len: usize) -> Self {
        log::debug!("Creating UnionFind with {} elements", len);
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            num_sets: len,
        }
    }

    /// Returns the number of elements in the UnionFind structure.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the structure has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[inline]
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Returns the representative (root) of the set containing `id`.
    ///
    /// Every visited node is re-linked to its grandparent on the way up, which
    /// keeps later lookups short.
    ///
    /// # Panics
    ///
    /// Panics if `id >= self.len()`.
    #[track_caller]
    pub fn find(&mut self, id: usize) -> usize {
        self.assert_index(id);
        self.find_halving(id)
    }

    /// Returns the representative (root) of the set containing `id` without
    /// modifying the structure.
    ///
    /// Always agrees with [`UnionFind::find`].
    ///
    /// # Panics
    ///
    /// Panics if `id >= self.len()`.
    #[track_caller]
    pub fn find_readonly(&self, id: usize) -> usize {
        self.assert_index(id);
        self.find_root(id)
    }

    /// Unites the sets containing `aid` and `bid`.
    ///
    /// Returns `true` if two distinct sets were merged and `false` if both
    /// elements already belonged to the same set.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= self.len()`.
    #[track_caller]
    pub fn unite(&mut self, aid: usize, bid: usize) -> bool {
        self.assert_index(aid);
        self.assert_index(bid);
        let (kept, absorbed) = self.unite_halving(aid, bid);
        kept != absorbed
    }

    /// Unites the sets rooted at `aroot` and `broot`.
    ///
    /// Both arguments must already be roots, e.g. obtained from
    /// [`UnionFind::find`]. The root of the larger set survives; on a tie
    /// `aroot` survives.
    ///
    /// # Returns
    ///
    /// The pair `(kept, absorbed)` of roots as they were before the merge, or
    /// `(aroot, aroot)` if `aroot == broot`, in which case nothing changes.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= self.len()`. In debug builds it also
    /// panics if either index is not a root.
    #[track_caller]
    pub fn unite_roots(&mut self, aroot: usize, broot: usize) -> (usize, usize) {
        self.assert_index(aroot);
        self.assert_index(broot);
        self.debug_assert_roots(aroot, broot);
        self.merge_roots(aroot, broot)
    }

    /// Returns the number of elements in the set containing `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id >= self.len()`.
    #[track_caller]
    pub fn set_size(&mut self, id: usize) -> usize {
        self.assert_index(id);
        let root = self.find_halving(id);
        self.size[root]
    }

    /// Returns the number of elements in the set containing `id` without
    /// modifying the structure.
    ///
    /// # Panics
    ///
    /// Panics if `id >= self.len()`.
    #[track_caller]
    pub fn set_size_readonly(&self, id: usize) -> usize {
        self.assert_index(id);
        self.size[self.find_root(id)]
    }

    /// Returns `true` if `aid` and `bid` belong to the same set.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= self.len()`.
    #[track_caller]
    pub fn same_set(&mut self, aid: usize, bid: usize) -> bool {
        self.find(aid) == self.find(bid)
    }

    /// Returns `true` if `id` is the representative of its set.
    ///
    /// # Panics
    ///
    /// Panics if `id >= self.len()`.
    #[track_caller]
    pub fn is_root(&self, id: usize) -> bool {
        self.assert_index(id);
        self.parent[id] == id
    }

    /// Checked version of [`UnionFind::find`].
    pub fn try_find(&mut self, id: usize) -> Result<usize, UnionFindError> {
        self.check_index(id)?;
        Ok(self.find_halving(id))
    }

    /// Checked version of [`UnionFind::find_readonly`].
    pub fn try_find_readonly(&self, id: usize) -> Result<usize, UnionFindError> {
        self.check_index(id)?;
        Ok(self.find_root(id))
    }

    /// Checked version of [`UnionFind::unite`].
    pub fn try_unite(&mut self, aid: usize, bid: usize) -> Result<bool, UnionFindError> {
        self.check_index(aid)?;
        self.check_index(bid)?;
        let (kept, absorbed) = self.unite_halving(aid, bid);
        Ok(kept != absorbed)
    }

    /// Checked version of [`UnionFind::unite_roots`].
    ///
    /// Only the bounds are reported as an error; passing non-root indices is
    /// still a debug assertion.
    pub fn try_unite_roots(
        &mut self,
        aroot: usize,
        broot: usize,
    ) -> Result<(usize, usize), UnionFindError> {
        self.check_index(aroot)?;
        self.check_index(broot)?;
        self.debug_assert_roots(aroot, broot);
        Ok(self.merge_roots(aroot, broot))
    }

    /// Checked version of [`UnionFind::set_size`].
    pub fn try_set_size(&mut self, id: usize) -> Result<usize, UnionFindError> {
        self.check_index(id)?;
        let root = self.find_halving(id);
        Ok(self.size[root])
    }

    /// Resets the UnionFind structure to its initial state.
    pub fn reset(&mut self) {
        log::debug!("Resetting UnionFind with {} elements", self.len());
        self.parent
            .iter_mut()
            .enumerate()
            .for_each(|(i, parent)| *parent = i);
        self.size.fill(1);
        self.num_sets = self.parent.len();
    }

    #[inline]
    fn check_index(&self, id: usize) -> Result<(), UnionFindError> {
        if id < self.parent.len() {
            Ok(())
        } else {
            Err(UnionFindError::IndexOutOfRange {
                index: id,
                len: self.parent.len(),
            })
        }
    }

    #[inline]
    #[track_caller]
    fn assert_index(&self, id: usize) {
        if let Err(err) = self.check_index(id) {
            panic!("{err}");
        }
    }

    #[inline]
    #[track_caller]
    fn debug_assert_roots(&self, aroot: usize, broot: usize) {
        debug_assert!(self.parent[aroot] == aroot, "{aroot} is not a root");
        debug_assert!(self.parent[broot] == broot, "{broot} is not a root");
    }

    fn find_halving(&mut self, mut id: usize) -> usize {
        while self.parent[id] != id {
            self.parent[id] = self.parent[self.parent[id]];
            id = self.parent[id];
        }
        id
    }

    fn find_root(&self, mut id: usize) -> usize {
        while self.parent[id] != id {
            id = self.parent[id];
        }
        id
    }

    fn unite_halving(&mut self, aid: usize, bid: usize) -> (usize, usize) {
        let aroot = self.find_halving(aid);
        let broot = self.find_halving(bid);
        self.merge_roots(aroot, broot)
    }

    fn merge_roots(&mut self, mut aroot: usize, mut broot: usize) -> (usize, usize) {
        if aroot == broot {
            return (aroot, aroot);
        }

        // ties keep `aroot`
        if self.size[aroot] < self.size[broot] {
            std::mem::swap(&mut aroot, &mut broot);
        }

        self.parent[broot] = aroot;
        self.size[aroot] += self.size[broot];
        self.num_sets -= 1;

        log::trace!(
            "Merged root {} into {} (set size {})",
            broot,
            aroot,
            self.size[aroot]
        );

        (aroot, broot)
    }
}
