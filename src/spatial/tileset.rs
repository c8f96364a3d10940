use bitvec::prelude::*;
use std::fmt;

use crate::spatial::registry::TileId;

/// Fixed-size set of tiles of one board
///
/// Backed by one bit per tile id, so membership tests are O(1) and iteration
/// yields ids in ascending order. Ids beyond the board are ignored on insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSet {
    bits: BitVec,
}

impl TileSet {
    /// Create an empty set for a board with `tile_count` tiles
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
        }
    }

    /// Create a set from a list of ids
    pub fn from_ids(tile_count: usize, ids: impl IntoIterator<Item = TileId>) -> Self {
        let mut set = Self::new(tile_count);
        for id in ids {
            set.insert(id);
        }
        set
    }

    /// Insert a tile id, returning whether it was newly added
    pub fn insert(&mut self, id: TileId) -> bool {
        self.bits
            .get_mut(id.index())
            .is_some_and(|mut bit| !bit.replace(true))
    }

    /// Test tile membership
    pub fn contains(&self, id: TileId) -> bool {
        self.bits.get(id.index()).as_deref() == Some(&true)
    }

    /// Add every tile of `other` to this set
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate the member ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.bits.iter_ones().map(TileId::new)
    }

    /// Collect all member ids
    pub fn to_vec(&self) -> Vec<TileId> {
        self.iter().collect()
    }
}

impl fmt::Display for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileSet({} tiles: {:?})", self.len(), self.to_vec())
    }
}
