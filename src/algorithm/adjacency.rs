//! Topology-correct neighbor lookup
//!
//! The geometry provider supplies candidate offsets for a tile (hexagon
//! offsets depend on row or column parity); a candidate is a neighbor exactly
//! when the registry holds a tile at the resulting coordinate. Boundary tiles
//! therefore simply have fewer neighbors.

use crate::spatial::coordinate::GridCoordinate;
use crate::spatial::registry::{Board, TileId};
use crate::spatial::tileset::TileSet;

/// Neighbor ids of the tile at `coordinate`, in the provider's offset order
///
/// Never contains the tile itself. Returns an empty list if no tile is
/// registered at `coordinate`.
pub fn neighbor_ids(board: &Board, coordinate: GridCoordinate) -> Vec<TileId> {
    if !board.contains(coordinate) {
        return Vec::new();
    }

    board
        .geometry()
        .neighbor_offsets(coordinate)
        .iter()
        .filter_map(|offset| coordinate.checked_offset(*offset))
        .filter(|candidate| *candidate != coordinate)
        .filter_map(|candidate| board.id_at(candidate))
        .collect()
}

/// Neighbor set of a tile
///
/// Returns an empty set for an id that is not part of `board`.
pub fn neighbors_of(board: &Board, id: TileId) -> TileSet {
    let neighbors = board
        .coordinate_of(id)
        .map(|coordinate| neighbor_ids(board, coordinate))
        .unwrap_or_default();
    TileSet::from_ids(board.len(), neighbors)
}

/// Neighbor coordinates of the tile at `coordinate`
pub fn neighbor_coordinates(board: &Board, coordinate: GridCoordinate) -> Vec<GridCoordinate> {
    neighbor_ids(board, coordinate)
        .into_iter()
        .filter_map(|id| board.coordinate_of(id))
        .collect()
}
