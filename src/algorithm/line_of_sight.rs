//! Line of sight between two tile centers
//!
//! The sight line is the straight segment between the origin's and the
//! target's centers. A third tile obstructs it when the segment passes through
//! the interior of that tile's outline; grazing a vertex or running along an
//! edge does not count. Every tile is tested, which is linear in board size.

use crate::io::error::{BoardError, Result};
use crate::math::intersection::segment_crosses_polygon;
use crate::math::point::Segment;
use crate::spatial::registry::{Board, Tile, TileId};
use crate::spatial::tileset::TileSet;

/// Result of resolving one line of sight
#[derive(Debug, Clone, PartialEq)]
pub struct LineOfSight {
    /// Segment from the origin center to the target center
    pub segment: Segment,
    /// Tiles other than origin and target crossed by the segment
    pub colliding: TileSet,
}

/// Compute the sight line from `origin` to `target` and the tiles it crosses
///
/// # Errors
///
/// Returns `InvariantViolation` if either id is not a tile of `board`.
pub fn resolve(board: &Board, origin: TileId, target: TileId) -> Result<LineOfSight> {
    let endpoint = |id: TileId, role: &str| {
        board
            .tile(id)
            .map(Tile::center)
            .ok_or_else(|| BoardError::InvariantViolation {
                reason: format!("line of sight {role} {id:?} is not on the board"),
            })
    };

    let segment = Segment::new(endpoint(origin, "origin")?, endpoint(target, "target")?);

    let colliding = TileSet::from_ids(
        board.len(),
        board
            .tiles()
            .iter()
            .filter(|tile| tile.id() != origin && tile.id() != target)
            .filter(|tile| segment_crosses_polygon(&segment, tile.shape()))
            .map(Tile::id),
    );

    Ok(LineOfSight { segment, colliding })
}
