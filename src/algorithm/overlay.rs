//! Overlay compositor
//!
//! Overlays are named layers of `(coordinate → style patch)` assignments,
//! painted over the base board in list order. Where two overlays cover the
//! same tile the later one wins, part by part: an overlay that only sets an
//! outline keeps the fill of whatever lies beneath it.
//!
//! Coordinates outside the board are skipped, logged at `warn`, and listed
//! in the returned report; the remaining coordinates are still applied.

use tracing::warn;

use crate::io::error::{BoardError, out_of_range};
use crate::io::style::{Style, StylePatch};
use crate::spatial::coordinate::GridCoordinate;
use crate::spatial::registry::{Board, Tile};

/// Named layer of board state, such as "cover" or "enemy"
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// Category name
    pub name: String,
    /// Style parts this overlay sets
    pub patch: StylePatch,
    /// Tiles the overlay covers
    pub coordinates: Vec<GridCoordinate>,
}

impl Overlay {
    /// Create an overlay covering no tiles yet
    pub fn new(name: impl Into<String>, patch: StylePatch) -> Self {
        Self {
            name: name.into(),
            patch,
            coordinates: Vec::new(),
        }
    }

    /// Add covered coordinates
    #[must_use]
    pub fn with_coordinates(
        mut self,
        coordinates: impl IntoIterator<Item = impl Into<GridCoordinate>>,
    ) -> Self {
        self.coordinates
            .extend(coordinates.into_iter().map(Into::into));
        self
    }
}

/// Overlay coordinate that does not exist on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCoordinate {
    /// Name of the overlay listing the coordinate
    pub overlay: String,
    /// The missing coordinate
    pub coordinate: GridCoordinate,
}

impl SkippedCoordinate {
    /// The error this skip stands for
    pub const fn error(&self) -> BoardError {
        out_of_range(self.coordinate, "overlay application")
    }
}

/// Outcome of applying a list of overlays
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayReport {
    /// Number of (overlay, tile) assignments applied
    pub applied: usize,
    /// Coordinates skipped because no tile exists there
    pub skipped: Vec<SkippedCoordinate>,
}

impl OverlayReport {
    /// Every coordinate was applied
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Paint `overlays` over the current tile styles, in order
pub fn apply(board: &mut Board, overlays: &[Overlay]) -> OverlayReport {
    let mut report = OverlayReport::default();

    for overlay in overlays {
        for &coordinate in &overlay.coordinates {
            let Some(tile) = board
                .id_at(coordinate)
                .and_then(|id| board.tile_mut(id))
            else {
                warn!(
                    overlay = %overlay.name,
                    row = coordinate.row,
                    column = coordinate.column,
                    "overlay coordinate outside the board, skipped"
                );
                report.skipped.push(SkippedCoordinate {
                    overlay: overlay.name.clone(),
                    coordinate,
                });
                continue;
            };

            tile.set_style(tile.style().patched(&overlay.patch));
            report.applied += 1;
        }
    }

    report
}

/// Reset every tile to the base style, then apply `overlays`
pub fn compose(board: &mut Board, overlays: &[Overlay]) -> OverlayReport {
    let ids: Vec<_> = board.tiles().iter().map(Tile::id).collect();
    for id in ids {
        if let Some(tile) = board.tile_mut(id) {
            tile.set_style(Style::BASE);
        }
    }
    apply(board, overlays)
}
