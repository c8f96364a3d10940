//! Interactive board session
//!
//! `Gameboard` ties one built `Board` to one `SelectionMachine` and is the
//! object a host drives: build it from a configuration, paint the initial
//! `full_paint`, then forward each activation and paint the returned updates.
//! Events are processed one at a time to completion.

use tracing::{debug, info};

use crate::algorithm::overlay::{self, Overlay, OverlayReport};
use crate::algorithm::selection::{SelectionMachine, SelectionState};
use crate::io::configuration::BoardConfig;
use crate::io::error::Result;
use crate::io::style::{Style, StyleUpdate};
use crate::math::point::Point;
use crate::spatial::coordinate::GridCoordinate;
use crate::spatial::registry::Board;
use crate::spatial::tileset::TileSet;

/// A board plus its selection state
#[derive(Debug, Clone)]
pub struct Gameboard {
    config: BoardConfig,
    board: Board,
    selection: SelectionMachine,
    overlay_report: OverlayReport,
}

impl Gameboard {
    /// Validate `config`, build the board and apply its overlays
    ///
    /// Overlay coordinates outside the board are skipped and recorded in
    /// `overlay_report`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the configuration is rejected.
    pub fn new(config: BoardConfig) -> Result<Self> {
        let mut board = Board::build(&config)?;
        let overlay_report = overlay::apply(&mut board, &config.overlays);

        info!(
            topology = %board.topology(),
            rows = board.rows(),
            columns = board.columns(),
            overlays = config.overlays.len(),
            skipped = overlay_report.skipped.len(),
            "gameboard ready"
        );

        Ok(Self {
            config,
            board,
            selection: SelectionMachine::new(),
            overlay_report,
        })
    }

    /// Configuration the board was last built from
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The built board
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Current selection state
    pub const fn state(&self) -> &SelectionState {
        self.selection.state()
    }

    /// Outcome of the last overlay application
    pub const fn overlay_report(&self) -> &OverlayReport {
        &self.overlay_report
    }

    /// Forward an activation at a grid coordinate (`None` = outside the board)
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfRange` if the coordinate is not on the board.
    pub fn activate(&mut self, activated: Option<GridCoordinate>) -> Result<Vec<StyleUpdate>> {
        self.selection.activate(&self.board, activated)
    }

    /// Forward an activation at a screen point, hit-testing it against the tiles
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` only if the selection state is corrupt.
    pub fn activate_at(&mut self, point: Point) -> Result<Vec<StyleUpdate>> {
        let hit = self.board.tile_at(point);
        debug!(%point, hit = ?hit, "activation at point");
        self.selection.activate_tile(&self.board, hit)
    }

    /// Drop the target but keep the selection
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` only if the selection state is corrupt.
    pub fn clear_target(&mut self) -> Result<Vec<StyleUpdate>> {
        self.selection.clear_target(&self.board)
    }

    /// Rebuild with new dimensions, dropping the selection
    ///
    /// Returns the updates for a full repaint of the new board.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the new dimensions are rejected; the
    /// current board and selection are then kept.
    pub fn rebuild(&mut self, rows: usize, columns: usize) -> Result<Vec<StyleUpdate>> {
        let mut config = self.config.clone();
        config.rows = rows;
        config.columns = columns;

        let mut board = Board::build(&config)?;
        self.overlay_report = overlay::apply(&mut board, &config.overlays);
        self.board = board;
        self.config = config;
        self.selection.clear();

        Ok(self.full_paint())
    }

    /// Replace the overlay list and re-compose every tile's base style
    ///
    /// Returns updates for the tiles whose displayed style changed.
    pub fn set_overlays(&mut self, overlays: Vec<Overlay>) -> Vec<StyleUpdate> {
        let before = self.full_paint();
        self.overlay_report = overlay::compose(&mut self.board, &overlays);
        self.config.overlays = overlays;

        before
            .into_iter()
            .zip(self.full_paint())
            .filter(|(old, new)| old != new)
            .map(|(_, new)| new)
            .collect()
    }

    /// Updates painting every tile in its current style
    pub fn full_paint(&self) -> Vec<StyleUpdate> {
        self.selection.full_paint(&self.board)
    }

    /// Style the tile at `coordinate` is currently displayed with
    pub fn display_style(&self, coordinate: GridCoordinate) -> Option<Style> {
        self.board
            .id_at(coordinate)
            .and_then(|id| self.selection.display_style(&self.board, id))
    }

    /// Coordinate of the selected tile
    pub fn selected(&self) -> Option<GridCoordinate> {
        self.state()
            .selected()
            .and_then(|id| self.board.coordinate_of(id))
    }

    /// Coordinate of the target tile
    pub fn target(&self) -> Option<GridCoordinate> {
        self.state()
            .target()
            .and_then(|id| self.board.coordinate_of(id))
    }

    /// Coordinates of the selected tile's neighbors, sorted
    pub fn adjacent(&self) -> Option<Vec<GridCoordinate>> {
        self.state().adjacent().map(|set| self.coordinates(set))
    }

    /// Coordinates of the tiles obstructing the sight line, sorted
    pub fn colliding(&self) -> Option<Vec<GridCoordinate>> {
        self.state().colliding().map(|set| self.coordinates(set))
    }

    fn coordinates(&self, set: &TileSet) -> Vec<GridCoordinate> {
        let mut coordinates: Vec<_> = set
            .iter()
            .filter_map(|id| self.board.coordinate_of(id))
            .collect();
        coordinates.sort_unstable();
        coordinates
    }
}
