//! Grid registry: the tiles of one board and their coordinate index
//!
//! Tiles are created once per build, in row-major order, and receive
//! consecutive `TileId`s. Two indices are kept in sync:
//! - coordinate → tile id, a dense `rows × columns` array
//! - tile id → tile, which stores its own immutable coordinate
//!
//! Rebuilding with new dimensions discards every tile and both indices.

use ndarray::Array2;
use num_traits::ToPrimitive;
use tracing::debug;

use crate::io::configuration::BoardConfig;
use crate::io::error::{BoardError, Result, invalid_configuration};
use crate::io::style::Style;
use crate::math::intersection::polygon_contains;
use crate::math::point::Point;
use crate::spatial::coordinate::GridCoordinate;
use crate::spatial::geometry::{LayoutParams, Placement, TileGeometry, Topology};

/// Stable identifier of a tile within one build of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(usize);

impl TileId {
    /// Wrap a raw tile index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw index into the board's tile list
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One tile of a board
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    id: TileId,
    coordinate: GridCoordinate,
    placement: Placement,
    style: Style,
}

impl Tile {
    /// Identifier within the board
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Grid coordinate, fixed for the tile's lifetime
    pub const fn coordinate(&self) -> GridCoordinate {
        self.coordinate
    }

    /// Geometric center on screen
    pub const fn center(&self) -> Point {
        self.placement.center
    }

    /// Angle of the first outline vertex in degrees
    pub const fn angle(&self) -> f64 {
        self.placement.angle
    }

    /// Outline vertices in drawing order
    pub fn shape(&self) -> &[Point] {
        &self.placement.shape
    }

    /// Base style with overlays applied
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Replace the base style
    pub const fn set_style(&mut self, style: Style) {
        self.style = style;
    }
}

/// A built board: topology, layout and the registry of its tiles
#[derive(Debug, Clone)]
pub struct Board {
    topology: Topology,
    params: LayoutParams,
    tiles: Vec<Tile>,
    index: Array2<TileId>,
}

impl Board {
    /// Validate a configuration and build its tiles with the base style
    ///
    /// Overlays listed in the configuration are not applied here; see
    /// `algorithm::overlay::apply`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the configuration fails validation.
    pub fn build(config: &BoardConfig) -> Result<Self> {
        config.validate()?;
        Self::from_geometry(config.topology, LayoutParams::from_config(config))
    }

    /// Build a board from layout parameters without further validation
    ///
    /// Invokes the topology's geometry provider exactly once per coordinate in
    /// `[base, base + rows) × [base, base + columns)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if a row or column number does not fit in `i32`.
    pub fn from_geometry(topology: Topology, params: LayoutParams) -> Result<Self> {
        let geometry = topology.geometry();
        let index_base = params.index_base;
        let (rows, columns) = (params.rows, params.columns);

        let mut tiles = Vec::with_capacity(rows * columns);
        let mut ids = Vec::with_capacity(rows * columns);

        for row in 0..rows {
            let row_number = grid_number("rows", row, index_base)?;
            for column in 0..columns {
                let column_number = grid_number("columns", column, index_base)?;
                let coordinate = GridCoordinate::new(row_number, column_number);
                let id = TileId::new(tiles.len());

                tiles.push(Tile {
                    id,
                    coordinate,
                    placement: geometry.place(coordinate, &params),
                    style: Style::BASE,
                });
                ids.push(id);
            }
        }

        let index = Array2::from_shape_vec((rows, columns), ids).map_err(|error| {
            BoardError::InvariantViolation {
                reason: format!("tile index shape mismatch: {error}"),
            }
        })?;

        debug!(
            topology = %topology,
            rows,
            columns,
            sides = geometry.sides(),
            tiles = tiles.len(),
            "board built"
        );

        Ok(Self {
            topology,
            params,
            tiles,
            index,
        })
    }

    /// Discard every tile and build again with new dimensions
    ///
    /// Styles are reset to the base style; overlays must be re-applied.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the new dimensions are rejected, in which
    /// case the board is left unchanged.
    pub fn rebuild(&mut self, config: &BoardConfig) -> Result<()> {
        *self = Self::build(config)?;
        Ok(())
    }

    /// Tiling scheme
    pub const fn topology(&self) -> Topology {
        self.topology
    }

    /// Geometry provider for this board's topology
    pub fn geometry(&self) -> &'static dyn TileGeometry {
        self.topology.geometry()
    }

    /// Layout inputs the tiles were placed with
    pub const fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.params.rows
    }

    /// Number of columns
    pub const fn columns(&self) -> usize {
        self.params.columns
    }

    /// Number of the first row and column
    pub const fn index_base(&self) -> i32 {
        self.params.index_base
    }

    /// Number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Board has no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles in id order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile by id
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Mutable tile by id
    pub fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id.index())
    }

    /// Tile id registered at `coordinate`
    pub fn id_at(&self, coordinate: GridCoordinate) -> Option<TileId> {
        let row = local_index(coordinate.row, self.params.index_base)?;
        let column = local_index(coordinate.column, self.params.index_base)?;
        self.index.get([row, column]).copied()
    }

    /// Tile registered at `coordinate`
    pub fn tile_at_coordinate(&self, coordinate: GridCoordinate) -> Option<&Tile> {
        self.id_at(coordinate).and_then(|id| self.tile(id))
    }

    /// Coordinate of a tile id
    pub fn coordinate_of(&self, id: TileId) -> Option<GridCoordinate> {
        self.tile(id).map(Tile::coordinate)
    }

    /// A tile is registered at `coordinate`
    pub fn contains(&self, coordinate: GridCoordinate) -> bool {
        self.id_at(coordinate).is_some()
    }

    /// Tile whose outline contains a screen point, boundary inclusive
    ///
    /// Where outlines touch, the tile with the lowest id wins.
    pub fn tile_at(&self, point: Point) -> Option<TileId> {
        self.tiles
            .iter()
            .find(|tile| polygon_contains(tile.shape(), point))
            .map(Tile::id)
    }
}

fn grid_number(parameter: &'static str, offset: usize, base: i32) -> Result<i32> {
    offset
        .to_i32()
        .and_then(|offset| base.checked_add(offset))
        .ok_or_else(|| invalid_configuration(parameter, &offset, &"does not fit in i32"))
}

fn local_index(number: i32, base: i32) -> Option<usize> {
    number.checked_sub(base)?.to_usize()
}
