//! Geometry providers: tile shapes and screen positions per topology
//!
//! Each topology implements `TileGeometry`, a strategy selected once when the
//! board is built. The registry and the selection logic only ever talk to this
//! trait, so they are topology-agnostic.
//!
//! Hexagon boards use offset coordinates. Flat-top hexagons are laid out in
//! "doubled rows": tiles of the same row sit three radii apart and every odd row
//! is shifted half a column pitch to the right, so a row step moves only
//! `radius * sin(60°)` down. Pointy-top boards are the exact transpose of that
//! arrangement, with odd columns shifted down instead.

use std::fmt;
use std::str::FromStr;

use crate::io::configuration::{ABSOLUTE_MARGIN_FACTOR, BoardConfig};
use crate::math::point::Point;
use crate::spatial::coordinate::{GridCoordinate, GridOffset};

/// `sin(60°)`: ratio of a regular hexagon's apothem to its radius
const SIN_60: f64 = 0.866_025_403_784_438_6;

/// Orientation of hexagon tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexOrientation {
    /// First vertex at 0°, flat edges on top and bottom
    FlatTop,
    /// First vertex at 90°, vertices on top and bottom
    PointyTop,
}

impl HexOrientation {
    /// Angle of the first outline vertex in degrees
    pub const fn angle(self) -> f64 {
        match self {
            Self::FlatTop => 0.0,
            Self::PointyTop => 90.0,
        }
    }
}

/// Tiling scheme of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Offset-coordinate hexagons
    Hexagon(HexOrientation),
    /// Uniform square grid
    Rectangle,
}

static FLAT_TOP_HEXAGONS: HexagonGeometry = HexagonGeometry {
    orientation: HexOrientation::FlatTop,
};
static POINTY_TOP_HEXAGONS: HexagonGeometry = HexagonGeometry {
    orientation: HexOrientation::PointyTop,
};
static RECTANGLES: RectangleGeometry = RectangleGeometry;

impl Topology {
    /// Geometry provider implementing this topology
    pub fn geometry(self) -> &'static dyn TileGeometry {
        match self {
            Self::Hexagon(HexOrientation::FlatTop) => &FLAT_TOP_HEXAGONS,
            Self::Hexagon(HexOrientation::PointyTop) => &POINTY_TOP_HEXAGONS,
            Self::Rectangle => &RECTANGLES,
        }
    }

    /// Stable name used in logs and on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hexagon(HexOrientation::FlatTop) => "hexagon-flat",
            Self::Hexagon(HexOrientation::PointyTop) => "hexagon-pointy",
            Self::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hexagon-flat" | "hexagon" | "flat" => Ok(Self::Hexagon(HexOrientation::FlatTop)),
            "hexagon-pointy" | "pointy" => Ok(Self::Hexagon(HexOrientation::PointyTop)),
            "rectangle" | "square" => Ok(Self::Rectangle),
            other => Err(format!("unknown topology '{other}'")),
        }
    }
}

/// Where the grid sits on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layout {
    /// Grid centered on a viewport point, moved by a focus shift
    Relative {
        /// Viewport center the grid is centered on
        center: Point,
        /// Extra translation applied after centering
        shift: Point,
    },
    /// Grid anchored at a fixed margin from the top-left corner
    Absolute,
}

/// Layout inputs shared by every tile of one board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Tile size before scaling
    pub tile_size: f64,
    /// Scale factor applied to all lengths
    pub scale: f64,
    /// Screen placement mode
    pub layout: Layout,
    /// Number of rows, used for centering
    pub rows: usize,
    /// Number of columns, used for centering
    pub columns: usize,
    /// Number of the first row and column
    pub index_base: i32,
}

impl LayoutParams {
    /// Extract the layout inputs from a board configuration
    pub const fn from_config(config: &BoardConfig) -> Self {
        Self {
            tile_size: config.tile_size,
            scale: config.scale,
            layout: config.layout,
            rows: config.rows,
            columns: config.columns,
            index_base: config.index_base,
        }
    }

    /// Screen position of coordinate `(0, 0)` given the pitch along each axis
    ///
    /// The first row and column land at the same place whatever the index base.
    fn origin(&self, column_pitch: f64, row_pitch: f64) -> Point {
        let base = f64::from(self.index_base);
        let first = match self.layout {
            Layout::Relative { center, shift } => Point::new(
                (self.columns as f64 / 2.0).mul_add(-column_pitch, center.x) + shift.x,
                (self.rows as f64 / 2.0).mul_add(-row_pitch, center.y) + shift.y,
            ),
            Layout::Absolute => {
                let margin = ABSOLUTE_MARGIN_FACTOR * self.scale;
                Point::new(margin, margin)
            }
        };
        Point::new(
            base.mul_add(-column_pitch, first.x),
            base.mul_add(-row_pitch, first.y),
        )
    }
}

/// Computed position and outline of one tile
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Geometric center of the tile
    pub center: Point,
    /// Angle of the first outline vertex in degrees
    pub angle: f64,
    /// Outline vertices in drawing order
    pub shape: Vec<Point>,
}

/// Strategy computing shapes and neighbor offsets for one topology
pub trait TileGeometry: fmt::Debug + Send + Sync {
    /// Position and outline of the tile at `coordinate`
    ///
    /// Total for every input: a non-positive size yields a degenerate tile whose
    /// outline points all coincide at its center.
    fn place(&self, coordinate: GridCoordinate, params: &LayoutParams) -> Placement;

    /// Candidate neighbor offsets for the tile at `coordinate`
    fn neighbor_offsets(&self, coordinate: GridCoordinate) -> &'static [GridOffset];

    /// Number of outline vertices per tile
    fn sides(&self) -> usize;
}

/// Regular hexagon tiles in offset coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexagonGeometry {
    /// Flat-top or pointy-top
    pub orientation: HexOrientation,
}

const FLAT_EVEN_ROW: [GridOffset; 6] = [
    GridOffset::new(-2, 0),
    GridOffset::new(-1, -1),
    GridOffset::new(1, -1),
    GridOffset::new(2, 0),
    GridOffset::new(1, 0),
    GridOffset::new(-1, 0),
];

const FLAT_ODD_ROW: [GridOffset; 6] = [
    GridOffset::new(-2, 0),
    GridOffset::new(-1, 0),
    GridOffset::new(1, 0),
    GridOffset::new(2, 0),
    GridOffset::new(1, 1),
    GridOffset::new(-1, 1),
];

// Transposes of the flat-top tables, keyed on column parity
const POINTY_EVEN_COLUMN: [GridOffset; 6] = [
    GridOffset::new(0, -2),
    GridOffset::new(-1, -1),
    GridOffset::new(-1, 1),
    GridOffset::new(0, 2),
    GridOffset::new(0, 1),
    GridOffset::new(0, -1),
];

const POINTY_ODD_COLUMN: [GridOffset; 6] = [
    GridOffset::new(0, -2),
    GridOffset::new(0, -1),
    GridOffset::new(0, 1),
    GridOffset::new(0, 2),
    GridOffset::new(1, 1),
    GridOffset::new(1, -1),
];

impl HexagonGeometry {
    /// Circumradius of a hexagon for the given layout
    pub fn radius(params: &LayoutParams) -> f64 {
        (params.tile_size / 2.0 * params.scale).max(0.0)
    }

    /// Distance between tile centers along (columns, rows)
    pub fn pitch(&self, params: &LayoutParams) -> (f64, f64) {
        let radius = Self::radius(params);
        match self.orientation {
            HexOrientation::FlatTop => (3.0 * radius, radius * SIN_60),
            HexOrientation::PointyTop => (radius * SIN_60, 3.0 * radius),
        }
    }
}

impl TileGeometry for HexagonGeometry {
    fn place(&self, coordinate: GridCoordinate, params: &LayoutParams) -> Placement {
        let radius = Self::radius(params);
        let (column_pitch, row_pitch) = self.pitch(params);
        let origin = params.origin(column_pitch, row_pitch);

        let column = f64::from(coordinate.column);
        let row = f64::from(coordinate.row);

        let center = match self.orientation {
            HexOrientation::FlatTop => {
                let shift = if coordinate.row_is_even() {
                    0.0
                } else {
                    column_pitch / 2.0
                };
                Point::new(
                    column.mul_add(column_pitch, origin.x) + shift,
                    row.mul_add(row_pitch, origin.y),
                )
            }
            HexOrientation::PointyTop => {
                let shift = if coordinate.column_is_even() {
                    0.0
                } else {
                    row_pitch / 2.0
                };
                Point::new(
                    column.mul_add(column_pitch, origin.x),
                    row.mul_add(row_pitch, origin.y) + shift,
                )
            }
        };

        let angle = self.orientation.angle();
        let shape = (0..6)
            .map(|step| center.polar_offset(radius, f64::from(step).mul_add(60.0, angle)))
            .collect();

        Placement {
            center,
            angle,
            shape,
        }
    }

    fn neighbor_offsets(&self, coordinate: GridCoordinate) -> &'static [GridOffset] {
        match self.orientation {
            HexOrientation::FlatTop if coordinate.row_is_even() => &FLAT_EVEN_ROW,
            HexOrientation::FlatTop => &FLAT_ODD_ROW,
            HexOrientation::PointyTop if coordinate.column_is_even() => &POINTY_EVEN_COLUMN,
            HexOrientation::PointyTop => &POINTY_ODD_COLUMN,
        }
    }

    fn sides(&self) -> usize {
        6
    }
}

/// Axis-aligned square tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangleGeometry;

const VON_NEUMANN: [GridOffset; 4] = [
    GridOffset::new(1, 0),
    GridOffset::new(-1, 0),
    GridOffset::new(0, 1),
    GridOffset::new(0, -1),
];

impl RectangleGeometry {
    /// Side length of a tile, which is also the pitch in both axes
    pub fn side(params: &LayoutParams) -> f64 {
        (params.tile_size * params.scale).max(0.0)
    }
}

impl TileGeometry for RectangleGeometry {
    fn place(&self, coordinate: GridCoordinate, params: &LayoutParams) -> Placement {
        let side = Self::side(params);
        let origin = params.origin(side, side);

        // Tiles are anchored by their top-left corner
        let top_left = Point::new(
            f64::from(coordinate.column).mul_add(side, origin.x),
            f64::from(coordinate.row).mul_add(side, origin.y),
        );
        let half = side / 2.0;

        Placement {
            center: top_left + Point::new(half, half),
            angle: 0.0,
            shape: vec![
                top_left,
                top_left + Point::new(side, 0.0),
                top_left + Point::new(side, side),
                top_left + Point::new(0.0, side),
            ],
        }
    }

    fn neighbor_offsets(&self, _coordinate: GridCoordinate) -> &'static [GridOffset] {
        &VON_NEUMANN
    }

    fn sides(&self) -> usize {
        4
    }
}

/// Position, angle and outline of `coordinate` under `topology`
pub fn position_of(
    topology: Topology,
    coordinate: GridCoordinate,
    params: &LayoutParams,
) -> Placement {
    topology.geometry().place(coordinate, params)
}
