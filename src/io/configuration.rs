//! Board configuration surface and geometry constants

use crate::algorithm::overlay::Overlay;
use crate::io::error::{Result, invalid_configuration};
use crate::math::point::Point;
use crate::spatial::geometry::{Layout, Topology};

/// Default tile size before scaling
pub const DEFAULT_TILE_SIZE: f64 = 4.0;

/// Manual scale factor applied to every length (10 = 100%)
pub const DEFAULT_SCALE: f64 = 10.0;

/// Absolute layout keeps this many scale units from the top-left corner
pub const ABSOLUTE_MARGIN_FACTOR: f64 = 2.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed number of rows or columns
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Tolerance for geometric comparisons in screen units
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// Viewport assumed when no window size is known (width, height)
pub const DEFAULT_VIEWPORT: (f64, f64) = (800.0, 600.0);

/// Everything needed to build a board
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Number of rows (must be positive)
    pub rows: usize,
    /// Number of columns (must be positive)
    pub columns: usize,
    /// Tile size before scaling (must be positive)
    pub tile_size: f64,
    /// Tiling scheme
    pub topology: Topology,
    /// Placement of the grid on screen
    pub layout: Layout,
    /// Number of the first row and column
    pub index_base: i32,
    /// Scale factor applied to all lengths (must be positive)
    pub scale: f64,
    /// Overlays applied in order on top of the base style
    pub overlays: Vec<Overlay>,
}

impl BoardConfig {
    /// Configuration with default size, scale and a layout centered on the default viewport
    pub const fn new(rows: usize, columns: usize, topology: Topology) -> Self {
        Self {
            rows,
            columns,
            tile_size: DEFAULT_TILE_SIZE,
            topology,
            layout: Layout::Relative {
                center: Point::new(DEFAULT_VIEWPORT.0 / 2.0, DEFAULT_VIEWPORT.1 / 2.0),
                shift: Point::ORIGIN,
            },
            index_base: 0,
            scale: DEFAULT_SCALE,
            overlays: Vec::new(),
        }
    }

    /// Replace the tile size
    #[must_use]
    pub const fn with_tile_size(mut self, tile_size: f64) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Replace the layout
    #[must_use]
    pub const fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Replace the first row/column number
    #[must_use]
    pub const fn with_index_base(mut self, index_base: i32) -> Self {
        self.index_base = index_base;
        self
    }

    /// Replace the scale factor
    #[must_use]
    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Replace the overlay list
    #[must_use]
    pub fn with_overlays(mut self, overlays: Vec<Overlay>) -> Self {
        self.overlays = overlays;
        self
    }

    /// Reject configurations that cannot produce a board
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if rows or columns are zero or exceed
    /// `MAX_GRID_DIMENSION`, if the tile size or scale is not a positive finite
    /// number, if the layout contains non-finite points, or if the last row or
    /// column number would overflow `i32`.
    pub fn validate(&self) -> Result<()> {
        validate_dimension("rows", self.rows)?;
        validate_dimension("columns", self.columns)?;
        validate_length("tile_size", self.tile_size)?;
        validate_length("scale", self.scale)?;

        if let Layout::Relative { center, shift } = self.layout {
            if !center.is_finite() {
                return Err(invalid_configuration(
                    "layout.center",
                    &center,
                    &"must be finite",
                ));
            }
            if !shift.is_finite() {
                return Err(invalid_configuration(
                    "layout.shift",
                    &shift,
                    &"must be finite",
                ));
            }
        }

        let largest = self.rows.max(self.columns);
        let fits = i32::try_from(largest)
            .ok()
            .and_then(|count| self.index_base.checked_add(count))
            .is_some();
        if !fits {
            return Err(invalid_configuration(
                "index_base",
                &self.index_base,
                &"last row or column number overflows",
            ));
        }

        Ok(())
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_configuration(parameter, &value, &"must be positive"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_configuration(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

fn validate_length(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid_configuration(
            parameter,
            &value,
            &"must be a positive finite number",
        ))
    }
}
