//! Command-line front-end: build a board and replay activation events

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::algorithm::gameboard::Gameboard;
use crate::io::configuration::{BoardConfig, DEFAULT_TILE_SIZE};
use crate::io::error::{BoardError, Result};
use crate::io::overlay_file::load_overlays;
use crate::io::script::{Activation, parse_point, parse_viewport};
use crate::io::style::StyleUpdate;
use crate::math::point::Point;
use crate::spatial::coordinate::GridCoordinate;
use crate::spatial::geometry::{HexOrientation, Layout, Topology};

/// Default number of rows on the command line
pub const DEFAULT_ROWS: usize = 5;
/// Default number of columns on the command line
pub const DEFAULT_COLUMNS: usize = 6;

/// Tiling scheme as named on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TopologyArg {
    /// Flat-top hexagons
    HexagonFlat,
    /// Pointy-top hexagons
    HexagonPointy,
    /// Squares
    Rectangle,
}

impl From<TopologyArg> for Topology {
    fn from(value: TopologyArg) -> Self {
        match value {
            TopologyArg::HexagonFlat => Self::Hexagon(HexOrientation::FlatTop),
            TopologyArg::HexagonPointy => Self::Hexagon(HexOrientation::PointyTop),
            TopologyArg::Rectangle => Self::Rectangle,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gameboards")]
#[command(
    author,
    version,
    about = "Build a hexagon or rectangle game board and replay tile activations"
)]
/// Command-line arguments for the board tool
pub struct Cli {
    /// Activation events in order: `ROW,COLUMN`, `@X,Y` (screen point) or `none`
    #[arg(value_name = "EVENT")]
    pub events: Vec<Activation>,

    /// Number of rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of columns
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Tile size before scaling
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub size: f64,

    /// Tiling scheme
    #[arg(short, long, value_enum, default_value_t = TopologyArg::HexagonFlat)]
    pub topology: TopologyArg,

    /// Anchor the grid at the top-left corner instead of centering it
    #[arg(short, long)]
    pub absolute: bool,

    /// Viewport size used to center the grid
    #[arg(long, value_parser = parse_viewport, default_value = "800x600")]
    pub viewport: (f64, f64),

    /// Focus shift applied after centering
    #[arg(long, value_parser = parse_point, default_value = "0,0", allow_hyphen_values = true)]
    pub shift: Point,

    /// Number of the first row and column
    #[arg(short = 'b', long, default_value_t = 0, allow_negative_numbers = true)]
    pub index_base: i32,

    /// Overlay definition file
    #[arg(short, long)]
    pub overlays: Option<PathBuf>,

    /// Print only the final selection summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Screen layout selected by the flags
    pub const fn layout(&self) -> Layout {
        if self.absolute {
            Layout::Absolute
        } else {
            Layout::Relative {
                center: Point::new(self.viewport.0 / 2.0, self.viewport.1 / 2.0),
                shift: self.shift,
            }
        }
    }

    /// Board configuration described by the flags, with overlays loaded
    ///
    /// # Errors
    ///
    /// Returns an error if the overlay file cannot be read or parsed.
    pub fn board_config(&self) -> Result<BoardConfig> {
        let overlays = match &self.overlays {
            Some(path) => load_overlays(path)?,
            None => Vec::new(),
        };

        Ok(BoardConfig::new(self.rows, self.columns, self.topology.into())
            .with_tile_size(self.size)
            .with_layout(self.layout())
            .with_index_base(self.index_base)
            .with_overlays(overlays))
    }
}

/// Install the `tracing` subscriber used by the binary
///
/// Honors `RUST_LOG`; defaults to `info` for this crate and `warn` elsewhere.
/// Log lines go to stderr so stdout stays machine-readable.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,gameboards=info"));

    // A subscriber may already be installed by an embedding host
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Replays the command line's events against a freshly built board
pub struct SessionRunner {
    cli: Cli,
}

impl SessionRunner {
    /// Create a runner for parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the board, replay every event and write the updates to `out`
    ///
    /// Events naming coordinates outside the board are reported and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the overlay file is
    /// unusable, or writing to `out` fails.
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let mut gameboard = Gameboard::new(self.cli.board_config()?)?;

        if !self.cli.quiet {
            for skipped in &gameboard.overlay_report().skipped {
                emit(
                    out,
                    format_args!("# skipped overlay '{}': {}", skipped.overlay, skipped.error()),
                )?;
            }
            emit(out, format_args!("# initial"))?;
            write_updates(out, &gameboard.full_paint())?;
        }

        for (index, event) in self.cli.events.iter().enumerate() {
            let result = match event {
                Activation::Outside => gameboard.activate(None),
                Activation::Coordinate(coordinate) => gameboard.activate(Some(*coordinate)),
                Activation::Point(point) => gameboard.activate_at(*point),
            };

            let updates = match result {
                Ok(updates) => updates,
                Err(error @ BoardError::CoordinateOutOfRange { .. }) => {
                    emit(out, format_args!("# event {index} {event}: {error}"))?;
                    continue;
                }
                Err(error) => return Err(error),
            };

            if !self.cli.quiet {
                emit(
                    out,
                    format_args!("# event {index} {event} -> {}", gameboard.state().phase()),
                )?;
                write_updates(out, &updates)?;
            }
        }

        emit(
            out,
            format_args!(
                "selected={} target={} adjacent=[{}] colliding=[{}]",
                describe(gameboard.selected()),
                describe(gameboard.target()),
                join(&gameboard.adjacent().unwrap_or_default()),
                join(&gameboard.colliding().unwrap_or_default()),
            ),
        )
    }
}

fn write_updates(out: &mut impl Write, updates: &[StyleUpdate]) -> Result<()> {
    for update in updates {
        emit(out, format_args!("{update}"))?;
    }
    Ok(())
}

fn emit(out: &mut impl Write, line: std::fmt::Arguments<'_>) -> Result<()> {
    writeln!(out, "{line}").map_err(|source| BoardError::FileSystem {
        path: PathBuf::from("<output>"),
        operation: "write updates",
        source,
    })
}

fn describe(coordinate: Option<GridCoordinate>) -> String {
    coordinate
        .as_ref()
        .map_or_else(|| "none".to_string(), ToString::to_string)
}

fn join(coordinates: &[GridCoordinate]) -> String {
    coordinates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
