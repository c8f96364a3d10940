//! Geometry and interaction engine for tile-based game boards
//!
//! Builds hexagon (flat-top or pointy-top) and rectangle boards from plain
//! configuration values, answers adjacency queries, layers named overlays,
//! and runs the selection/targeting state machine with line-of-sight
//! obstruction. Rendering is left to the host: every interaction yields the
//! `(coordinate, style)` pairs that need repainting.

#![forbid(unsafe_code)]

/// Adjacency, overlays, line of sight and the selection state machine
pub mod algorithm;
/// Configuration, errors, styles and the command-line front-end
pub mod io;
/// Planar geometry primitives
pub mod math;
/// Coordinates, geometry providers and the tile registry
pub mod spatial;

pub use algorithm::gameboard::Gameboard;
pub use io::configuration::BoardConfig;
pub use io::error::{BoardError, Result};
