//! Spatial data structures for game boards
//!
//! This module contains spatial-related functionality including:
//! - Grid coordinates and offsets
//! - Geometry providers for each topology
//! - The tile registry of a built board
//! - Compact tile sets

/// Grid coordinates and offsets
pub mod coordinate;
/// Tile shapes and screen positions per topology
pub mod geometry;
/// Board construction and coordinate/tile indices
pub mod registry;
/// Bitset of tile ids
pub mod tileset;

pub use coordinate::GridCoordinate;
pub use geometry::Topology;
pub use registry::{Board, Tile, TileId};
pub use tileset::TileSet;
