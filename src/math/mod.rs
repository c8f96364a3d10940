//! Planar geometry primitives used by tile placement and line of sight

/// Segment clipping and containment tests against convex polygons
pub mod intersection;
/// Screen-space points, vectors and segments
pub mod point;

pub use point::{Point, Segment};
