/// Neighbor lookup per topology
pub mod adjacency;
/// Board session owning the tiles and the selection
pub mod gameboard;
/// Sight line resolution between tile centers
pub mod line_of_sight;
/// Ordered overlay composition
pub mod overlay;
/// Selection and targeting state machine
pub mod selection;
