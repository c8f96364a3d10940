//! Boundaries of the board core: configuration, errors, styles and text formats

/// Command-line front-end
pub mod cli;
/// Configuration surface and constants
pub mod configuration;
/// Error taxonomy
pub mod error;
/// Overlay definition file format
pub mod overlay_file;
/// Activation events in text form
pub mod script;
/// Style descriptors and updates for the renderer
pub mod style;
