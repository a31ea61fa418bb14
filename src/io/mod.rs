//! Input/output operations, configuration and error handling

/// Command-line interface and job orchestration
pub mod cli;
/// Runtime constants and defaults
pub mod configuration;
/// Error types and validation helpers
pub mod error;
/// PNG export of collapsed grids
pub mod image;
/// Tile color palettes
pub mod palette;
/// Preset cells and random seed pre-filling
pub mod prefill;
/// Terminal progress display
pub mod progress;
/// Text grid loading and writing
pub mod sample;
/// Animated GIF export of collapse histories
pub mod visualization;
