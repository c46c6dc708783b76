/// Command-line parsing and batch sprite export
pub mod cli;
/// Default constants for generation and export
pub mod configuration;
/// Error types shared by the whole crate
pub mod error;
/// PNG rasterization of boolean grids
pub mod image;
/// Progress display for multi-sprite runs
pub mod progress;
