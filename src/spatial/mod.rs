//! Spatial data structures for sprite generation
//!
//! This module contains:
//! - Cell coordinates
//! - Validated grid dimensions
//! - Fixed-size grid storage with neighbour queries

/// Column/row cell addressing
pub mod coordinate;
/// Grid storage and dimension handling
pub mod grid;

pub use coordinate::Coordinate;
pub use grid::{Dimensions, Grid};
