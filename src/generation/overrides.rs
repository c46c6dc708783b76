//! Forced-value overrides applied after the dilation recompute

use std::collections::HashSet;
use std::fmt;

use crate::io::error::{Result, SpriteError};
use crate::spatial::{Coordinate, Grid};

/// Which override set a coordinate belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideKind {
    /// Cell is forced to `true`
    ForcedFull,
    /// Cell is forced to `false`
    ForcedEmpty,
}

impl OverrideKind {
    /// The set a coordinate must not already be in before joining this one
    pub const fn opposite(self) -> Self {
        match self {
            Self::ForcedFull => Self::ForcedEmpty,
            Self::ForcedEmpty => Self::ForcedFull,
        }
    }
}

impl fmt::Display for OverrideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForcedFull => f.write_str("forced full"),
            Self::ForcedEmpty => f.write_str("forced empty"),
        }
    }
}

/// Pair of disjoint coordinate sets forcing final cell values
///
/// Bounds are not checked here; the owning stage validates coordinates
/// against its own dimensions before inserting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideSet {
    forced_full: HashSet<Coordinate>,
    forced_empty: HashSet<Coordinate>,
}

impl OverrideSet {
    /// Create an empty override set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `coord` to the `kind` set
    ///
    /// # Errors
    ///
    /// Returns `ConflictingOverride` if `coord` is already in the opposing
    /// set; neither set is modified
    pub fn insert(&mut self, coord: Coordinate, kind: OverrideKind) -> Result<()> {
        let opposite = kind.opposite();
        if self.set(opposite).contains(&coord) {
            return Err(SpriteError::ConflictingOverride {
                coordinate: coord,
                existing: opposite,
            });
        }
        self.set_mut(kind).insert(coord);
        Ok(())
    }

    /// Remove `coord` from the `kind` set, returning whether it was present
    pub fn remove(&mut self, coord: Coordinate, kind: OverrideKind) -> bool {
        self.set_mut(kind).remove(&coord)
    }

    /// The set holding `coord`, if any
    pub fn kind_of(&self, coord: Coordinate) -> Option<OverrideKind> {
        if self.forced_full.contains(&coord) {
            Some(OverrideKind::ForcedFull)
        } else if self.forced_empty.contains(&coord) {
            Some(OverrideKind::ForcedEmpty)
        } else {
            None
        }
    }

    /// Coordinates forced to `true`
    pub const fn forced_full(&self) -> &HashSet<Coordinate> {
        &self.forced_full
    }

    /// Coordinates forced to `false`
    pub const fn forced_empty(&self) -> &HashSet<Coordinate> {
        &self.forced_empty
    }

    /// Total number of overridden coordinates
    pub fn len(&self) -> usize {
        self.forced_full.len() + self.forced_empty.len()
    }

    /// Whether no coordinate is overridden
    pub fn is_empty(&self) -> bool {
        self.forced_full.is_empty() && self.forced_empty.is_empty()
    }

    /// Write the forced values into `grid`
    ///
    /// Forced-full cells are written first and forced-empty cells second, so
    /// emptiness wins should the sets ever overlap. Coordinates outside the
    /// grid are skipped.
    pub fn apply(&self, grid: &mut Grid<bool>) {
        for &coord in &self.forced_full {
            if let Some(cell) = grid.cell_mut(coord) {
                *cell = true;
            }
        }
        for &coord in &self.forced_empty {
            if let Some(cell) = grid.cell_mut(coord) {
                *cell = false;
            }
        }
    }

    const fn set(&self, kind: OverrideKind) -> &HashSet<Coordinate> {
        match kind {
            OverrideKind::ForcedFull => &self.forced_full,
            OverrideKind::ForcedEmpty => &self.forced_empty,
        }
    }

    const fn set_mut(&mut self, kind: OverrideKind) -> &mut HashSet<Coordinate> {
        match kind {
            OverrideKind::ForcedFull => &mut self.forced_full,
            OverrideKind::ForcedEmpty => &mut self.forced_empty,
        }
    }
}
