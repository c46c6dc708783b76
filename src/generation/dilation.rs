//! Draw-around dilation: outline the upstream shape, then apply overrides
//!
//! Evaluation runs in two ordered phases:
//!
//! 1. Recompute. Every output cell is derived from the upstream snapshot
//!    alone. A filled cell becomes empty; an empty cell becomes filled when
//!    at least one orthogonal neighbour is filled upstream.
//! 2. Override. Forced-full coordinates are set to `true`, then forced-empty
//!    coordinates are set to `false`.

use crate::generation::overrides::{OverrideKind, OverrideSet};
use crate::generation::traits::{SpriteGenerator, TransformRule};
use crate::generation::transform::Transform;
use crate::io::error::{Result, invalid_coordinate};
use crate::spatial::{Coordinate, Dimensions, Grid};

/// Dilation rule together with its forced-value overrides
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawAround {
    overrides: OverrideSet,
}

impl DrawAround {
    /// Rule with no overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Current overrides
    pub const fn overrides(&self) -> &OverrideSet {
        &self.overrides
    }

    // Phase 1 value for a single cell, read from the upstream snapshot only
    fn recompute(upstream: &Grid<bool>, coord: Coordinate) -> bool {
        if upstream.cell(coord).copied().unwrap_or(false) {
            return false;
        }
        upstream
            .dimensions()
            .orthogonal_neighbours(coord)
            .into_iter()
            .any(|neighbour| upstream.cell(neighbour).copied().unwrap_or(false))
    }
}

impl TransformRule for DrawAround {
    fn output_dimensions(&self, upstream: Dimensions) -> Dimensions {
        upstream
    }

    fn apply(&self, upstream: &Grid<bool>, output: Dimensions) -> Grid<bool> {
        let mut grid = Grid::from_fn(output, |coord| Self::recompute(upstream, coord));
        self.overrides.apply(&mut grid);
        grid
    }
}

/// Stage that outlines its upstream's shape without changing dimensions
pub type DilationTransform<G> = Transform<DrawAround, G>;

impl<G: SpriteGenerator> Transform<DrawAround, G> {
    /// Take ownership of `upstream` with empty override sets
    pub fn new(upstream: G) -> Self {
        Self::from_parts(upstream, DrawAround::new())
    }

    /// Take ownership of `upstream` with initial overrides
    ///
    /// Coordinates are validated one at a time, forced-full first, exactly as
    /// the individual mutators would.
    ///
    /// # Errors
    ///
    /// Returns the first `InvalidCoordinate` or `ConflictingOverride` met;
    /// no stage is built in that case
    pub fn with_overrides(
        upstream: G,
        forced_full: impl IntoIterator<Item = Coordinate>,
        forced_empty: impl IntoIterator<Item = Coordinate>,
    ) -> Result<Self> {
        let mut stage = Self::new(upstream);
        for coord in forced_full {
            stage.add_forced_full(coord)?;
        }
        for coord in forced_empty {
            stage.add_forced_empty(coord)?;
        }
        Ok(stage)
    }

    /// Current overrides
    pub const fn overrides(&self) -> &OverrideSet {
        self.rule().overrides()
    }

    /// Force `coord` to `true` in every subsequent output
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `coord` lies outside this stage's dimensions (`InvalidCoordinate`)
    /// - `coord` is already forced empty (`ConflictingOverride`)
    pub fn add_forced_full(&mut self, coord: Coordinate) -> Result<()> {
        self.add_override(coord, OverrideKind::ForcedFull)
    }

    /// Force `coord` to `false` in every subsequent output
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `coord` lies outside this stage's dimensions (`InvalidCoordinate`)
    /// - `coord` is already forced full (`ConflictingOverride`)
    pub fn add_forced_empty(&mut self, coord: Coordinate) -> Result<()> {
        self.add_override(coord, OverrideKind::ForcedEmpty)
    }

    /// Stop forcing `coord` to `true`; absent coordinates are ignored
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` if `coord` lies outside this stage's dimensions
    pub fn remove_forced_full(&mut self, coord: Coordinate) -> Result<()> {
        self.remove_override(coord, OverrideKind::ForcedFull)
    }

    /// Stop forcing `coord` to `false`; absent coordinates are ignored
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` if `coord` lies outside this stage's dimensions
    pub fn remove_forced_empty(&mut self, coord: Coordinate) -> Result<()> {
        self.remove_override(coord, OverrideKind::ForcedEmpty)
    }

    fn validate(&self, coord: Coordinate) -> Result<()> {
        if self.is_valid_coordinate(coord) {
            Ok(())
        } else {
            Err(invalid_coordinate(coord, self.width(), self.height()))
        }
    }

    fn add_override(&mut self, coord: Coordinate, kind: OverrideKind) -> Result<()> {
        self.validate(coord)?;
        self.rule_mut().overrides.insert(coord, kind)?;
        log::debug!("{coord} added as {kind}");
        Ok(())
    }

    fn remove_override(&mut self, coord: Coordinate, kind: OverrideKind) -> Result<()> {
        self.validate(coord)?;
        if self.rule_mut().overrides.remove(coord, kind) {
            log::debug!("{coord} no longer {kind}");
        }
        Ok(())
    }
}
