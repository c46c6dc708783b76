//! Capabilities shared by every stage of a generation chain
//!
//! A chain is a [`BaseGenerator`](crate::generation::base::BaseGenerator)
//! wrapped in zero or more [`Transform`](crate::generation::transform::Transform)
//! stages. Each stage implements [`SpriteGenerator`], so the outermost stage
//! can be driven without knowing what sits beneath it.

use crate::spatial::{Coordinate, Dimensions, Grid};

/// Anything that can produce a boolean grid of known dimensions
pub trait SpriteGenerator {
    /// Dimensions of every grid this stage produces
    fn dimensions(&self) -> Dimensions;

    /// Produce a freshly allocated grid
    ///
    /// Takes `&mut self` because the base of every chain advances its
    /// pseudo-random stream. The returned grid is owned by the caller and no
    /// stage keeps a reference to it.
    fn produce_grid(&mut self) -> Grid<bool>;

    /// Width of produced grids
    fn width(&self) -> usize {
        self.dimensions().width()
    }

    /// Height of produced grids
    fn height(&self) -> usize {
        self.dimensions().height()
    }

    /// Check a coordinate against this stage's own output dimensions
    fn is_valid_coordinate(&self, coord: Coordinate) -> bool {
        self.dimensions().contains(coord)
    }
}

impl<G: SpriteGenerator + ?Sized> SpriteGenerator for Box<G> {
    fn dimensions(&self) -> Dimensions {
        (**self).dimensions()
    }

    fn produce_grid(&mut self) -> Grid<bool> {
        (**self).produce_grid()
    }
}

/// Stage-specific rule applied on top of an upstream grid
///
/// Rules are pure: the output depends only on the upstream grid and the
/// rule's own configuration at call time.
pub trait TransformRule {
    /// Output dimensions for a given upstream extent
    fn output_dimensions(&self, upstream: Dimensions) -> Dimensions;

    /// Compute the output grid from a complete upstream snapshot
    ///
    /// `output` is always the value returned by
    /// [`output_dimensions`](Self::output_dimensions) for `upstream`'s extent.
    fn apply(&self, upstream: &Grid<bool>, output: Dimensions) -> Grid<bool>;
}
