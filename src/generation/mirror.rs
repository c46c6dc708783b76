//! Horizontal mirroring that doubles the grid width
//!
//! For an upstream grid of width `w`, the output has width `2w` and every
//! row satisfies `out[j] == out[2w - 1 - j]`. One half carries the upstream
//! row unmodified; the other half carries its reflection.

use crate::generation::traits::{SpriteGenerator, TransformRule};
use crate::generation::transform::Transform;
use crate::spatial::{Coordinate, Dimensions, Grid};

/// Which half of the output receives the reflected copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MirrorSide {
    /// Reflection on the left, upstream grid unmodified on the right
    Left,
    /// Upstream grid unmodified on the left, reflection on the right
    Right,
}

/// Reflective symmetry rule about the vertical centerline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mirror {
    mirror_to_left: bool,
}

impl Mirror {
    /// Create the rule; `mirror_to_left` places the reflection in the left half
    pub const fn new(mirror_to_left: bool) -> Self {
        Self { mirror_to_left }
    }

    /// Whether the reflection occupies the left half
    pub const fn mirrors_to_left(&self) -> bool {
        self.mirror_to_left
    }

    /// Which half holds the reflection
    pub const fn side(&self) -> MirrorSide {
        if self.mirror_to_left {
            MirrorSide::Left
        } else {
            MirrorSide::Right
        }
    }

    // Upstream column feeding output column `x` for upstream width `width`
    const fn source_column(&self, x: usize, width: usize) -> usize {
        match (self.mirror_to_left, x < width) {
            (true, true) => width - 1 - x,
            (true, false) => x - width,
            (false, true) => x,
            (false, false) => 2 * width - 1 - x,
        }
    }
}

impl TransformRule for Mirror {
    fn output_dimensions(&self, upstream: Dimensions) -> Dimensions {
        upstream.with_doubled_width()
    }

    fn apply(&self, upstream: &Grid<bool>, output: Dimensions) -> Grid<bool> {
        let width = upstream.width();
        Grid::from_fn(output, |coord| {
            let source = Coordinate::new(self.source_column(coord.x, width), coord.y);
            upstream.cell(source).copied().unwrap_or(false)
        })
    }
}

/// Stage that doubles its upstream's width with reflective symmetry
pub type MirrorTransform<G> = Transform<Mirror, G>;

impl<G: SpriteGenerator> Transform<Mirror, G> {
    /// Take ownership of `upstream` and mirror its output
    pub const fn new(upstream: G, mirror_to_left: bool) -> Self {
        Self::from_parts(upstream, Mirror::new(mirror_to_left))
    }

    /// Build the stage from a [`MirrorSide`]
    pub const fn with_side(upstream: G, side: MirrorSide) -> Self {
        Self::new(upstream, matches!(side, MirrorSide::Left))
    }

    /// Whether the reflection occupies the left half
    pub const fn mirrors_to_left(&self) -> bool {
        self.rule().mirrors_to_left()
    }
}
