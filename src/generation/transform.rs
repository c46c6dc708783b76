//! Shared shape of every transform stage: one owned upstream plus a rule

use crate::generation::traits::{SpriteGenerator, TransformRule};
use crate::spatial::{Dimensions, Grid};

/// A chain stage that pulls its upstream grid and applies `R` to it
///
/// The stage owns its upstream exclusively. Nothing is cached: each
/// [`produce_grid`](SpriteGenerator::produce_grid) call re-evaluates the whole
/// chain beneath it.
pub struct Transform<R, G = Box<dyn SpriteGenerator>> {
    upstream: G,
    rule: R,
}

impl<R: TransformRule, G: SpriteGenerator> Transform<R, G> {
    /// Wrap `upstream` with `rule`
    pub const fn from_parts(upstream: G, rule: R) -> Self {
        Self { upstream, rule }
    }

    /// The wrapped stage
    pub const fn upstream(&self) -> &G {
        &self.upstream
    }

    /// This stage's rule and configuration
    pub const fn rule(&self) -> &R {
        &self.rule
    }

    pub(crate) const fn rule_mut(&mut self) -> &mut R {
        &mut self.rule
    }

    /// Give back the wrapped stage, dropping this one
    pub fn into_upstream(self) -> G {
        self.upstream
    }

    /// Force a full evaluation of the upstream stage
    pub(crate) fn produce_upstream_grid(&mut self) -> Grid<bool> {
        self.upstream.produce_grid()
    }
}

impl<R: TransformRule, G: SpriteGenerator> SpriteGenerator for Transform<R, G> {
    fn dimensions(&self) -> Dimensions {
        self.rule.output_dimensions(self.upstream.dimensions())
    }

    fn produce_grid(&mut self) -> Grid<bool> {
        let upstream = self.produce_upstream_grid();
        let output = self.rule.output_dimensions(upstream.dimensions());
        let grid = self.rule.apply(&upstream, output);
        log::trace!(
            "{} stage mapped {} grid to {output} with {} filled cells",
            std::any::type_name::<R>(),
            upstream.dimensions(),
            grid.count_filled()
        );
        grid
    }
}
