//! Stochastic base of every generation chain

use crate::generation::policy::CellPolicy;
use crate::generation::random::CellSampler;
use crate::generation::traits::SpriteGenerator;
use crate::io::configuration::DEFAULT_FILL_PROBABILITY;
use crate::io::error::Result;
use crate::spatial::{Coordinate, Dimensions, Grid};

/// Produces boolean grids from a per-cell policy grid and a seeded stream
///
/// Cells are decided in row-major order. `AlwaysFilled` and `AlwaysEmpty`
/// cells are fixed; each `Varied` cell consumes exactly one draw from the
/// stream. Two generators with the same policies, seed and probability
/// therefore produce identical grids call for call.
#[derive(Debug, Clone)]
pub struct BaseGenerator {
    policies: Grid<CellPolicy>,
    sampler: CellSampler,
}

impl BaseGenerator {
    /// Create a generator whose cells are all `Varied`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if `width` or `height` is zero
    pub fn new(width: usize, height: usize, seed: u64) -> Result<Self> {
        let policies = Grid::new(width, height, CellPolicy::default())?;
        Self::from_policies(policies, seed)
    }

    /// Create a generator that takes ownership of an existing policy grid
    ///
    /// # Errors
    ///
    /// Propagates sampler construction errors; with the default fill
    /// probability this cannot fail
    pub fn from_policies(policies: Grid<CellPolicy>, seed: u64) -> Result<Self> {
        Ok(Self {
            policies,
            sampler: CellSampler::new(seed, DEFAULT_FILL_PROBABILITY)?,
        })
    }

    /// Builder form of [`set_fill_probability`](Self::set_fill_probability)
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `fill_probability` is not a finite value in `[0, 1]`
    pub fn with_fill_probability(mut self, fill_probability: f64) -> Result<Self> {
        self.set_fill_probability(fill_probability)?;
        Ok(self)
    }

    /// Change the success probability of `Varied` cells
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `fill_probability` is not a finite value in `[0, 1]`
    pub fn set_fill_probability(&mut self, fill_probability: f64) -> Result<()> {
        self.sampler.set_fill_probability(fill_probability)?;
        log::debug!("base generator fill probability set to {fill_probability}");
        Ok(())
    }

    /// Success probability of `Varied` cells
    pub const fn fill_probability(&self) -> f64 {
        self.sampler.fill_probability()
    }

    /// Seed of the current stream
    pub const fn seed(&self) -> u64 {
        self.sampler.seed()
    }

    /// Rewind the stream so the next grid repeats the first one produced
    pub fn reset_stream(&mut self) {
        self.sampler.reset();
    }

    /// Restart the stream from a different seed
    pub fn reseed(&mut self, seed: u64) {
        self.sampler.reseed(seed);
        log::debug!("base generator reseeded with {seed}");
    }

    /// Policy grid driving generation
    pub const fn policies(&self) -> &Grid<CellPolicy> {
        &self.policies
    }

    /// Policy at `coord`
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` if `coord` lies outside the generator's dimensions
    pub fn policy_at(&self, coord: Coordinate) -> Result<CellPolicy> {
        self.policies.get(coord).copied()
    }

    /// Replace the policy at `coord`
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` if `coord` lies outside the generator's dimensions
    pub fn set_policy_at(&mut self, coord: Coordinate, policy: CellPolicy) -> Result<()> {
        self.policies.set(coord, policy)?;
        log::debug!("policy at {coord} set to {policy}");
        Ok(())
    }
}

impl SpriteGenerator for BaseGenerator {
    fn dimensions(&self) -> Dimensions {
        self.policies.dimensions()
    }

    fn produce_grid(&mut self) -> Grid<bool> {
        let dimensions = self.dimensions();
        let mut grid = Grid::from_dimensions(dimensions, false);

        for coord in dimensions.coordinates() {
            let policy = self.policies.cell(coord).copied().unwrap_or_default();
            let filled = if policy.is_varied() {
                self.sampler.draw()
            } else {
                policy == CellPolicy::AlwaysFilled
            };
            if let Some(cell) = grid.cell_mut(coord) {
                *cell = filled;
            }
        }

        log::trace!(
            "base generator produced {dimensions} grid with {} filled cells",
            grid.count_filled()
        );
        grid
    }
}
