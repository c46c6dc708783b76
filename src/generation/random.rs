//! Seeded Bernoulli stream driving `Varied` cell decisions

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{Result, invalid_parameter};

/// Reconstructible pseudo-random stream of fill decisions
///
/// Every call to [`draw`](Self::draw) consumes exactly one `f64` from the
/// underlying generator, whatever the fill probability, so the stream
/// position always equals the number of decisions taken since the last
/// (re)seed.
#[derive(Debug, Clone)]
pub struct CellSampler {
    rng: StdRng,
    seed: u64,
    fill_probability: f64,
}

impl CellSampler {
    /// Create a stream seeded with `seed`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `fill_probability` is not a finite value in `[0, 1]`
    pub fn new(seed: u64, fill_probability: f64) -> Result<Self> {
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            fill_probability: validate_probability(fill_probability)?,
        })
    }

    /// Seed the stream was last (re)started with
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Probability that a single draw yields `true`
    pub const fn fill_probability(&self) -> f64 {
        self.fill_probability
    }

    /// Change the success probability without touching the stream position
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `fill_probability` is not a finite value in `[0, 1]`
    pub fn set_fill_probability(&mut self, fill_probability: f64) -> Result<()> {
        self.fill_probability = validate_probability(fill_probability)?;
        Ok(())
    }

    /// One Bernoulli trial
    pub fn draw(&mut self) -> bool {
        self.rng.random::<f64>() < self.fill_probability
    }

    /// Rewind to the start of the stream for the current seed
    pub fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    /// Restart the stream from a new seed
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.reset();
    }
}

/// Accept only finite probabilities in `[0, 1]`
///
/// # Errors
///
/// Returns `InvalidParameter` for NaN, infinite or out-of-range values
pub fn validate_probability(probability: f64) -> Result<f64> {
    if probability.is_finite() && (0.0..=1.0).contains(&probability) {
        Ok(probability)
    } else {
        Err(invalid_parameter(
            "fill_probability",
            &probability,
            &"must be a finite value between 0 and 1",
        ))
    }
}
