//! Procedural pixel-art sprite outlines built from a seeded base grid and a chain of transforms
//!
//! A [`BaseGenerator`](generation::BaseGenerator) decides each cell from a
//! per-cell [`CellPolicy`](generation::CellPolicy) and a seeded Bernoulli
//! stream. Transform stages such as
//! [`MirrorTransform`](generation::MirrorTransform) and
//! [`DilationTransform`](generation::DilationTransform) take ownership of
//! the stage beneath them and rewrite its grid on every call.
//!
//! ```
//! use sprite_outline::generation::{BaseGenerator, DilationTransform, MirrorTransform, SpriteGenerator};
//!
//! # fn main() -> sprite_outline::Result<()> {
//! let base = BaseGenerator::new(4, 8, 7)?;
//! let mut chain = DilationTransform::new(MirrorTransform::new(base, true));
//! let sprite = chain.produce_grid();
//! assert_eq!((sprite.width(), sprite.height()), (8, 8));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

/// Base generator, transform stages and the capabilities they share
pub mod generation;
/// Input/output operations and error handling
pub mod io;
/// Coordinates, dimensions and grid storage
pub mod spatial;

pub use io::error::{Result, SpriteError};
