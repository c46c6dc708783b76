/// Stochastic base generator driven by per-cell policies
pub mod base;
/// Draw-around dilation with forced-value overrides
pub mod dilation;
/// Horizontal mirroring with reflective symmetry
pub mod mirror;
/// Override sets consumed by the dilation stage
pub mod overrides;
/// Per-cell base generator policies
pub mod policy;
/// Seeded Bernoulli stream for varied cells
pub mod random;
/// Generator and transform rule capabilities
pub mod traits;
/// Shared transform stage wrapping one upstream generator
pub mod transform;

pub use base::BaseGenerator;
pub use dilation::{DilationTransform, DrawAround};
pub use mirror::{Mirror, MirrorSide, MirrorTransform};
pub use overrides::{OverrideKind, OverrideSet};
pub use policy::CellPolicy;
pub use traits::{SpriteGenerator, TransformRule};
pub use transform::Transform;
