//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Success probability of a single `Varied` cell
pub const DEFAULT_FILL_PROBABILITY: f64 = 0.5;

/// Base generator width before any mirroring
pub const DEFAULT_WIDTH: usize = 6;

/// Base generator height
pub const DEFAULT_HEIGHT: usize = 12;

/// Number of sprites produced per run
pub const DEFAULT_SPRITE_COUNT: usize = 1;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed base grid dimension accepted from the command line
pub const MAX_GRID_DIMENSION: usize = 4096;

// Rasterization settings
/// Edge length in pixels of one exported cell
pub const DEFAULT_PIXEL_SCALE: u32 = 4;
/// Largest exported image, in pixels (1 GiB of RGBA data)
pub const MAX_IMAGE_PIXELS: usize = 1 << 28;
/// RGBA colour of empty cells (transparent)
pub const DEFAULT_EMPTY_COLOR: [u8; 4] = [0, 0, 0, 0];
/// RGBA colour of filled cells
pub const DEFAULT_FILLED_COLOR: [u8; 4] = [0, 0, 0, 255];

// Output settings
/// Prefix of exported sprite filenames
pub const OUTPUT_PREFIX: &str = "sprite";
/// Extension of exported sprite files
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Smallest batch that gets a progress bar
pub const MIN_PROGRESS_BATCH: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
