//! Command-line interface assembling a generation chain and exporting sprites

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::generation::{
    BaseGenerator, CellPolicy, DilationTransform, MirrorSide, MirrorTransform, SpriteGenerator,
};
use crate::io::configuration::{
    DEFAULT_EMPTY_COLOR, DEFAULT_FILL_PROBABILITY, DEFAULT_FILLED_COLOR, DEFAULT_HEIGHT,
    DEFAULT_PIXEL_SCALE, DEFAULT_SEED, DEFAULT_SPRITE_COUNT, DEFAULT_WIDTH, MAX_GRID_DIMENSION,
    OUTPUT_EXTENSION, OUTPUT_PREFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{Palette, export_grid_as_png};
use crate::io::progress::ProgressManager;
use crate::spatial::Coordinate;

/// Half of a mirrored sprite that receives the reflection
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MirrorArg {
    /// Reflect into the left half
    Left,
    /// Reflect into the right half
    Right,
}

impl From<MirrorArg> for MirrorSide {
    fn from(arg: MirrorArg) -> Self {
        match arg {
            MirrorArg::Left => Self::Left,
            MirrorArg::Right => Self::Right,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sprite-outline")]
#[command(
    author,
    version,
    about = "Generate pixel-art sprite outlines from a seeded base grid and transforms"
)]
/// Command-line arguments for the sprite generation tool
pub struct Cli {
    /// Directory receiving the generated PNG files
    #[arg(value_name = "OUTPUT_DIR")]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of sprites to generate from one chain
    #[arg(short, long, default_value_t = DEFAULT_SPRITE_COUNT)]
    pub count: usize,

    /// Width of the base grid in cells (before mirroring)
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Height of the base grid in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Probability that a varied cell is filled
    #[arg(short, long, default_value_t = DEFAULT_FILL_PROBABILITY)]
    pub probability: f64,

    /// Mirror the base grid, placing the reflection on the given side
    #[arg(short, long, value_enum)]
    pub mirror: Option<MirrorArg>,

    /// Outline the shape with a draw-around stage
    #[arg(short, long)]
    pub draw_around: bool,

    /// Base grid cell that is always filled (repeatable)
    #[arg(long = "filled", value_name = "X,Y")]
    pub filled: Vec<Coordinate>,

    /// Base grid cell that is always empty (repeatable)
    #[arg(long = "empty", value_name = "X,Y")]
    pub empty: Vec<Coordinate>,

    /// Output cell forced filled by the draw-around stage (repeatable)
    #[arg(long = "force-full", value_name = "X,Y", requires = "draw_around")]
    pub force_full: Vec<Coordinate>,

    /// Output cell forced empty by the draw-around stage (repeatable)
    #[arg(long = "force-empty", value_name = "X,Y", requires = "draw_around")]
    pub force_empty: Vec<Coordinate>,

    /// Edge length in pixels of one exported cell
    #[arg(long, default_value_t = DEFAULT_PIXEL_SCALE)]
    pub scale: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite sprites whose output file already exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Assemble the chain: base, then optional mirror, then optional draw-around
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A base dimension is zero or exceeds `MAX_GRID_DIMENSION`
    /// - The fill probability is outside `[0, 1]`
    /// - A policy or override coordinate is out of bounds for its stage
    /// - A coordinate is both forced full and forced empty
    pub fn build_chain(&self) -> Result<Box<dyn SpriteGenerator>> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        let mut base = BaseGenerator::new(self.width, self.height, self.seed)?
            .with_fill_probability(self.probability)?;
        for &coord in &self.filled {
            base.set_policy_at(coord, CellPolicy::AlwaysFilled)?;
        }
        for &coord in &self.empty {
            base.set_policy_at(coord, CellPolicy::AlwaysEmpty)?;
        }

        let mut chain: Box<dyn SpriteGenerator> = Box::new(base);
        if let Some(side) = self.mirror {
            chain = Box::new(MirrorTransform::with_side(chain, side.into()));
        }
        if self.draw_around {
            chain = Box::new(DilationTransform::with_overrides(
                chain,
                self.force_full.iter().copied(),
                self.force_empty.iter().copied(),
            )?);
        }

        log::debug!(
            "chain built: {}x{} output, seed {}",
            chain.width(),
            chain.height(),
            self.seed
        );
        Ok(chain)
    }

    /// Output path of the sprite at `index` within this run
    pub fn sprite_path(&self, index: usize) -> PathBuf {
        self.output.join(format!(
            "{OUTPUT_PREFIX}_{}_{index}.{OUTPUT_EXTENSION}",
            self.seed
        ))
    }
}

/// Produces a batch of sprites from one chain and writes them as PNG files
pub struct SpriteBatch {
    cli: Cli,
    palette: Palette,
    progress_manager: Option<ProgressManager>,
}

impl SpriteBatch {
    /// Create a new batch with the default palette
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            palette: [DEFAULT_EMPTY_COLOR, DEFAULT_FILLED_COLOR],
            progress_manager,
        }
    }

    /// Generate and export every sprite, returning the paths written
    ///
    /// The chain is built once and asked for one grid per sprite, so sprite
    /// `n` depends only on the arguments and `n`. Skipped sprites are still
    /// generated to keep later sprites unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if chain construction or any export fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let mut chain = self.cli.build_chain()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mut written = Vec::with_capacity(self.cli.count);
        for index in 0..self.cli.count {
            let grid = chain.produce_grid();
            let path = self.cli.sprite_path(index);
            let name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();

            if self.cli.skip_existing() && path.exists() {
                log::info!("skipping {} (output exists)", path.display());
                if let Some(ref mut pm) = self.progress_manager {
                    pm.skip_sprite(&name);
                }
                continue;
            }

            export_grid_as_png(&grid, &self.palette, self.cli.scale, &path)?;
            log::info!("wrote {}", path.display());
            log::debug!("{name}:\n{grid}");

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_sprite(&name);
            }
            written.push(path);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }
}
