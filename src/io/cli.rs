//! Command-line interface for collapsing text samples into larger grids

use crate::algorithm::executor::{CollapseDriver, CollapseOutcome, MaxAttempts};
use crate::io::configuration::{
    DEFAULT_CELL_SCALE, DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH,
    DEFAULT_SEED, GIF_FRAME_DELAY_MS, MAX_GRID_DIMENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::palette::Palette;
use crate::io::prefill::{Preset, apply_presets};
use crate::io::progress::ProgressManager;
use crate::io::sample::{load_sample, load_seed, write_grid_text};
use crate::io::visualization::export_history_gif;
use crate::spatial::grid::{SeedGrid, superposition_seed};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "tilecollapse")]
#[command(
    author,
    version,
    about = "Generate tile grids from a text sample with wave function collapse"
)]
/// Command-line arguments for the collapse tool
pub struct Cli {
    /// Text sample, one row per line and one tile per character
    #[arg(value_name = "SAMPLE")]
    pub sample: PathBuf,

    /// Output width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_OUTPUT_WIDTH)]
    pub width: usize,

    /// Output height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_OUTPUT_HEIGHT)]
    pub height: usize,

    /// Text seed grid ('*' marks open cells); overrides width and height
    #[arg(long, value_name = "FILE")]
    pub seed_grid: Option<PathBuf>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum collapse attempts (0 retries forever)
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Force a cell before collapsing, as ROW,COL=SYMBOL (repeatable)
    #[arg(short, long = "preset", value_name = "ROW,COL=SYMBOL")]
    pub presets: Vec<Preset>,

    /// Pre-fill this percentage of cells with random tiles
    #[arg(short, long, value_name = "PERCENT")]
    pub fill: Option<u32>,

    /// JSON palette mapping tile symbols to [r, g, b]
    #[arg(long, value_name = "FILE")]
    pub palette: Option<PathBuf>,

    /// Pixel size of one cell in rendered images
    #[arg(long, default_value_t = DEFAULT_CELL_SCALE)]
    pub scale: u32,

    /// Also render the collapse history as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Directory for output files (defaults to the sample's directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Attempt budget with 0 meaning unlimited
    pub const fn max_attempts(&self) -> MaxAttempts {
        MaxAttempts::from_count(self.attempts)
    }

    fn output_path(&self, suffix: &str, extension: &str) -> PathBuf {
        let stem = self.sample.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());
        let dir = self
            .output_dir
            .as_deref()
            .or_else(|| self.sample.parent())
            .unwrap_or_else(|| Path::new(""));
        dir.join(name)
    }

    /// Path of the text result
    pub fn text_output_path(&self) -> PathBuf {
        self.output_path(OUTPUT_SUFFIX, "txt")
    }

    /// Path of the PNG result
    pub fn image_output_path(&self) -> PathBuf {
        self.output_path(OUTPUT_SUFFIX, "png")
    }

    /// Path of the history animation
    pub fn visualization_path(&self) -> PathBuf {
        self.output_path("_visualization", "gif")
    }
}

/// Runs one collapse job described by the command line
pub struct CollapseRunner {
    cli: Cli,
}

impl CollapseRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load inputs, collapse, and write all requested outputs
    ///
    /// # Errors
    ///
    /// Returns an error if inputs are invalid, every attempt diverges, or an
    /// output cannot be written
    pub fn process(&self) -> Result<CollapseOutcome> {
        let sample = load_sample(&self.cli.sample)?;
        let mut driver = CollapseDriver::from_sample(&sample, self.cli.seed)?;
        driver.record_history(self.cli.visualize);
        info!(
            tiles = driver.dictionary().len(),
            rules = driver.rules().len(),
            "rules extracted"
        );

        let seed = self.build_seed(&mut driver)?;
        let outcome = self.collapse(&mut driver, &seed)?;

        let palette = match &self.cli.palette {
            Some(path) => Palette::load(path, driver.dictionary())?,
            None => Palette::generate(driver.dictionary()),
        };

        write_grid_text(&outcome.grid, &self.cli.text_output_path())?;
        export_grid_as_png(
            &outcome.grid,
            &palette,
            self.cli.scale,
            &self.cli.image_output_path(),
        )?;
        if self.cli.visualize {
            export_history_gif(
                &outcome.history,
                &palette,
                self.cli.scale,
                GIF_FRAME_DELAY_MS,
                &self.cli.visualization_path(),
            )?;
        }

        Ok(outcome)
    }

    fn build_seed(&self, driver: &mut CollapseDriver) -> Result<SeedGrid> {
        let mut seed = if let Some(path) = &self.cli.seed_grid {
            load_seed(path)?
        } else {
            for (parameter, value) in [("width", self.cli.width), ("height", self.cli.height)] {
                if !(1..=MAX_GRID_DIMENSION).contains(&value) {
                    return Err(invalid_parameter(
                        parameter,
                        &value,
                        &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                    ));
                }
            }
            superposition_seed(self.cli.height, self.cli.width)
        };

        if let Some(percent) = self.cli.fill {
            seed = driver.fill_with_random_percent(&seed, percent)?;
        }
        apply_presets(&mut seed, &self.cli.presets, driver.dictionary())?;
        Ok(seed)
    }

    fn collapse(&self, driver: &mut CollapseDriver, seed: &SeedGrid) -> Result<CollapseOutcome> {
        let max_attempts = self.cli.max_attempts();
        if !self.cli.should_show_progress() {
            return driver.collapse(seed, max_attempts);
        }

        let mut progress = ProgressManager::new(seed.len(), max_attempts.limit());
        let result = driver.collapse_with(seed, max_attempts, &mut progress);
        progress.finish();
        result
    }
}
