//! Runtime configuration defaults

/// Character that marks an undetermined cell in text seeds and snapshots
pub const SUPERPOSITION_SYMBOL: char = '*';

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default attempt budget (0 on the command line means unlimited)
pub const DEFAULT_MAX_ATTEMPTS: usize = 40;

/// Default output width in cells
pub const DEFAULT_OUTPUT_WIDTH: usize = 32;

/// Default output height in cells
pub const DEFAULT_OUTPUT_HEIGHT: usize = 32;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Side length in pixels of one rendered cell
pub const DEFAULT_CELL_SCALE: u32 = 10;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// How long the finished grid stays on screen at the end of an animation
pub const FINAL_FRAME_HOLD_MS: u32 = 1_500;
