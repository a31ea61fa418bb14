use crate::{
    algorithm::propagation::propagate,
    algorithm::selection::{collapse_cell, select_min_entropy},
    analysis::rules::{AdjacencyTable, RuleSet, extract_rules},
    analysis::weights::TileWeights,
    io::error::{CollapseError, Result, invalid_input, invalid_parameter},
    io::prefill::fill_with_random_percent,
    math::probability::cumulative_choice,
    spatial::grid::{SeedGrid, Snapshot, SuperpositionGrid},
    spatial::tiles::{Dictionary, Tile},
};
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

/// Seeded random selector for reproducible stochastic choices
///
/// The driver owns one selector and threads it through every collapse and
/// seeding helper, so a fixed seed reproduces grids and histories exactly.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Wrap an already initialized generator
    pub const fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Weighted random selection
    ///
    /// Returns index into weights array using cumulative distribution
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        cumulative_choice(weights, self.rng.random::<f64>())
    }

    /// Uniform index in `0..len`, or 0 when `len` is zero
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// Bound on the number of collapse attempts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaxAttempts {
    /// Give up after this many diverged attempts (at least one)
    Limited(usize),
    /// Retry until an attempt succeeds
    Unlimited,
}

impl MaxAttempts {
    /// Validated finite bound
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a bound of zero
    pub fn limited(attempts: usize) -> Result<Self> {
        if attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &attempts,
                &"at least one attempt is required",
            ));
        }
        Ok(Self::Limited(attempts))
    }

    /// Interpret a command-line count where zero means unlimited
    pub const fn from_count(attempts: usize) -> Self {
        if attempts == 0 {
            Self::Unlimited
        } else {
            Self::Limited(attempts)
        }
    }

    /// True once `consumed` attempts use up the budget
    pub const fn is_exhausted(self, consumed: usize) -> bool {
        match self {
            Self::Limited(limit) => consumed >= limit,
            Self::Unlimited => false,
        }
    }

    /// Finite bound, or `None` when unlimited
    pub const fn limit(self) -> Option<usize> {
        match self {
            Self::Limited(limit) => Some(limit),
            Self::Unlimited => None,
        }
    }
}

/// Lifecycle of a collapse run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// An attempt is running (1-based attempt number)
    Attempting {
        /// Current attempt
        attempt: usize,
    },
    /// The last attempt hit an empty candidate set
    Diverged {
        /// Attempt that diverged
        attempt: usize,
        /// Step at which it diverged
        step: usize,
    },
    /// Terminal success
    Collapsed {
        /// Attempt that succeeded
        attempt: usize,
        /// Collapse steps taken by that attempt
        steps: usize,
    },
    /// Terminal failure
    Exhausted {
        /// Attempts consumed
        attempts: usize,
    },
}

/// Receives collapse progress as it happens
///
/// Snapshots arrive in the same order as they appear in the returned history,
/// which lets callers stream frames instead of waiting for the final result.
pub trait CollapseObserver {
    /// A fresh attempt begins; earlier snapshots are void
    fn attempt_started(&mut self, _attempt: usize) {}
    /// A snapshot was appended to the current attempt's history
    fn snapshot(&mut self, _snapshot: &Snapshot) {}
    /// The current attempt diverged and will be discarded
    fn diverged(&mut self, _attempt: usize, _step: usize) {}
    /// The current attempt produced a fully concrete grid
    fn collapsed(&mut self, _attempt: usize, _steps: usize) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CollapseObserver for NoopObserver {}

/// Successful collapse result
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollapseOutcome {
    /// Fully concrete output grid
    pub grid: Array2<Tile>,
    /// One masked snapshot per collapse step plus the final grid, or only
    /// the final grid when history recording is off
    pub history: Vec<Snapshot>,
    /// Attempts consumed, including the successful one
    pub attempts: usize,
}

/// Retry-on-divergence wave function collapse driver
///
/// Holds the immutable products of rule extraction plus the random source.
/// Each attempt starts from a fresh copy of the expanded seed and repeats
/// snapshot, propagate, rank and collapse until the grid is concrete or a
/// cell runs out of candidates.
pub struct CollapseDriver {
    dictionary: Dictionary,
    weights: TileWeights,
    rules: RuleSet,
    adjacency: AdjacencyTable,
    /// Random number generator for stochastic selection
    pub random_selector: RandomSelector,
    state: DriverState,
    keep_history: bool,
}

impl CollapseDriver {
    /// Create a driver from extracted rules
    pub fn new(
        dictionary: Dictionary,
        weights: TileWeights,
        rules: RuleSet,
        random_selector: RandomSelector,
    ) -> Self {
        let adjacency = AdjacencyTable::from_rules(&rules, dictionary.len());
        Self {
            dictionary,
            weights,
            rules,
            adjacency,
            random_selector,
            state: DriverState::Attempting { attempt: 1 },
            keep_history: true,
        }
    }

    /// Choose whether intermediate snapshots are kept in the returned history
    ///
    /// With recording off the history holds only the final grid. Observers
    /// still receive every snapshot.
    pub const fn record_history(&mut self, keep: bool) {
        self.keep_history = keep;
    }

    /// Extract rules from a sample and create a seeded driver
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the sample is empty or ragged
    pub fn from_sample(sample: &[Vec<Tile>], seed: u64) -> Result<Self> {
        let (dictionary, weights, rules) = extract_rules(sample)?;
        Ok(Self::new(
            dictionary,
            weights,
            rules,
            RandomSelector::new(seed),
        ))
    }

    /// Tiles observed in the sample
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Tile frequency weights
    pub const fn weights(&self) -> &TileWeights {
        &self.weights
    }

    /// Extracted adjacency rules
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Precomputed rule lookup
    pub const fn adjacency(&self) -> &AdjacencyTable {
        &self.adjacency
    }

    /// State reached by the most recent run
    pub const fn state(&self) -> DriverState {
        self.state
    }

    /// Replace a random share of seed cells with random dictionary tiles
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `percent` exceeds 100
    pub fn fill_with_random_percent(&mut self, seed: &SeedGrid, percent: u32) -> Result<SeedGrid> {
        fill_with_random_percent(seed, &self.dictionary, percent, &mut self.random_selector)
    }

    /// Collapse a seed grid, retrying on divergence
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty seed or one whose preset tiles are
    /// unknown, and `ExhaustedAttempts` when every allowed attempt diverged
    pub fn collapse(
        &mut self,
        seed: &SeedGrid,
        max_attempts: MaxAttempts,
    ) -> Result<CollapseOutcome> {
        self.collapse_with(seed, max_attempts, &mut NoopObserver)
    }

    /// Collapse after checking the seed has the expected output size
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the seed dimensions differ from
    /// `(rows, cols)`, otherwise as [`CollapseDriver::collapse`]
    pub fn collapse_to_size(
        &mut self,
        seed: &SeedGrid,
        dimensions: (usize, usize),
        max_attempts: MaxAttempts,
    ) -> Result<CollapseOutcome> {
        if seed.dim() != dimensions {
            return Err(invalid_input(&format!(
                "seed is {}x{} but the requested output is {}x{}",
                seed.nrows(),
                seed.ncols(),
                dimensions.0,
                dimensions.1
            )));
        }
        self.collapse(seed, max_attempts)
    }

    /// Collapse a seed grid while reporting progress to an observer
    ///
    /// # Errors
    ///
    /// As [`CollapseDriver::collapse`]
    pub fn collapse_with<O: CollapseObserver + ?Sized>(
        &mut self,
        seed: &SeedGrid,
        max_attempts: MaxAttempts,
        observer: &mut O,
    ) -> Result<CollapseOutcome> {
        if max_attempts == MaxAttempts::Limited(0) {
            return Err(invalid_parameter(
                "max_attempts",
                &0,
                &"at least one attempt is required",
            ));
        }
        let initial = SuperpositionGrid::from_seed(seed, &self.dictionary)?;

        let mut consumed = 0;
        loop {
            let attempt = consumed + 1;
            self.state = DriverState::Attempting { attempt };
            observer.attempt_started(attempt);

            match self.run_attempt(initial.clone(), attempt, observer) {
                Ok((grid, history, steps)) => {
                    self.state = DriverState::Collapsed { attempt, steps };
                    info!(attempt, steps, "grid collapsed");
                    observer.collapsed(attempt, steps);
                    return Ok(CollapseOutcome {
                        grid,
                        history,
                        attempts: attempt,
                    });
                }
                Err(CollapseError::Divergence { step, position, .. }) => {
                    self.state = DriverState::Diverged { attempt, step };
                    debug!(
                        attempt,
                        step,
                        row = position[0],
                        col = position[1],
                        "attempt diverged"
                    );
                    observer.diverged(attempt, step);
                }
                Err(other) => return Err(other),
            }

            consumed = attempt;
            if max_attempts.is_exhausted(consumed) {
                self.state = DriverState::Exhausted { attempts: consumed };
                warn!(attempts = consumed, "every collapse attempt diverged");
                return Err(CollapseError::ExhaustedAttempts { attempts: consumed });
            }
        }
    }

    /// Run one attempt from an expanded seed
    ///
    /// Returns the concrete grid, its history and the number of collapse
    /// steps taken.
    ///
    /// # Errors
    ///
    /// Returns `Divergence` when propagation empties a candidate set
    fn run_attempt<O: CollapseObserver + ?Sized>(
        &mut self,
        mut grid: SuperpositionGrid,
        attempt: usize,
        observer: &mut O,
    ) -> Result<(Array2<Tile>, Vec<Snapshot>, usize)> {
        let mut history = Vec::new();
        let mut step = 0;

        while !grid.is_collapsed() {
            self.record(&grid, &mut history, observer);

            let mut propagated = propagate(&grid, &self.adjacency);
            if let Some(position) = propagated.find_contradiction() {
                return Err(CollapseError::Divergence {
                    attempt,
                    step,
                    position,
                });
            }

            if let Some(candidate) = select_min_entropy(&propagated, &self.weights) {
                collapse_cell(
                    &mut propagated,
                    candidate.position,
                    &self.weights,
                    &mut self.random_selector,
                );
            }

            grid = propagated;
            step += 1;
        }

        let last = grid.snapshot(&self.dictionary);
        observer.snapshot(&last);
        history.push(last);
        let tiles = grid
            .to_tiles(&self.dictionary)
            .ok_or_else(|| invalid_input(&"collapsed grid holds a tile outside the dictionary"))?;
        Ok((tiles, history, step))
    }

    fn record<O: CollapseObserver + ?Sized>(
        &self,
        grid: &SuperpositionGrid,
        history: &mut Vec<Snapshot>,
        observer: &mut O,
    ) {
        let snapshot = grid.snapshot(&self.dictionary);
        observer.snapshot(&snapshot);
        if self.keep_history {
            history.push(snapshot);
        }
    }
}
