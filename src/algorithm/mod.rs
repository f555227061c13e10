//! Maze generators and the entry points that drive them

/// Randomized depth-first carving
pub mod backtracker;
/// Recursive division of open space
pub mod division;
/// Constant-time random-removal set used by growth
pub mod frontier;
/// Randomized growth from a seed node
pub mod growth;
/// Step hooks for animation and progress
pub mod observer;

use std::time::Instant;

use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithm::observer::{Counting, NoObserver, StepObserver};
use crate::io::error::Result;
use crate::spatial::grid::effective_dimension;
use crate::spatial::{Cell, Grid};

/// Generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    /// Randomized growth from a single node (Prim's-style)
    #[value(alias = "prim", alias = "0")]
    Growth,
    /// Randomized depth-first backtracking
    #[value(alias = "dfs", alias = "1")]
    Backtracker,
    /// Recursive division of open space
    #[value(alias = "div", alias = "2")]
    Division,
}

impl Algorithm {
    /// Cell state the grid starts from
    pub const fn initial_fill(self) -> Cell {
        match self {
            Self::Growth | Self::Backtracker => Cell::Wall,
            Self::Division => Cell::Empty,
        }
    }

    /// Number of observer calls for a requested size, when known in advance
    ///
    /// Division splits a data-dependent number of regions.
    pub const fn expected_steps(self, width: usize, height: usize) -> Option<usize> {
        let nodes =
            effective_dimension(width).div_ceil(2) * effective_dimension(height).div_ceil(2);
        match self {
            Self::Backtracker => Some(nodes),
            Self::Growth => Some(nodes - 1),
            Self::Division => None,
        }
    }

    /// Run the generator on an existing grid
    ///
    /// # Errors
    ///
    /// Returns an allocation error if generator scratch space cannot be
    /// reserved and propagates observer failures
    pub fn run<R: Rng + ?Sized>(
        self,
        grid: &mut Grid,
        rng: &mut R,
        observer: &mut dyn StepObserver,
    ) -> Result<()> {
        match self {
            Self::Growth => growth::generate(grid, rng, observer),
            Self::Backtracker => backtracker::generate(grid, rng, observer),
            Self::Division => division::generate(grid, rng, observer),
        }
    }
}

/// Parameters for a maze request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    /// Requested width, clamped and made odd by the grid
    pub width: usize,
    /// Requested height, clamped and made odd by the grid
    pub height: usize,
    /// Generation strategy
    pub algorithm: Algorithm,
    /// Seed for reproducible output; drawn from the OS when absent
    pub seed: Option<u64>,
}

impl MazeConfig {
    /// Create an unseeded configuration
    pub const fn new(width: usize, height: usize, algorithm: Algorithm) -> Self {
        Self {
            width,
            height,
            algorithm,
            seed: None,
        }
    }

    /// Use a fixed seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Random source for this configuration
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

/// A generated maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    algorithm: Algorithm,
    steps: usize,
}

impl Maze {
    /// The finished grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Take ownership of the grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Strategy that produced the maze
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of observer invocations during generation
    pub const fn steps(&self) -> usize {
        self.steps
    }
}

/// Generate an unseeded maze without observing it
///
/// # Errors
///
/// Returns an allocation error if the grid cannot be allocated
pub fn create_maze(width: usize, height: usize, algorithm: Algorithm) -> Result<Maze> {
    generate(&MazeConfig::new(width, height, algorithm), &mut NoObserver)
}

/// Generate a maze, reporting each step to `observer`
///
/// # Errors
///
/// Returns an allocation error if the grid cannot be allocated and
/// propagates observer failures
pub fn generate(config: &MazeConfig, observer: &mut dyn StepObserver) -> Result<Maze> {
    let mut rng = config.rng();
    generate_with_rng(config, &mut rng, observer)
}

/// Generate a maze from a caller-supplied random source
///
/// The seed in `config` is ignored.
///
/// # Errors
///
/// Returns an allocation error if the grid cannot be allocated and
/// propagates observer failures
pub fn generate_with_rng<R: Rng + ?Sized>(
    config: &MazeConfig,
    rng: &mut R,
    observer: &mut dyn StepObserver,
) -> Result<Maze> {
    let started = Instant::now();
    let mut grid = Grid::new(
        config.width,
        config.height,
        config.algorithm.initial_fill(),
    )?;

    log::debug!(
        "generating {}x{} maze with {:?} (requested {}x{}, seed {:?})",
        grid.width(),
        grid.height(),
        config.algorithm,
        config.width,
        config.height,
        config.seed
    );

    let mut counting = Counting::new(observer);
    config.algorithm.run(&mut grid, rng, &mut counting)?;
    let steps = counting.steps;

    log::debug!(
        "{:?} finished after {steps} steps in {:?}",
        config.algorithm,
        started.elapsed()
    );

    Ok(Maze {
        grid,
        algorithm: config.algorithm,
        steps,
    })
}
