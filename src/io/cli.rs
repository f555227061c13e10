//! Command-line interface for generating and exporting a single maze

use crate::algorithm::observer::Fanout;
use crate::algorithm::{Algorithm, Maze, MazeConfig, generate};
use crate::analysis::Topology;
use crate::io::animation::TerminalAnimation;
use crate::io::configuration::{
    DEFAULT_FRAME_STRIDE, GIF_FRAME_DELAY_MS, MAX_GRID_DIMENSION, MAX_STEP_DELAY_MS,
};
use crate::io::error::{MazeError, Result};
use crate::io::image::export_raster;
use crate::io::progress::ProgressReporter;
use crate::io::visualization::VisualizationCapture;
use crate::render::{RasterOrigin, TextRenderer};
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "mazegen")]
#[command(author, version, about = "Generate perfect mazes as box-drawing text or images")]
/// Command-line arguments for the maze generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Generation algorithm (growth/prim/0, backtracker/dfs/1, division/div/2)
    #[arg(value_enum, value_name = "ALGORITHM")]
    pub algorithm: Algorithm,

    /// Maze width in cells (raised to at least 5 and made odd)
    #[arg(value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_GRID_DIMENSION)))]
    pub width: u32,

    /// Maze height in cells (raised to at least 5 and made odd)
    #[arg(value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_GRID_DIMENSION)))]
    pub height: u32,

    /// Milliseconds to wait after each animation frame; zero shows only the final maze
    #[arg(
        default_value_t = 0,
        value_parser = clap::value_parser!(u64).range(0..=MAX_STEP_DELAY_MS)
    )]
    pub delay: u64,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write the maze as a grayscale image (TGA unless the extension says otherwise)
    #[arg(short, long, value_name = "PATH")]
    pub raster: Option<PathBuf>,

    /// Row order of the raster image
    #[arg(short, long, value_enum, default_value_t = RasterOrigin::TopLeft)]
    pub origin: RasterOrigin,

    /// Write an animated GIF of the generation process
    #[arg(short, long, value_name = "PATH")]
    pub visualize: Option<PathBuf>,

    /// Generation steps between captured GIF frames
    #[arg(short, long, default_value_t = DEFAULT_FRAME_STRIDE)]
    pub frame_stride: usize,

    /// Print a topology summary of the finished maze to stderr
    #[arg(long)]
    pub stats: bool,

    /// Do not print the text diagram
    #[arg(short, long)]
    pub no_text: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if the terminal animation should run
    pub const fn animates(&self) -> bool {
        self.delay > 0
    }

    /// Check if progress should be displayed
    ///
    /// The animation already shows progress, so the bar is hidden while it runs.
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.animates()
    }

    /// Generation parameters described by the arguments
    pub fn config(&self) -> MazeConfig {
        MazeConfig {
            width: self.width as usize,
            height: self.height as usize,
            algorithm: self.algorithm,
            seed: self.seed,
        }
    }
}

/// Runs one maze request from parsed arguments
pub struct MazeRunner<W: Write> {
    cli: Cli,
    out: W,
}

impl MazeRunner<std::io::Stdout> {
    /// Create a runner writing text to stdout
    pub fn new(cli: Cli) -> Self {
        Self::with_output(cli, std::io::stdout())
    }
}

impl<W: Write> MazeRunner<W> {
    /// Create a runner writing animation frames and the final text to `out`
    pub const fn with_output(cli: Cli, out: W) -> Self {
        Self { cli, out }
    }

    /// Give back the text sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Generate the maze and write every requested output
    ///
    /// # Errors
    ///
    /// Returns an error if generation, rendering or any export fails
    pub fn run(&mut self) -> Result<Maze> {
        let config = self.cli.config();
        let maze = self.generate(&config)?;

        if !self.cli.no_text {
            let mut renderer = TextRenderer::new();
            let text = renderer.render(maze.grid())?;
            self.out
                .write_all(text.as_bytes())
                .and_then(|()| self.out.flush())
                .map_err(|source| MazeError::Output {
                    operation: "write maze",
                    source,
                })?;
        }

        if let Some(path) = &self.cli.raster {
            export_raster(maze.grid(), self.cli.origin, path)?;
        }

        if self.cli.stats {
            report_stats(&maze);
        }

        Ok(maze)
    }

    fn generate(&mut self, config: &MazeConfig) -> Result<Maze> {
        let mut animation =
            TerminalAnimation::new(&mut self.out, Duration::from_millis(self.cli.delay));
        let mut progress = if self.cli.should_show_progress() && std::io::stderr().is_terminal() {
            ProgressReporter::new(config.algorithm, config.width, config.height)
        } else {
            ProgressReporter::hidden(config.algorithm)
        };
        let mut capture = self
            .cli
            .visualize
            .as_ref()
            .map(|_| VisualizationCapture::new(self.cli.frame_stride));

        let maze = {
            let mut observers = Fanout::new();
            observers.push(&mut progress);
            if animation.is_enabled() {
                animation.begin()?;
                observers.push(&mut animation);
            }
            if let Some(capture) = capture.as_mut() {
                observers.push(capture);
            }
            generate(config, &mut observers)?
        };

        progress.finish();

        if let (Some(capture), Some(path)) = (capture.as_mut(), &self.cli.visualize) {
            capture.capture_final(maze.grid());
            capture.export_gif(path, GIF_FRAME_DELAY_MS)?;
        }

        Ok(maze)
    }
}

// Allow print for the requested statistics report
#[allow(clippy::print_stderr)]
fn report_stats(maze: &Maze) {
    let grid = maze.grid();
    eprintln!(
        "{:?} {}x{} in {} steps: {}",
        maze.algorithm(),
        grid.width(),
        grid.height(),
        maze.steps(),
        Topology::of(grid)
    );
}
