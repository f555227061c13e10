//! Hooks invoked by the generators after each state-changing move

use crate::io::error::Result;
use crate::spatial::Grid;

/// Receives the partial grid while a maze is being generated
///
/// Backtracker calls it before each node is visited, growth before each
/// frontier cell is absorbed and division before each region is split.
/// Returning an error aborts generation.
pub trait StepObserver {
    /// Called with the current grid state
    ///
    /// # Errors
    ///
    /// Implementations return an error when they cannot present the step
    fn on_step(&mut self, grid: &Grid) -> Result<()>;
}

/// Observer that ignores every step
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl StepObserver for NoObserver {
    fn on_step(&mut self, _grid: &Grid) -> Result<()> {
        Ok(())
    }
}

impl<F> StepObserver for F
where
    F: FnMut(&Grid) -> Result<()>,
{
    fn on_step(&mut self, grid: &Grid) -> Result<()> {
        self(grid)
    }
}

/// Forwards each step to several observers in order
#[derive(Default)]
pub struct Fanout<'a> {
    observers: Vec<&'a mut dyn StepObserver>,
}

impl<'a> Fanout<'a> {
    /// Create an empty fanout
    pub const fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Add an observer to the end of the chain
    pub fn push(&mut self, observer: &'a mut dyn StepObserver) {
        self.observers.push(observer);
    }

    /// Number of attached observers
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if no observer is attached
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl StepObserver for Fanout<'_> {
    fn on_step(&mut self, grid: &Grid) -> Result<()> {
        for observer in &mut self.observers {
            observer.on_step(grid)?;
        }
        Ok(())
    }
}

/// Counts steps before handing them on
pub(crate) struct Counting<'a> {
    inner: &'a mut dyn StepObserver,
    pub(crate) steps: usize,
}

impl<'a> Counting<'a> {
    pub(crate) fn new(inner: &'a mut dyn StepObserver) -> Self {
        Self { inner, steps: 0 }
    }
}

impl StepObserver for Counting<'_> {
    fn on_step(&mut self, grid: &Grid) -> Result<()> {
        self.steps += 1;
        log::trace!("step {}", self.steps);
        self.inner.on_step(grid)
    }
}
