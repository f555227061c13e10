use rand::Rng;

use crate::io::error::{Result, allocation_error};
use crate::spatial::Position;

/// Unordered set of positions with constant-time random removal
///
/// Removal moves the last element into the vacated slot, so iteration order
/// carries no meaning. Membership is not tracked here; the growth generator
/// marks queued cells on the grid instead.
#[derive(Debug, Clone, Default)]
pub struct FrontierSet {
    positions: Vec<Position>,
}

impl FrontierSet {
    /// Create a set with room for `capacity` positions before it has to grow
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the initial reservation fails
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut positions = Vec::new();
        positions
            .try_reserve(capacity)
            .map_err(|err| allocation_error("frontier set", capacity, &err))?;
        Ok(Self { positions })
    }

    /// Append a position
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the set cannot grow
    pub fn push(&mut self, position: Position) -> Result<()> {
        if self.positions.len() == self.positions.capacity() {
            let wanted = self.positions.len().max(1);
            self.positions
                .try_reserve(wanted)
                .map_err(|err| allocation_error("frontier set", wanted * 2, &err))?;
        }
        self.positions.push(position);
        Ok(())
    }

    /// Remove the element at `index`, filling the gap with the last element
    pub fn swap_remove(&mut self, index: usize) -> Option<Position> {
        (index < self.positions.len()).then(|| self.positions.swap_remove(index))
    }

    /// Remove a uniformly random element
    pub fn remove_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        if self.positions.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.positions.len());
        self.swap_remove(index)
    }

    /// Number of queued positions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Check if a position is queued
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }
}
