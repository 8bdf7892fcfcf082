use crate::core::grid::MIN_GRID_SIZE;
use crate::error::{Error, Result};

/// Parameters for a DLA run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Side length of the square grid.
    pub grid_size: usize,
    /// Number of diffusing particles; the swarm size is fixed for the run.
    pub particle_count: usize,
    /// Maximum number of iterations.
    pub step_budget: usize,
    /// Starting cluster radius (truncated to whole cells at spawn time).
    pub initial_radius: f64,
    /// Use 8-way adjacency for the contact test instead of 4-way.
    pub diagonal_adjacency: bool,
    /// Scales both the recycling window and the respawn radius relative to
    /// the tracked cluster radius.
    pub radius_ratio: f64,
    /// RNG seed for reproducible runs; `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: 400,
            particle_count: 1000,
            step_budget: 20_000,
            initial_radius: 5.0,
            diagonal_adjacency: false,
            radius_ratio: 1.5,
            seed: None,
        }
    }
}

impl Config {
    /// Validate all preconditions.
    ///
    /// Errors: `Error::InvalidParam` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(Error::InvalidParam(format!(
                "grid_size must be at least {MIN_GRID_SIZE}, got {}",
                self.grid_size
            )));
        }
        if self.particle_count == 0 {
            return Err(Error::InvalidParam("particle_count must be > 0".into()));
        }
        // The progress interval is step_budget / 10; smaller budgets would
        // make it zero.
        if self.step_budget < 10 {
            return Err(Error::InvalidParam(format!(
                "step_budget must be at least 10, got {}",
                self.step_budget
            )));
        }
        if !self.initial_radius.is_finite() || self.initial_radius < 1.0 {
            return Err(Error::InvalidParam(
                "initial_radius must be finite and >= 1".into(),
            ));
        }
        if !self.radius_ratio.is_finite() || self.radius_ratio <= 0.0 {
            return Err(Error::InvalidParam(
                "radius_ratio must be finite and > 0".into(),
            ));
        }
        Ok(())
    }
}
