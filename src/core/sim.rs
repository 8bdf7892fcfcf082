use crate::config::Config;
use crate::core::grid::Grid;
use crate::core::swarm::Swarm;
use crate::error::Result;
use rand::{Rng, SeedableRng, rng, rngs::StdRng};

/// Safety margin, in cells, kept between the tracked radius and the grid
/// edge so neighbor lookups never leave the lattice.
const EDGE_MARGIN: i32 = 10;

/// Run state of the simulation driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Still iterating.
    Running,
    /// The working window grew too close to the grid edge; terminal.
    HaltedByBoundary,
    /// Step budget exhausted; terminal.
    Completed,
}

/// Result of a finished run.
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    /// Terminal state the run ended in.
    pub state: RunState,
    /// Iterations actually executed.
    pub steps: usize,
    /// Authoritative cluster radius, recomputed from the occupied cells
    /// rather than read from the tracked approximation.
    pub radius: f64,
    /// Number of occupied cells, seed included.
    pub occupied: usize,
}

/// DLA simulation driver.
///
/// Owns the grid, the swarm, and a seedable RNG; advances the run one
/// iteration at a time. Each iteration clamps the tracked radius, derives the
/// working window, walks the swarm, recycles escaped particles, and fuses
/// particles that contact the aggregate.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    swarm: Swarm,
    rng: StdRng,
    /// Tracked cluster radius; sizes the working window. Monotone while the
    /// loop runs (only the per-iteration clamp can lower it, and only when
    /// the configured start radius exceeds the grid margin).
    radius: i32,
    ratio: f64,
    diagonals: bool,
    step_budget: usize,
    steps_done: usize,
    progress_interval: usize,
    state: RunState,
}

impl Simulation {
    /// Create a simulation from a validated configuration.
    ///
    /// The swarm spawns on a circle at the configured starting radius
    /// (truncated to whole cells). With `config.seed = Some(s)` the run is
    /// fully reproducible; `None` seeds from the thread RNG.
    ///
    /// Errors: `Error::InvalidParam` from `Config::validate` or grid
    /// creation.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let mut rng: StdRng = match config.seed {
            Some(s) => SeedableRng::seed_from_u64(s),
            None => SeedableRng::seed_from_u64(rng().random()),
        };

        let grid = Grid::new(config.grid_size)?;
        let radius = config.initial_radius as i32;
        let swarm =
            Swarm::spawn_on_circle(config.particle_count, radius as f64, grid.center(), &mut rng);

        Ok(Self {
            grid,
            swarm,
            rng,
            radius,
            ratio: config.radius_ratio,
            diagonals: config.diagonal_adjacency,
            step_budget: config.step_budget,
            steps_done: 0,
            progress_interval: config.step_budget / 10,
            state: RunState::Running,
        })
    }

    /// Current run state.
    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// The occupancy grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The diffusing swarm.
    #[inline]
    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    /// Tracked cluster radius (the window-sizing approximation, not the
    /// authoritative result).
    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Iterations executed so far.
    #[inline]
    pub fn steps_completed(&self) -> usize {
        self.steps_done
    }

    /// Advance one iteration. Terminal states are absorbing: calling `step`
    /// after termination is a no-op that returns the terminal state.
    pub fn step(&mut self) -> RunState {
        if self.state != RunState::Running {
            return self.state;
        }

        let center = self.grid.center();
        self.radius = self.radius.min(center - EDGE_MARGIN);
        let span = self.radius as f64 * self.ratio;
        let lower = center as f64 - span;
        let upper = center as f64 + span;

        // The tracked region reached the grid edge; continuing would push
        // neighbor lookups out of range.
        if lower < 2.0 || upper > self.grid.size() as f64 - 3.0 {
            self.state = RunState::HaltedByBoundary;
            return self.state;
        }

        self.swarm.random_step(&mut self.rng);
        let escaped = self
            .swarm
            .recycle_escaped(lower, upper, span, center, &mut self.rng);
        let fused = self.fuse_contacting();

        self.steps_done += 1;
        if self.steps_done % self.progress_interval == 0 {
            log::debug!(
                "step {}/{}: {} fused, {} recycled, tracked radius {}, {} occupied",
                self.steps_done,
                self.step_budget,
                fused,
                escaped,
                self.radius,
                self.grid.occupied_count()
            );
        }
        if self.steps_done >= self.step_budget {
            self.state = RunState::Completed;
        }
        self.state
    }

    /// Run until a terminal state, then recompute the exact cluster radius
    /// from the occupied cells.
    pub fn run(&mut self) -> Summary {
        while self.state == RunState::Running {
            self.step();
        }
        Summary {
            state: self.state,
            steps: self.steps_done,
            radius: self.grid.max_radius(),
            occupied: self.grid.occupied_count(),
        }
    }

    /// Number of occupied neighbors of `(row, col)`: the four orthogonal
    /// cells, plus the four diagonals in 8-way mode.
    fn neighbor_count(&self, row: i32, col: i32) -> u32 {
        let g = &self.grid;
        let mut nn = g.is_occupied(row - 1, col) as u32
            + g.is_occupied(row + 1, col) as u32
            + g.is_occupied(row, col - 1) as u32
            + g.is_occupied(row, col + 1) as u32;
        if self.diagonals {
            nn += g.is_occupied(row - 1, col - 1) as u32
                + g.is_occupied(row - 1, col + 1) as u32
                + g.is_occupied(row + 1, col - 1) as u32
                + g.is_occupied(row + 1, col + 1) as u32;
        }
        nn
    }

    /// Fuse every particle adjacent to the aggregate and respawn its slot.
    ///
    /// Matches are collected against the grid state before any of this
    /// step's fusions, then occupied in one batch, so simultaneous contacts
    /// cannot influence each other and their order is irrelevant. The
    /// tracked radius grows to the ceiling of the farthest fused cell's
    /// center distance; fused slots respawn at the updated radius scaled by
    /// the ratio. Returns the number fused.
    fn fuse_contacting(&mut self) -> usize {
        let mut matched: Vec<usize> = Vec::new();
        for slot in 0..self.swarm.len() {
            let (row, col) = self.swarm.position(slot);
            if self.neighbor_count(row, col) > 0 {
                matched.push(slot);
            }
        }
        if matched.is_empty() {
            return 0;
        }

        let cells: Vec<(i32, i32)> = matched.iter().map(|&s| self.swarm.position(s)).collect();
        self.grid.occupy(&cells);

        let center = self.grid.center();
        let mut farthest = 0_i32;
        for &(row, col) in &cells {
            let dr = (row - center) as f64;
            let dc = (col - center) as f64;
            farthest = farthest.max((dr * dr + dc * dc).sqrt().ceil() as i32);
        }
        self.radius = self.radius.max(farthest);

        let respawn_radius = self.radius as f64 * self.ratio;
        for &slot in &matched {
            self.swarm
                .respawn(slot, respawn_radius, center, &mut self.rng);
        }
        matched.len()
    }
}
