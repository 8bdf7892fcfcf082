//! Diffusion-limited aggregation (DLA) on a square 2D lattice.
//!
//! A swarm of particles performs independent random walks around a growing
//! aggregate seeded at the grid center. Particles that touch the aggregate
//! fuse into it and are respawned on a circle around the cluster; particles
//! that wander past a tracked working window are recycled the same way, which
//! keeps expected hitting times bounded as the cluster grows.
//!
//! Typical use:
//!
//! ```
//! use dlasim::{Config, Simulation};
//!
//! let config = Config {
//!     grid_size: 101,
//!     particle_count: 200,
//!     step_budget: 500,
//!     initial_radius: 5.0,
//!     seed: Some(42),
//!     ..Config::default()
//! };
//! let mut sim = Simulation::new(&config)?;
//! let summary = sim.run();
//! assert!(summary.occupied >= 1);
//! # Ok::<(), dlasim::error::Error>(())
//! ```

pub mod config;
pub mod core;
pub mod error;

#[cfg(feature = "python")]
mod python;

pub use crate::config::Config;
pub use crate::core::{Grid, RunState, Simulation, Summary, Swarm};
