//! Core simulation data structures and the DLA driver.
//!
//! - [`grid`] — occupancy lattice holding the aggregate.
//! - [`swarm`] — diffusing particles: circle spawning, random walk, recycling.
//! - [`sim`] — contact detection, fusion, and the run loop.

pub mod grid;
pub mod sim;
pub mod swarm;

pub use grid::Grid;
pub use sim::{RunState, Simulation, Summary};
pub use swarm::Swarm;
