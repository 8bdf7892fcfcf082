use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::Config;
use crate::core::Simulation;

fn py_err<E: ToString>(e: E) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Run a diffusion-limited aggregation simulation.
///
/// Parameters
/// - grid_size: side length of the square grid (int, >= 30)
/// - particle_count: swarm size, fixed for the run (int, > 0)
/// - step_budget: maximum iterations (int, >= 10)
/// - initial_radius: starting cluster radius (float, >= 1)
/// - diagonals: use 8-way adjacency for the contact test (default False)
/// - radius_ratio: scales the recycling window and respawn radius (default 1.5)
/// - seed: RNG seed (int) for reproducibility; None for nondeterministic
///
/// Returns: (grid, radius) where grid is a (N, N) bool ndarray of the
/// aggregate and radius is the exact final cluster radius.
///
/// Errors: raises ValueError on invalid parameters.
#[pyfunction]
#[pyo3(signature = (grid_size, particle_count, step_budget, initial_radius, diagonals=false, radius_ratio=1.5, seed=None))]
#[allow(clippy::too_many_arguments)]
fn dla(
    py: Python<'_>,
    grid_size: usize,
    particle_count: usize,
    step_budget: usize,
    initial_radius: f64,
    diagonals: bool,
    radius_ratio: f64,
    seed: Option<u64>,
) -> PyResult<(Py<PyArray2<bool>>, f64)> {
    let config = Config {
        grid_size,
        particle_count,
        step_budget,
        initial_radius,
        diagonal_adjacency: diagonals,
        radius_ratio,
        seed,
    };
    let mut sim = Simulation::new(&config).map_err(py_err)?;

    // Release the GIL for the whole run.
    let summary = py.detach(|| sim.run());

    let size = sim.grid().size();
    let mut arr = Array2::<bool>::from_elem((size, size), false);
    for (row, col) in sim.grid().occupied_cells() {
        arr[[row as usize, col as usize]] = true;
    }
    Ok((arr.into_pyarray(py).to_owned().into(), summary.radius))
}

/// The dlasim Python module entry point.
#[pymodule]
fn dlasim(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(dla, m)?)?;
    Ok(())
}
