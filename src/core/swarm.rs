use rand::Rng;
use std::f64::consts::TAU;

/// One position uniformly distributed by angle on a circle of `radius`
/// around `center`, truncated toward zero per axis.
///
/// The two components truncate independently, so the point can land at a
/// slightly different true radius (under sqrt(2) cells off); this is
/// accepted, not corrected.
fn circle_position(radius: f64, center: i32, rng: &mut impl Rng) -> (i32, i32) {
    let angle = TAU * rng.random::<f64>();
    let row = (radius * angle.sin() + center as f64) as i32;
    let col = (radius * angle.cos() + center as f64) as i32;
    (row, col)
}

/// Fixed-size swarm of diffusing particles, stored as parallel row/column
/// coordinate arrays indexed by slot.
///
/// Slot identity is ephemeral: recycling and fusion overwrite a slot with a
/// brand-new particle, so the swarm size never changes during a run.
#[derive(Debug, Clone)]
pub struct Swarm {
    rows: Vec<i32>,
    cols: Vec<i32>,
}

impl Swarm {
    /// Spawn `count` particles on a circle of `radius` around `center`.
    ///
    /// `count == 0` yields an empty swarm. No bounds validation is performed;
    /// the caller picks a radius that fits its grid (over-large spawns are
    /// swept up by the recycler before any grid lookup).
    pub fn spawn_on_circle(count: usize, radius: f64, center: i32, rng: &mut impl Rng) -> Self {
        let mut rows = Vec::with_capacity(count);
        let mut cols = Vec::with_capacity(count);
        for _ in 0..count {
            let (row, col) = circle_position(radius, center, rng);
            rows.push(row);
            cols.push(col);
        }
        Self { rows, cols }
    }

    /// Build a swarm from explicit coordinates. Both arrays must have the
    /// same length.
    pub fn from_positions(rows: Vec<i32>, cols: Vec<i32>) -> Self {
        debug_assert_eq!(rows.len(), cols.len());
        Self { rows, cols }
    }

    /// Number of particle slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the swarm holds no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Coordinates of the particle in `slot`.
    #[inline]
    pub fn position(&self, slot: usize) -> (i32, i32) {
        (self.rows[slot], self.cols[slot])
    }

    /// Row coordinates, indexed by slot.
    pub fn rows(&self) -> &[i32] {
        &self.rows
    }

    /// Column coordinates, indexed by slot.
    pub fn cols(&self) -> &[i32] {
        &self.cols
    }

    /// Displace every particle by exactly one cell in a uniformly random
    /// axis-aligned direction.
    ///
    /// One draw in `0..4` per particle, decomposed as axis (`draw / 2`) and
    /// sign (`2 * (draw % 2) - 1`), so the four directions are equally
    /// likely.
    pub fn random_step(&mut self, rng: &mut impl Rng) {
        for slot in 0..self.rows.len() {
            let draw: u8 = rng.random_range(0..4);
            let delta = 2 * (draw as i32 % 2) - 1;
            if draw / 2 == 0 {
                self.rows[slot] += delta;
            } else {
                self.cols[slot] += delta;
            }
        }
    }

    /// Replace every particle that escaped the working window with a fresh
    /// spawn on a circle of `respawn_radius` around `center`. Returns the
    /// number replaced.
    ///
    /// The escape test is inclusive on both edges of `[lower, upper]` on
    /// both axes: touching the boundary counts as escaped. When nothing
    /// escaped, no random draws occur.
    pub fn recycle_escaped(
        &mut self,
        lower: f64,
        upper: f64,
        respawn_radius: f64,
        center: i32,
        rng: &mut impl Rng,
    ) -> usize {
        let mut replaced = 0;
        for slot in 0..self.rows.len() {
            let row = self.rows[slot] as f64;
            let col = self.cols[slot] as f64;
            if row <= lower || row >= upper || col <= lower || col >= upper {
                let (r, c) = circle_position(respawn_radius, center, rng);
                self.rows[slot] = r;
                self.cols[slot] = c;
                replaced += 1;
            }
        }
        replaced
    }

    /// Overwrite `slot` with a fresh spawn on a circle of `radius` around
    /// `center` (the fusion respawn path).
    #[inline]
    pub fn respawn(&mut self, slot: usize, radius: f64, center: i32, rng: &mut impl Rng) {
        let (row, col) = circle_position(radius, center, rng);
        self.rows[slot] = row;
        self.cols[slot] = col;
    }
}
