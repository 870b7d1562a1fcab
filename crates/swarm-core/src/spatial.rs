//! Uniform grid over unclaimed particles used by the rebuild matching pass.
//!
//! Cells are as wide as the search radius, so every candidate within the
//! radius of a query lives in the 3x3 block around the query's cell. Results
//! match a linear scan in index order with a strict `<` comparison: the
//! nearest point strictly inside the radius, lowest index on ties.

use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

type Cell = (i32, i32);

pub struct ParticleGrid {
    cell_size: f32,
    radius_sq: f32,
    cells: FnvHashMap<Cell, SmallVec<[usize; 8]>>,
    remaining: usize,
}

impl ParticleGrid {
    /// Index `points` (by position in the slice) for queries of `radius`.
    pub fn build(points: &[Vec2], radius: f32) -> Self {
        let cell_size = radius.max(f32::EPSILON);
        let mut cells: FnvHashMap<Cell, SmallVec<[usize; 8]>> = FnvHashMap::default();
        for (i, p) in points.iter().enumerate() {
            cells.entry(cell_of(*p, cell_size)).or_default().push(i);
        }
        Self {
            cell_size,
            radius_sq: radius * radius,
            cells,
            remaining: points.len(),
        }
    }

    /// Number of indices not yet removed.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Nearest remaining index to `query`; `points` must be the slice the grid was built from.
    pub fn nearest(&self, query: Vec2, points: &[Vec2]) -> Option<usize> {
        let (cx, cy) = cell_of(query, self.cell_size);
        let mut best: Option<(f32, usize)> = None;
        for dy in -1..=1 {
            for dx in -1..=1 {
                let Some(bucket) = self.cells.get(&(cx + dx, cy + dy)) else {
                    continue;
                };
                for &i in bucket {
                    let d2 = points[i].distance_squared(query);
                    if d2 >= self.radius_sq {
                        continue;
                    }
                    match best {
                        Some((bd, bi)) if d2 > bd || (d2 == bd && i > bi) => {}
                        _ => best = Some((d2, i)),
                    }
                }
            }
        }
        best.map(|(_, i)| i)
    }

    /// Drop `index` (located at `position`) from future queries.
    pub fn remove(&mut self, index: usize, position: Vec2) {
        let cell = cell_of(position, self.cell_size);
        if let Some(bucket) = self.cells.get_mut(&cell) {
            if let Some(slot) = bucket.iter().position(|&i| i == index) {
                bucket.swap_remove(slot);
                self.remaining -= 1;
                if bucket.is_empty() {
                    self.cells.remove(&cell);
                }
            }
        }
    }
}

#[inline]
fn cell_of(p: Vec2, cell_size: f32) -> Cell {
    (
        (p.x / cell_size).floor() as i32,
        (p.y / cell_size).floor() as i32,
    )
}
