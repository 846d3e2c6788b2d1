//! Line of sight on fight grids.
//!
//! Off-map coordinates crossed by a ray are skipped and never block.
//! [`LineOfSight`] is the order-independent column scan.

pub mod line_of_sight;
pub mod ray;

use crate::grid::{self, BattlefieldCell, Cell, Coordinate, Grid};

pub use line_of_sight::LineOfSight;
pub use ray::Ray;

/// Line of sight queries over one grid.
pub struct BattlefieldSight<'g, G: Grid> {
    grid: &'g G,
}

impl<'g, G> BattlefieldSight<'g, G>
where
    G: Grid,
    G::Cell: BattlefieldCell,
{
    pub fn new(grid: &'g G) -> Self { Self { grid } }

    /// Sight from a fixed source cell.
    pub fn from(&self, source: &G::Cell) -> CellSight<'g, G> {
        CellSight { grid: self.grid, coordinate: grid::coordinate(self.grid, source.id()), source: source.clone() }
    }

    pub fn between(&self, source: &G::Cell, target: &G::Cell) -> bool { self.from(source).is_free(target) }
}

pub struct CellSight<'g, G: Grid> {
    grid: &'g G,
    source: G::Cell,
    coordinate: Coordinate,
}

impl<'g, G> CellSight<'g, G>
where
    G: Grid,
    G::Cell: BattlefieldCell,
{
    pub fn source(&self) -> &G::Cell { &self.source }

    /// True when no cell strictly between the source and `target` blocks sight.
    pub fn is_free(&self, target: &G::Cell) -> bool {
        if *target == self.source {
            return true;
        }
        let target_id = target.id();
        self.to(target).all(|cell| cell.id() == target_id || !cell.sight_blocking())
    }

    /// Cells crossed by the ray to `target`, ending with the target itself.
    pub fn to(&self, target: &G::Cell) -> SightCells<'g, G> {
        let target = grid::coordinate(self.grid, target.id());
        SightCells { grid: self.grid, ray: Ray::new(self.coordinate, target) }
    }

    /// Visit every cell of the grid with its visibility from the source.
    pub fn for_each(&self, mut f: impl FnMut(G::Cell, bool)) {
        for id in 0..self.grid.size() {
            if let Some(cell) = self.grid.get(id) {
                let free = self.is_free(&cell);
                f(cell, free);
            }
        }
    }

    pub fn accessible(&self) -> Vec<G::Cell> { self.partition(true) }

    pub fn blocked(&self) -> Vec<G::Cell> { self.partition(false) }

    fn partition(&self, free: bool) -> Vec<G::Cell> {
        let mut cells = Vec::new();
        self.for_each(|cell, is_free| {
            if is_free == free {
                cells.push(cell);
            }
        });
        cells
    }
}

/// Forward-only iterator over the on-map cells of a [`Ray`].
pub struct SightCells<'g, G: Grid> {
    grid: &'g G,
    ray: Ray,
}

impl<'g, G: Grid> Iterator for SightCells<'g, G> {
    type Item = G::Cell;

    fn next(&mut self) -> Option<G::Cell> {
        let grid = self.grid;
        self.ray.find_map(|c| grid::cell_at(grid, c))
    }
}
