//! Column-scan line of sight.
//!
//! The cell with the lower x is always taken as the origin, so the answer
//! does not depend on argument order. Each column is scanned up to the
//! line's height at the column's far border, then the target column is
//! finished row by row. Rays grazing a blocking cell may get a different
//! answer than [`CellSight::is_free`](super::CellSight::is_free).

use crate::grid::{self, BattlefieldCell, Cell, Coordinate, Grid};
use crate::sight::ray::round_half_up;

pub struct LineOfSight<'g, G: Grid> {
    grid: &'g G,
}

impl<'g, G> LineOfSight<'g, G>
where
    G: Grid,
    G::Cell: BattlefieldCell,
{
    pub fn new(grid: &'g G) -> Self { Self { grid } }

    /// True when no cell strictly between `source` and `target` blocks sight.
    pub fn between(&self, source: &G::Cell, target: &G::Cell) -> bool {
        let source = grid::coordinate(self.grid, source.id());
        let target = grid::coordinate(self.grid, target.id());
        self.between_coordinates(source, target)
    }

    pub fn between_coordinates(&self, source: Coordinate, target: Coordinate) -> bool {
        if source.x > target.x {
            return self.between_coordinates(target, source);
        }
        if source == target {
            return true;
        }
        if source.x == target.x {
            return self.free_column(target.x, source.y, target.y);
        }
        self.free_sloped(source, target)
    }

    /// Off-map coordinates never block.
    fn blocking(&self, x: i32, y: i32) -> bool {
        grid::cell_at(self.grid, Coordinate::new(x, y)).map_or(false, |cell| cell.sight_blocking())
    }

    /// Rows strictly between `y1` and `y2` on column `x`.
    fn free_column(&self, x: i32, y1: i32, y2: i32) -> bool {
        let (from, to) = (y1.min(y2), y1.max(y2));
        (from + 1..to).all(|y| !self.blocking(x, y))
    }

    /// `source.x < target.x`.
    fn free_sloped(&self, source: Coordinate, target: Coordinate) -> bool {
        let y_dir = if source.y > target.y { -1 } else { 1 };
        let slope = (target.y - source.y) as f64 / (target.x - source.x) as f64;
        let intercept = source.y as f64 - slope * source.x as f64;

        let mut y = source.y;
        for x in source.x..=target.x {
            let y_max = round_half_up((x as f64 + 0.5) * slope + intercept) as i32;
            loop {
                if target.is(x, y) {
                    return true;
                }
                if !source.is(x, y) && self.blocking(x, y) {
                    return false;
                }
                if y * y_dir >= y_max * y_dir {
                    break;
                }
                y += y_dir;
            }
        }
        self.free_column(target.x, y, target.y)
    }
}
