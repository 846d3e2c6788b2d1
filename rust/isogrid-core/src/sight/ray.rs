//! Incremental ray walk between two coordinates.
//!
//! Yields every coordinate after the source up to and including the target.
//! Vertical rays (same x) step y one at a time. Other rays follow the line
//! through both coordinates: for each column the ray covers the rows between
//! the line's heights at the column's two half-way borders.

use std::iter::FusedIterator;

use crate::grid::Coordinate;

/// Half-up rounding toward positive infinity, as the client computes it.
#[inline]
pub(crate) fn round_half_up(v: f64) -> i64 { (v + 0.5).floor() as i64 }

#[derive(Clone, Debug)]
enum Walk {
    Vertical { y_dir: i64 },
    Sloped { x_dir: i64, y_dir: i64, slope: f64, intercept: f64, next_y: i64, last_y: i64 },
}

#[derive(Clone, Debug)]
pub struct Ray {
    x: i64,
    y: i64,
    target: (i64, i64),
    walk: Walk,
}

impl Ray {
    pub fn new(source: Coordinate, target: Coordinate) -> Self {
        let (sx, sy) = (source.x as i64, source.y as i64);
        let (tx, ty) = (target.x as i64, target.y as i64);
        let y_dir = if sy > ty { -1 } else { 1 };
        let walk = if sx == tx {
            Walk::Vertical { y_dir }
        } else {
            let x_dir = if sx > tx { -1 } else { 1 };
            let slope = (ty - sy) as f64 / (tx - sx) as f64;
            let intercept = sy as f64 - slope * sx as f64;
            let (next_y, last_y) = column_bounds(sx, x_dir, y_dir, slope, intercept);
            Walk::Sloped { x_dir, y_dir, slope, intercept, next_y, last_y }
        };
        Self { x: sx, y: sy, target: (tx, ty), walk }
    }

    #[inline]
    fn done(&self) -> bool { (self.x, self.y) == self.target }
}

/// Entry row of the next column and last row of column `x`.
fn column_bounds(x: i64, x_dir: i64, y_dir: i64, slope: f64, intercept: f64) -> (i64, i64) {
    let v = (x as f64 + x_dir as f64 * 0.5) * slope + intercept;
    let (up, down) = (round_half_up(v), (v - 0.5).ceil() as i64);
    if y_dir > 0 { (up, down) } else { (down, up) }
}

impl Iterator for Ray {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.done() {
            return None;
        }
        match &mut self.walk {
            Walk::Vertical { y_dir } => self.y += *y_dir,
            Walk::Sloped { x_dir, y_dir, slope, intercept, next_y, last_y } => {
                self.y += *y_dir;
                if self.y * *y_dir > *last_y * *y_dir {
                    self.x += *x_dir;
                    self.y = *next_y;
                    (*next_y, *last_y) = column_bounds(self.x, *x_dir, *y_dir, *slope, *intercept);
                }
            }
        }
        Some(Coordinate::new(self.x as i32, self.y as i32))
    }
}

impl FusedIterator for Ray {}
