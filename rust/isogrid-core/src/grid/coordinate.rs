//! Rotated (x, y) coordinates of cell ids.
//!
//! Rows of a map alternate between `width` and `width - 1` cells, so cell ids
//! run along a zig-zag. Projecting onto the diagonal axes gives a plane where
//! one diagonal step changes exactly one component by one.

use serde::{Deserialize, Serialize};

use crate::grid::direction::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self { Self { x, y } }

    /// Coordinate of `id` on a map `width` cells wide.
    pub fn from_cell_id(id: usize, width: usize) -> Self {
        let (id, w) = (id as i64, width as i64);
        let line = id / (2 * w - 1);
        let column = id - line * (2 * w - 1);
        let offset = column % w;
        let y = line - offset;
        let x = (id - (w - 1) * y) / w;
        Self { x: x as i32, y: y as i32 }
    }

    /// Inverse of [`Coordinate::from_cell_id`]; may be negative or past the map end.
    #[inline]
    pub fn to_cell_id(self, width: usize) -> i64 {
        let w = width as i64;
        self.x as i64 * w + self.y as i64 * (w - 1)
    }

    #[inline]
    pub fn is(self, x: i32, y: i32) -> bool { self.x == x && self.y == y }

    /// Number of diagonal moves between two coordinates.
    #[inline]
    pub fn distance(self, other: Coordinate) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Diagonal direction pointing toward `target`. Never a cardinal.
    pub fn direction_to(self, target: Coordinate) -> Direction {
        if self.x == target.x {
            if target.y > self.y { Direction::SouthWest } else { Direction::NorthEast }
        } else if target.x > self.x {
            Direction::SouthEast
        } else {
            Direction::NorthWest
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(id: usize) -> Coordinate { Coordinate::from_cell_id(id, 15) }

    #[test]
    fn known_coordinates() {
        assert_eq!(at(157), Coordinate::new(17, -7));
        assert!(at(157).is(17, -7));
        assert!(!at(157).is(-7, 17));
        assert_eq!(at(0), Coordinate::new(0, 0));
        assert_eq!(at(14), Coordinate::new(14, -14));
        assert_eq!(at(15), Coordinate::new(1, 0));
    }

    #[test]
    fn to_cell_id_inverts() {
        for id in 0..479 {
            assert_eq!(at(id).to_cell_id(15), id as i64);
        }
    }

    #[test]
    fn distances() {
        assert_eq!(at(157).distance(at(227)), 5);
        assert_eq!(at(157).distance(at(0)), 24);
        assert_eq!(at(157).distance(at(157)), 0);
    }

    #[test]
    fn direction_to_only_yields_diagonals() {
        assert_eq!(at(157).direction_to(at(227)), Direction::SouthWest);
        assert_eq!(at(157).direction_to(at(129)), Direction::NorthEast);
        assert_eq!(at(157).direction_to(at(217)), Direction::SouthEast);
        assert_eq!(at(157).direction_to(at(67)), Direction::NorthWest);
        assert_eq!(at(157).direction_to(at(157)), Direction::NorthEast);
    }
}
