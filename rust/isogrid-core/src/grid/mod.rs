//! Grid and cell abstractions every algorithm in this crate is generic over.

pub mod coordinate;
pub mod direction;
pub mod static_map;

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

pub use coordinate::Coordinate;
pub use direction::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Self { Self { width, height } }
}

/// A cell handle. Equality must mean "same grid, same id".
pub trait Cell: Clone + Eq + Hash + Debug {
    fn id(&self) -> usize;
    fn walkable(&self) -> bool;
}

/// Cell of a fight grid, which can stop a line of sight.
pub trait BattlefieldCell: Cell {
    fn sight_blocking(&self) -> bool;
}

/// Read-only map of `size()` cells with ids in `[0, size)`.
///
/// Cells may be materialised on demand by `get`; the grid must not change
/// while a search or sight query borrows it.
pub trait Grid {
    type Cell: Cell;

    fn size(&self) -> usize;
    fn get(&self, id: usize) -> Option<Self::Cell>;
    fn dimensions(&self) -> Dimensions;

    #[inline]
    fn width(&self) -> usize { self.dimensions().width }
}

/// Coordinate of a cell id on `grid`.
#[inline]
pub fn coordinate<G: Grid + ?Sized>(grid: &G, id: usize) -> Coordinate {
    Coordinate::from_cell_id(id, grid.width())
}

/// Cell at a coordinate, if it lies on the map.
pub fn cell_at<G: Grid + ?Sized>(grid: &G, coordinate: Coordinate) -> Option<G::Cell> {
    let id = coordinate.to_cell_id(grid.width());
    usize::try_from(id).ok().and_then(|id| grid.get(id))
}

/// Id of the neighbour of `id` in `direction`, if it lies on the map.
pub fn next_cell_id<G: Grid + ?Sized>(grid: &G, id: usize, direction: Direction) -> Option<usize> {
    let next = id as i64 + direction.next_cell_increment(grid.width());
    usize::try_from(next).ok().filter(|&n| n < grid.size())
}

/// Neighbour cell of `id` in `direction`.
pub fn next_cell<G: Grid + ?Sized>(grid: &G, id: usize, direction: Direction) -> Option<G::Cell> {
    next_cell_id(grid, id, direction).and_then(|n| grid.get(n))
}

/// Diagonal-move distance between two cell ids.
#[inline]
pub fn distance<G: Grid + ?Sized>(grid: &G, from: usize, to: usize) -> u32 {
    coordinate(grid, from).distance(coordinate(grid, to))
}
