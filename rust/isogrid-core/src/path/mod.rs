//! Paths over a grid, their wire codec and the A* search producing them.

pub mod codec;
pub mod open_set;
pub mod options;
pub mod pathfinder;

use crate::grid::{Cell, Direction};

pub use codec::Decoder;
pub use options::SearchOptions;
pub use pathfinder::Pathfinder;

/// One move: the cell reached and the direction taken to reach it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathStep<C> {
    pub cell: C,
    pub direction: Direction,
}

impl<C> PathStep<C> {
    pub fn new(cell: C, direction: Direction) -> Self { Self { cell, direction } }
}

/// Ordered moves; the first step is the origin, conventionally reached `East`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<C> {
    steps: Vec<PathStep<C>>,
}

impl<C: Cell> Path<C> {
    pub fn new(steps: Vec<PathStep<C>>) -> Self { Self { steps } }

    pub fn steps(&self) -> &[PathStep<C>] { &self.steps }

    pub fn into_steps(self) -> Vec<PathStep<C>> { self.steps }

    pub fn get(&self, index: usize) -> Option<&PathStep<C>> { self.steps.get(index) }

    pub fn first(&self) -> Option<&PathStep<C>> { self.steps.first() }

    pub fn last(&self) -> Option<&PathStep<C>> { self.steps.last() }

    /// Origin cell.
    pub fn start(&self) -> Option<&C> { self.first().map(|s| &s.cell) }

    /// Final cell.
    pub fn target(&self) -> Option<&C> { self.last().map(|s| &s.cell) }

    pub fn len(&self) -> usize { self.steps.len() }

    pub fn is_empty(&self) -> bool { self.steps.is_empty() }

    pub fn contains(&self, cell: &C) -> bool { self.steps.iter().any(|s| s.cell == *cell) }

    pub fn iter(&self) -> std::slice::Iter<'_, PathStep<C>> { self.steps.iter() }

    /// Cell ids in order.
    pub fn cell_ids(&self) -> Vec<usize> { self.steps.iter().map(|s| s.cell.id()).collect() }

    /// Leading steps while `predicate` holds.
    pub fn keep_while(&self, mut predicate: impl FnMut(&PathStep<C>) -> bool) -> Path<C> {
        Path::new(self.steps.iter().take_while(|s| predicate(s)).cloned().collect())
    }

    /// First `new_size` steps; an unchanged copy when the path is not longer than that.
    pub fn truncate(&self, new_size: usize) -> Path<C> {
        if new_size >= self.len() {
            return self.clone();
        }
        Path::new(self.steps[..new_size].to_vec())
    }
}

impl<'a, C> IntoIterator for &'a Path<C> {
    type Item = &'a PathStep<C>;
    type IntoIter = std::slice::Iter<'a, PathStep<C>>;

    fn into_iter(self) -> Self::IntoIter { self.steps.iter() }
}

impl<C> IntoIterator for Path<C> {
    type Item = PathStep<C>;
    type IntoIter = std::vec::IntoIter<PathStep<C>>;

    fn into_iter(self) -> Self::IntoIter { self.steps.into_iter() }
}
