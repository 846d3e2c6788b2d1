//! A* search over a grid.
//!
//! Search nodes live in an arena addressed by `u32` index; each node keeps
//! the index of the node it was reached from.

use std::sync::Arc;
use std::time::Instant;

use bitvec::prelude::*;
use tracing::debug;

use crate::error::PathError;
use crate::grid::{self, Cell, Coordinate, Direction, Grid};
use crate::path::open_set::{Key, OpenSet};
use crate::path::options::SearchOptions;
use crate::path::{Path, PathStep};

pub type WalkablePredicate<'g, C> = Arc<dyn Fn(&C) -> bool + Send + Sync + 'g>;
pub type CellWeight<'g, C> = Arc<dyn Fn(&C) -> u32 + Send + Sync + 'g>;

const NO_NODE: u32 = u32::MAX;

/// Configured search over one grid.
///
/// Configuration methods consume the pathfinder and return the updated one;
/// clone first to derive a variant that leaves the source untouched.
pub struct Pathfinder<'g, G: Grid> {
    grid: &'g G,
    options: SearchOptions,
    walkable: WalkablePredicate<'g, G::Cell>,
    weight: CellWeight<'g, G::Cell>,
}

impl<'g, G: Grid> Clone for Pathfinder<'g, G> {
    fn clone(&self) -> Self {
        Self { grid: self.grid, options: self.options.clone(), walkable: Arc::clone(&self.walkable), weight: Arc::clone(&self.weight) }
    }
}

impl<'g, G: Grid> Pathfinder<'g, G> {
    /// Default search: diagonal moves, walkable cells, unit weights.
    pub fn new(grid: &'g G) -> Self {
        Self { grid, options: SearchOptions::default(), walkable: Arc::new(|cell: &G::Cell| cell.walkable()), weight: Arc::new(|_: &G::Cell| 1) }
    }

    pub fn options(&self) -> &SearchOptions { &self.options }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn target_distance(mut self, distance: u32) -> Self {
        self.options.target_distance = distance;
        self
    }

    pub fn directions(mut self, directions: impl Into<Vec<Direction>>) -> Self {
        self.options.directions = directions.into();
        self
    }

    pub fn all_directions(self) -> Self { self.directions(Direction::ALL) }

    pub fn explored_cell_limit(mut self, limit: usize) -> Self {
        self.options.explored_cell_limit = Some(limit);
        self
    }

    pub fn add_first_cell(mut self, add: bool) -> Self {
        self.options.add_first_cell = add;
        self
    }

    /// Cells the search may step on. Only used while searching.
    pub fn walkable(mut self, predicate: impl Fn(&G::Cell) -> bool + Send + Sync + 'g) -> Self {
        self.walkable = Arc::new(predicate);
        self
    }

    /// Cost of stepping on a cell.
    pub fn cell_weight(mut self, weight: impl Fn(&G::Cell) -> u32 + Send + Sync + 'g) -> Self {
        self.weight = Arc::new(weight);
        self
    }

    /// Shortest path from `source` to within `target_distance` of `target`.
    pub fn find_path(&self, source: &G::Cell, target: &G::Cell) -> Result<Path<G::Cell>, PathError> {
        let started_at = Instant::now();
        let result = Search::new(self, source, target).run();
        let duration_ms = started_at.elapsed().as_millis() as u64;
        match &result {
            Ok((path, explored)) => {
                debug!(source = source.id(), target = target.id(), explored, steps = path.len(), duration_ms, "search_done")
            }
            Err(err) => debug!(source = source.id(), target = target.id(), duration_ms, reason = %err, "search_failed"),
        }
        result.map(|(path, _)| path)
    }
}

struct Node<C> {
    cell: C,
    direction: Direction,
    parent: u32,
    cost: u32,
    distance: u32,
}

struct Search<'p, 'g, G: Grid> {
    finder: &'p Pathfinder<'g, G>,
    source: G::Cell,
    target_id: usize,
    target: Coordinate,
    nodes: Vec<Node<G::Cell>>,
    open: OpenSet,
    best: Vec<u32>,
    explored: BitVec,
    explored_count: usize,
}

impl<'p, 'g, G: Grid> Search<'p, 'g, G> {
    fn new(finder: &'p Pathfinder<'g, G>, source: &G::Cell, target: &G::Cell) -> Self {
        let size = finder.grid.size();
        Self {
            finder,
            source: source.clone(),
            target_id: target.id(),
            target: grid::coordinate(finder.grid, target.id()),
            nodes: Vec::new(),
            open: OpenSet::new(),
            best: vec![NO_NODE; size],
            explored: bitvec![0; size],
            explored_count: 0,
        }
    }

    fn distance(&self, id: usize) -> u32 { grid::coordinate(self.finder.grid, id).distance(self.target) }

    fn mark_explored(&mut self, id: usize) {
        if let Some(mut bit) = self.explored.get_mut(id) {
            if !*bit {
                *bit = true;
                self.explored_count += 1;
            }
        }
    }

    fn is_explored(&self, id: usize) -> bool { self.explored.get(id).map(|b| *b).unwrap_or(false) }

    fn run(mut self) -> Result<(Path<G::Cell>, usize), PathError> {
        let finder = self.finder;
        let options = &finder.options;
        let source_id = self.source.id();
        let distance = self.distance(source_id);
        self.nodes.push(Node { cell: self.source.clone(), direction: Direction::East, parent: NO_NODE, cost: 0, distance });
        self.mark_explored(source_id);
        let mut current = 0u32;

        while self.nodes[current as usize].distance > options.target_distance {
            self.push_moves(current);

            if self.open.is_empty() {
                return Err(PathError::NoPathFound { from: source_id, to: self.target_id });
            }
            if let Some(limit) = options.explored_cell_limit {
                if self.explored_count > limit {
                    return Err(PathError::SearchLimitExceeded { limit });
                }
            }

            let Some(Key { node, .. }) = self.open.pop() else { break };
            current = node;
            let id = self.nodes[current as usize].cell.id();
            self.best[id] = NO_NODE;
            self.mark_explored(id);
        }

        Ok((self.build_path(current), self.explored_count))
    }

    fn push_moves(&mut self, from: u32) {
        let finder = self.finder;
        let (from_id, from_cost) = {
            let node = &self.nodes[from as usize];
            (node.cell.id(), node.cost)
        };
        for &direction in &finder.options.directions {
            let Some(id) = grid::next_cell_id(finder.grid, from_id, direction) else { continue };
            if self.is_explored(id) {
                continue;
            }
            let Some(cell) = finder.grid.get(id) else { continue };
            if !(finder.walkable)(&cell) {
                continue;
            }
            let cost = from_cost.saturating_add((finder.weight)(&cell));
            let pending = self.best[id];
            if pending != NO_NODE && self.nodes[pending as usize].cost <= cost {
                continue;
            }
            let distance = self.distance(id);
            let index = self.nodes.len() as u32;
            self.nodes.push(Node { cell, direction, parent: from, cost, distance });
            self.best[id] = index;
            self.open.push(Key::new(cost as u64 + distance as u64, index));
        }
    }

    /// Steps from the source to `last`. A step on a cell that is not really
    /// walkable drops everything after it.
    fn build_path(&self, last: u32) -> Path<G::Cell> {
        let mut steps = Vec::new();
        let mut index = last;
        while index != NO_NODE {
            let node = &self.nodes[index as usize];
            if node.parent == NO_NODE {
                break;
            }
            if node.cell.walkable() {
                steps.push(PathStep::new(node.cell.clone(), node.direction));
            } else {
                steps.clear();
            }
            index = node.parent;
        }
        if self.finder.options.add_first_cell {
            steps.push(PathStep::new(self.source.clone(), Direction::East));
        }
        steps.reverse();
        Path::new(steps)
    }
}
