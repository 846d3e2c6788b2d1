//! Path wire format: 3-char chunks `[direction][cell id, 2 pseudo-Base64 digits]`.
//!
//! Straight runs are compressed to a single chunk naming the run's last
//! cell; decoding walks the run back one cell at a time.

use isogrid_encoding::base64;
use itertools::Itertools;

use crate::error::PathError;
use crate::grid::{self, Cell, Direction, Grid};
use crate::path::{Path, PathStep, Pathfinder};

pub const CHUNK_LEN: usize = 3;

/// Largest cell id two digits can carry.
pub const MAX_WIRE_CELL_ID: usize = 4095;

fn push_chunk(out: &mut String, direction: Direction, cell: usize) -> Result<(), PathError> {
    if cell > MAX_WIRE_CELL_ID {
        return Err(PathError::CellOutOfRange { cell: cell as u64, size: MAX_WIRE_CELL_ID + 1 });
    }
    out.push(direction.to_char());
    out.push_str(&base64::encode(cell as u64, 2)?);
    Ok(())
}

impl<C: Cell> Path<C> {
    /// Compressed wire form. The origin chunk is merged with a following `East` run.
    pub fn encode(&self) -> Result<String, PathError> { self.encode_steps(false) }

    /// Compressed wire form with an uncompressed leading origin chunk.
    pub fn encode_with_start_cell(&self) -> Result<String, PathError> { self.encode_steps(true) }

    fn encode_steps(&self, include_start: bool) -> Result<String, PathError> {
        let mut out = String::with_capacity(self.len() * CHUNK_LEN);
        let mut steps = self.steps();
        if include_start {
            if let Some((first, rest)) = steps.split_first() {
                push_chunk(&mut out, Direction::East, first.cell.id())?;
                steps = rest;
            }
        }
        let runs = steps.iter().group_by(|step| step.direction);
        for (direction, run) in &runs {
            if let Some(last) = run.last() {
                push_chunk(&mut out, direction, last.cell.id())?;
            }
        }
        Ok(out)
    }
}

/// Path decoder bound to one grid.
pub struct Decoder<'g, G: Grid> {
    grid: &'g G,
}

impl<'g, G: Grid> Decoder<'g, G> {
    pub fn new(grid: &'g G) -> Self { Self { grid } }

    pub fn grid(&self) -> &'g G { self.grid }

    /// Neighbour of `start` in `direction`, `None` when it falls off the map.
    pub fn next_cell_by_direction(&self, start: &G::Cell, direction: Direction) -> Option<G::Cell> {
        grid::next_cell(self.grid, start.id(), direction)
    }

    /// Decode `encoded`. With a `start` cell the first chunk is a move from it;
    /// without one, the first chunk's cell becomes the origin.
    pub fn decode(&self, encoded: &str, start: Option<&G::Cell>) -> Result<Path<G::Cell>, PathError> {
        if encoded.len() % CHUNK_LEN != 0 {
            return Err(PathError::InvalidLength(encoded.len()));
        }
        let mut steps: Vec<PathStep<G::Cell>> = Vec::with_capacity(encoded.len() / CHUNK_LEN + 1);
        if let Some(start) = start {
            steps.push(PathStep::new(start.clone(), Direction::East));
        }
        for chunk in encoded.as_bytes().chunks(CHUNK_LEN) {
            let direction = Direction::from_char(chunk[0] as char)?;
            let id = (base64::ord(chunk[1] as char)? as usize) << 6 | base64::ord(chunk[2] as char)? as usize;
            let cell = self.grid.get(id).ok_or(PathError::CellOutOfRange { cell: id as u64, size: self.grid.size() })?;
            match steps.last() {
                None => steps.push(PathStep::new(cell, Direction::East)),
                Some(last) => {
                    let from = last.cell.clone();
                    self.expand_run(&mut steps, from, cell, direction)?;
                }
            }
        }
        Ok(Path::new(steps))
    }

    /// Walk from `from` toward `target` in `direction`, pushing every cell crossed.
    fn expand_run(&self, steps: &mut Vec<PathStep<G::Cell>>, from: G::Cell, target: G::Cell, direction: Direction) -> Result<(), PathError> {
        let limit = 2 * self.grid.width() + 1;
        let from_id = from.id();
        let mut current = from;
        let mut taken = 0usize;
        while current != target {
            current = self
                .next_cell_by_direction(&current, direction)
                .ok_or(PathError::OffMap { from: current.id(), direction })?;
            steps.push(PathStep::new(current.clone(), direction));
            taken += 1;
            if taken > limit {
                return Err(PathError::StepLimitExceeded { from: from_id, target: target.id(), limit });
            }
        }
        Ok(())
    }

    pub fn encode(&self, path: &Path<G::Cell>) -> Result<String, PathError> { path.encode() }

    pub fn encode_with_start_cell(&self, path: &Path<G::Cell>) -> Result<String, PathError> { path.encode_with_start_cell() }

    /// Pathfinder with default options over the same grid.
    pub fn pathfinder(&self) -> Pathfinder<'g, G> { Pathfinder::new(self.grid) }
}
