use serde::{Deserialize, Serialize};

use crate::grid::direction::{decode_directions_str, Direction};

pub const DEFAULT_TARGET_DISTANCE: u32 = 0;

/// Plain-data half of a pathfinder configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Stop once the current cell is at most this far from the target.
    pub target_distance: u32,
    /// Moves tried from each cell, in order.
    pub directions: Vec<Direction>,
    /// Fail once more cells than this have been explored. `None` is unbounded.
    pub explored_cell_limit: Option<usize>,
    /// Include the source cell as the first step.
    pub add_first_cell: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            target_distance: DEFAULT_TARGET_DISTANCE,
            directions: Direction::restricted_directions(),
            explored_cell_limit: None,
            add_first_cell: true,
        }
    }
}

impl SearchOptions {
    /// Read `ISOGRID_*` overrides from the process environment.
    pub fn from_env() -> Self { Self::from_lookup(|name| std::env::var(name).ok()) }

    /// Build options from a variable lookup. Missing or unparseable values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();
        if let Some(v) = lookup("ISOGRID_TARGET_DISTANCE").and_then(|s| s.trim().parse::<u32>().ok()) {
            options.target_distance = v;
        }
        let directions = decode_directions_str(lookup("ISOGRID_DIRECTIONS").as_deref());
        if !directions.is_empty() {
            options.directions = directions;
        }
        if let Some(raw) = lookup("ISOGRID_EXPLORED_CELL_LIMIT") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "none" | "unbounded" => options.explored_cell_limit = None,
                s => {
                    if let Ok(limit) = s.parse::<usize>() {
                        options.explored_cell_limit = Some(limit);
                    }
                }
            }
        }
        if let Some(raw) = lookup("ISOGRID_ADD_FIRST_CELL") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => options.add_first_cell = true,
                "0" | "false" | "no" => options.add_first_cell = false,
                _ => {}
            }
        }
        options
    }

    /// Allow all eight moves instead of the diagonals only.
    pub fn all_directions(mut self) -> Self {
        self.directions = Direction::ALL.to_vec();
        self
    }
}
