//! A ready-made [`Grid`] backed by parsed [`CellData`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::MapDataError;
use crate::grid::{BattlefieldCell, Cell, Dimensions, Grid};
use crate::serializer::{CellData, MapDataSerializer};

struct MapInner {
    cells: Vec<CellData>,
    dimensions: Dimensions,
}

/// Immutable map; clones share the same cells and compare as the same grid.
#[derive(Clone)]
pub struct StaticMap {
    inner: Arc<MapInner>,
}

impl StaticMap {
    pub fn new(cells: Vec<CellData>, dimensions: Dimensions) -> Self {
        Self { inner: Arc::new(MapInner { cells, dimensions }) }
    }

    /// Parse `map_data` with `serializer`.
    pub fn parse<S: MapDataSerializer + ?Sized>(map_data: &str, dimensions: Dimensions, serializer: &S) -> Result<Self, MapDataError> {
        Ok(Self::new(serializer.deserialize(map_data)?, dimensions))
    }

    pub fn cells(&self) -> &[CellData] { &self.inner.cells }

    /// True when both handles point at the same map.
    pub fn same_map(&self, other: &StaticMap) -> bool { Arc::ptr_eq(&self.inner, &other.inner) }
}

impl Grid for StaticMap {
    type Cell = MapCell;

    fn size(&self) -> usize { self.inner.cells.len() }

    fn get(&self, id: usize) -> Option<MapCell> {
        (id < self.size()).then(|| MapCell { map: self.clone(), id })
    }

    fn dimensions(&self) -> Dimensions { self.inner.dimensions }
}

impl fmt::Debug for StaticMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticMap").field("dimensions", &self.inner.dimensions).field("size", &self.size()).finish()
    }
}

/// Handle on one cell of a [`StaticMap`].
#[derive(Clone)]
pub struct MapCell {
    map: StaticMap,
    id: usize,
}

impl MapCell {
    pub fn data(&self) -> &CellData { &self.map.inner.cells[self.id] }

    pub fn map(&self) -> &StaticMap { &self.map }
}

impl Cell for MapCell {
    fn id(&self) -> usize { self.id }
    fn walkable(&self) -> bool { self.data().walkable() }
}

impl BattlefieldCell for MapCell {
    fn sight_blocking(&self) -> bool { self.data().sight_blocking() }
}

impl PartialEq for MapCell {
    fn eq(&self, other: &Self) -> bool { self.id == other.id && self.map.same_map(&other.map) }
}
impl Eq for MapCell {}

impl Hash for MapCell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.map.inner).hash(state);
        self.id.hash(state);
    }
}

impl fmt::Debug for MapCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "MapCell({})", self.id) }
}
