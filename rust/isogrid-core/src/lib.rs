//! Spatial toolkit for rotated diamond grids: coordinates, line of sight,
//! A* pathfinding and the map/path wire codecs.
//!
//! Algorithms are generic over [`Grid`]; [`StaticMap`] is the stock
//! implementation backed by parsed [`CellData`].

pub mod error;
pub mod grid;
pub mod path;
pub mod serializer;
pub mod sight;

pub use error::{MapDataError, PathError};
pub use grid::static_map::{MapCell, StaticMap};
pub use grid::{BattlefieldCell, Cell, Coordinate, Dimensions, Direction, Grid};
pub use path::{Decoder, Path, PathStep, Pathfinder, SearchOptions};
pub use serializer::{CellData, CellMovement, DefaultMapDataSerializer, EncryptedMapDataSerializer, MapDataSerializer};
pub use sight::{BattlefieldSight, CellSight, LineOfSight};
