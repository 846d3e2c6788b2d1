//! Map cell data codecs: plain pseudo-Base64 blocks and the encrypted variant.

pub mod cache;
pub mod cell_data;

use std::sync::Arc;

use isogrid_encoding::{base64, checksum, Key};
use tracing::debug;

use crate::error::MapDataError;

pub use cache::{CellCacheConfig, CellDataCache};
pub use cell_data::{CellData, CellLayerData, CellMovement, GroundCellData, InteractiveObjectData, PackedCell, CELL_BLOCK_LEN};

pub trait MapDataSerializer {
    /// Parse a map data string into its cells, in id order.
    fn deserialize(&self, map_data: &str) -> Result<Vec<CellData>, MapDataError>;

    /// Inverse of `deserialize`.
    fn serialize(&self, cells: &[CellData]) -> Result<String, MapDataError>;
}

/// Plain codec, optionally backed by a shared [`CellDataCache`].
#[derive(Clone, Debug, Default)]
pub struct DefaultMapDataSerializer {
    cache: Option<Arc<CellDataCache>>,
}

impl DefaultMapDataSerializer {
    pub fn new() -> Self { Self { cache: None } }

    pub fn with_cache(cache: Arc<CellDataCache>) -> Self { Self { cache: Some(cache) } }

    /// Enable caching with a fresh cache. Keeps the current one if already enabled.
    pub fn enable_cache(&mut self, cfg: CellCacheConfig) {
        if self.cache.is_none() {
            self.cache = Some(Arc::new(CellDataCache::new(cfg)));
        }
    }

    pub fn disable_cache(&mut self) { self.cache = None; }

    pub fn cache(&self) -> Option<&Arc<CellDataCache>> { self.cache.as_ref() }

    fn parse_block(&self, block: &[u8]) -> Result<CellData, MapDataError> {
        let mut packed: PackedCell = [0; CELL_BLOCK_LEN];
        for (digit, &c) in packed.iter_mut().zip(block) {
            *digit = base64::ord(c as char)?;
        }
        Ok(match &self.cache {
            Some(cache) => cache.get_or_unpack(&packed),
            None => CellData::unpack(&packed),
        })
    }
}

impl MapDataSerializer for DefaultMapDataSerializer {
    fn deserialize(&self, map_data: &str) -> Result<Vec<CellData>, MapDataError> {
        if map_data.len() % CELL_BLOCK_LEN != 0 {
            return Err(MapDataError::InvalidLength(map_data.len()));
        }
        let cells = map_data
            .as_bytes()
            .chunks(CELL_BLOCK_LEN)
            .map(|block| self.parse_block(block))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(cells = cells.len(), cached = self.cache.is_some(), "map_data_deserialized");
        Ok(cells)
    }

    fn serialize(&self, cells: &[CellData]) -> Result<String, MapDataError> {
        let mut out = String::with_capacity(cells.len() * CELL_BLOCK_LEN);
        for cell in cells {
            out.push_str(&base64::encode_bytes(&cell.pack())?);
        }
        Ok(out)
    }
}

/// Codec for map data ciphered with the session [`Key`].
/// The key offset is `2 * checksum(key)`.
#[derive(Clone, Debug)]
pub struct EncryptedMapDataSerializer<S = DefaultMapDataSerializer> {
    key: Key,
    offset: usize,
    inner: S,
}

impl EncryptedMapDataSerializer {
    pub fn new(key: Key) -> Self { Self::with_serializer(key, DefaultMapDataSerializer::new()) }
}

impl<S: MapDataSerializer> EncryptedMapDataSerializer<S> {
    pub fn with_serializer(key: Key, inner: S) -> Self {
        let offset = 2 * checksum::integer(key.as_str()) as usize;
        Self { key, offset, inner }
    }

    pub fn key(&self) -> &Key { &self.key }

    pub fn key_offset(&self) -> usize { self.offset }

    pub fn inner(&self) -> &S { &self.inner }
}

impl<S: MapDataSerializer> MapDataSerializer for EncryptedMapDataSerializer<S> {
    fn deserialize(&self, map_data: &str) -> Result<Vec<CellData>, MapDataError> {
        let plain = self.key.cipher().decrypt(map_data, self.offset)?;
        self.inner.deserialize(&plain)
    }

    fn serialize(&self, cells: &[CellData]) -> Result<String, MapDataError> {
        let plain = self.inner.serialize(cells)?;
        Ok(self.key.cipher().encrypt(&plain, self.offset)?)
    }
}
