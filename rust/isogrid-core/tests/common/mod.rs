#![allow(dead_code)]

use isogrid_core::{DefaultMapDataSerializer, Dimensions, StaticMap};

pub const ARENA: &str = include_str!("../fixtures/arena.txt");
pub const WALLED_ARENA: &str = include_str!("../fixtures/walled_arena.txt");
pub const VILLAGE: &str = include_str!("../fixtures/village.txt");

pub fn dimensions() -> Dimensions { Dimensions::new(15, 17) }

pub fn parse(map_data: &str) -> StaticMap {
    StaticMap::parse(map_data, dimensions(), &DefaultMapDataSerializer::new()).unwrap()
}

pub fn arena() -> StaticMap { parse(ARENA) }
pub fn walled_arena() -> StaticMap { parse(WALLED_ARENA) }
pub fn village() -> StaticMap { parse(VILLAGE) }

/// Route search logs to the test output; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
