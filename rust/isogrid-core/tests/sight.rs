mod common;

use std::collections::{BTreeMap, HashSet};

use common::*;
use isogrid_core::{BattlefieldSight, Cell, Grid, MapCell};
use serde::Deserialize;

#[derive(Deserialize)]
struct Expectation {
    accessible: Vec<usize>,
    blocked: Vec<usize>,
}

fn expectations() -> BTreeMap<usize, Expectation> {
    serde_json::from_str(include_str!("fixtures/sight_expectations.json")).unwrap()
}

fn sorted_ids(cells: Vec<MapCell>) -> Vec<usize> {
    let mut ids: Vec<usize> = cells.iter().map(Cell::id).collect();
    ids.sort_unstable();
    ids
}

#[test]
fn accessible_and_blocked_cells() {
    let map = arena();
    let sight = BattlefieldSight::new(&map);
    for (source, expected) in expectations() {
        let from = sight.from(&map.get(source).unwrap());
        assert_eq!(sorted_ids(from.accessible()), expected.accessible, "accessible from {source}");
        assert_eq!(sorted_ids(from.blocked()), expected.blocked, "blocked from {source}");
    }
}

#[test]
fn accessible_and_blocked_partition_the_map() {
    let map = arena();
    let sight = BattlefieldSight::new(&map);
    for source in [0, 123, 177, 384, 478] {
        let from = sight.from(&map.get(source).unwrap());
        let accessible: HashSet<MapCell> = from.accessible().into_iter().collect();
        let blocked: HashSet<MapCell> = from.blocked().into_iter().collect();
        assert!(accessible.is_disjoint(&blocked));
        assert_eq!(accessible.len() + blocked.len(), map.size());
        assert!(accessible.contains(&map.get(source).unwrap()));
    }
}

#[test]
fn ray_cells() {
    let map = arena();
    let sight = BattlefieldSight::new(&map);
    let ray = |from: usize, to: usize| -> Vec<usize> {
        sight.from(&map.get(from).unwrap()).to(&map.get(to).unwrap()).map(|c| c.id()).collect()
    };
    assert_eq!(ray(193, 147), vec![178, 163, 177, 162, 147]);
    assert_eq!(
        ray(384, 13),
        vec![370, 355, 341, 327, 313, 298, 284, 270, 256, 241, 227, 213, 199, 184, 170, 156, 141, 127, 113, 99, 84, 70, 56, 42, 27, 13]
    );
    assert_eq!(ray(180, 185), vec![181, 182, 183, 184, 185]);
    assert!(ray(180, 180).is_empty());
}

#[test]
fn between_matches_cell_sight() {
    let map = arena();
    let sight = BattlefieldSight::new(&map);
    let source = map.get(123).unwrap();
    let from = sight.from(&source);
    for id in (0..map.size()).step_by(7) {
        let target = map.get(id).unwrap();
        assert_eq!(sight.between(&source, &target), from.is_free(&target), "target {id}");
    }
}
