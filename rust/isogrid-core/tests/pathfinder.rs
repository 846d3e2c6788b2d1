mod common;

use common::*;
use isogrid_core::{Cell, Decoder, Direction, Grid, PathError, Pathfinder, SearchOptions, StaticMap};

fn ids(pathfinder: &Pathfinder<'_, StaticMap>, map: &StaticMap, from: usize, to: usize) -> Vec<usize> {
    pathfinder.find_path(&map.get(from).unwrap(), &map.get(to).unwrap()).unwrap().cell_ids()
}

#[test]
fn same_cell() {
    let map = arena();
    let path = Pathfinder::new(&map).find_path(&map.get(123).unwrap(), &map.get(123).unwrap()).unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!(path.start(), map.get(123).as_ref());
    assert_eq!(path.target(), map.get(123).as_ref());
}

#[test]
fn adjacent_cell() {
    let map = arena();
    assert_eq!(ids(&Pathfinder::new(&map), &map, 336, 322), vec![336, 322]);
}

#[test]
fn rectilinear_move() {
    let map = arena();
    let path = Pathfinder::new(&map).find_path(&map.get(305).unwrap(), &map.get(221).unwrap()).unwrap();
    assert_eq!(path.cell_ids(), vec![305, 291, 277, 263, 249, 235, 221]);
    assert_eq!(path.first().map(|s| s.direction), Some(Direction::East));
    assert!(path.iter().skip(1).all(|s| s.direction == Direction::NorthEast));
}

#[test]
fn with_obstacle() {
    let map = arena();
    assert_eq!(ids(&Pathfinder::new(&map), &map, 169, 139), vec![169, 183, 168, 153, 139]);
}

#[test]
fn with_all_directions() {
    let map = arena();
    assert_eq!(ids(&Pathfinder::new(&map).all_directions(), &map, 169, 139), vec![169, 168, 139]);
    assert_eq!(ids(&Pathfinder::new(&map).directions(Direction::ALL), &map, 169, 139), vec![169, 168, 139]);
}

#[test]
fn with_target_distance() {
    let map = arena();
    let pathfinder = Pathfinder::new(&map);
    assert_eq!(ids(&pathfinder.clone().target_distance(1), &map, 107, 225), vec![107, 122, 137, 151, 166, 181, 196, 211]);
    assert_eq!(ids(&pathfinder.clone().target_distance(2), &map, 107, 225), vec![107, 122, 137, 151, 166, 181, 196]);
    assert_eq!(ids(&pathfinder.clone().target_distance(3), &map, 107, 225), vec![107, 122, 137, 151, 166, 181]);
    assert_eq!(pathfinder.options().target_distance, 0);
}

#[test]
fn unreachable_target() {
    let map = arena();
    let err = Pathfinder::new(&map).find_path(&map.get(107).unwrap(), &map.get(225).unwrap()).unwrap_err();
    assert_eq!(err, PathError::NoPathFound { from: 107, to: 225 });
    assert!(!err.is_invalid_path());
}

#[test]
fn with_custom_weight_function() {
    let map = arena();
    let pathfinder = Pathfinder::new(&map).cell_weight(|cell| if cell.id() % 2 == 0 { 10 } else { 1 });
    assert_eq!(ids(&pathfinder, &map, 328, 384), vec![328, 313, 327, 341, 356, 370, 384]);
}

#[test]
fn with_walkable_predicate() {
    let map = arena();
    let pathfinder = Pathfinder::new(&map).walkable(|cell| cell.walkable() && cell.id() != 168);
    assert_eq!(ids(&pathfinder, &map, 169, 139), vec![169, 183, 197, 182, 167, 153, 139]);
}

#[test]
fn unwalkable_cell_on_path_cuts_the_path() {
    let map = arena();
    let pathfinder = Pathfinder::new(&map).walkable(|_| true);
    assert_eq!(ids(&pathfinder, &map, 169, 139), vec![169]);
}

#[test]
fn without_first_cell() {
    let map = arena();
    assert_eq!(
        ids(&Pathfinder::new(&map).add_first_cell(false), &map, 336, 384),
        vec![322, 307, 292, 277, 263, 249, 235, 221, 207, 193, 179, 165, 180, 195, 210, 196, 211, 226, 241, 256, 270, 284, 298, 313, 328, 342, 356, 370, 384]
    );
}

#[test]
fn complex_path() {
    init_tracing();
    let map = arena();
    let path = Pathfinder::new(&map).find_path(&map.get(336).unwrap(), &map.get(384).unwrap()).unwrap();
    assert_eq!(
        path.cell_ids(),
        vec![336, 322, 307, 292, 277, 263, 249, 235, 221, 207, 193, 179, 165, 180, 195, 210, 196, 211, 226, 241, 256, 270, 284, 298, 313, 328, 342, 356, 370, 384]
    );
    assert_eq!(path.len(), 30);
    assert_eq!(path.encode().unwrap(), "afqhfcfevhcLbdshdebeadeQbfidga");
    assert_eq!(path.encode_with_start_cell().unwrap(), "afqhfcfevhcLbdshdebeadeQbfidga");
}

#[test]
fn encoded_search_result_decodes_back() {
    let map = arena();
    let decoder = Decoder::new(&map);
    let path = decoder.pathfinder().find_path(&map.get(336).unwrap(), &map.get(384).unwrap()).unwrap();
    let decoded = decoder.decode(&decoder.encode(&path).unwrap(), map.get(336).as_ref()).unwrap();
    assert_eq!(decoded, path);
}

#[test]
fn explored_cell_limit() {
    let map = arena();
    let err = Pathfinder::new(&map).explored_cell_limit(10).find_path(&map.get(336).unwrap(), &map.get(384).unwrap()).unwrap_err();
    assert_eq!(err, PathError::SearchLimitExceeded { limit: 10 });
}

#[test]
fn limited_search_stays_within_limit() {
    let map = arena();
    for limit in [100, 200] {
        let path = Pathfinder::new(&map).explored_cell_limit(limit).find_path(&map.get(336).unwrap(), &map.get(384).unwrap()).unwrap();
        assert_eq!(path.len(), 30);
        assert!(path.len() <= limit);
    }
}

#[test]
fn enclosed_target_terminates() {
    init_tracing();
    let map = walled_arena();
    let pathfinder = Pathfinder::new(&map).walkable(|cell| cell.walkable() && cell.id() != 33);
    let err = pathfinder.find_path(&map.get(44).unwrap(), &map.get(18).unwrap()).unwrap_err();
    assert!(matches!(err, PathError::NoPathFound { from: 44, to: 18 }));
}

#[test]
fn options_apply_as_a_whole() {
    let map = arena();
    let options = SearchOptions { target_distance: 1, add_first_cell: false, ..SearchOptions::default() };
    let pathfinder = Pathfinder::new(&map).with_options(options.clone());
    assert_eq!(pathfinder.options(), &options);
    assert_eq!(ids(&pathfinder, &map, 107, 225), vec![122, 137, 151, 166, 181, 196, 211]);
}

#[test]
fn shared_pathfinder_across_threads() {
    let map = arena();
    let pathfinder = Pathfinder::new(&map);
    std::thread::scope(|s| {
        for _ in 0..4 {
            let pathfinder = pathfinder.clone();
            let map = &map;
            s.spawn(move || {
                assert_eq!(ids(&pathfinder, map, 169, 139), vec![169, 183, 168, 153, 139]);
            });
        }
    });
}

#[test]
fn result_stays_near_target() {
    let map = arena();
    let pathfinder = Pathfinder::new(&map).target_distance(2);
    let path = pathfinder.find_path(&map.get(336).unwrap(), &map.get(384).unwrap()).unwrap();
    let last = path.target().unwrap().id();
    assert!(isogrid_core::grid::distance(&map, last, 384) <= 2);
    assert_eq!(path.start().map(|c| c.id()), Some(336));
}

#[test]
fn random_searches_keep_result_invariants() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let map = arena();
    let walkable: Vec<usize> = (0..map.size()).filter(|&id| map.get(id).is_some_and(|c| c.walkable())).collect();
    let mut rng = StdRng::seed_from_u64(0x15_0917);
    for _ in 0..64 {
        let source = walkable[rng.gen_range(0..walkable.len())];
        let target = rng.gen_range(0..map.size());
        let target_distance = rng.gen_range(0..3);
        let pathfinder = Pathfinder::new(&map).target_distance(target_distance);
        match pathfinder.find_path(&map.get(source).unwrap(), &map.get(target).unwrap()) {
            Ok(path) => {
                assert_eq!(path.start().map(|c| c.id()), Some(source));
                let last = path.target().unwrap().id();
                assert!(isogrid_core::grid::distance(&map, last, target) <= target_distance);
                assert!(path.iter().all(|step| step.cell.walkable()));
                for pair in path.steps().windows(2) {
                    assert_eq!(isogrid_core::grid::distance(&map, pair[0].cell.id(), pair[1].cell.id()), 1);
                }
            }
            Err(err) => assert_eq!(err, PathError::NoPathFound { from: source, to: target }),
        }
    }
}
