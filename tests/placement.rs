use sc2_foreman::constants::unit;
use sc2_foreman::map::addon_footprint;
use sc2_foreman::*;

const SIZE: u32 = 44;

fn start_raw(size: u32) -> StartRaw {
    let tiles = (size * size) as usize;
    StartRaw {
        placement_grid: ImageData::from_bytes(size, size, vec![1; tiles]),
        pathing_grid: ImageData::from_bytes(size, size, vec![0; tiles]),
        terrain_height: ImageData::from_bytes(size, size, vec![12; tiles]),
    }
}

fn open_map() -> GameMap {
    GameMap::new(&start_raw(SIZE)).unwrap()
}

fn supply_depot() -> UnitTypeData {
    UnitTypeData::new(unit::SUPPLY_DEPOT, Race::Terran, AbilityId(319))
}

fn spawning_pool() -> UnitTypeData {
    UnitTypeData::new(unit::SPAWNING_POOL, Race::Zerg, AbilityId(1155))
}

fn hatchery() -> UnitTypeData {
    UnitTypeData::new(unit::HATCHERY, Race::Zerg, AbilityId(1152))
}

fn gateway() -> UnitTypeData {
    UnitTypeData::new(unit::GATEWAY, Race::Protoss, AbilityId(883))
}

fn pylon() -> UnitTypeData {
    UnitTypeData::new(unit::PYLON, Race::Protoss, AbilityId(881))
}

fn catalog() -> StaticCatalog {
    StaticCatalog::new()
        .with(supply_depot(), 1.0)
        .with(spawning_pool(), 1.5)
        .with(hatchery(), 2.5)
        .with(gateway(), 1.5)
        .with(pylon(), 1.0)
}

fn refresh(map: &mut GameMap, creep: Vec<u8>, power_sources: &[PowerSource]) {
    let visibility = ImageData::from_bytes(SIZE, SIZE, vec![2; (SIZE * SIZE) as usize]);
    let creep = ImageData::from_bytes(SIZE, SIZE, creep);
    map.refresh_frame(&FrameSnapshot {
        visibility: &visibility,
        creep: &creep,
        power_sources,
    })
    .unwrap();
}

#[test]
fn legal_anchor_is_returned_unchanged() {
    let map = open_map();
    let found = map
        .find_placement(&supply_depot(), Point2::new(10.0, 10.0), 0.0, &catalog())
        .unwrap();
    assert_eq!(found, Some(Point2::new(10.0, 10.0)));
}

#[test]
fn blocked_anchor_resolves_on_first_ring() {
    let mut map = open_map();
    map.register_structure(Point2::new(11.0, 11.0), 1.0);
    for (x, y) in [(10, 10), (11, 10), (10, 11), (11, 11)] {
        assert!(map.is_blocked(x, y));
    }

    let found = map
        .find_placement(&supply_depot(), Point2::new(10.0, 10.0), 0.0, &catalog())
        .unwrap()
        .unwrap();
    assert_eq!(found, Point2::new(9.0, 11.0));

    let footprint = Footprint::centered(found, 1.0, 2);
    for (x, y) in footprint.tiles() {
        assert!(!map.is_blocked(x, y));
    }
}

#[test]
fn creep_structure_without_creep_finds_nothing() {
    let map = open_map();
    let found = map
        .find_placement(&spawning_pool(), Point2::new(20.0, 20.0), 0.0, &catalog())
        .unwrap();
    assert_eq!(found, None);
}

#[test]
fn creep_structure_lands_on_creep() {
    let mut map = open_map();
    let mut creep = vec![0; (SIZE * SIZE) as usize];
    for y in 25..32 {
        for x in 25..32 {
            creep[(y * SIZE + x) as usize] = 1;
        }
    }
    refresh(&mut map, creep, &[]);

    let found = map
        .find_placement(&spawning_pool(), Point2::new(20.0, 20.0), 0.0, &catalog())
        .unwrap()
        .unwrap();
    for (x, y) in Footprint::centered(found, 1.5, 3).tiles() {
        assert!(map.is_creep(x, y));
    }
    assert!(map
        .is_valid_placement(&spawning_pool(), found, 0.0, &catalog())
        .unwrap());
}

#[test]
fn terran_structure_avoids_creep() {
    let mut map = open_map();
    let mut creep = vec![0; (SIZE * SIZE) as usize];
    for y in 5..15 {
        for x in 5..15 {
            creep[(y * SIZE + x) as usize] = 1;
        }
    }
    refresh(&mut map, creep, &[]);

    let found = map
        .find_placement(&supply_depot(), Point2::new(10.0, 10.0), 0.0, &catalog())
        .unwrap()
        .unwrap();
    for (x, y) in Footprint::centered(found, 1.0, 2).tiles() {
        assert!(!map.is_creep(x, y));
    }
}

#[test]
fn protoss_structure_needs_power() {
    let mut map = open_map();
    let anchor = Point2::new(16.5, 16.5);
    assert_eq!(
        map.find_placement(&gateway(), anchor, 0.0, &catalog()).unwrap(),
        None
    );

    let sources = [PowerSource {
        position: Point2::new(22.0, 22.0),
        radius: 6.5,
    }];
    refresh(&mut map, vec![0; (SIZE * SIZE) as usize], &sources);

    let found = map
        .find_placement(&gateway(), anchor, 0.0, &catalog())
        .unwrap()
        .unwrap();
    for (x, y) in Footprint::centered(found, 1.5, 3).tiles() {
        assert!(map.is_powered(x, y));
    }

    // Pylons power others but need no power themselves.
    let found = map
        .find_placement(&pylon(), Point2::new(4.0, 4.0), 0.0, &catalog())
        .unwrap();
    assert_eq!(found, Some(Point2::new(4.0, 4.0)));
}

#[test]
fn natural_buffer_is_a_disc() {
    let mut map = open_map();
    let center = Point2::new(20.0, 20.0);
    map.register_natural(center, 5.0);

    for y in 0..SIZE as i32 {
        for x in 0..SIZE as i32 {
            let inside = center.distance_to(x as f32, y as f32) <= 8.5;
            assert_eq!(map.is_natural(x, y), inside, "tile ({}, {})", x, y);
        }
    }
}

#[test]
fn headquarters_stay_out_of_naturals() {
    let mut map = open_map();
    map.register_natural(Point2::new(20.0, 20.0), 5.0);

    let found = map
        .find_placement(&hatchery(), Point2::new(20.5, 20.5), 0.0, &catalog())
        .unwrap()
        .unwrap();
    for (x, y) in Footprint::centered(found, 2.5, 5).tiles() {
        assert!(!map.is_natural(x, y));
    }

    // Other structures may build inside the buffer.
    let found = map
        .find_placement(&supply_depot(), Point2::new(20.0, 20.0), 0.0, &catalog())
        .unwrap();
    assert_eq!(found, Some(Point2::new(20.0, 20.0)));
}

#[test]
fn spacing_grows_the_footprint() {
    let mut map = open_map();
    map.register_structure(Point2::new(12.0, 10.0), 1.0);

    assert!(map
        .is_valid_placement(&supply_depot(), Point2::new(10.0, 10.0), 0.0, &catalog())
        .unwrap());
    assert!(!map
        .is_valid_placement(&supply_depot(), Point2::new(10.0, 10.0), 1.0, &catalog())
        .unwrap());
}

#[test]
fn addon_placement_checks_both_footprints() {
    let mut map = open_map();
    let anchor = Point2::new(10.5, 10.5);
    assert_eq!(map.find_placement_with_addon(anchor), Some(anchor));

    map.register_structure(Point2::new(13.0, 10.0), 1.0);
    let found = map.find_placement_with_addon(anchor).unwrap();
    assert_ne!(found, anchor);

    let parent = Footprint::centered(found, 1.5, 3);
    for (x, y) in parent.tiles().chain(addon_footprint(found).tiles()) {
        assert!(!map.is_blocked(x, y));
        assert!(map.is_buildable(x, y));
    }
}

#[test]
fn searches_near_the_edge_stay_on_the_map() {
    let map = open_map();
    let found = map
        .find_placement(&supply_depot(), Point2::new(0.0, 0.0), 0.0, &catalog())
        .unwrap()
        .unwrap();
    for (x, y) in Footprint::centered(found, 1.0, 2).tiles() {
        assert!(x >= 0 && y >= 0 && x < SIZE as i32 && y < SIZE as i32);
    }

    let found = map.find_placement_with_addon(Point2::new(-200.0, -200.0));
    assert_eq!(found, None);
}

#[test]
fn destroyed_structures_free_their_tiles() {
    let mut map = open_map();
    let depot = Unit {
        unit_type: unit::SUPPLY_DEPOT,
        position: Point2::new(10.0, 10.0),
    };

    map.handle_event(&UnitEvent::StructureAdded(depot), &catalog())
        .unwrap();
    assert!(!map
        .is_valid_placement(&supply_depot(), Point2::new(10.0, 10.0), 0.0, &catalog())
        .unwrap());

    map.handle_event(&UnitEvent::StructureDestroyed(depot), &catalog())
        .unwrap();
    assert!(map
        .is_valid_placement(&supply_depot(), Point2::new(10.0, 10.0), 0.0, &catalog())
        .unwrap());
}

#[test]
fn unknown_ability_is_an_error() {
    let map = open_map();
    let missile_turret = UnitTypeData::new(UnitTypeId(23), Race::Terran, AbilityId(323));
    let err = map
        .find_placement(&missile_turret, Point2::new(10.0, 10.0), 0.0, &catalog())
        .unwrap_err();
    assert_eq!(err, MapError::UnknownAbility(AbilityId(323)));
}

#[test]
fn bit_packed_start_data_is_decoded() {
    // 16x2 map: only the left byte of each row is buildable.
    let start = StartRaw {
        placement_grid: ImageData::from_bits(16, 2, vec![0xFF, 0x00, 0xFF, 0x00]),
        pathing_grid: ImageData::from_bits(16, 2, vec![0; 4]),
        terrain_height: ImageData::from_bytes(16, 2, vec![0; 32]),
    };
    let map = GameMap::new(&start).unwrap();
    assert!(map.is_buildable(7, 1));
    assert!(!map.is_buildable(8, 1));
}
