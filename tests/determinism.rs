use std::collections::HashSet;
use std::thread;

use proptest::prelude::*;
use rayon::prelude::*;
use starseed::{
    building::generate_building,
    galaxy::{generate_system, Coordinate},
    npc::generate_npc,
    seed::Seed,
    ship::generate_ship,
    tables::{BuildingFunction, HullClass, Race},
};

const T: i64 = 1_700_000_000;

#[test]
fn npc_is_identical_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| generate_npc(1, T, 5).unwrap()))
        .collect();
    let npcs: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    for npc in &npcs[1..] {
        assert_eq!(npc, &npcs[0]);
        assert_eq!(npc.employment_history, npcs[0].employment_history);
    }
}

#[test]
fn systems_are_identical_across_threads() {
    let coordinates: Vec<(i64, i64, i64)> = (0..64).map(|i| (i * 7, -i * 3, 250 + i)).collect();
    let expected: Vec<_> = coordinates
        .iter()
        .map(|&(x, y, z)| generate_system("abc", x, y, z).unwrap())
        .collect();
    let shared = coordinates.clone();
    let mut from_thread = thread::spawn(move || {
        shared
            .iter()
            .rev()
            .map(|&(x, y, z)| generate_system("abc", x, y, z).unwrap())
            .collect::<Vec<_>>()
    })
    .join()
    .unwrap();
    from_thread.reverse();
    assert_eq!(expected, from_thread);
}

#[test]
fn serialized_output_is_stable() {
    let system = generate_system("abc", 40, -12, 77).unwrap();
    let first = serde_json::to_string(&system).unwrap();
    let second = serde_json::to_string(&generate_system("abc", 40, -12, 77).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn distinct_coordinates_give_distinct_seeds() {
    let mut seen = HashSet::with_capacity(216_000);
    for x in -30..30 {
        for y in -30..30 {
            for z in -30..30 {
                assert!(seen.insert(Coordinate::new(x, y, z).seed("abc")));
            }
        }
    }
    assert_eq!(seen.len(), 216_000);
}

/// Distinct 64-bit prefixes imply distinct seeds, so the set stays small.
#[test]
fn a_million_coordinates_never_collide() {
    let prefixes: Vec<u64> = (0..100_i64)
        .into_par_iter()
        .flat_map_iter(|x| {
            (0..100_i64).flat_map(move |y| {
                (0..100_i64).map(move |z| Coordinate::new(x, y, z).seed("abc").to_u64())
            })
        })
        .collect();
    let unique: HashSet<u64> = prefixes.into_iter().collect();
    assert_eq!(unique.len(), 1_000_000);
}

#[test]
fn derived_digest_is_pinned() {
    let expected = blake3_hex("system:abc:1:0:0");
    assert_eq!(Coordinate::new(1, 0, 0).seed("abc").to_hex(), expected);
    assert_eq!(
        Seed::derive(&["system".into(), "abc".into(), 1_i64.into(), 0_i64.into(), 0_i64.into()]),
        Coordinate::new(1, 0, 0).seed("abc")
    );
}

fn blake3_hex(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn npc_generation_is_a_pure_function(
        tier in 1u8..=5,
        timestamp in any::<i64>(),
        slot in any::<u32>(),
    ) {
        let a = generate_npc(tier, timestamp, slot).unwrap();
        let b = generate_npc(tier, timestamp, slot).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert!(a.rarity.skill_range().contains(&(a.skill as u64)));
    }

    #[test]
    fn system_generation_is_a_pure_function(
        x in -5_000i64..5_000,
        y in -5_000i64..5_000,
        z in -5_000i64..5_000,
    ) {
        let a = generate_system("prop", x, y, z).unwrap();
        let b = generate_system("prop", x, y, z).unwrap();
        prop_assert!(a.hazard_level <= 100);
        prop_assert_eq!(a.planets.len() as u32, a.planet_count);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn buildings_and_ships_are_pure_functions(
        race in 0u64..5,
        tier in 1u8..=5,
        location in any::<u64>(),
    ) {
        let race = Race::from_index(race);
        let a = generate_building(race, BuildingFunction::Defense, tier, location).unwrap();
        let b = generate_building(race, BuildingFunction::Defense, tier, location).unwrap();
        prop_assert_eq!(a, b);
        let a = generate_ship(race, HullClass::Freighter, tier, location).unwrap();
        let b = generate_ship(race, HullClass::Freighter, tier, location).unwrap();
        prop_assert_eq!(a, b);
    }
}
