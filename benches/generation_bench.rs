//! Latency of the generators against their budgets: a system in about
//! 15ms, a building or ship in about 10ms, a full pool rotation in 500ms.
//!
//! Run with: cargo bench

use std::hint::black_box;

use chrono::{TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use starseed::{
    building::generate_building,
    config::PoolSettings,
    galaxy::generate_system,
    npc::generate_npc,
    recruiter::rotate_recruiter_pool,
    ship::generate_ship,
    tables::{BuildingFunction, HullClass, Race},
};

fn bench_system(c: &mut Criterion) {
    let mut x = 100;
    c.bench_function("generate_system", |b| {
        b.iter(|| {
            x = 100 + (x + 1) % 50_000;
            generate_system(black_box("bench"), x, -40, 12)
        })
    });
}

fn bench_building_and_ship(c: &mut Criterion) {
    let mut location = 0u64;
    c.bench_function("generate_building", |b| {
        b.iter(|| {
            location += 1;
            generate_building(Race::Krell, BuildingFunction::Extraction, 4, black_box(location))
        })
    });
    c.bench_function("generate_ship", |b| {
        b.iter(|| {
            location += 1;
            generate_ship(Race::Vexari, HullClass::Freighter, 3, black_box(location))
        })
    });
}

fn bench_npc(c: &mut Criterion) {
    let mut slot = 0u32;
    c.bench_function("generate_npc", |b| {
        b.iter(|| {
            slot = slot.wrapping_add(1);
            generate_npc(2, black_box(1_700_000_000), slot)
        })
    });
}

fn bench_pool(c: &mut Criterion) {
    let settings = PoolSettings::default();
    let Some(now) = Utc.timestamp_opt(1_700_000_000, 0).single() else {
        return;
    };
    // 100 active players puts about 180 entries in the pool.
    c.bench_function("rotate_recruiter_pool", |b| {
        b.iter(|| rotate_recruiter_pool(&settings, 1, black_box(now), 100))
    });
}

criterion_group!(
    benches,
    bench_system,
    bench_building_and_ship,
    bench_npc,
    bench_pool
);
criterion_main!(benches);
