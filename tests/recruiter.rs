use std::sync::Arc;
use std::thread;

use chrono::{DateTime, Duration, TimeZone, Utc};
use starseed::{
    config::PoolSettings,
    recruiter::{
        hire, rotate_recruiter_pool, rotation_window, Assignable, Hiring, HiringStatus,
        InMemoryPoolRepository, PoolError, PoolRepository, RecruiterService, ShipId,
    },
    tables::NPC_CLASSES,
};

fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).unwrap()
}

#[test]
fn hired_recruit_survives_entry_mutation_and_expiry() {
    let settings = PoolSettings::default();
    let now = at(1_700_000_000);
    let mut entries = rotate_recruiter_pool(&settings, 2, now, 0).unwrap();
    let recruit = hire(&entries[4], now);
    let before = serde_json::to_vec(&recruit).unwrap();

    let entry = &mut entries[4];
    entry.npc.skill = entry.npc.skill.wrapping_add(1);
    entry.npc.base_wage = 0;
    entry.npc.quirks.push("Tampered".into());
    entry.expires_at = now;

    let next_window = entries[0].expires_at + Duration::minutes(1);
    let rotated = rotate_recruiter_pool(&settings, 2, next_window, 0).unwrap();
    assert_ne!(rotated[4].key, recruit.id());

    assert_eq!(serde_json::to_vec(&recruit).unwrap(), before);
}

#[test]
fn pool_is_stable_inside_a_window_and_sized_per_class() {
    let settings = PoolSettings::default();
    let window = rotation_window(&settings, 1, at(1_700_000_000)).unwrap();
    let a = rotate_recruiter_pool(&settings, 1, window.start, 40).unwrap();
    let b = rotate_recruiter_pool(&settings, 1, window.end - Duration::seconds(1), 40).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 12 * NPC_CLASSES.len());
    for (index, class) in NPC_CLASSES.iter().enumerate() {
        let batch = &a[index * 12..(index + 1) * 12];
        assert!(batch.iter().all(|entry| entry.npc.class == *class));
    }
}

#[test]
fn tiers_rotate_independently() {
    let settings = PoolSettings::default();
    let now = at(1_700_000_000);
    let one = rotate_recruiter_pool(&settings, 1, now, 0).unwrap();
    let five = rotate_recruiter_pool(&settings, 5, now, 0).unwrap();
    assert!(one.iter().all(|entry| entry.npc.level_tier == 1));
    assert!(five.iter().all(|entry| entry.npc.level_tier == 5));
    assert_ne!(one[0].npc, five[0].npc);
}

#[test]
fn concurrent_hires_of_one_entry_have_one_winner() {
    let service = Arc::new(RecruiterService::new(
        InMemoryPoolRepository::new(),
        PoolSettings::default(),
    ));
    let now = at(1_700_000_000);
    let key = service.current_pool(3, now, 0).unwrap()[9].key;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || service.hire(&key, now))
        })
        .collect();
    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|result| result.as_ref().err())
        .all(|err| matches!(err, PoolError::AlreadyHired(k) if *k == key)));
    assert_eq!(service.repository().recruit_count().unwrap(), 1);
}

#[test]
fn purging_expired_windows_keeps_recruits() {
    let service = RecruiterService::new(InMemoryPoolRepository::new(), PoolSettings::default());
    let now = at(1_700_000_000);
    let pool = service.current_pool(1, now, 0).unwrap();
    let recruit = service.hire(&pool[2].key, now).unwrap();

    assert_eq!(service.purge_expired(pool[2].expires_at).unwrap(), 1);
    let stored = service
        .repository()
        .find_recruit(&recruit.id())
        .unwrap()
        .unwrap();
    assert_eq!(stored, recruit);
    assert!(stored.matches_source(&pool[2]));
}

#[test]
fn hiring_lifecycle_ends_in_a_terminal_state() {
    let now = at(1_700_000_000);
    let entry = rotate_recruiter_pool(&PoolSettings::default(), 1, now, 0)
        .unwrap()
        .remove(0);
    let recruit = hire(&entry, now);
    let mut hiring = Hiring::new(&recruit, Assignable::Ship(ShipId(1)), now);
    hiring.set_wage(recruit.npc().base_wage * 2, now).unwrap();
    hiring.transition(HiringStatus::Retired, now).unwrap();
    for next in [HiringStatus::Active, HiringStatus::Fired, HiringStatus::Deceased] {
        assert!(hiring.transition(next, now).is_err());
    }
    assert_eq!(hiring.status, HiringStatus::Retired);
    assert_eq!(hiring.wage, recruit.npc().base_wage * 2);
}
