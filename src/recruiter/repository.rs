use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use super::hiring::HiredRecruit;
use super::pool::{PoolEntryKey, RecruiterPoolEntry};
use super::PoolError;

/// Storage the recruiter service is handed. Generation never touches it;
/// it only remembers what was generated and who was hired.
pub trait PoolRepository: Send + Sync {
    fn load_window(
        &self,
        level_tier: u8,
        window_start: i64,
    ) -> Result<Option<Vec<RecruiterPoolEntry>>, PoolError>;

    fn store_window(
        &self,
        level_tier: u8,
        window_start: i64,
        entries: Vec<RecruiterPoolEntry>,
    ) -> Result<(), PoolError>;

    fn find_entry(&self, key: &PoolEntryKey) -> Result<Option<RecruiterPoolEntry>, PoolError>;

    /// Marks `key` as hired. Returns false when someone got there first.
    fn claim(&self, key: &PoolEntryKey) -> Result<bool, PoolError>;

    /// Undoes a claim whose recruit could not be stored.
    fn release(&self, key: &PoolEntryKey) -> Result<(), PoolError>;

    fn store_recruit(&self, recruit: HiredRecruit) -> Result<(), PoolError>;

    fn find_recruit(&self, key: &PoolEntryKey) -> Result<Option<HiredRecruit>, PoolError>;

    /// Drops windows whose entries have expired. Returns how many went.
    fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, PoolError>;
}

#[derive(Debug, Default)]
pub struct InMemoryPoolRepository {
    windows: Mutex<BTreeMap<(u8, i64), Vec<RecruiterPoolEntry>>>,
    claimed: Mutex<BTreeSet<PoolEntryKey>>,
    recruits: Mutex<BTreeMap<PoolEntryKey, HiredRecruit>>,
}

impl InMemoryPoolRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recruit_count(&self) -> Result<usize, PoolError> {
        Ok(lock(&self.recruits, "recruits")?.len())
    }
}

fn lock<'a, T>(mutex: &'a Mutex<T>, name: &str) -> Result<MutexGuard<'a, T>, PoolError> {
    mutex
        .lock()
        .map_err(|_| PoolError::Repository(format!("{name} lock poisoned")))
}

impl PoolRepository for InMemoryPoolRepository {
    fn load_window(
        &self,
        level_tier: u8,
        window_start: i64,
    ) -> Result<Option<Vec<RecruiterPoolEntry>>, PoolError> {
        let windows = lock(&self.windows, "windows")?;
        Ok(windows.get(&(level_tier, window_start)).cloned())
    }

    fn store_window(
        &self,
        level_tier: u8,
        window_start: i64,
        entries: Vec<RecruiterPoolEntry>,
    ) -> Result<(), PoolError> {
        let mut windows = lock(&self.windows, "windows")?;
        windows.entry((level_tier, window_start)).or_insert(entries);
        Ok(())
    }

    fn find_entry(&self, key: &PoolEntryKey) -> Result<Option<RecruiterPoolEntry>, PoolError> {
        let windows = lock(&self.windows, "windows")?;
        Ok(windows
            .get(&(key.level_tier, key.rotation_timestamp))
            .and_then(|entries| entries.iter().find(|entry| entry.key == *key))
            .cloned())
    }

    fn claim(&self, key: &PoolEntryKey) -> Result<bool, PoolError> {
        Ok(lock(&self.claimed, "claimed")?.insert(*key))
    }

    fn release(&self, key: &PoolEntryKey) -> Result<(), PoolError> {
        lock(&self.claimed, "claimed")?.remove(key);
        Ok(())
    }

    fn store_recruit(&self, recruit: HiredRecruit) -> Result<(), PoolError> {
        lock(&self.recruits, "recruits")?.insert(recruit.id(), recruit);
        Ok(())
    }

    fn find_recruit(&self, key: &PoolEntryKey) -> Result<Option<HiredRecruit>, PoolError> {
        Ok(lock(&self.recruits, "recruits")?.get(key).cloned())
    }

    fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, PoolError> {
        let mut windows = lock(&self.windows, "windows")?;
        let before = windows.len();
        windows.retain(|_, entries| entries.iter().any(|entry| !entry.is_expired(now)));
        Ok(before - windows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PoolSettings;
    use crate::recruiter::{hire, rotate_recruiter_pool};
    use chrono::TimeZone;

    #[test]
    fn first_store_wins() {
        let repo = InMemoryPoolRepository::new();
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let entries = rotate_recruiter_pool(&PoolSettings::default(), 1, now, 0).unwrap();
        let start = entries[0].key.rotation_timestamp;
        repo.store_window(1, start, entries.clone()).unwrap();
        repo.store_window(1, start, Vec::new()).unwrap();
        assert_eq!(repo.load_window(1, start).unwrap(), Some(entries));
    }

    #[test]
    fn recruits_outlive_purged_windows() {
        let repo = InMemoryPoolRepository::new();
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let entries = rotate_recruiter_pool(&PoolSettings::default(), 2, now, 0).unwrap();
        let entry = entries[3].clone();
        repo.store_window(2, entry.key.rotation_timestamp, entries).unwrap();
        assert!(repo.claim(&entry.key).unwrap());
        assert!(!repo.claim(&entry.key).unwrap());
        repo.store_recruit(hire(&entry, now)).unwrap();

        assert_eq!(repo.purge_expired(entry.expires_at).unwrap(), 1);
        assert!(repo.find_entry(&entry.key).unwrap().is_none());
        let recruit = repo.find_recruit(&entry.key).unwrap().unwrap();
        assert!(recruit.matches_source(&entry));
    }
}
