use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::config::PoolSettings;

use super::hiring::{hire, HiredRecruit};
use super::pool::{rotate_recruiter_pool, rotation_window, PoolEntryKey, RecruiterPoolEntry};
use super::repository::PoolRepository;
use super::PoolError;

/// Serves the shared pool out of a repository, generating a window's
/// entries the first time anyone asks for it.
pub struct RecruiterService<R> {
    repository: R,
    settings: PoolSettings,
}

impl<R: PoolRepository> RecruiterService<R> {
    pub fn new(repository: R, settings: PoolSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn settings(&self) -> &PoolSettings {
        &self.settings
    }

    pub fn current_pool(
        &self,
        level_tier: u8,
        now: DateTime<Utc>,
        active_players: u32,
    ) -> Result<Vec<RecruiterPoolEntry>, PoolError> {
        let window = rotation_window(&self.settings, level_tier, now)?;
        if let Some(entries) = self.repository.load_window(level_tier, window.timestamp())? {
            return Ok(entries);
        }
        let entries = rotate_recruiter_pool(&self.settings, level_tier, now, active_players)?;
        self.repository
            .store_window(level_tier, window.timestamp(), entries.clone())?;
        // Another caller may have stored the window first; serve theirs.
        Ok(self
            .repository
            .load_window(level_tier, window.timestamp())?
            .unwrap_or(entries))
    }

    /// Hires the entry at `key`. Each entry can be hired once.
    pub fn hire(&self, key: &PoolEntryKey, now: DateTime<Utc>) -> Result<HiredRecruit, PoolError> {
        let entry = self
            .repository
            .find_entry(key)?
            .ok_or(PoolError::EntryNotFound(*key))?;
        if entry.is_expired(now) {
            return Err(PoolError::EntryExpired(*key));
        }
        if !entry.is_visible(now) {
            return Err(PoolError::NotYetAvailable(*key));
        }
        if !self.repository.claim(key)? {
            debug!(%key, "hire rejected, entry already claimed");
            return Err(PoolError::AlreadyHired(*key));
        }
        let recruit = hire(&entry, now);
        if let Err(err) = self.repository.store_recruit(recruit.clone()) {
            warn!(%key, error = %err, "storing recruit failed, releasing claim");
            self.repository.release(key)?;
            return Err(err);
        }
        info!(%key, name = %recruit.npc().name, "recruit hired");
        Ok(recruit)
    }

    pub fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, PoolError> {
        self.repository.purge_expired(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenError;
    use crate::recruiter::InMemoryPoolRepository;
    use chrono::{Duration, TimeZone};
    use std::sync::atomic::{AtomicBool, Ordering};

    /// In-memory storage whose recruit writes fail while `failing` is set.
    #[derive(Default)]
    struct FlakyRepository {
        inner: InMemoryPoolRepository,
        failing: AtomicBool,
    }

    impl PoolRepository for FlakyRepository {
        fn load_window(
            &self,
            level_tier: u8,
            window_start: i64,
        ) -> Result<Option<Vec<RecruiterPoolEntry>>, PoolError> {
            self.inner.load_window(level_tier, window_start)
        }

        fn store_window(
            &self,
            level_tier: u8,
            window_start: i64,
            entries: Vec<RecruiterPoolEntry>,
        ) -> Result<(), PoolError> {
            self.inner.store_window(level_tier, window_start, entries)
        }

        fn find_entry(&self, key: &PoolEntryKey) -> Result<Option<RecruiterPoolEntry>, PoolError> {
            self.inner.find_entry(key)
        }

        fn claim(&self, key: &PoolEntryKey) -> Result<bool, PoolError> {
            self.inner.claim(key)
        }

        fn release(&self, key: &PoolEntryKey) -> Result<(), PoolError> {
            self.inner.release(key)
        }

        fn store_recruit(&self, recruit: HiredRecruit) -> Result<(), PoolError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(PoolError::Repository("disk full".into()));
            }
            self.inner.store_recruit(recruit)
        }

        fn find_recruit(&self, key: &PoolEntryKey) -> Result<Option<HiredRecruit>, PoolError> {
            self.inner.find_recruit(key)
        }

        fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, PoolError> {
            self.inner.purge_expired(now)
        }
    }

    fn service() -> RecruiterService<InMemoryPoolRepository> {
        RecruiterService::new(InMemoryPoolRepository::new(), PoolSettings::default())
    }

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn pool_is_shared_between_callers() {
        let service = service();
        let first = service.current_pool(1, now(), 10).unwrap();
        // Player count changes do not reshape a window already served.
        let second = service.current_pool(1, now(), 500).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn hire_is_exclusive() {
        let service = service();
        let pool = service.current_pool(2, now(), 0).unwrap();
        let key = pool[0].key;
        service.hire(&key, now()).unwrap();
        assert!(matches!(
            service.hire(&key, now()),
            Err(PoolError::AlreadyHired(k)) if k == key
        ));
    }

    #[test]
    fn expired_entries_cannot_be_hired() {
        let service = service();
        let pool = service.current_pool(1, now(), 0).unwrap();
        let entry = &pool[1];
        assert!(matches!(
            service.hire(&entry.key, entry.expires_at),
            Err(PoolError::EntryExpired(_))
        ));
        let early = entry.available_at - Duration::seconds(1);
        assert!(matches!(
            service.hire(&entry.key, early),
            Err(PoolError::NotYetAvailable(_))
        ));
    }

    #[test]
    fn failed_store_releases_the_claim() {
        let service = RecruiterService::new(FlakyRepository::default(), PoolSettings::default());
        let key = service.current_pool(1, now(), 0).unwrap()[3].key;

        service.repository().failing.store(true, Ordering::SeqCst);
        assert!(matches!(
            service.hire(&key, now()),
            Err(PoolError::Repository(_))
        ));
        assert_eq!(service.repository().find_recruit(&key).unwrap(), None);

        service.repository().failing.store(false, Ordering::SeqCst);
        let recruit = service.hire(&key, now()).unwrap();
        assert_eq!(recruit.id(), key);
        assert!(matches!(
            service.hire(&key, now()),
            Err(PoolError::AlreadyHired(_))
        ));
    }

    #[test]
    fn unvalidated_settings_surface_as_errors() {
        let settings = PoolSettings {
            rotation_min_minutes: 0,
            rotation_max_minutes: 0,
            ..PoolSettings::default()
        };
        let service = RecruiterService::new(InMemoryPoolRepository::new(), settings);
        assert!(matches!(
            service.current_pool(1, now(), 0),
            Err(PoolError::Generation(GenError::InvalidPoolSettings(_)))
        ));
    }

    #[test]
    fn unknown_key_is_not_found() {
        let service = service();
        let key = PoolEntryKey {
            level_tier: 1,
            rotation_timestamp: 0,
            slot_index: 0,
        };
        assert!(matches!(
            service.hire(&key, now()),
            Err(PoolError::EntryNotFound(_))
        ));
    }
}
