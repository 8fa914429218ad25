//! Shared catalog handle for the administrative side.
//!
//! Readers take an `Arc<Catalog>` snapshot and keep it for the duration of one
//! call. Writers clone the record list, replace a single record's `Arc`, and
//! swap the snapshot in, so no reader ever observes a half-updated record.

use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::types::MemeRecord;

#[derive(Debug, Default)]
pub struct CatalogStore {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Append a new record at the end of the catalog.
    pub fn insert(&self, record: MemeRecord) -> Result<Arc<MemeRecord>> {
        record.validate()?;

        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if guard.get(&record.id).is_some() {
            return Err(CatalogError::DuplicateId(record.id));
        }

        let record = Arc::new(record);
        let mut records = guard.records().to_vec();
        records.push(Arc::clone(&record));
        *guard = Arc::new(Catalog::from_shared(records));

        info!("Inserted meme {} ({})", record.id, record.name);
        Ok(record)
    }

    /// Set a record's popularity. `updated_at` defaults to today.
    pub fn update_popularity(
        &self,
        id: &str,
        popularity: u32,
        updated_at: Option<String>,
    ) -> Result<Arc<MemeRecord>> {
        let updated = self.replace(id, |record| {
            record.popularity = popularity;
            record.updated_at = updated_at.unwrap_or_else(crate::today_string);
        })?;
        info!("Updated popularity of {id} to {popularity}");
        Ok(updated)
    }

    /// Set a record's trend rank. `updated_at` defaults to today.
    pub fn update_trend_rank(
        &self,
        id: &str,
        trend_rank: u32,
        updated_at: Option<String>,
    ) -> Result<Arc<MemeRecord>> {
        let updated = self.replace(id, |record| {
            record.trend_rank = trend_rank;
            record.updated_at = updated_at.unwrap_or_else(crate::today_string);
        })?;
        info!("Updated trend rank of {id} to {trend_rank}");
        Ok(updated)
    }

    fn replace(&self, id: &str, edit: impl FnOnce(&mut MemeRecord)) -> Result<Arc<MemeRecord>> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let index = guard
            .position(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        let mut records = guard.records().to_vec();
        let mut edited = (*records[index]).clone();
        edit(&mut edited);
        edited.validate()?;

        let edited = Arc::new(edited);
        records[index] = Arc::clone(&edited);
        *guard = Arc::new(Catalog::from_shared(records));
        Ok(edited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, popularity: u32) -> MemeRecord {
        MemeRecord {
            id: id.to_string(),
            name: format!("name-{id}"),
            aliases: Vec::new(),
            meaning: "meaning".to_string(),
            origin: String::new(),
            examples: Vec::new(),
            tags: Vec::new(),
            contexts: Vec::new(),
            moods: Vec::new(),
            trend_rank: 1,
            popularity,
            updated_at: "2024-01-01".to_string(),
        }
    }

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn store() -> CatalogStore {
        CatalogStore::new(
            Catalog::from_records(vec![record("a", 10), record("b", 20)])
                .expect("test catalog should be valid"),
        )
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn old_snapshot_is_unaffected_by_update() {
        let store = store();
        let before = store.snapshot();

        store
            .update_popularity("a", 99, Some("2025-03-01".to_string()))
            .expect("update should succeed");

        let after = store.snapshot();
        assert_eq!(before.get("a").map(|r| r.popularity), Some(10));
        assert_eq!(after.get("a").map(|r| r.popularity), Some(99));
        assert_eq!(
            after.get("a").map(|r| r.updated_at.clone()),
            Some("2025-03-01".to_string())
        );
        // untouched records are shared between snapshots
        assert!(Arc::ptr_eq(
            &before.records()[1],
            &after.records()[1]
        ));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn missing_updated_at_defaults_to_today() {
        let store = store();
        let updated = store
            .update_trend_rank("b", 4, None)
            .expect("update should succeed");
        assert_eq!(updated.trend_rank, 4);
        assert_eq!(updated.updated_at, crate::today_string());
    }

    #[test]
    fn invalid_popularity_leaves_catalog_untouched() {
        let store = store();
        let result = store.update_popularity("a", 150, None);
        assert!(matches!(
            result,
            Err(CatalogError::PopularityOutOfRange { value: 150, .. })
        ));
        assert_eq!(store.snapshot().get("a").map(|r| r.popularity), Some(10));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = store();
        assert!(matches!(
            store.update_popularity("zzz", 1, None),
            Err(CatalogError::NotFound(_))
        ));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn insert_appends_and_rejects_duplicates() {
        let store = store();
        store.insert(record("c", 30)).expect("insert should succeed");
        assert_eq!(store.snapshot().len(), 3);
        assert_eq!(
            store.snapshot().records().last().map(|r| r.id.clone()),
            Some("c".to_string())
        );
        assert!(matches!(
            store.insert(record("a", 5)),
            Err(CatalogError::DuplicateId(_))
        ));
    }

    #[test]
    fn concurrent_reads_see_whole_records() {
        let store = Arc::new(store());
        let writer = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for p in 0..=100 {
                    let updated = store.update_popularity("a", p, Some(format!("day-{p}")));
                    assert!(updated.is_ok(), "update {p} failed: {updated:?}");
                }
            })
        };

        for _ in 0..200 {
            let snapshot = store.snapshot();
            if let Some(r) = snapshot.get("a") {
                if r.updated_at.starts_with("day-") {
                    assert_eq!(r.updated_at, format!("day-{}", r.popularity));
                }
            }
        }
        assert!(writer.join().is_ok());
    }
}
