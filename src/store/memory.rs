//! In-memory indicator store
//!
//! Records are inserted once while the store is being built and never touched
//! again, so reads need no locking. Listing preserves insertion order;
//! re-inserting an id replaces the earlier record in place.

use async_trait::async_trait;
use std::collections::HashMap;

use super::error::StoreResult;
use super::types::EconomicIndicator;

/// Read-only source of indicators
///
/// Async so that every provider shares the same calling convention, even
/// though [`MemoryStore`] answers synchronously.
#[async_trait]
pub trait IndicatorProvider: Send + Sync {
    /// All indicators, in insertion order
    async fn list(&self) -> StoreResult<Vec<EconomicIndicator>>;

    /// Indicator by id, `None` when absent
    async fn get_by_id(&self, id: &str) -> StoreResult<Option<EconomicIndicator>>;
}

/// Indicator map built once at startup
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<EconomicIndicator>,
    by_id: HashMap<String, usize>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a sequence of records (last write wins on duplicate ids)
    pub fn from_indicators(indicators: impl IntoIterator<Item = EconomicIndicator>) -> Self {
        let mut store = Self::new();
        for indicator in indicators {
            store.insert(indicator);
        }
        store
    }

    /// Store seeded with the built-in indicator set
    pub fn seeded() -> Self {
        Self::from_indicators(super::seed::default_indicators())
    }

    fn insert(&mut self, indicator: EconomicIndicator) {
        match self.by_id.get(&indicator.id) {
            Some(&idx) => self.records[idx] = indicator,
            None => {
                self.by_id.insert(indicator.id.clone(), self.records.len());
                self.records.push(indicator);
            }
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrowing lookup
    pub fn get(&self, id: &str) -> Option<&EconomicIndicator> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    /// Borrowing iteration in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &EconomicIndicator> {
        self.records.iter()
    }
}

#[async_trait]
impl IndicatorProvider for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<EconomicIndicator>> {
        Ok(self.records.clone())
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Option<EconomicIndicator>> {
        Ok(self.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IndicatorId;
    use std::collections::HashSet;

    fn indicator(id: &str, name: &str) -> EconomicIndicator {
        EconomicIndicator::new(id, name, "test").point("2025-01-01", 1.0)
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = MemoryStore::from_indicators(vec![
            indicator("b", "B"),
            indicator("a", "A"),
            indicator("c", "C"),
        ]);

        let ids: Vec<String> = store.list().await.unwrap().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_duplicate_id_last_write_wins() {
        let store = MemoryStore::from_indicators(vec![
            indicator("a", "first"),
            indicator("b", "B"),
            indicator("a", "second"),
        ]);

        assert_eq!(store.len(), 2);
        let found = store.get_by_id("a").await.unwrap().unwrap();
        assert_eq!(found.name, "second");

        // Replacement keeps the first slot
        let ids: Vec<String> = store.list().await.unwrap().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let store = MemoryStore::seeded();
        assert!(store.get_by_id("does-not-exist").await.unwrap().is_none());
        assert!(store.get_by_id("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_seeded_lookup_matches_id() {
        let store = MemoryStore::seeded();

        for record in store.list().await.unwrap() {
            let found = store.get_by_id(&record.id).await.unwrap().unwrap();
            assert_eq!(found.id, record.id);
            assert_eq!(found, record);
        }
    }

    #[tokio::test]
    async fn test_seeded_list_has_no_duplicates() {
        let store = MemoryStore::seeded();
        let list = store.list().await.unwrap();

        let unique: HashSet<&str> = list.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(unique.len(), list.len());
        assert_eq!(list.len(), 11);
    }

    #[tokio::test]
    async fn test_unseeded_known_ids_are_absent() {
        let store = MemoryStore::seeded();

        for id in [IndicatorId::Alquileres, IndicatorId::Aprobacion] {
            assert!(store.get_by_id(id.as_str()).await.unwrap().is_none());
        }
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(store.list().await.unwrap().is_empty());
    }
}
