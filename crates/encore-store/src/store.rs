//! # Gig Store
//!
//! The storage-collaborator seam. Real persistence (and any short-TTL read
//! cache wrapped around it) lives outside this workspace and implements
//! `GigStore`; the in-memory store here is the reference implementation
//! and the test double.
//!
//! ## Query Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    list_for_period contract                             │
//! │                                                                         │
//! │  1. Owner-scoped: only gigs whose user_id matches                      │
//! │  2. Date-filtered: inclusive DateRange on the gig's own date           │
//! │     (None = unfiltered, the "all" period)                              │
//! │  3. Sorted ascending by date, so the aggregator's first-seen           │
//! │     monthly ordering comes out chronological                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use encore_core::report::DateRange;
use encore_core::validation::validate_gig;
use encore_core::Gig;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Store Trait
// =============================================================================

/// Storage collaborator interface for gig records.
///
/// All methods are async so real persistence can implement them directly.
/// Implementations are expected to be safe for concurrent callers; the
/// engine itself operates on whatever snapshot it is handed, and callers
/// complete pending writes before re-reading and re-aggregating.
pub trait GigStore: Send + Sync {
    /// Inserts a new gig. Fails on duplicate ID or structural invalidity.
    fn insert(&self, gig: Gig) -> impl std::future::Future<Output = StoreResult<()>> + Send;

    /// Replaces an existing gig's deal terms.
    fn update(&self, gig: Gig) -> impl std::future::Future<Output = StoreResult<()>> + Send;

    /// Fetches a gig by ID.
    fn get(&self, id: &str) -> impl std::future::Future<Output = StoreResult<Gig>> + Send;

    /// Deletes a gig by ID.
    fn delete(&self, id: &str) -> impl std::future::Future<Output = StoreResult<()>> + Send;

    /// Lists one owner's gigs within an optional inclusive date range,
    /// sorted ascending by gig date.
    fn list_for_period(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> impl std::future::Future<Output = StoreResult<Vec<Gig>>> + Send;

    /// Updates settlement flags. `None` leaves a flag untouched.
    fn set_settlement(
        &self,
        id: &str,
        payment_received: Option<bool>,
        band_paid: Option<bool>,
    ) -> impl std::future::Future<Output = StoreResult<()>> + Send;
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// In-memory `GigStore` backed by a `tokio::sync::RwLock`.
///
/// Reference implementation for tests and for callers that have not wired
/// real persistence yet. Write operations validate structurally before
/// mutating, mirroring what a database layer would enforce with
/// constraints.
#[derive(Debug, Default)]
pub struct MemoryGigStore {
    gigs: RwLock<HashMap<String, Gig>>,
}

impl MemoryGigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored gigs.
    pub async fn len(&self) -> usize {
        self.gigs.read().await.len()
    }

    /// Returns true when the store holds no gigs.
    pub async fn is_empty(&self) -> bool {
        self.gigs.read().await.is_empty()
    }
}

impl GigStore for MemoryGigStore {
    async fn insert(&self, gig: Gig) -> StoreResult<()> {
        validate_gig(&gig)?;

        let mut gigs = self.gigs.write().await;
        if gigs.contains_key(&gig.id) {
            return Err(StoreError::duplicate("Gig", &gig.id));
        }

        debug!(id = %gig.id, user_id = %gig.user_id, "inserting gig");
        gigs.insert(gig.id.clone(), gig);
        Ok(())
    }

    async fn update(&self, mut gig: Gig) -> StoreResult<()> {
        validate_gig(&gig)?;

        let mut gigs = self.gigs.write().await;
        if !gigs.contains_key(&gig.id) {
            return Err(StoreError::not_found("Gig", &gig.id));
        }

        debug!(id = %gig.id, "updating gig");
        gig.updated_at = Utc::now();
        gigs.insert(gig.id.clone(), gig);
        Ok(())
    }

    async fn get(&self, id: &str) -> StoreResult<Gig> {
        self.gigs
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Gig", id))
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut gigs = self.gigs.write().await;
        gigs.remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("Gig", id))
    }

    async fn list_for_period(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> StoreResult<Vec<Gig>> {
        let gigs = self.gigs.read().await;
        let mut matched: Vec<Gig> = gigs
            .values()
            .filter(|g| g.user_id == user_id)
            .filter(|g| range.map_or(true, |r| r.contains(g.date)))
            .cloned()
            .collect();

        // Date ascending; ID tie-break keeps ordering deterministic for
        // same-day gigs.
        matched.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

        debug!(user_id, count = matched.len(), "listed gigs for period");
        Ok(matched)
    }

    async fn set_settlement(
        &self,
        id: &str,
        payment_received: Option<bool>,
        band_paid: Option<bool>,
    ) -> StoreResult<()> {
        let mut gigs = self.gigs.write().await;
        let gig = gigs
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found("Gig", id))?;

        if let Some(paid) = payment_received {
            gig.payment_received = paid;
        }
        if let Some(paid) = band_paid {
            gig.band_paid = paid;
        }
        gig.updated_at = Utc::now();

        debug!(id = %gig.id, payment_received = ?payment_received, band_paid = ?band_paid, "settlement flags updated");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use encore_core::ManagerBonus;

    fn gig(user_id: &str, date: NaiveDate) -> Gig {
        Gig {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: "Test Gig".to_string(),
            date,
            performance_fee_cents: 100_000,
            technical_fee_cents: 0,
            number_of_musicians: 3,
            manager_bonus: ManagerBonus::percentage(10.0),
            claim_performance_fee: false,
            claim_technical_fee: false,
            technical_fee_claim_cents: 0,
            advance_received_cents: 0,
            advance_to_musicians_cents: 0,
            is_charity: false,
            payment_received: false,
            band_paid: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = MemoryGigStore::new();
        let g = gig("manager-1", date(2026, 1, 10));
        let id = g.id.clone();

        store.insert(g).await.unwrap();
        let fetched = store.get(&id).await.unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicates() {
        let store = MemoryGigStore::new();
        let g = gig("manager-1", date(2026, 1, 10));

        store.insert(g.clone()).await.unwrap();
        let err = store.insert(g).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));
    }

    #[tokio::test]
    async fn test_insert_rejects_invalid_records() {
        let store = MemoryGigStore::new();
        let mut g = gig("manager-1", date(2026, 1, 10));
        g.number_of_musicians = 0;

        let err = store.insert(g).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_scopes_to_owner() {
        let store = MemoryGigStore::new();
        store.insert(gig("manager-1", date(2026, 1, 10))).await.unwrap();
        store.insert(gig("manager-1", date(2026, 2, 10))).await.unwrap();
        store.insert(gig("manager-2", date(2026, 1, 10))).await.unwrap();

        let gigs = store.list_for_period("manager-1", None).await.unwrap();
        assert_eq!(gigs.len(), 2);
        assert!(gigs.iter().all(|g| g.user_id == "manager-1"));
    }

    #[tokio::test]
    async fn test_list_filters_by_range_inclusive() {
        let store = MemoryGigStore::new();
        store.insert(gig("m", date(2026, 1, 1))).await.unwrap();
        store.insert(gig("m", date(2026, 1, 31))).await.unwrap();
        store.insert(gig("m", date(2026, 2, 1))).await.unwrap();

        let range = DateRange {
            start: date(2026, 1, 1),
            end: date(2026, 1, 31),
        };
        let gigs = store.list_for_period("m", Some(range)).await.unwrap();
        assert_eq!(gigs.len(), 2);
    }

    #[tokio::test]
    async fn test_list_sorts_by_date_ascending() {
        let store = MemoryGigStore::new();
        store.insert(gig("m", date(2026, 5, 1))).await.unwrap();
        store.insert(gig("m", date(2026, 1, 1))).await.unwrap();
        store.insert(gig("m", date(2026, 3, 1))).await.unwrap();

        let gigs = store.list_for_period("m", None).await.unwrap();
        let dates: Vec<_> = gigs.iter().map(|g| g.date).collect();
        assert_eq!(
            dates,
            vec![date(2026, 1, 1), date(2026, 3, 1), date(2026, 5, 1)]
        );
    }

    #[tokio::test]
    async fn test_update_missing_gig_fails() {
        let store = MemoryGigStore::new();
        let err = store.update(gig("m", date(2026, 1, 1))).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_set_settlement_partial_flags() {
        let store = MemoryGigStore::new();
        let g = gig("m", date(2026, 1, 1));
        let id = g.id.clone();
        store.insert(g).await.unwrap();

        store.set_settlement(&id, Some(true), None).await.unwrap();
        let fetched = store.get(&id).await.unwrap();
        assert!(fetched.payment_received);
        assert!(!fetched.band_paid);

        store.set_settlement(&id, None, Some(true)).await.unwrap();
        let fetched = store.get(&id).await.unwrap();
        assert!(fetched.payment_received);
        assert!(fetched.band_paid);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryGigStore::new();
        let g = gig("m", date(2026, 1, 1));
        let id = g.id.clone();
        store.insert(g).await.unwrap();

        store.delete(&id).await.unwrap();
        assert!(store.get(&id).await.is_err());
    }
}
