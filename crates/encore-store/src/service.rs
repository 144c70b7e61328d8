//! # Report Service
//!
//! Orchestrates the engine's two call contracts over a `GigStore`:
//! per-gig reconciliation (`calculate`) and period reporting
//! (`aggregate`), plus the member-share snapshot taken when a band
//! member is linked to a gig.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Financial Report Request                                │
//! │                                                                         │
//! │  endpoint (period = "quarter")                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ReportPeriod::resolve(today) ──► DateRange                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.list_for_period(user, range)   (owner-scoped, date-sorted)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  aggregate(&gigs) ──► FinancialReport ──► export/formatting             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use encore_core::{aggregate, calculate, FinancialReport, GigCalculations, ReportPeriod};

use crate::error::StoreResult;
use crate::store::GigStore;

// =============================================================================
// Member Share Snapshot
// =============================================================================

/// A band member's earned share, frozen at the moment they were linked
/// to a gig.
///
/// ## Snapshot Pattern
/// Deal terms can be renegotiated after a member is added; the member's
/// agreed share must not drift with them. The share is computed once,
/// here, and handed to the linking collaborator for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberShare {
    /// Unique snapshot identifier (UUID v4).
    pub id: String,
    pub gig_id: String,
    pub member_id: String,
    /// Per-musician share in cents at link time (frozen).
    pub share_cents: i64,
    pub linked_at: DateTime<Utc>,
}

// =============================================================================
// Report Service
// =============================================================================

/// Report and reconciliation operations over a gig store.
///
/// Holds no state beyond the store handle; every report is recomputed
/// from the records on each request.
#[derive(Debug, Clone)]
pub struct ReportService<S> {
    store: S,
}

impl<S: GigStore> ReportService<S> {
    /// Creates a service over the given store.
    pub fn new(store: S) -> Self {
        ReportService { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Builds the financial report for one manager and period, with
    /// "today" taken from the wall clock.
    pub async fn financial_report(
        &self,
        user_id: &str,
        period: ReportPeriod,
    ) -> StoreResult<FinancialReport> {
        self.financial_report_at(user_id, period, Utc::now().date_naive())
            .await
    }

    /// Builds the financial report with an explicit "today", so period
    /// resolution stays deterministic under test.
    pub async fn financial_report_at(
        &self,
        user_id: &str,
        period: ReportPeriod,
        today: NaiveDate,
    ) -> StoreResult<FinancialReport> {
        let range = period.resolve(today);
        let gigs = self.store.list_for_period(user_id, range).await?;

        debug!(user_id, gig_count = gigs.len(), ?range, "aggregating financial report");
        Ok(aggregate(&gigs))
    }

    /// Recomputes one gig's reconciled breakdown.
    pub async fn gig_breakdown(&self, gig_id: &str) -> StoreResult<GigCalculations> {
        let gig = self.store.get(gig_id).await?;
        Ok(calculate(&gig))
    }

    /// Links a band member to a gig, snapshotting their earned share at
    /// association time.
    pub async fn link_member(&self, gig_id: &str, member_id: &str) -> StoreResult<MemberShare> {
        let gig = self.store.get(gig_id).await?;
        let calc = calculate(&gig);

        let share = MemberShare {
            id: uuid::Uuid::new_v4().to_string(),
            gig_id: gig.id.clone(),
            member_id: member_id.to_string(),
            share_cents: calc.amount_per_musician_cents,
            linked_at: Utc::now(),
        };

        info!(gig_id = %gig.id, member_id, share_cents = share.share_cents, "member linked to gig");
        Ok(share)
    }

    /// Applies settlement flags to a batch of gigs.
    ///
    /// Awaits each write before the next; callers re-read and re-aggregate
    /// only after this returns, so the report sees a consistent snapshot.
    /// Returns the number of gigs updated.
    pub async fn mark_settled(
        &self,
        gig_ids: &[String],
        payment_received: Option<bool>,
        band_paid: Option<bool>,
    ) -> StoreResult<u64> {
        let mut updated = 0;
        for id in gig_ids {
            self.store
                .set_settlement(id, payment_received, band_paid)
                .await?;
            updated += 1;
        }

        info!(updated, "bulk settlement update applied");
        Ok(updated)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryGigStore;
    use chrono::NaiveDate;
    use encore_core::{Gig, ManagerBonus};

    fn gig(user_id: &str, date: NaiveDate, performance_fee_cents: i64) -> Gig {
        Gig {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: "Test Gig".to_string(),
            date,
            performance_fee_cents,
            technical_fee_cents: 0,
            number_of_musicians: 4,
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
    async fn test_report_filters_by_period() {
        let service = ReportService::new(MemoryGigStore::new());
        let store = service.store();

        store.insert(gig("m", date(2026, 1, 10), 100_000)).await.unwrap();
        store.insert(gig("m", date(2026, 2, 10), 200_000)).await.unwrap();
        store.insert(gig("m", date(2026, 6, 10), 400_000)).await.unwrap();

        // Q1 seen from mid-February: January + February gigs only
        let report = service
            .financial_report_at("m", ReportPeriod::Quarter, date(2026, 2, 14))
            .await
            .unwrap();
        assert_eq!(report.summary.total_gigs, 2);
        assert_eq!(report.summary.total_revenue_cents, 300_000);

        // Unfiltered
        let report = service
            .financial_report_at("m", ReportPeriod::All, date(2026, 2, 14))
            .await
            .unwrap();
        assert_eq!(report.summary.total_gigs, 3);
    }

    #[tokio::test]
    async fn test_report_breakdown_is_chronological() {
        let service = ReportService::new(MemoryGigStore::new());
        let store = service.store();

        // Inserted out of order; the store sorts by date, so first-seen
        // aggregation order is chronological.
        store.insert(gig("m", date(2026, 5, 1), 1_000)).await.unwrap();
        store.insert(gig("m", date(2026, 1, 1), 1_000)).await.unwrap();
        store.insert(gig("m", date(2026, 3, 1), 1_000)).await.unwrap();

        let report = service
            .financial_report_at("m", ReportPeriod::All, date(2026, 12, 1))
            .await
            .unwrap();
        let labels: Vec<&str> = report
            .monthly_breakdown
            .iter()
            .map(|e| e.month.as_str())
            .collect();
        assert_eq!(labels, vec!["January 2026", "March 2026", "May 2026"]);
    }

    #[tokio::test]
    async fn test_empty_period_yields_zeroed_report() {
        let service = ReportService::new(MemoryGigStore::new());
        let report = service
            .financial_report_at("nobody", ReportPeriod::Year, date(2026, 6, 1))
            .await
            .unwrap();
        assert_eq!(report.summary.total_gigs, 0);
        assert!(report.monthly_breakdown.is_empty());
    }

    #[tokio::test]
    async fn test_gig_breakdown() {
        let service = ReportService::new(MemoryGigStore::new());
        let g = gig("m", date(2026, 3, 7), 200_000);
        let id = g.id.clone();
        service.store().insert(g).await.unwrap();

        let calc = service.gig_breakdown(&id).await.unwrap();
        assert_eq!(calc.total_received_cents, 200_000);
        assert_eq!(calc.actual_manager_bonus_cents, 20_000);
    }

    #[tokio::test]
    async fn test_member_share_snapshot_is_frozen() {
        let service = ReportService::new(MemoryGigStore::new());
        let g = gig("m", date(2026, 3, 7), 200_000);
        let id = g.id.clone();
        service.store().insert(g.clone()).await.unwrap();

        // $200k, 10% bonus → pot $180k / 4 = $45k each
        let share = service.link_member(&id, "member-1").await.unwrap();
        assert_eq!(share.share_cents, 45_000);

        // Renegotiate the fee upward; the old snapshot must not move.
        let mut renegotiated = g;
        renegotiated.performance_fee_cents = 400_000;
        service.store().update(renegotiated).await.unwrap();

        assert_eq!(share.share_cents, 45_000);
        let new_share = service.link_member(&id, "member-2").await.unwrap();
        assert_eq!(new_share.share_cents, 90_000);
    }

    #[tokio::test]
    async fn test_bulk_settlement_feeds_report_counts() {
        let service = ReportService::new(MemoryGigStore::new());
        let g1 = gig("m", date(2026, 1, 5), 100_000);
        let g2 = gig("m", date(2026, 1, 6), 100_000);
        let ids = vec![g1.id.clone(), g2.id.clone()];
        service.store().insert(g1).await.unwrap();
        service.store().insert(g2).await.unwrap();

        let updated = service.mark_settled(&ids, Some(true), None).await.unwrap();
        assert_eq!(updated, 2);

        let report = service
            .financial_report_at("m", ReportPeriod::All, date(2026, 6, 1))
            .await
            .unwrap();
        assert_eq!(report.summary.paid_count, 2);
        assert_eq!(report.summary.unpaid_count, 0);
        assert_eq!(report.summary.band_paid_count, 0);
    }

    #[tokio::test]
    async fn test_bulk_settlement_unknown_id_fails() {
        let service = ReportService::new(MemoryGigStore::new());
        let err = service
            .mark_settled(&["missing".to_string()], Some(true), None)
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::StoreError::NotFound { .. }));
    }
}
