//! # encore-core: Pure Financial Engine for Encore
//!
//! This crate is the **heart** of Encore. It turns one gig's raw deal
//! terms (fees, bonus rules, claims, advances, charity status) into a
//! reconciled financial picture, and folds many gigs into the period
//! summaries consumed by reports and exports. All of it is pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Encore Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Report / Export / Reconciliation Endpoints         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  encore-store (Storage Boundary)                │   │
//! │  │           GigStore trait, ReportService orchestration           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ encore-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐ ┌───────────┐ ┌────────────┐ ┌─────────────┐  │   │
//! │  │   │   types   │ │   money   │ │ calculator │ │   report    │  │   │
//! │  │   │    Gig    │ │   Money   │ │ calculate  │ │  aggregate  │  │   │
//! │  │   │   Bonus   │ │ BonusRate │ │            │ │   Period    │  │   │
//! │  │   └───────────┘ └───────────┘ └────────────┘ └─────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CACHING • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Gig, ManagerBonus, GigCalculations)
//! - [`money`] - Money type with integer-cents arithmetic (no floating point!)
//! - [`calculator`] - The per-gig earnings-split algorithm
//! - [`report`] - Report aggregation and period resolution
//! - [`error`] - Domain error types
//! - [`validation`] - Structural validation at the write boundary
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float drift
//! 4. **Degrade, Don't Fail**: Malformed numerics clamp to defined values so
//!    a financial report never hard-fails on one bad record
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{NaiveDate, Utc};
//! use encore_core::{aggregate, calculate, Gig, ManagerBonus};
//!
//! let gig = Gig {
//!     id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
//!     user_id: "mgr-1".to_string(),
//!     name: "Jazz Night".to_string(),
//!     date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
//!     performance_fee_cents: 200_000,
//!     technical_fee_cents: 30_000,
//!     number_of_musicians: 4,
//!     manager_bonus: ManagerBonus::percentage(10.0),
//!     claim_performance_fee: false,
//!     claim_technical_fee: false,
//!     technical_fee_claim_cents: 0,
//!     advance_received_cents: 0,
//!     advance_to_musicians_cents: 0,
//!     is_charity: false,
//!     payment_received: false,
//!     band_paid: false,
//!     created_at: Utc::now(),
//!     updated_at: Utc::now(),
//! };
//!
//! let calc = calculate(&gig);
//! assert_eq!(calc.amount_per_musician_cents, 51_750);
//!
//! let report = aggregate(std::slice::from_ref(&gig));
//! assert_eq!(report.summary.total_revenue_cents, 230_000);
//! assert_eq!(report.monthly_breakdown[0].month, "January 2026");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use encore_core::Money` instead of
// `use encore_core::money::Money`

pub use calculator::calculate;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{BonusRate, Money};
pub use report::{
    aggregate, DateRange, FinancialReport, GigFinancials, MonthlyEntry, ReportPeriod,
    ReportSummary,
};
pub use types::{Gig, GigCalculations, ManagerBonus};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum bonus rate in basis points (100%).
///
/// Percentage deal terms arrive as points in [0, 100]; anything outside
/// clamps to this bound rather than erroring, per the degraded-output
/// policy.
pub const MAX_BONUS_BPS: u32 = 10_000;

/// Maximum band members sharing one gig's musician pot.
///
/// ## Business Reason
/// Prevents typo-sized bands (e.g. 400 instead of 4) from silently
/// shrinking everyone's share to pennies.
pub const MAX_BAND_MEMBERS: i64 = 99;

/// Maximum gig display-name length.
pub const MAX_GIG_NAME_LEN: usize = 200;
