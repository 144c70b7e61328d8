//! # Financial Calculator
//!
//! The per-gig earnings-split algorithm: maps one gig's raw deal terms to
//! a reconciled `GigCalculations`.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Earnings Split per Gig                               │
//! │                                                                         │
//! │  charity? ──yes──► all money fields = 0, done                          │
//! │     │ no                                                                │
//! │     ▼                                                                   │
//! │  total = performance_fee + technical_fee                               │
//! │     │                                                                   │
//! │     ├──► bonus    = manager_bonus.resolve(total)                       │
//! │     ├──► claimed  = perf fee (if claimed)                              │
//! │     │            + min(tech claim, tech fee) (if claimed)              │
//! │     ▼                                                                   │
//! │  pot = max(0, total - bonus - claimed)                                 │
//! │     │                                                                   │
//! │     ├──► amount_per_musician = pot / n   (0 when n <= 0)               │
//! │     ├──► my_earnings = bonus + claimed - advance_received              │
//! │     └──► owed_to_others = pot - advance_to_musicians                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Conservation
//! Whenever the deal is not over-committed (bonus + claimed <= total):
//!
//! `my_earnings + owed_to_others == total - advance_received - advance_to_musicians`
//!
//! exactly in cents. The pot is the exact remainder of the total, and the
//! per-musician split rounding never feeds back into the totals.
//!
//! ## Error Handling
//! This is a total function: no error outcomes. Negative fee and advance
//! inputs are clamped to zero at the boundary, a musician count <= 0
//! degrades the per-musician share to zero, and oversized claims are
//! capped. Negative `my_earnings` / `owed_to_others` are surfaced as-is so
//! over-advanced gigs stay visible in reports.

use crate::money::Money;
use crate::types::{Gig, GigCalculations};

/// Computes the reconciled financial picture for one gig.
///
/// Pure and stateless: same input, same output, no I/O, no caching. Safe
/// to call concurrently for different requests without coordination.
///
/// ## Example
/// ```rust
/// use chrono::{NaiveDate, Utc};
/// use encore_core::{calculate, Gig, ManagerBonus};
///
/// let gig = Gig {
///     id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
///     user_id: "mgr-1".to_string(),
///     name: "Jazz Night".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
///     performance_fee_cents: 200_000,
///     technical_fee_cents: 30_000,
///     number_of_musicians: 4,
///     manager_bonus: ManagerBonus::percentage(10.0),
///     claim_performance_fee: false,
///     claim_technical_fee: false,
///     technical_fee_claim_cents: 0,
///     advance_received_cents: 0,
///     advance_to_musicians_cents: 0,
///     is_charity: false,
///     payment_received: false,
///     band_paid: false,
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
///
/// let calc = calculate(&gig);
/// assert_eq!(calc.total_received_cents, 230_000);
/// assert_eq!(calc.actual_manager_bonus_cents, 23_000);
/// assert_eq!(calc.amount_per_musician_cents, 51_750); // $517.50 each
/// ```
pub fn calculate(gig: &Gig) -> GigCalculations {
    // Charity gigs generate no billable revenue at all.
    if gig.is_charity {
        return GigCalculations::zeroed();
    }

    // Boundary clamping: malformed negative inputs degrade to zero
    // rather than poisoning the whole report.
    let performance_fee = gig.performance_fee().clamp_non_negative();
    let technical_fee = gig.technical_fee().clamp_non_negative();
    let advance_received = gig.advance_received().clamp_non_negative();
    let advance_to_musicians = gig.advance_to_musicians().clamp_non_negative();

    let total = performance_fee + technical_fee;

    // Bonus resolution: fixed amounts clamp to [0, total], percentage
    // rates were clamped to [0, 100%] at construction.
    let bonus = gig.manager_bonus.resolve(total);

    // Fees the manager retains outside the bonus.
    let claimed_performance = if gig.claim_performance_fee {
        performance_fee
    } else {
        Money::zero()
    };
    let claimed_technical = if gig.claim_technical_fee {
        gig.technical_fee_claim()
            .clamp_non_negative()
            .min(technical_fee)
    } else {
        Money::zero()
    };
    let claimed = claimed_performance + claimed_technical;

    // The pot is pooled revenue for the band, floored at zero for
    // over-committed deals (bonus + claims exceeding the total).
    let pot = (total - bonus - claimed).clamp_non_negative();

    let amount_per_musician = pot.split_between(gig.number_of_musicians);

    // Advances already transferred are netted out of "still owed" figures.
    // Both results may go negative and stay negative.
    let my_earnings = bonus + claimed - advance_received;
    let owed_to_others = pot - advance_to_musicians;

    GigCalculations {
        total_received_cents: total.cents(),
        actual_manager_bonus_cents: bonus.cents(),
        amount_per_musician_cents: amount_per_musician.cents(),
        my_earnings_cents: my_earnings.cents(),
        amount_owed_to_others_cents: owed_to_others.cents(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
