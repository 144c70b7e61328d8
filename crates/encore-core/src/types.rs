//! # Domain Types
//!
//! Core domain types for the gig financial engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────┐      │
//! │  │      Gig        │   │  ManagerBonus    │   │ GigCalculations │      │
//! │  │  ─────────────  │   │  ─────────────   │   │  ─────────────  │      │
//! │  │  id (UUID)      │   │  Fixed(cents)    │   │  total_received │      │
//! │  │  user_id        │   │  Percentage(bps) │   │  actual_bonus   │      │
//! │  │  date           │   └──────────────────┘   │  per_musician   │      │
//! │  │  fee fields     │                          │  my_earnings    │      │
//! │  │  deal flags     │                          │  owed_to_others │      │
//! │  └─────────────────┘                          └─────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every gig has:
//! - `id`: UUID v4 - immutable, used by the storage collaborator
//! - `name`: human-readable, mutable ("Jazz Night at the Blue Room")

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{BonusRate, Money};

// =============================================================================
// Manager Bonus
// =============================================================================

/// How the manager's bonus on a gig is computed.
///
/// The raw deal record carries a (type, amount) pair; here the pair is a
/// tagged enum so an amount can never be read against the wrong type.
/// Wire shape: `{"type": "fixed", "amount": 25000}` or
/// `{"type": "percentage", "amount": 1000}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "amount", rename_all = "snake_case")]
pub enum ManagerBonus {
    /// Flat amount in cents, clamped to the gig total at calculation time.
    Fixed(i64),
    /// Share of total gig revenue in basis points (1000 = 10%).
    Percentage(u32),
}

impl ManagerBonus {
    /// Creates a fixed bonus from a Money amount.
    #[inline]
    pub const fn fixed(amount: Money) -> Self {
        ManagerBonus::Fixed(amount.cents())
    }

    /// Creates a percentage bonus from percentage points (0-100).
    ///
    /// Out-of-range values are clamped; `percentage(150.0)` means 100%.
    pub fn percentage(points: f64) -> Self {
        ManagerBonus::Percentage(BonusRate::from_percentage(points).bps())
    }

    /// Resolves the bonus actually applied against a gig total.
    ///
    /// - Fixed bonuses are clamped to `[0, total]` — a deal can never pay
    ///   out more bonus than the gig brought in.
    /// - Percentage rates were clamped to [0, 100%] at construction;
    ///   applying them here is the only rounding point for bonuses.
    pub fn resolve(&self, total: Money) -> Money {
        match *self {
            ManagerBonus::Fixed(cents) => {
                Money::from_cents(cents).clamp_non_negative().min(total)
            }
            ManagerBonus::Percentage(bps) => total.apply_rate(BonusRate::from_bps(bps)),
        }
    }
}

impl Default for ManagerBonus {
    fn default() -> Self {
        ManagerBonus::Fixed(0)
    }
}

// =============================================================================
// Gig
// =============================================================================

/// One performance/booking event with negotiated deal terms.
///
/// This is the financial-relevant record the storage collaborator supplies,
/// immutable for the duration of a calculation. Upstream has already scoped
/// it to its owner (`user_id`) and defaulted absent numeric fields to 0;
/// the calculator still clamps defensively (see `calculator`).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Gig {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Owning manager's account.
    pub user_id: String,

    /// Display name ("Jazz Night at the Blue Room").
    pub name: String,

    /// Date of the performance. Monthly report grouping keys off this
    /// date's calendar year and month, never off processing time.
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Fee negotiated for the performance itself, in cents.
    pub performance_fee_cents: i64,

    /// Fee for technical/production services, in cents.
    pub technical_fee_cents: i64,

    /// Number of band members sharing the musician pot.
    /// The manager is not counted.
    pub number_of_musicians: i64,

    /// How the manager's bonus is computed.
    pub manager_bonus: ManagerBonus,

    /// Whether the manager retains the performance fee rather than
    /// pooling it for the band.
    pub claim_performance_fee: bool,

    /// Whether the manager retains (part of) the technical fee.
    pub claim_technical_fee: bool,

    /// Portion of the technical fee the manager claims when
    /// `claim_technical_fee` is set. May be less than the full fee;
    /// anything above it is capped at calculation time.
    pub technical_fee_claim_cents: i64,

    /// Money the client already paid the manager ahead of settlement.
    pub advance_received_cents: i64,

    /// Money the manager already advanced to band members ahead of
    /// settlement.
    pub advance_to_musicians_cents: i64,

    /// Charity gigs generate no billable revenue; every calculated money
    /// field resolves to zero.
    pub is_charity: bool,

    /// Whether the client has settled the gig.
    pub payment_received: bool,

    /// Whether the band has been paid out.
    pub band_paid: bool,

    /// When the gig was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the gig was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Gig {
    /// Returns the performance fee as Money.
    #[inline]
    pub fn performance_fee(&self) -> Money {
        Money::from_cents(self.performance_fee_cents)
    }

    /// Returns the technical fee as Money.
    #[inline]
    pub fn technical_fee(&self) -> Money {
        Money::from_cents(self.technical_fee_cents)
    }

    /// Returns the claimed portion of the technical fee as Money.
    #[inline]
    pub fn technical_fee_claim(&self) -> Money {
        Money::from_cents(self.technical_fee_claim_cents)
    }

    /// Returns the advance already received by the manager as Money.
    #[inline]
    pub fn advance_received(&self) -> Money {
        Money::from_cents(self.advance_received_cents)
    }

    /// Returns the advance already paid to musicians as Money.
    #[inline]
    pub fn advance_to_musicians(&self) -> Money {
        Money::from_cents(self.advance_to_musicians_cents)
    }
}

// =============================================================================
// Gig Calculations
// =============================================================================

/// The reconciled financial picture for one gig.
///
/// Produced by `calculator::calculate`, consumed by reports, exports and
/// the member-linking collaborator (which snapshots `amount_per_musician`
/// when a member is associated with a gig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GigCalculations {
    /// Total billable revenue for the gig (0 when charity).
    pub total_received_cents: i64,

    /// Bonus amount actually applied, after resolving fixed vs. percentage.
    pub actual_manager_bonus_cents: i64,

    /// Each band member's share of the pot remaining after the manager's
    /// bonus and claimed fees are removed.
    pub amount_per_musician_cents: i64,

    /// Total retained by the manager (bonus + claimed fees), net of the
    /// advance already received. Negative when the manager was advanced
    /// more than they earned — surfaced, never clamped.
    pub my_earnings_cents: i64,

    /// Still owed to the band: the pot net of advances already paid out.
    /// Negative when musicians were advanced more than the pot — surfaced,
    /// never clamped.
    pub amount_owed_to_others_cents: i64,
}

impl GigCalculations {
    /// All-zero output, the defined result for charity gigs.
    pub const fn zeroed() -> Self {
        GigCalculations {
            total_received_cents: 0,
            actual_manager_bonus_cents: 0,
            amount_per_musician_cents: 0,
            my_earnings_cents: 0,
            amount_owed_to_others_cents: 0,
        }
    }

    /// Returns the total received as Money.
    #[inline]
    pub fn total_received(&self) -> Money {
        Money::from_cents(self.total_received_cents)
    }

    /// Returns the applied manager bonus as Money.
    #[inline]
    pub fn actual_manager_bonus(&self) -> Money {
        Money::from_cents(self.actual_manager_bonus_cents)
    }

    /// Returns the per-musician share as Money.
    #[inline]
    pub fn amount_per_musician(&self) -> Money {
        Money::from_cents(self.amount_per_musician_cents)
    }

    /// Returns the manager's earnings as Money.
    #[inline]
    pub fn my_earnings(&self) -> Money {
        Money::from_cents(self.my_earnings_cents)
    }

    /// Returns the amount still owed to the band as Money.
    #[inline]
    pub fn amount_owed_to_others(&self) -> Money {
        Money::from_cents(self.amount_owed_to_others_cents)
    }

    /// True when advances exceeded what was actually earned on either
    /// side of the split. Reports use this to flag over-advanced gigs.
    pub fn is_over_advanced(&self) -> bool {
        self.my_earnings_cents < 0 || self.amount_owed_to_others_cents < 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
