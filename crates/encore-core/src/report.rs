//! # Report Aggregation
//!
//! Folds a list of gigs into the summary statistics and month-keyed time
//! series consumed by the financial-report endpoint and exports.
//!
//! ## Aggregation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Report Aggregation                                  │
//! │                                                                         │
//! │  caller obtains date-filtered gigs from the storage collaborator       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  for each gig:                                                          │
//! │    ├── calculate(gig) ──► revenue / my_earnings / owed_to_band         │
//! │    ├── summary totals  += projected values                             │
//! │    ├── summary counts  += flags on the RAW gig record                  │
//! │    └── monthly entry for (year, month) of the gig's own date          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  FinancialReport { summary, monthly_breakdown }                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering Contract
//! Entries surface in first-seen order; two gigs sharing a (year, month)
//! sum into one entry. The aggregator never re-sorts — callers wanting
//! chronological breakdowns pre-sort the input by date (the storage
//! boundary does this).

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::calculate;
use crate::types::Gig;

// =============================================================================
// Per-Gig Projection
// =============================================================================

/// The subset of calculated fields reporting needs, one row per gig.
///
/// Also consumed directly by CSV/JSON export rendering as the per-gig
/// line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GigFinancials {
    pub gig_id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub revenue_cents: i64,
    pub my_earnings_cents: i64,
    pub owed_to_band_cents: i64,
}

impl GigFinancials {
    /// Projects one gig through the calculator.
    pub fn project(gig: &Gig) -> Self {
        let calc = calculate(gig);
        GigFinancials {
            gig_id: gig.id.clone(),
            date: gig.date,
            revenue_cents: calc.total_received_cents,
            my_earnings_cents: calc.my_earnings_cents,
            owed_to_band_cents: calc.amount_owed_to_others_cents,
        }
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Counts and money totals across the filtered gig set.
///
/// Totals come from calculator output; counts come from boolean flags on
/// the raw gig records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_gigs: u64,
    pub total_revenue_cents: i64,
    pub total_my_earnings_cents: i64,
    pub total_owed_to_band_cents: i64,
    pub charity_count: u64,
    /// Gigs where the client has settled.
    pub paid_count: u64,
    pub unpaid_count: u64,
    /// Gigs where the band has been paid out.
    pub band_paid_count: u64,
    pub band_unpaid_count: u64,
    /// Gigs where an advance exceeded the matching earned amount.
    pub over_advanced_count: u64,
}

// =============================================================================
// Monthly Breakdown
// =============================================================================

/// One calendar month's slice of the report.
///
/// Keyed by the gig's own date (year, month), never by processing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyEntry {
    /// Human label, e.g. "January 2026".
    pub month: String,
    pub year: i32,
    pub month_number: u32,
    pub revenue_cents: i64,
    pub my_earnings_cents: i64,
    pub owed_to_band_cents: i64,
    pub gigs_count: u64,
}

impl MonthlyEntry {
    fn empty_for(date: NaiveDate) -> Self {
        MonthlyEntry {
            month: date.format("%B %Y").to_string(),
            year: date.year(),
            month_number: date.month(),
            revenue_cents: 0,
            my_earnings_cents: 0,
            owed_to_band_cents: 0,
            gigs_count: 0,
        }
    }
}

/// The full report aggregate: recomputed on each request, no lifecycle of
/// its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    pub summary: ReportSummary,
    pub monthly_breakdown: Vec<MonthlyEntry>,
}

// =============================================================================
// Aggregation
// =============================================================================

/// Folds gigs into a `FinancialReport`.
///
/// Stateless and pure: empty input yields a zeroed summary and an empty
/// breakdown, and a malformed gig degrades through the calculator's
/// clamping instead of aborting the fold.
pub fn aggregate(gigs: &[Gig]) -> FinancialReport {
    let mut summary = ReportSummary::default();
    let mut breakdown: Vec<MonthlyEntry> = Vec::new();
    // (year, month) → index into breakdown, preserving first-seen order.
    let mut month_index: HashMap<(i32, u32), usize> = HashMap::new();

    for gig in gigs {
        let calc = calculate(gig);

        summary.total_gigs += 1;
        summary.total_revenue_cents += calc.total_received_cents;
        summary.total_my_earnings_cents += calc.my_earnings_cents;
        summary.total_owed_to_band_cents += calc.amount_owed_to_others_cents;

        // Counts are predicates over the raw record, not the calculation.
        if gig.is_charity {
            summary.charity_count += 1;
        }
        if gig.payment_received {
            summary.paid_count += 1;
        } else {
            summary.unpaid_count += 1;
        }
        if gig.band_paid {
            summary.band_paid_count += 1;
        } else {
            summary.band_unpaid_count += 1;
        }
        if calc.is_over_advanced() {
            summary.over_advanced_count += 1;
        }

        let key = (gig.date.year(), gig.date.month());
        let idx = *month_index.entry(key).or_insert_with(|| {
            breakdown.push(MonthlyEntry::empty_for(gig.date));
            breakdown.len() - 1
        });
        let entry = &mut breakdown[idx];
        entry.revenue_cents += calc.total_received_cents;
        entry.my_earnings_cents += calc.my_earnings_cents;
        entry.owed_to_band_cents += calc.amount_owed_to_others_cents;
        entry.gigs_count += 1;
    }

    FinancialReport {
        summary,
        monthly_breakdown: breakdown,
    }
}

// =============================================================================
// Period Selection
// =============================================================================

/// Inclusive date range used to filter gigs before aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DateRange {
    #[ts(as = "String")]
    pub start: NaiveDate,
    #[ts(as = "String")]
    pub end: NaiveDate,
}

impl DateRange {
    /// Returns true if the date falls within this range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Period-selection parameter accepted by the financial-report endpoint.
///
/// The storage collaborator uses the resolved range to filter the gig set
/// *before* aggregation; the aggregator itself never filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "period", rename_all = "snake_case")]
pub enum ReportPeriod {
    /// The calendar month containing `today`.
    Month,
    /// The calendar quarter containing `today`.
    Quarter,
    /// The calendar year containing `today`.
    Year,
    /// No date filter.
    All,
    /// Explicit start/end date range, inclusive.
    Custom {
        #[ts(as = "String")]
        start: NaiveDate,
        #[ts(as = "String")]
        end: NaiveDate,
    },
}

impl ReportPeriod {
    /// Resolves to a concrete date range relative to `today`.
    ///
    /// Returns `None` for `All` (unfiltered). Pure date math so callers
    /// decide what "today" means and tests stay deterministic.
    pub fn resolve(&self, today: NaiveDate) -> Option<DateRange> {
        match *self {
            ReportPeriod::Month => {
                let start = month_start(today.year(), today.month());
                Some(DateRange {
                    start,
                    end: month_end(today.year(), today.month()),
                })
            }
            ReportPeriod::Quarter => {
                let first_month = ((today.month() - 1) / 3) * 3 + 1;
                Some(DateRange {
                    start: month_start(today.year(), first_month),
                    end: month_end(today.year(), first_month + 2),
                })
            }
            ReportPeriod::Year => Some(DateRange {
                start: month_start(today.year(), 1),
                end: month_end(today.year(), 12),
            }),
            ReportPeriod::All => None,
            ReportPeriod::Custom { start, end } => Some(DateRange { start, end }),
        }
    }
}

fn month_start(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("month in 1..=12 is a valid calendar month")
}

fn month_end(year: i32, month: u32) -> NaiveDate {
    let (next_y, next_m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    month_start(next_y, next_m) - Duration::days(1)
}

// =============================================================================
// Unit Tests
// =============================================================================
