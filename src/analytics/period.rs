//! Month-over-month financial comparison across the three collections.
//!
//! Each collection keeps its own reducer rules. The schemas drifted apart as
//! the app evolved, so the authoritative date fields and cost fallbacks differ
//! per collection; the blocks below reproduce each rule set independently
//! instead of unifying them.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::analytics::activity::days_in_month;
use crate::domain::{Remainder, Stone};

/// Summed financial metrics for one date range.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PeriodMetrics {
    pub total_sales: f64,
    pub total_investment: f64,
    pub total_profit: f64,
    pub units_sold: u32,
}

/// Inclusive date range: `start <= at <= end`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl PeriodRange {
    /// Full calendar month containing `reference`: first day 00:00:00 through
    /// last day 23:59:59.
    pub fn month_of(reference: NaiveDate) -> Self {
        let year = reference.year();
        let month = reference.month();
        let last_day = days_in_month(year, month);
        Self {
            start: NaiveDate::from_ymd_opt(year, month, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            end: NaiveDate::from_ymd_opt(year, month, last_day)
                .unwrap()
                .and_hms_opt(23, 59, 59)
                .unwrap(),
        }
    }

    /// The calendar month immediately before `reference`'s month, rolling the
    /// year back across January.
    pub fn previous_month_of(reference: NaiveDate) -> Self {
        let (year, month) = if reference.month() == 1 {
            (reference.year() - 1, 12)
        } else {
            (reference.year(), reference.month() - 1)
        };
        Self::month_of(NaiveDate::from_ymd_opt(year, month, 1).unwrap())
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at <= self.end
    }

    fn contains_opt(&self, at: Option<NaiveDateTime>) -> bool {
        at.map_or(false, |at| self.contains(at))
    }
}

/// Current-versus-previous month metrics for trend cards and charts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MonthComparison {
    pub current: PeriodMetrics,
    pub previous: PeriodMetrics,
}

/// Sums sales, investment, profit, and unit count over one inclusive range.
///
/// Investment is attributed to the acquisition date (`created_at`) and sales
/// to the sale date, so a single archive record can contribute to both sides
/// of the same range, or to different months.
pub fn metrics_for_range(
    stones: &[Stone],
    archives: &[Remainder],
    remainders: &[Remainder],
    range: PeriodRange,
) -> PeriodMetrics {
    let mut metrics = PeriodMetrics::default();

    // Stones: acquisition cost only, never sales or profit.
    for stone in stones {
        if range.contains(stone.created_at) {
            metrics.total_investment += stone.investment();
        }
    }

    // Archives: cost falls back to selling price minus profit when the total
    // cost was never recorded; the sale date prefers selling_date over the
    // payment receiving date.
    for archive in archives {
        if range.contains(archive.created_at) {
            let cost = archive
                .total_cost
                .unwrap_or_else(|| archive.selling_price - archive.my_profit.unwrap_or(0.0));
            metrics.total_investment += cost;
        }
        let sale_date = archive.selling_date.or(archive.payment_receiving_date);
        if range.contains_opt(sale_date) {
            metrics.total_sales += archive.selling_price;
            metrics.total_profit += archive.my_profit.unwrap_or(0.0);
            metrics.units_sold += 1;
        }
    }

    // Remainders: cost has no fallback formula, the sale date is selling_date
    // only, and a zero-price sale does not count as a sold unit.
    for remainder in remainders {
        if range.contains(remainder.created_at) {
            metrics.total_investment += remainder.total_cost.unwrap_or(0.0);
        }
        if range.contains_opt(remainder.selling_date) {
            metrics.total_sales += remainder.selling_price;
            metrics.total_profit += remainder.profit();
            if remainder.selling_price > 0.0 {
                metrics.units_sold += 1;
            }
        }
    }

    metrics
}

/// Computes metrics for the month containing `reference` and for the month
/// immediately preceding it.
pub fn compare_months(
    stones: &[Stone],
    archives: &[Remainder],
    remainders: &[Remainder],
    reference: NaiveDate,
) -> MonthComparison {
    MonthComparison {
        current: metrics_for_range(stones, archives, remainders, PeriodRange::month_of(reference)),
        previous: metrics_for_range(
            stones,
            archives,
            remainders,
            PeriodRange::previous_month_of(reference),
        ),
    }
}
