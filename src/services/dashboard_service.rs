//! Aggregation for the home dashboard: inventory and payment totals plus the
//! activity metrics of the selected month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::{activity_metrics, build_month_grid, MonthGrid};
use crate::domain::{Remainder, Stone};

/// Everything the dashboard header cards display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardMetrics {
    pub total_stones: usize,
    pub in_stock_stones: usize,
    pub active_remainders: usize,
    pub inventory_value: f64,
    pub total_investment: f64,
    pub total_sales: f64,
    pub pending_payments: f64,
    pub received_payments: f64,
    pub total_profit: f64,
    pub active_days: usize,
    pub activity_rate_percent: u32,
    pub current_streak: usize,
}

/// Reduces full snapshots into the dashboard view.
///
/// See also: [`crate::analytics`] for the underlying grid and period engines.
pub struct DashboardService;

impl DashboardService {
    /// Computes the dashboard totals and the activity metrics of the month
    /// containing `reference`. Remainders and archives both feed the sales,
    /// profit, and activity figures; archives arrive already marked completed
    /// by the storage layer.
    pub fn metrics(
        stones: &[Stone],
        remainders: &[Remainder],
        archives: &[Remainder],
        reference: NaiveDate,
    ) -> DashboardMetrics {
        let mut metrics = DashboardMetrics::default();

        for stone in stones {
            metrics.total_stones += 1;
            if stone.is_in_stock() {
                metrics.in_stock_stones += 1;
                metrics.inventory_value += stone.price_to_sell;
            }
            // Investment covers every stone, sold or not.
            metrics.total_investment += stone.investment();
        }

        for remainder in remainders {
            if remainder.is_pending() {
                metrics.active_remainders += 1;
                metrics.pending_payments += remainder.selling_price;
            }
            metrics.total_sales += remainder.selling_price;
            metrics.total_profit += remainder.my_profit.unwrap_or(0.0);
        }

        for archive in archives {
            metrics.received_payments += archive.selling_price;
            metrics.total_sales += archive.selling_price;
            metrics.total_profit += archive.my_profit.unwrap_or(0.0);
        }

        let activity = activity_metrics(&Self::month_grid(stones, remainders, archives, reference));
        metrics.active_days = activity.active_days;
        metrics.activity_rate_percent = activity.activity_rate_percent;
        metrics.current_streak = activity.current_streak;

        metrics
    }

    /// Builds the activity grid the dashboard renders: stones plus the merged
    /// remainder pool (active and archived sales alike).
    pub fn month_grid(
        stones: &[Stone],
        remainders: &[Remainder],
        archives: &[Remainder],
        reference: NaiveDate,
    ) -> MonthGrid {
        let mut pool: Vec<Remainder> = remainders.to_vec();
        pool.extend(archives.iter().cloned());
        build_month_grid(stones, &pool, reference)
    }

    /// Most recently added stones, newest first.
    pub fn recent_stones(stones: &[Stone], limit: usize) -> Vec<Stone> {
        let mut sorted: Vec<Stone> = stones.to_vec();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted.truncate(limit);
        sorted
    }

    /// Most recently added remainders across the active and archived pools,
    /// newest first.
    pub fn recent_remainders(
        remainders: &[Remainder],
        archives: &[Remainder],
        limit: usize,
    ) -> Vec<Remainder> {
        let mut pool: Vec<Remainder> = remainders.to_vec();
        pool.extend(archives.iter().cloned());
        pool.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        pool.truncate(limit);
        pool
    }
}
