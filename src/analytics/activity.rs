//! Calendar-shaped activity grid for a selected month.
//!
//! Stones land on the day they were added (`created_at`); remainders land on
//! the day they were sold (`selling_date`). A remainder with no selling date
//! never appears in the grid. All bucketing truncates local wall-clock times
//! to the calendar day, so a 23:59 stone and a 00:05 remainder share a cell.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{Remainder, RemainderStatus, Stone, StoneStatus};

/// Trimmed stone entry carried by a day cell, enough to render a day detail
/// without re-querying the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoneEntry {
    pub id: String,
    pub custom_id: String,
    pub name: String,
    pub status: StoneStatus,
    pub price_to_sell: f64,
    pub treatment: String,
}

impl From<&Stone> for StoneEntry {
    fn from(stone: &Stone) -> Self {
        Self {
            id: stone.id.clone(),
            custom_id: stone.custom_id.clone(),
            name: stone.name.clone(),
            status: stone.status,
            price_to_sell: stone.price_to_sell,
            treatment: stone.treatment.clone(),
        }
    }
}

/// Trimmed remainder entry carried by a day cell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemainderEntry {
    pub id: String,
    pub stone_name: String,
    pub buyer_name: String,
    pub selling_price: f64,
    pub status: RemainderStatus,
    pub due_date: Option<chrono::NaiveDateTime>,
}

impl From<&Remainder> for RemainderEntry {
    fn from(remainder: &Remainder) -> Self {
        Self {
            id: remainder.id.clone(),
            stone_name: remainder.stone_name.clone(),
            buyer_name: remainder.buyer_name.clone(),
            selling_price: remainder.selling_price,
            status: remainder.status,
            due_date: remainder.due_date(),
        }
    }
}

/// What kind of activity a day cell holds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DayActivity {
    None,
    Stone,
    Remainder,
    Both,
}

/// One cell of the month grid. Padding cells (the partial first week) carry
/// `day_number == 0`, the trailing dates of the previous month, and no records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day_number: u32,
    pub stones: Vec<StoneEntry>,
    pub remainders: Vec<RemainderEntry>,
    pub count: usize,
    pub activity: DayActivity,
}

impl DayCell {
    fn padding(date: NaiveDate) -> Self {
        Self {
            date,
            day_number: 0,
            stones: Vec::new(),
            remainders: Vec::new(),
            count: 0,
            activity: DayActivity::None,
        }
    }

    pub fn is_padding(&self) -> bool {
        self.day_number == 0
    }
}

/// Ordered cells for one calendar month: padding first, then day 1 through the
/// last day. Renders as fixed-width-7 rows via [`MonthGrid::rows`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Number of leading padding cells: the weekday index of day 1 (Sun = 0).
    pub fn padding_len(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_padding()).count()
    }

    /// Week rows of at most 7 cells, in calendar order.
    pub fn rows(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    pub fn cell_for_day(&self, day: u32) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.day_number == day)
    }
}

/// Restricts a grid view to one kind of record, mirroring the dashboard's
/// filter tabs. `All` returns the grid unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityFilter {
    All,
    StonesOnly,
    RemaindersOnly,
}

/// Metrics derived from a month grid. The rate denominator includes padding
/// cells, matching the rendered grid rather than the calendar month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityMetrics {
    pub active_days: usize,
    pub activity_rate_percent: u32,
    pub current_streak: usize,
}

/// Buckets the supplied records into the calendar grid of `reference`'s month.
pub fn build_month_grid(
    stones: &[Stone],
    remainders: &[Remainder],
    reference: NaiveDate,
) -> MonthGrid {
    let year = reference.year();
    let month = reference.month();
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let total_days = days_in_month(year, month);
    let padding = first.weekday().num_days_from_sunday() as usize;

    let mut cells = Vec::with_capacity(padding + total_days as usize);
    for i in 0..padding {
        cells.push(DayCell::padding(first - Duration::days((padding - i) as i64)));
    }

    for day in 1..=total_days {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();

        let day_stones: Vec<StoneEntry> = stones
            .iter()
            .filter(|stone| stone.created_at.date() == date)
            .map(StoneEntry::from)
            .collect();

        // Remainders bucket strictly by selling date; a record without one is
        // not a sale on any day and stays off the grid.
        let day_remainders: Vec<RemainderEntry> = remainders
            .iter()
            .filter(|remainder| remainder.selling_date.map(|at| at.date()) == Some(date))
            .map(RemainderEntry::from)
            .collect();

        let activity = match (!day_stones.is_empty(), !day_remainders.is_empty()) {
            (true, true) => DayActivity::Both,
            (true, false) => DayActivity::Stone,
            (false, true) => DayActivity::Remainder,
            (false, false) => DayActivity::None,
        };

        cells.push(DayCell {
            date,
            day_number: day,
            count: day_stones.len() + day_remainders.len(),
            stones: day_stones,
            remainders: day_remainders,
            activity,
        });
    }

    MonthGrid { year, month, cells }
}

/// Derives activity totals from a grid: days with any record, the share of
/// grid cells that are active, and the trailing run of active cells.
pub fn activity_metrics(grid: &MonthGrid) -> ActivityMetrics {
    let active_days = grid.cells.iter().filter(|cell| cell.count > 0).count();
    let total = grid.cells.len();
    let activity_rate_percent = if total > 0 {
        ((active_days as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };

    // Trailing streak: scan from the last cell backward, stop at the first
    // inactive cell, never wrap. Meaningful when the grid covers the month
    // containing "today".
    let current_streak = grid
        .cells
        .iter()
        .rev()
        .take_while(|cell| cell.count > 0)
        .count();

    ActivityMetrics {
        active_days,
        activity_rate_percent,
        current_streak,
    }
}

/// Projects a grid through a filter, keeping the cell layout intact. Cells
/// holding the selected kind keep only those entries; every other cell becomes
/// an empty `None` cell, so row/streak arithmetic still lines up.
pub fn filter_grid(grid: &MonthGrid, filter: ActivityFilter) -> MonthGrid {
    if filter == ActivityFilter::All {
        return grid.clone();
    }

    let cells = grid
        .cells
        .iter()
        .map(|cell| {
            let (stones, remainders) = match filter {
                ActivityFilter::StonesOnly if !cell.stones.is_empty() => {
                    (cell.stones.clone(), Vec::new())
                }
                ActivityFilter::RemaindersOnly if !cell.remainders.is_empty() => {
                    (Vec::new(), cell.remainders.clone())
                }
                _ => (Vec::new(), Vec::new()),
            };
            let activity = match filter {
                ActivityFilter::StonesOnly if !stones.is_empty() => DayActivity::Stone,
                ActivityFilter::RemaindersOnly if !remainders.is_empty() => {
                    DayActivity::Remainder
                }
                _ => DayActivity::None,
            };
            DayCell {
                date: cell.date,
                day_number: cell.day_number,
                count: stones.len() + remainders.len(),
                stones,
                remainders,
                activity,
            }
        })
        .collect();

    MonthGrid {
        year: grid.year,
        month: grid.month,
        cells,
    }
}

/// Number of days in the given calendar month.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
        .day()
}
