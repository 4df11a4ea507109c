//! The remainders board: pending/overdue bucketing and due-date queries.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::remainder::whole_days_between;
use crate::domain::Remainder;

/// Where a pending remainder stands relative to its due date.
///
/// Day counts compare calendar days (both instants truncated to midnight), so
/// a payment due later today is `DueToday`, not `Upcoming`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DueStatus {
    Overdue { days: i64 },
    DueToday,
    Upcoming { days: i64 },
    NoDueDate,
}

/// Header totals for the remainders screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RemainderBoard {
    pub total: usize,
    pub pending_count: usize,
    pub overdue_count: usize,
    pub pending_value: f64,
    /// Earliest strictly-future due date among pending remainders.
    pub next_payment_due: Option<NaiveDateTime>,
}

pub struct RemainderService;

impl RemainderService {
    /// Reduces the active remainders into board totals.
    ///
    /// Overdue here compares raw timestamps, matching the board's behavior
    /// rather than the per-card day-granular status. A pending remainder with
    /// no due date at all counts as pending, not overdue.
    pub fn board(remainders: &[Remainder], now: NaiveDateTime) -> RemainderBoard {
        let mut board = RemainderBoard::default();

        for remainder in remainders {
            board.total += 1;
            if !remainder.is_pending() {
                continue;
            }
            board.pending_value += remainder.selling_price;

            match remainder.due_date() {
                Some(due) => {
                    if due < now {
                        board.overdue_count += 1;
                    } else {
                        board.pending_count += 1;
                    }
                    if due > now
                        && board.next_payment_due.map_or(true, |current| due < current)
                    {
                        board.next_payment_due = Some(due);
                    }
                }
                None => board.pending_count += 1,
            }
        }

        board
    }

    /// Day-granular due status for a single card.
    pub fn due_status(remainder: &Remainder, now: NaiveDateTime) -> DueStatus {
        let Some(due) = remainder.due_date() else {
            return DueStatus::NoDueDate;
        };
        let days = whole_days_between(now, due);
        if days < 0 {
            DueStatus::Overdue { days: -days }
        } else if days == 0 {
            DueStatus::DueToday
        } else {
            DueStatus::Upcoming { days }
        }
    }

    /// Pending remainders whose payment is due on the given calendar day.
    /// The surrounding app drives its payment reminders off this set.
    pub fn due_on<'a>(remainders: &'a [Remainder], day: NaiveDate) -> Vec<&'a Remainder> {
        remainders
            .iter()
            .filter(|remainder| remainder.is_pending() && remainder.is_due_on(day))
            .collect()
    }
}
