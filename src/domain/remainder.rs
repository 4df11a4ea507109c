//! Domain model for remainders: deferred-payment sales awaiting collection.
//!
//! Archive documents share this shape; the storage layer forces their status
//! to [`RemainderStatus::Completed`] on load regardless of the stored value.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Identifiable};

/// A sale whose payment is collected later.
///
/// Date fields are local wall-clock times as recorded on the operator's
/// device. `selling_date` is the basis for "sold on day D" bucketing and is
/// distinct from both `created_at` (record creation) and the payment due date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Remainder {
    pub id: String,
    pub stone_name: String,
    pub buyer_name: String,
    pub buyer_type: Option<String>,
    pub stone_weight: Option<f64>,
    pub selling_price: f64,
    pub my_profit: Option<f64>,
    pub total_cost: Option<f64>,
    pub stone_cost: Option<f64>,
    pub status: RemainderStatus,
    pub selling_date: Option<NaiveDateTime>,
    pub payment_receiving_date: Option<NaiveDateTime>,
    pub payment_date: Option<NaiveDateTime>,
    pub duration_in_days: Option<i64>,
    pub receipt_image: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl Remainder {
    /// The payment due date: `payment_receiving_date`, falling back to the
    /// older `payment_date` field.
    pub fn due_date(&self) -> Option<NaiveDateTime> {
        self.payment_receiving_date.or(self.payment_date)
    }

    /// Whole days until the due date, rounded up, relative to an explicit
    /// `now`. Negative when overdue. `None` when no due date is recorded.
    /// Derived and time-varying; recomputed on every read, never stored.
    pub fn days_left(&self, now: NaiveDateTime) -> Option<i64> {
        let due = self.due_date()?;
        let seconds = (due - now).num_seconds();
        Some((seconds as f64 / 86_400.0).ceil() as i64)
    }

    /// Profit attributed to this sale: `my_profit` when recorded, else
    /// `selling_price - total_cost` when a total cost is present, else 0.
    pub fn profit(&self) -> f64 {
        match (self.my_profit, self.total_cost) {
            (Some(profit), _) => profit,
            (None, Some(cost)) => self.selling_price - cost,
            (None, None) => 0.0,
        }
    }

    /// Agreed payment term in days: the stored value, else the span between
    /// `selling_date` and `payment_receiving_date` when both are present.
    pub fn duration_days(&self) -> Option<i64> {
        if self.duration_in_days.is_some() {
            return self.duration_in_days;
        }
        let (start, end) = (self.selling_date?, self.payment_receiving_date?);
        let seconds = (end - start).num_seconds();
        Some((seconds as f64 / 86_400.0).ceil() as i64)
    }

    pub fn is_pending(&self) -> bool {
        self.status == RemainderStatus::Pending
    }

    /// Whether the due date falls on the calendar day of `now`.
    pub fn is_due_on(&self, day: chrono::NaiveDate) -> bool {
        self.due_date().map(|d| d.date()) == Some(day)
    }
}

impl Identifiable for Remainder {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Remainder {
    fn display_label(&self) -> String {
        format!("remainder:{} -> {} [{}]", self.stone_name, self.buyer_name, self.status)
    }
}

/// Payment lifecycle of a remainder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RemainderStatus {
    Pending,
    Completed,
}

impl RemainderStatus {
    /// Unrecognized stored values count as pending, matching how the store
    /// treats a missing status.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "completed" => RemainderStatus::Completed,
            _ => RemainderStatus::Pending,
        }
    }
}

impl fmt::Display for RemainderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RemainderStatus::Pending => "pending",
            RemainderStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// Midnight-anchored day span: calendar days from `start`'s day to `end`'s day.
pub(crate) fn whole_days_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end.date() - start.date()).num_days()
}
