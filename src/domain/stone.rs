//! Domain model for inventory stones.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Identifiable};

/// A single stone in the inventory, as recorded by the external store.
///
/// Cost components are `Option` because documents written by older versions of
/// the schema omit them; sums over absent components coerce to 0.
/// `created_at` is assigned once when the stone is added and is the basis for
/// every "added on day D" bucketing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stone {
    pub id: String,
    pub custom_id: String,
    pub custom_id_num: u32,
    pub name: String,
    pub weight: f64,
    pub weight_in_rough: f64,
    pub stone_cost: Option<f64>,
    pub cutting_cost: Option<f64>,
    pub polish_cost: Option<f64>,
    pub treatment_cost: Option<f64>,
    pub other_cost: Option<f64>,
    pub total_cost: Option<f64>,
    pub price_to_sell: f64,
    pub sold_price: f64,
    pub profit_loss: f64,
    pub status: StoneStatus,
    pub treatment: String,
    pub images: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl Stone {
    /// Sum of the five cost components, absent components counting as 0.
    pub fn cost_breakdown_total(&self) -> f64 {
        self.stone_cost.unwrap_or(0.0)
            + self.cutting_cost.unwrap_or(0.0)
            + self.polish_cost.unwrap_or(0.0)
            + self.treatment_cost.unwrap_or(0.0)
            + self.other_cost.unwrap_or(0.0)
    }

    /// Capital tied up in this stone: `total_cost`, falling back to
    /// `stone_cost`, else 0.
    pub fn investment(&self) -> f64 {
        self.total_cost.or(self.stone_cost).unwrap_or(0.0)
    }

    pub fn is_in_stock(&self) -> bool {
        self.status == StoneStatus::InStock
    }
}

impl Identifiable for Stone {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Stone {
    fn display_label(&self) -> String {
        format!("stone:{} [{}]", self.custom_id, self.status)
    }
}

/// Lifecycle state of a stone. Unrecognized stored values map to `Unknown`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StoneStatus {
    #[serde(rename = "In Stock")]
    InStock,
    Pending,
    Sold,
    Unknown,
}

impl StoneStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "In Stock" => StoneStatus::InStock,
            "Pending" => StoneStatus::Pending,
            "Sold" => StoneStatus::Sold,
            _ => StoneStatus::Unknown,
        }
    }
}

impl fmt::Display for StoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StoneStatus::InStock => "In Stock",
            StoneStatus::Pending => "Pending",
            StoneStatus::Sold => "Sold",
            StoneStatus::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}
