//! Queries over the stones collection: filtering, counting, and the
//! sequential custom-ID sequence for newly added stones.

use serde::{Deserialize, Serialize};

use crate::domain::{Stone, StoneStatus};

/// Per-status stone tallies for the inventory header.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub in_stock: usize,
    pub pending: usize,
    pub sold: usize,
}

pub struct InventoryService;

impl InventoryService {
    /// Case-insensitive search over name, custom id, and treatment, with an
    /// optional status filter. An empty query matches everything.
    pub fn filter<'a>(
        stones: &'a [Stone],
        status: Option<StoneStatus>,
        query: &str,
    ) -> Vec<&'a Stone> {
        let needle = query.trim().to_lowercase();
        stones
            .iter()
            .filter(|stone| status.map_or(true, |wanted| stone.status == wanted))
            .filter(|stone| {
                needle.is_empty()
                    || stone.name.to_lowercase().contains(&needle)
                    || stone.custom_id.to_lowercase().contains(&needle)
                    || stone.treatment.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn status_counts(stones: &[Stone]) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for stone in stones {
            match stone.status {
                StoneStatus::InStock => counts.in_stock += 1,
                StoneStatus::Pending => counts.pending += 1,
                StoneStatus::Sold => counts.sold += 1,
                StoneStatus::Unknown => {}
            }
        }
        counts
    }

    /// Sum of recorded total costs across the inventory.
    pub fn total_cost_balance(stones: &[Stone]) -> f64 {
        stones.iter().map(|s| s.total_cost.unwrap_or(0.0)).sum()
    }

    /// Next custom id in the sequence: highest `custom_id_num` plus one,
    /// rendered zero-padded to three digits. An empty inventory starts at
    /// "001".
    pub fn next_custom_id(stones: &[Stone]) -> (String, u32) {
        let next = stones.iter().map(|s| s.custom_id_num).max().unwrap_or(0) + 1;
        (format!("{:03}", next), next)
    }
}
