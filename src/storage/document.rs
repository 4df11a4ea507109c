//! Lenient decoding of flat key-value documents into domain records.
//!
//! Upstream documents were written by several schema generations, so fields
//! may be absent, numbers may arrive as strings, and timestamps come in three
//! shapes. Decoding is total: a malformed money field becomes `None` (callers
//! coerce to 0), a malformed optional date is dropped, and only a document
//! with no usable `createdAt` is rejected outright.

use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

use crate::domain::{Note, Remainder, RemainderStatus, Stone, StoneStatus};

/// Reads a money field: a JSON number, or a string that parses as one.
/// Absent and non-numeric values both come back as `None` so each caller can
/// apply its own fallback rule.
pub fn money(doc: &Value, key: &str) -> Option<f64> {
    match doc.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Reads an integer count field, accepting numeric strings.
pub fn count(doc: &Value, key: &str) -> Option<i64> {
    match doc.get(key)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

pub fn text(doc: &Value, key: &str) -> Option<String> {
    doc.get(key)?.as_str().map(str::to_owned)
}

pub fn text_or(doc: &Value, key: &str, default: &str) -> String {
    text(doc, key).unwrap_or_else(|| default.to_owned())
}

pub fn flag(doc: &Value, key: &str) -> bool {
    doc.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn string_list(doc: &Value, key: &str) -> Vec<String> {
    doc.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

/// Reads a timestamp field in any of the shapes the store produces:
/// an RFC 3339 string (offset-aware or bare wall-clock), an epoch number in
/// seconds or milliseconds, or a `{seconds, nanoseconds}` map.
///
/// Offset-aware values keep their recorded wall-clock time, which is what day
/// bucketing truncates.
pub fn timestamp(doc: &Value, key: &str) -> Option<NaiveDateTime> {
    match doc.get(key)? {
        Value::String(s) => {
            if let Ok(parsed) = DateTime::parse_from_rfc3339(s) {
                return Some(parsed.naive_local());
            }
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
                .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
                .ok()
        }
        Value::Number(n) => {
            let raw = n.as_i64()?;
            let seconds = if raw.abs() >= 100_000_000_000 {
                raw / 1000
            } else {
                raw
            };
            DateTime::from_timestamp(seconds, 0).map(|at| at.naive_utc())
        }
        Value::Object(map) => {
            let seconds = map.get("seconds").and_then(Value::as_i64)?;
            let nanos = map
                .get("nanoseconds")
                .and_then(Value::as_i64)
                .unwrap_or(0)
                .clamp(0, 999_999_999) as u32;
            DateTime::from_timestamp(seconds, nanos).map(|at| at.naive_utc())
        }
        _ => None,
    }
}

/// Decodes a stone document. Returns `None` when `createdAt` is missing or
/// unreadable; every other field degrades to a default.
pub fn decode_stone(id: &str, doc: &Value) -> Option<Stone> {
    let created_at = timestamp(doc, "createdAt")?;
    Some(Stone {
        id: id.to_owned(),
        custom_id: text_or(doc, "customId", ""),
        custom_id_num: count(doc, "customIdNum").unwrap_or(0).max(0) as u32,
        name: text_or(doc, "name", "Unnamed Stone"),
        weight: money(doc, "weight").unwrap_or(0.0),
        weight_in_rough: money(doc, "weightInRough").unwrap_or(0.0),
        stone_cost: money(doc, "stoneCost"),
        cutting_cost: money(doc, "cuttingCost"),
        polish_cost: money(doc, "polishCost"),
        treatment_cost: money(doc, "treatmentCost"),
        other_cost: money(doc, "otherCost"),
        total_cost: money(doc, "totalCost"),
        price_to_sell: money(doc, "priceToSell").unwrap_or(0.0),
        sold_price: money(doc, "soldPrice").unwrap_or(0.0),
        profit_loss: money(doc, "profitLoss").unwrap_or(0.0),
        status: StoneStatus::parse(&text_or(doc, "status", "")),
        treatment: text_or(doc, "treatment", "None"),
        images: string_list(doc, "images"),
        created_at,
        updated_at: timestamp(doc, "updatedAt"),
    })
}

/// Decodes a remainder or archive document. Returns `None` when `createdAt`
/// is missing or unreadable.
pub fn decode_remainder(id: &str, doc: &Value) -> Option<Remainder> {
    let created_at = timestamp(doc, "createdAt")?;
    Some(Remainder {
        id: id.to_owned(),
        stone_name: text_or(doc, "stoneName", "Unnamed"),
        buyer_name: text_or(doc, "buyerName", "Unknown"),
        buyer_type: text(doc, "buyerType"),
        stone_weight: money(doc, "stoneWeight"),
        selling_price: money(doc, "sellingPrice").unwrap_or(0.0),
        my_profit: money(doc, "myProfit"),
        total_cost: money(doc, "totalCost"),
        stone_cost: money(doc, "stoneCost"),
        status: RemainderStatus::parse(&text_or(doc, "status", "pending")),
        selling_date: timestamp(doc, "sellingDate"),
        payment_receiving_date: timestamp(doc, "paymentReceivingDate"),
        payment_date: timestamp(doc, "paymentDate"),
        duration_in_days: count(doc, "durationInDays"),
        receipt_image: text(doc, "receiptImage"),
        created_at,
        updated_at: timestamp(doc, "updatedAt"),
    })
}

/// Decodes a note document. Notes need both their attached `date` and
/// `createdAt` to be usable.
pub fn decode_note(id: &str, doc: &Value) -> Option<Note> {
    let date = timestamp(doc, "date")?;
    let created_at = timestamp(doc, "createdAt")?;
    Some(Note {
        id: id.to_owned(),
        title: text_or(doc, "title", ""),
        content: text_or(doc, "content", ""),
        color: text(doc, "color"),
        date,
        is_completed: flag(doc, "isCompleted"),
        created_at,
    })
}
