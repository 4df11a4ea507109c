#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

use gem_core::domain::{Remainder, RemainderStatus, Stone, StoneStatus};

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    day(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

pub fn stone(id: &str, num: u32, created_at: NaiveDateTime) -> Stone {
    Stone {
        id: id.into(),
        custom_id: format!("{num:03}"),
        custom_id_num: num,
        name: format!("Stone {num}"),
        weight: 1.5,
        weight_in_rough: 3.0,
        stone_cost: Some(10_000.0),
        cutting_cost: Some(1_000.0),
        polish_cost: None,
        treatment_cost: None,
        other_cost: None,
        total_cost: Some(11_000.0),
        price_to_sell: 30_000.0,
        sold_price: 0.0,
        profit_loss: 0.0,
        status: StoneStatus::InStock,
        treatment: "Heated".into(),
        images: Vec::new(),
        created_at,
        updated_at: None,
    }
}

pub fn remainder(id: &str, created_at: NaiveDateTime) -> Remainder {
    Remainder {
        id: id.into(),
        stone_name: format!("Sold {id}"),
        buyer_name: "Buyer".into(),
        buyer_type: None,
        stone_weight: None,
        selling_price: 50_000.0,
        my_profit: Some(8_000.0),
        total_cost: Some(42_000.0),
        stone_cost: None,
        status: RemainderStatus::Pending,
        selling_date: None,
        payment_receiving_date: None,
        payment_date: None,
        duration_in_days: None,
        receipt_image: None,
        created_at,
        updated_at: None,
    }
}
