//! Aggregation engines behind the dashboard visualizations: the monthly
//! activity grid and the month-over-month period comparison.
//!
//! Both are pure, synchronous reducers over already-fetched snapshots. They
//! never touch a clock or a store; callers pass the reference date in and get
//! a fresh value back, so concurrent invocations are independent.

pub mod activity;
pub mod period;

pub use activity::*;
pub use period::*;
