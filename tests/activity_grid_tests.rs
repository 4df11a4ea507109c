mod common;

use common::{at, day, remainder, stone};
use gem_core::analytics::{
    activity_metrics, build_month_grid, filter_grid, ActivityFilter, DayActivity,
};

#[test]
fn grid_has_padding_plus_days_cells() {
    // March 2025 starts on a Saturday: 6 padding cells plus 31 days.
    let grid = build_month_grid(&[], &[], day(2025, 3, 10));
    assert_eq!(grid.padding_len(), 6);
    assert_eq!(grid.cells.len(), 37);

    // January 2025 starts on a Wednesday.
    let grid = build_month_grid(&[], &[], day(2025, 1, 1));
    assert_eq!(grid.padding_len(), 3);
    assert_eq!(grid.cells.len(), 34);
}

#[test]
fn non_leap_february_has_28_day_cells() {
    let grid = build_month_grid(&[], &[], day(2025, 2, 14));
    assert_eq!(grid.cells.len() - grid.padding_len(), 28);
}

#[test]
fn sunday_start_month_has_no_padding() {
    let grid = build_month_grid(&[], &[], day(2025, 6, 1));
    assert_eq!(grid.padding_len(), 0);
    assert_eq!(grid.cells[0].day_number, 1);
}

#[test]
fn padding_cells_carry_previous_month_dates_and_no_records() {
    let grid = build_month_grid(&[], &[], day(2025, 3, 1));
    let padding: Vec<_> = grid.cells.iter().take_while(|c| c.is_padding()).collect();
    assert_eq!(padding.len(), 6);
    assert_eq!(padding[0].date, day(2025, 2, 23));
    assert_eq!(padding[5].date, day(2025, 2, 28));
    assert!(padding.iter().all(|c| c.count == 0 && c.activity == DayActivity::None));
}

#[test]
fn stone_and_remainder_on_the_same_local_day_make_both() {
    // Late-evening stone and early-morning sale land on one calendar day.
    let stones = vec![stone("s1", 1, at(2025, 3, 15, 23, 59))];
    let mut sold = remainder("r1", at(2025, 3, 1, 9, 0));
    sold.selling_date = Some(at(2025, 3, 15, 0, 5));
    let grid = build_month_grid(&stones, &[sold], day(2025, 3, 1));

    let cell = grid.cell_for_day(15).unwrap();
    assert_eq!(cell.activity, DayActivity::Both);
    assert_eq!(cell.count, 2);
    assert_eq!(cell.stones[0].id, "s1");
    assert_eq!(cell.remainders[0].id, "r1");
}

#[test]
fn remainder_without_selling_date_never_appears() {
    // created_at is in-month but is not a fallback for the sale day.
    let undated = remainder("r1", at(2025, 3, 10, 10, 0));
    let grid = build_month_grid(&[], &[undated], day(2025, 3, 1));
    assert!(grid.cells.iter().all(|cell| cell.remainders.is_empty()));
    assert_eq!(activity_metrics(&grid).active_days, 0);
}

#[test]
fn trailing_streak_counts_back_from_the_last_cell() {
    // June 2025: 30 cells, no padding. Stones on the last three days.
    let stones = vec![
        stone("a", 1, at(2025, 6, 28, 10, 0)),
        stone("b", 2, at(2025, 6, 29, 10, 0)),
        stone("c", 3, at(2025, 6, 30, 10, 0)),
        stone("d", 4, at(2025, 6, 10, 10, 0)),
    ];
    let grid = build_month_grid(&stones, &[], day(2025, 6, 1));
    let metrics = activity_metrics(&grid);
    assert_eq!(metrics.current_streak, 3);
    assert_eq!(metrics.active_days, 4);
    // 4 active cells out of 30, rounded.
    assert_eq!(metrics.activity_rate_percent, 13);
}

#[test]
fn streak_breaks_at_the_first_gap() {
    let stones = vec![
        stone("a", 1, at(2025, 6, 30, 10, 0)),
        stone("b", 2, at(2025, 6, 28, 10, 0)),
    ];
    let grid = build_month_grid(&stones, &[], day(2025, 6, 1));
    assert_eq!(activity_metrics(&grid).current_streak, 1);
}

#[test]
fn activity_rate_includes_padding_in_the_denominator() {
    // March 2025: 37 cells. One active day.
    let stones = vec![stone("a", 1, at(2025, 3, 15, 10, 0))];
    let grid = build_month_grid(&stones, &[], day(2025, 3, 1));
    let metrics = activity_metrics(&grid);
    assert_eq!(metrics.active_days, 1);
    assert_eq!(metrics.activity_rate_percent, 3); // round(1/37 * 100)
}

#[test]
fn records_from_other_months_stay_out() {
    let stones = vec![stone("a", 1, at(2025, 2, 28, 23, 59))];
    let mut sold = remainder("r1", at(2025, 2, 1, 9, 0));
    sold.selling_date = Some(at(2025, 4, 1, 0, 0));
    let grid = build_month_grid(&stones, &[sold], day(2025, 3, 1));
    assert_eq!(activity_metrics(&grid).active_days, 0);
}

#[test]
fn rebuilding_the_grid_is_idempotent() {
    let stones = vec![stone("a", 1, at(2025, 3, 15, 23, 59))];
    let mut sold = remainder("r1", at(2025, 3, 1, 9, 0));
    sold.selling_date = Some(at(2025, 3, 15, 0, 5));
    let remainders = vec![sold];

    let first = build_month_grid(&stones, &remainders, day(2025, 3, 1));
    let second = build_month_grid(&stones, &remainders, day(2025, 3, 1));
    assert_eq!(first, second);
}

#[test]
fn filtered_views_keep_the_layout_and_drop_the_other_kind() {
    let stones = vec![stone("s1", 1, at(2025, 3, 15, 10, 0))];
    let mut sold = remainder("r1", at(2025, 3, 1, 9, 0));
    sold.selling_date = Some(at(2025, 3, 15, 12, 0));
    let grid = build_month_grid(&stones, &[sold], day(2025, 3, 1));

    let stones_only = filter_grid(&grid, ActivityFilter::StonesOnly);
    assert_eq!(stones_only.cells.len(), grid.cells.len());
    let cell = stones_only.cell_for_day(15).unwrap();
    assert_eq!(cell.activity, DayActivity::Stone);
    assert_eq!(cell.count, 1);
    assert!(cell.remainders.is_empty());

    let remainders_only = filter_grid(&grid, ActivityFilter::RemaindersOnly);
    let cell = remainders_only.cell_for_day(15).unwrap();
    assert_eq!(cell.activity, DayActivity::Remainder);
    assert!(cell.stones.is_empty());

    assert_eq!(filter_grid(&grid, ActivityFilter::All), grid);
}

#[test]
fn rows_chunk_into_weeks() {
    let grid = build_month_grid(&[], &[], day(2025, 3, 1));
    let rows: Vec<_> = grid.rows().collect();
    assert_eq!(rows.len(), 6); // 37 cells -> five full weeks plus a partial row
    assert!(rows[..5].iter().all(|row| row.len() == 7));
    assert_eq!(rows[5].len(), 2);
}
