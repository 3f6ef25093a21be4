use super::*;

#[test]
fn scales_initial_columns_by_width_ratio() {
    assert_eq!(column_count(900.0, 300.0, 2), 6);
    assert_eq!(column_count(300.0, 300.0, 2), 2);
    assert_eq!(column_count(600.0, 300.0, 3), 6);
}

#[test]
fn rounds_to_nearest() {
    // 1.25 * 2 = 2.5 rounds up, 1.2 * 2 = 2.4 rounds down.
    assert_eq!(column_count(375.0, 300.0, 2), 3);
    assert_eq!(column_count(360.0, 300.0, 2), 2);
}

#[test]
fn never_below_one_column() {
    assert_eq!(column_count(0.0, 300.0, 2), 1);
    assert_eq!(column_count(50.0, 300.0, 2), 1);
    assert_eq!(column_count(-10.0, 300.0, 2), 1);
    assert_eq!(column_count(900.0, 0.0, 2), 1);
    assert_eq!(column_count(0.0, 0.0, 2), 1);
    assert_eq!(column_count(f64::NAN, 300.0, 2), 1);
}

#[test]
fn percent_units() {
    assert_eq!(column_width_percent(4), 25.0);
    assert_eq!(column_width_percent(0), 100.0);
    assert_eq!(column_left_percent(4, 0), 0.0);
    assert_eq!(column_left_percent(4, 3), 75.0);
}
