use super::*;

#[test]
fn four_equal_items_in_two_columns() {
    let p = pack(&[0, 1, 2, 3], 2, &[Some(100.0); 4]);
    let got: Vec<(usize, usize, f64, f64)> = p
        .placements
        .iter()
        .map(|pl| (pl.row, pl.column, pl.left_percent, pl.top))
        .collect();
    assert_eq!(
        got,
        vec![
            (0, 0, 0.0, 0.0),
            (0, 1, 50.0, 0.0),
            (1, 0, 0.0, 100.0),
            (1, 1, 50.0, 100.0),
        ]
    );
    assert_eq!(p.container_height, 200.0);
    assert_eq!(p.column_count, 2);
}

#[test]
fn stacks_on_the_item_above_in_the_same_column() {
    let heights = [
        Some(50.0),
        Some(80.0),
        Some(30.0),
        Some(10.0),
        Some(5.0),
        Some(7.0),
    ];
    let p = pack(&[0, 1, 2, 3, 4, 5], 3, &heights);
    assert_eq!(p.placement_for(3).unwrap().top, 50.0);
    assert_eq!(p.placement_for(4).unwrap().top, 80.0);
    assert_eq!(p.placement_for(5).unwrap().top, 30.0);
    assert_eq!(p.container_height, 85.0);
}

#[test]
fn follows_the_given_order() {
    let heights = [Some(10.0), Some(20.0), Some(30.0)];
    let p = pack(&[2, 0, 1], 2, &heights);
    let items: Vec<usize> = p.placements.iter().map(|pl| pl.item).collect();
    assert_eq!(items, vec![2, 0, 1]);
    // item 1 lands under item 2 in column 0.
    let under = p.placement_for(1).unwrap();
    assert_eq!((under.row, under.column, under.top), (1, 0, 30.0));
    assert_eq!(p.container_height, 50.0);
}

#[test]
fn partial_last_row() {
    let p = pack(&[0, 1, 2, 3, 4], 2, &[Some(10.0); 5]);
    let last = p.placements.last().unwrap();
    assert_eq!((last.row, last.column, last.top), (2, 0, 20.0));
    assert_eq!(p.placements.iter().filter(|pl| pl.row == 2).count(), 1);
    assert_eq!(p.container_height, 30.0);
}

#[test]
fn unmeasured_items_keep_their_slot_with_zero_height() {
    let p = pack(&[0, 1, 2, 3], 2, &[Some(40.0), None, Some(25.0), Some(60.0)]);
    assert_eq!(p.placement_for(1).unwrap().height, None);
    assert_eq!(p.placement_for(3).unwrap().top, 0.0);
    assert_eq!(p.placement_for(2).unwrap().top, 40.0);
    assert_eq!(p.container_height, 65.0);
}

#[test]
fn no_overlap_within_a_column() {
    let heights: Vec<Option<f64>> = (0..17)
        .map(|i| Some(10.0 + (i * 7 % 13) as f64))
        .collect();
    let order: Vec<usize> = (0..17).rev().collect();
    let p = pack(&order, 4, &heights);
    for col in 0..4 {
        let mut in_col: Vec<&Placement> =
            p.placements.iter().filter(|pl| pl.column == col).collect();
        in_col.sort_by_key(|pl| pl.row);
        for pair in in_col.windows(2) {
            assert_eq!(pair[1].top, pair[0].bottom());
        }
    }
    let max_bottom = p.placements.iter().map(Placement::bottom).fold(0.0, f64::max);
    assert_eq!(p.container_height, max_bottom);
}

#[test]
fn empty_and_degenerate_inputs() {
    let p = pack(&[], 3, &[]);
    assert!(p.placements.is_empty());
    assert_eq!(p.container_height, 0.0);

    let p = pack(&[0, 1], 0, &[Some(5.0), Some(6.0)]);
    assert_eq!(p.column_count, 1);
    assert_eq!(p.placement_for(1).unwrap().top, 5.0);
    assert_eq!(p.container_height, 11.0);
}
