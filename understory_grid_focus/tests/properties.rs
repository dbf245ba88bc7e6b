// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for grid navigation over uniform grids.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use proptest::prelude::*;
use understory_grid_focus::{
    ActiveCellChange, Direction, GridCoord, GridKeyManager, KeyCode, NAVIGATION_KEYS, keys,
};

/// A uniform grid whose cells are numbered in reading order.
fn grid(rows: usize, columns: usize) -> GridKeyManager<Vec<usize>> {
    GridKeyManager::new(
        (0..rows)
            .map(|r| (0..columns).map(|c| r * columns + c).collect())
            .collect(),
    )
}

fn dims() -> impl Strategy<Value = (usize, usize)> {
    (1_usize..8, 1_usize..8)
}

/// Dimensions plus an in-bounds coordinate.
fn dims_and_coord() -> impl Strategy<Value = (usize, usize, GridCoord)> {
    dims().prop_flat_map(|(r, c)| {
        (Just(r), Just(c), (0..r, 0..c)).prop_map(|(r, c, (row, column))| {
            (r, c, GridCoord::new(row, column))
        })
    })
}

fn record(
    grid: &mut GridKeyManager<Vec<usize>>,
) -> Rc<RefCell<Vec<ActiveCellChange>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    grid.subscribe(move |change| sink.borrow_mut().push(*change));
    seen
}

proptest! {
    #[test]
    fn first_and_last_cells((rows, columns) in dims()) {
        let mut g = grid(rows, columns);
        g.set_first_cell_active();
        prop_assert_eq!(g.active_coord(), Some(GridCoord::new(0, 0)));
        g.set_last_cell_active();
        prop_assert_eq!(g.active_coord(), Some(GridCoord::new(rows - 1, columns - 1)));
        prop_assert_eq!(g.active_cell(), Some(&(rows * columns - 1)));
    }

    #[test]
    fn next_column_cycles_through_every_cell((rows, columns) in dims()) {
        let mut g = grid(rows, columns);
        g.set_first_cell_active();
        let mut visited = HashSet::new();
        for _ in 0..rows * columns {
            let cell = *g.active_cell().unwrap();
            prop_assert!(visited.insert(cell), "cell {} visited twice", cell);
            g.set_next_column_active();
        }
        prop_assert_eq!(visited.len(), rows * columns);
        prop_assert_eq!(g.active_coord(), Some(GridCoord::new(0, 0)));
    }

    #[test]
    fn previous_column_inverts_next_column((rows, columns, start) in dims_and_coord()) {
        let mut g = grid(rows, columns);
        g.set_active_cell(start);
        g.set_next_column_active();
        g.set_previous_column_active();
        prop_assert_eq!(g.active_coord(), Some(start));

        g.set_previous_column_active();
        g.set_next_column_active();
        prop_assert_eq!(g.active_coord(), Some(start));
    }

    #[test]
    fn next_row_cycles_back_to_the_start((rows, columns, start) in dims_and_coord()) {
        let mut g = grid(rows, columns);
        g.set_active_cell(start);
        for _ in 0..rows {
            g.set_next_row_active();
            prop_assert_eq!(g.active_column_index(), Some(start.column));
        }
        prop_assert_eq!(g.active_coord(), Some(start));
    }

    #[test]
    fn rtl_mirrors_horizontal_arrows((rows, columns, start) in dims_and_coord()) {
        for (key, mirrored) in [
            (keys::RIGHT_ARROW, keys::LEFT_ARROW),
            (keys::LEFT_ARROW, keys::RIGHT_ARROW),
        ] {
            let mut ltr = grid(rows, columns);
            ltr.set_active_cell(start);
            ltr.on_keydown(key);

            let mut rtl = grid(rows, columns).with_directionality(Direction::Rtl);
            rtl.set_active_cell(start);
            rtl.on_keydown(mirrored);

            prop_assert_eq!(ltr.active_coord(), rtl.active_coord());
        }
    }

    #[test]
    fn non_navigation_keys_never_move(
        (rows, columns, start) in dims_and_coord(),
        code in any::<u32>(),
    ) {
        let key = KeyCode(code);
        prop_assume!(!NAVIGATION_KEYS.contains(&key));
        let mut g = grid(rows, columns).with_home_and_end(true);
        g.set_active_cell(start);
        let seen = record(&mut g);
        prop_assert!(!g.on_keydown(key));
        prop_assert_eq!(g.active_coord(), Some(start));
        prop_assert!(seen.borrow().is_empty());
    }

    #[test]
    fn cells_are_found_by_handle((rows, columns, target) in dims_and_coord()) {
        let mut g = grid(rows, columns);
        let cell = target.row * columns + target.column;
        prop_assert!(g.set_active_cell(&cell));
        prop_assert_eq!(g.active_coord(), Some(target));
        prop_assert_eq!(g.active_cell(), Some(&cell));
    }

    #[test]
    fn unknown_handles_change_nothing((rows, columns, start) in dims_and_coord()) {
        let mut g = grid(rows, columns);
        g.set_active_cell(start);
        let seen = record(&mut g);
        prop_assert!(!g.set_active_cell(&(rows * columns)));
        prop_assert_eq!(g.active_coord(), Some(start));
        prop_assert!(seen.borrow().is_empty());
    }

    #[test]
    fn every_move_is_reported_once(
        (rows, columns) in dims(),
        presses in prop::collection::vec(prop::sample::select(NAVIGATION_KEYS.to_vec()), 0..32),
    ) {
        let mut g = grid(rows, columns).with_home_and_end(true);
        let seen = record(&mut g);
        let mut expected = Vec::new();
        for key in presses {
            let before = g.active_coord();
            prop_assert!(g.on_keydown(key));
            let after = g.active_coord();
            prop_assert!(after.is_some());
            if after != before {
                expected.push(after.unwrap());
            }
        }
        let reported: Vec<GridCoord> = seen.borrow().iter().map(|c| c.coord).collect();
        prop_assert_eq!(reported, expected);
    }
}

#[test]
fn scenario_from_three_by_two() {
    let mut g = GridKeyManager::new(vec![
        vec!['A', 'B'],
        vec!['C', 'D'],
        vec!['E', 'F'],
    ]);
    g.set_active_cell(GridCoord::new(0, 0));

    g.set_next_column_active();
    assert_eq!(g.active_cell(), Some(&'B'));
    g.set_next_column_active();
    assert_eq!(g.active_cell(), Some(&'C'));
    g.set_previous_row_active();
    assert_eq!(g.active_cell(), Some(&'A'));

    let mut path = Vec::new();
    for _ in 0..3 {
        g.set_next_row_active();
        path.push(g.active_coord().unwrap());
    }
    assert_eq!(
        path,
        [GridCoord::new(1, 0), GridCoord::new(2, 0), GridCoord::new(0, 0)]
    );
}

#[test]
fn zero_rows_emit_nothing() {
    let mut g = grid(0, 0);
    let seen = record(&mut g);
    for key in NAVIGATION_KEYS {
        g.on_keydown(key);
    }
    g.set_first_cell_active();
    g.set_last_cell_active();
    g.set_next_row_active();
    g.set_previous_row_active();
    g.set_next_column_active();
    g.set_previous_column_active();
    assert_eq!(g.active_cell(), None);
    assert!(seen.borrow().is_empty());
}
