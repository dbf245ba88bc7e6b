// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless chip grid driven by `GridKeyManager`.
//!
//! Each chip row exposes two cells: the chip body and its remove button. The host keeps
//! the "DOM" (here, a list of chips) and forwards focus whenever the manager reports a
//! change. Run with `RUST_LOG=trace cargo run -p understory_demos --example chip_grid` to see the manager's own log records.

use std::cell::RefCell;
use std::rc::Rc;

use understory_grid_focus::{Direction, GridKeyManager, KeyCode, RowsRefresh, keys};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Part {
    Body,
    Remove,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct ChipCell {
    chip: u32,
    part: Part,
}

fn chip_row(chip: u32) -> [ChipCell; 2] {
    [
        ChipCell {
            chip,
            part: Part::Body,
        },
        ChipCell {
            chip,
            part: Part::Remove,
        },
    ]
}

struct ChipGrid {
    labels: Vec<(u32, &'static str)>,
    keys: GridKeyManager<[ChipCell; 2]>,
    // Mirror of the rows so the listener can resolve coordinates without borrowing
    // the manager.
    layout: Rc<RefCell<Vec<[ChipCell; 2]>>>,
    focused: Rc<RefCell<Option<ChipCell>>>,
}

impl ChipGrid {
    fn new(labels: Vec<(u32, &'static str)>, direction: Direction) -> Self {
        let rows: Vec<[ChipCell; 2]> = labels.iter().map(|&(id, _)| chip_row(id)).collect();
        let mut keys = GridKeyManager::new(rows)
            .with_directionality(direction)
            .with_home_and_end(true);

        let focused = Rc::new(RefCell::new(None));
        let layout = Rc::new(RefCell::new(keys.rows().to_vec()));
        {
            let focused = Rc::clone(&focused);
            let layout = Rc::clone(&layout);
            keys.subscribe(move |change| {
                if !change.move_focus {
                    return;
                }
                let cell = layout.borrow()[change.row()][change.column()];
                println!("  focus -> chip {} {:?}", cell.chip, cell.part);
                *focused.borrow_mut() = Some(cell);
            });
        }

        Self {
            labels,
            keys,
            layout,
            focused,
        }
    }

    fn press(&mut self, name: &str, key: KeyCode) {
        let handled = self.keys.on_keydown(key);
        println!("{name:<6} handled={handled}");
    }

    fn remove_focused_chip(&mut self) {
        let Some(cell) = *self.focused.borrow() else {
            return;
        };
        println!("remove chip {}", cell.chip);
        self.labels.retain(|&(id, _)| id != cell.chip);
        let refresh = self
            .keys
            .update_rows(|rows| rows.retain(|r| r[0].chip != cell.chip));
        *self.layout.borrow_mut() = self.keys.rows().to_vec();
        match refresh {
            RowsRefresh::Cleared => {
                println!("  grid is empty");
                *self.focused.borrow_mut() = None;
            }
            other => {
                // Refresh does not notify, so the host moves focus itself.
                if other.refocus().is_some() {
                    let cell = self.keys.active_cell().copied();
                    println!("  refocus -> {cell:?}");
                    *self.focused.borrow_mut() = cell;
                }
            }
        }
    }
}

fn main() {
    env_logger::init();

    let mut grid = ChipGrid::new(vec![(1, "apple"), (2, "pear"), (3, "plum")], Direction::Ltr);
    for (_, label) in &grid.labels {
        println!("chip: {label}");
    }

    grid.keys.set_first_cell_active();
    grid.press("right", keys::RIGHT_ARROW);
    grid.press("right", keys::RIGHT_ARROW);
    grid.press("down", keys::DOWN_ARROW);
    grid.press("tab", KeyCode(9));
    grid.press("end", keys::END);

    grid.remove_focused_chip();
    grid.press("home", keys::HOME);
    grid.keys.set_directionality(Direction::Rtl);
    grid.press("left", keys::LEFT_ARROW);

    println!("remaining chips: {:?}", grid.labels);
}
