//! Built-in demonstration scenarios

use sumgrid::prelude::*;

/// A named scenario that builds a sheet
pub struct Scenario {
    pub name: &'static str,
    pub build: fn() -> Sheet,
}

fn id(row: i64, col: i64) -> CellId {
    CellId::new(row, col)
}

/// All demonstration scenarios, in presentation order
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "constant",
            build: || {
                let mut sheet = Sheet::new();
                sheet.set_constant(id(0, 0), 42.0);
                sheet
            },
        },
        Scenario {
            name: "simple sum",
            build: || {
                let mut sheet = Sheet::new();
                sheet.set_constant(id(0, 0), 5.0);
                sheet.set_constant(id(0, 1), 10.0);
                sheet.set_sum_cell(id(0, 2), vec![id(0, 0), id(0, 1)]);
                sheet
            },
        },
        Scenario {
            name: "chained sums",
            build: || {
                let mut sheet = Sheet::new();
                sheet.set_constant(id(0, 0), 5.0);
                sheet.set_sum_cell(id(0, 1), vec![id(0, 0)]);
                sheet.set_sum_cell(id(0, 2), vec![id(0, 1)]);
                sheet
            },
        },
        Scenario {
            name: "mutual cycle",
            build: || {
                let mut sheet = Sheet::new();
                sheet.set_sum_cell(id(0, 0), vec![id(0, 1)]);
                sheet.set_sum_cell(id(0, 1), vec![id(0, 0)]);
                sheet
            },
        },
        Scenario {
            name: "late definition",
            build: || {
                let mut sheet = Sheet::new();
                sheet.set_sum_cell(id(0, 1), vec![id(0, 0)]);
                sheet.set_constant(id(0, 0), 5.0);
                sheet
            },
        },
        Scenario {
            name: "empty sum",
            build: || {
                let mut sheet = Sheet::new();
                sheet.set_sum_cell(id(0, 0), vec![]);
                sheet
            },
        },
        Scenario {
            name: "self reference",
            build: || {
                let mut sheet = Sheet::new();
                sheet.set_sum_cell(id(0, 0), vec![id(0, 0)]);
                sheet
            },
        },
        Scenario {
            name: "diamond",
            build: || {
                let mut sheet = Sheet::new();
                sheet.set_constant(id(0, 0), 2.0);
                sheet.set_sum_cell(id(0, 1), vec![id(0, 0)]);
                sheet.set_sum_cell(id(0, 2), vec![id(0, 0)]);
                sheet.set_sum_cell(id(0, 3), vec![id(0, 1), id(0, 2)]);
                sheet
            },
        },
    ]
}
