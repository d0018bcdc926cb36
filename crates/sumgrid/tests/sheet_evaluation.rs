//! End-to-end tests for sheet mutation and evaluation
//!
//! Sums are live: evaluation always recomputes from the stored formulas, so
//! every scenario below asserts values that reflect the latest mutations.

use pretty_assertions::assert_eq;
use std::collections::HashMap;
use sumgrid::prelude::*;

fn id(row: i64, col: i64) -> CellId {
    CellId::new(row, col)
}

/// Test that a constant evaluates to itself
#[test]
fn test_constant_round_trip() {
    let mut sheet = Sheet::new();
    for (i, value) in [0.0, -3.25, 1e300, f64::INFINITY].into_iter().enumerate() {
        sheet.set_constant(id(i as i64, 0), value);
        assert_eq!(sheet.evaluate(id(i as i64, 0)), CellValue::Number(value));
    }
}

/// Test that NaN passes through unchanged
#[test]
fn test_nan_constant() {
    let mut sheet = Sheet::new();
    sheet.set_constant(id(0, 0), f64::NAN);
    sheet.set_sum_cell(id(0, 1), vec![id(0, 0)]);

    assert!(sheet.evaluate(id(0, 0)).as_number().unwrap().is_nan());
    assert!(sheet.evaluate(id(0, 1)).as_number().unwrap().is_nan());
}

/// Test a sum of two constants
#[test]
fn test_simple_sum() {
    let mut sheet = Sheet::new();
    sheet.set_constant(id(0, 0), 5.0);
    sheet.set_constant(id(0, 1), 10.0);
    sheet.set_sum_cell(id(0, 2), vec![id(0, 0), id(0, 1)]);

    let expected = HashMap::from([
        (id(0, 0), CellValue::Number(5.0)),
        (id(0, 1), CellValue::Number(10.0)),
        (id(0, 2), CellValue::Number(15.0)),
    ]);
    assert_eq!(sheet.evaluate_all(), expected);
}

/// Test sums of sums
#[test]
fn test_chained_sums() {
    let mut sheet = Sheet::new();
    sheet.set_constant(id(0, 0), 5.0);
    sheet.set_sum_cell(id(0, 1), vec![id(0, 0)]);
    sheet.set_sum_cell(id(0, 2), vec![id(0, 1)]);

    let results = sheet.evaluate_all();
    assert_eq!(results.len(), 3);
    assert!(results.values().all(|v| *v == CellValue::Number(5.0)));
}

/// Test two cells referencing each other
#[test]
fn test_mutual_cycle() {
    let mut sheet = Sheet::new();
    sheet.set_sum_cell(id(0, 0), vec![id(0, 1)]);
    sheet.set_sum_cell(id(0, 1), vec![id(0, 0)]);

    let expected = HashMap::from([
        (id(0, 0), CellValue::RefError),
        (id(0, 1), CellValue::RefError),
    ]);
    assert_eq!(sheet.evaluate_all(), expected);
}

/// Test a reference to a cell that is defined later
#[test]
fn test_dangling_reference_then_late_definition() {
    let mut sheet = Sheet::new();
    let snapshot = sheet.set_sum_cell(id(0, 1), vec![id(0, 0)]);

    assert_eq!(snapshot, CellValue::RefError);
    assert_eq!(sheet.evaluate(id(0, 1)), CellValue::RefError);

    sheet.set_constant(id(0, 0), 5.0);
    assert_eq!(sheet.evaluate(id(0, 1)), CellValue::Number(5.0));
    assert_eq!(sheet.evaluate_all()[&id(0, 1)], CellValue::Number(5.0));
}

/// Test that an update to a precedent reaches every dependent
#[test]
fn test_mutation_propagates() {
    let mut sheet = Sheet::new();
    sheet.set_constant(id(0, 0), 1.0);
    sheet.set_sum_cell(id(0, 1), vec![id(0, 0)]);
    sheet.set_sum_cell(id(0, 2), vec![id(0, 1), id(0, 0)]);

    sheet.set_constant(id(0, 0), 10.0);
    assert_eq!(sheet.evaluate(id(0, 2)), CellValue::Number(20.0));

    // Breaking the chain turns dependents into errors, fixing it restores them
    sheet.set_sum_cell(id(0, 1), vec![id(0, 2)]);
    assert_eq!(sheet.evaluate(id(0, 2)), CellValue::RefError);
    assert_eq!(sheet.evaluate(id(0, 0)), CellValue::Number(10.0));

    sheet.set_constant(id(0, 1), 1.0);
    assert_eq!(sheet.evaluate(id(0, 2)), CellValue::Number(11.0));
}

/// Test that an empty sum is zero
#[test]
fn test_empty_sum() {
    let mut sheet = Sheet::new();
    assert_eq!(sheet.set_sum_cell(id(4, 4), vec![]), CellValue::Number(0.0));
    assert_eq!(sheet.evaluate(id(4, 4)), CellValue::Number(0.0));
}

/// Test a cell referencing itself
#[test]
fn test_self_reference() {
    let mut sheet = Sheet::new();
    sheet.set_sum_cell(id(2, 2), vec![id(2, 2)]);
    assert_eq!(sheet.evaluate(id(2, 2)), CellValue::RefError);
}

/// Test that a shared precedent is not mistaken for a cycle
#[test]
fn test_diamond_dependency() {
    let mut sheet = Sheet::new();
    sheet.set_constant(id(0, 0), 2.0);
    sheet.set_sum_cell(id(0, 1), vec![id(0, 0)]);
    sheet.set_sum_cell(id(0, 2), vec![id(0, 0)]);
    sheet.set_sum_cell(id(0, 3), vec![id(0, 1), id(0, 2)]);

    assert_eq!(sheet.evaluate(id(0, 3)), CellValue::Number(4.0));
}

/// Test that negative coordinates are ordinary identifiers
#[test]
fn test_negative_coordinates() {
    let mut sheet = Sheet::new();
    sheet.set_constant(id(-1, -1), 4.0);
    sheet.set_sum_cell(id(-1, 0), vec![id(-1, -1), id(-1, -1)]);

    assert_eq!(sheet.render(), vec!["-1,-1: 4", "-1,0: 8"]);
}

/// Test rendering of the scenario outputs
#[test]
fn test_render_scenarios() {
    let mut sheet = Sheet::new();
    sheet.set_constant(id(0, 0), 5.0);
    sheet.set_constant(id(0, 1), 10.0);
    sheet.set_sum_cell(id(0, 2), vec![id(0, 0), id(0, 1)]);
    sheet.set_sum_cell(id(1, 0), vec![id(1, 1)]);
    sheet.set_sum_cell(id(1, 1), vec![id(1, 0)]);

    assert_eq!(
        sheet.render(),
        vec![
            "0,0: 5",
            "0,1: 10",
            "0,2: 15",
            "1,0: REFERROR",
            "1,1: REFERROR",
        ]
    );
}
