//! Formula evaluator
//!
//! Evaluation always walks the stored formulas; the snapshot kept in a `Sum`
//! cell's `content` is never consulted, so a change to any precedent is
//! visible on the next evaluation.
//!
//! Cycle detection uses a path set: a cell is added when its evaluation
//! starts and removed when it finishes. Reaching a cell that is already on
//! the path is a circular reference and yields [`CellValue::RefError`]. Cells
//! shared by sibling branches (a diamond) are not on each other's path and
//! evaluate normally.
//!
//! The walk uses an explicit frame stack rather than native recursion, so the
//! depth of a reference chain is bounded by heap memory, not thread stack.

use std::collections::{HashMap, HashSet};

use sumgrid_core::{CellId, CellStore, CellValue, Formula};
use tracing::{debug, trace};

/// A `Sum` cell whose arguments are being evaluated
struct Frame<'a> {
    id: CellId,
    args: &'a [CellId],
    next: usize,
    sum: f64,
}

/// Outcome of starting evaluation of one cell
enum Step {
    /// The cell's value is known without descending
    Resolved(CellValue),
    /// A frame was pushed; its value arrives once its arguments are done
    Descended,
}

/// Evaluates cells of a [`CellStore`]
///
/// A plain evaluator keeps no state between calls. A memoized evaluator
/// keeps every completed cell's value for the lifetime of the evaluator,
/// which is only valid while the store is not mutated (enforced by the
/// shared borrow).
pub struct Evaluator<'a> {
    store: &'a CellStore,
    memo: Option<HashMap<CellId, CellValue>>,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator that recomputes every cell on every request
    pub fn new(store: &'a CellStore) -> Self {
        Self { store, memo: None }
    }

    /// Create an evaluator that reuses values computed earlier by itself
    pub fn memoized(store: &'a CellStore) -> Self {
        Self {
            store,
            memo: Some(HashMap::new()),
        }
    }

    /// Evaluate `id` starting from an empty path
    pub fn evaluate(&mut self, id: CellId) -> CellValue {
        let mut visited = HashSet::new();
        self.evaluate_with_path(id, &mut visited)
    }

    /// Evaluate `id` with `visited` as the set of cells already in progress
    ///
    /// If `id` is in `visited`, the result is `RefError` and `visited` is not
    /// modified. Otherwise `visited` is returned to its original contents
    /// when evaluation finishes.
    ///
    /// Memoized values are computed from an empty path, so a memoized
    /// evaluator neither reads nor fills its memo when `visited` starts
    /// non-empty.
    pub fn evaluate_with_path(&mut self, id: CellId, visited: &mut HashSet<CellId>) -> CellValue {
        if visited.is_empty() || self.memo.is_none() {
            return self.walk(id, visited);
        }

        let memo = self.memo.take();
        let value = self.walk(id, visited);
        self.memo = memo;
        value
    }

    fn walk(&mut self, id: CellId, visited: &mut HashSet<CellId>) -> CellValue {
        let mut stack: Vec<Frame<'a>> = Vec::new();

        let mut completed = match self.enter(id, visited, &mut stack) {
            Step::Resolved(value) => return value,
            Step::Descended => None,
        };

        while let Some(frame) = stack.last_mut() {
            match completed.take() {
                Some(CellValue::RefError) => {
                    // First failing argument decides the sum
                    let id = frame.id;
                    stack.pop();
                    completed = Some(self.finish(id, CellValue::RefError, visited));
                    continue;
                }
                Some(CellValue::Number(n)) => frame.sum += n,
                None => {}
            }

            match frame.args.get(frame.next).copied() {
                Some(arg) => {
                    frame.next += 1;
                    completed = match self.enter(arg, visited, &mut stack) {
                        Step::Resolved(value) => Some(value),
                        Step::Descended => None,
                    };
                }
                None => {
                    let (id, sum) = (frame.id, frame.sum);
                    stack.pop();
                    completed = Some(self.finish(id, CellValue::Number(sum), visited));
                }
            }
        }

        // The root frame always completes with a value
        completed.unwrap_or(CellValue::RefError)
    }

    fn enter(
        &mut self,
        id: CellId,
        visited: &mut HashSet<CellId>,
        stack: &mut Vec<Frame<'a>>,
    ) -> Step {
        if visited.contains(&id) {
            debug!(cell = %id, "circular reference detected");
            return Step::Resolved(CellValue::RefError);
        }

        // Only cells off the current path may come from the memo
        if let Some(value) = self.memo.as_ref().and_then(|memo| memo.get(&id)) {
            return Step::Resolved(*value);
        }
        visited.insert(id);
        trace!(cell = %id, depth = stack.len(), "evaluating cell");

        let store = self.store;
        match store.get(id) {
            None => {
                debug!(cell = %id, "reference to undefined cell");
                Step::Resolved(self.finish(id, CellValue::RefError, visited))
            }
            Some(cell) => match &cell.formula {
                Formula::None => Step::Resolved(self.finish(id, cell.content, visited)),
                Formula::Sum(args) => {
                    stack.push(Frame {
                        id,
                        args: args.as_slice(),
                        next: 0,
                        sum: 0.0,
                    });
                    Step::Descended
                }
            },
        }
    }

    fn finish(&mut self, id: CellId, value: CellValue, visited: &mut HashSet<CellId>) -> CellValue {
        visited.remove(&id);
        if let Some(memo) = self.memo.as_mut() {
            memo.insert(id, value);
        }
        value
    }
}

/// Evaluate a single cell from scratch
pub fn evaluate(store: &CellStore, id: CellId) -> CellValue {
    Evaluator::new(store).evaluate(id)
}

/// Evaluate a single cell, treating the cells in `visited` as in progress
pub fn evaluate_with_path(
    store: &CellStore,
    id: CellId,
    visited: &mut HashSet<CellId>,
) -> CellValue {
    Evaluator::new(store).evaluate_with_path(id, visited)
}

/// Evaluate every stored cell independently
///
/// Each cell gets its own empty path and nothing is shared between cells, so
/// a subgraph used by several cells is recomputed for each of them.
pub fn evaluate_all(store: &CellStore) -> HashMap<CellId, CellValue> {
    let mut evaluator = Evaluator::new(store);
    store
        .iter()
        .map(|(id, _)| (id, evaluator.evaluate(id)))
        .collect()
}

/// Evaluate every stored cell in one pass, reusing completed results
///
/// Produces the same values as [`evaluate_all`]. A completed cell's value
/// never depends on the path that reached it: a cell that reaches one of its
/// in-progress ancestors lies on a cycle and is `RefError` from any root.
pub fn evaluate_all_memoized(store: &CellStore) -> HashMap<CellId, CellValue> {
    let mut evaluator = Evaluator::memoized(store);
    store
        .ids()
        .into_iter()
        .map(|id| (id, evaluator.evaluate(id)))
        .collect()
}
