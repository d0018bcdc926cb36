//! Dependency tracking between formula cells

use std::collections::{HashMap, HashSet};

use sumgrid_core::{CellId, CellStore};

/// Dependency graph for formula cells
///
/// Tracks which cells depend on which other cells. The graph is a snapshot
/// of the store it was built from; it is not updated by later mutations.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// Cell → Cells that depend on it (dependents)
    dependents: HashMap<CellId, HashSet<CellId>>,
    /// Cell → Cells it depends on (precedents)
    precedents: HashMap<CellId, HashSet<CellId>>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from every `Sum` cell in a store
    pub fn from_store(store: &CellStore) -> Self {
        let mut graph = Self::new();
        for (id, cell) in store.iter() {
            for &precedent in cell.formula.references() {
                graph.add_dependency(precedent, id);
            }
        }
        graph
    }

    /// Add a dependency: dependent depends on precedent
    pub fn add_dependency(&mut self, precedent: CellId, dependent: CellId) {
        self.dependents
            .entry(precedent)
            .or_default()
            .insert(dependent);
        self.precedents
            .entry(dependent)
            .or_default()
            .insert(precedent);
    }

    /// Get cells that directly depend on the given cell
    pub fn dependents(&self, cell: CellId) -> impl Iterator<Item = CellId> + '_ {
        self.dependents
            .get(&cell)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Get cells that the given cell directly depends on
    pub fn precedents(&self, cell: CellId) -> impl Iterator<Item = CellId> + '_ {
        self.precedents
            .get(&cell)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Get every cell whose value can change when `cell` changes,
    /// sorted row-major. Does not include `cell` unless it is on a cycle.
    pub fn transitive_dependents(&self, cell: CellId) -> Vec<CellId> {
        let mut seen = HashSet::new();
        let mut pending: Vec<CellId> = self.dependents(cell).collect();

        while let Some(next) = pending.pop() {
            if seen.insert(next) {
                pending.extend(self.dependents(next));
            }
        }

        let mut result: Vec<CellId> = seen.into_iter().collect();
        result.sort_unstable();
        result
    }

    /// Detect whether a cell lies on a circular reference
    pub fn has_circular_reference(&self, cell: CellId) -> bool {
        // A cell is on a cycle exactly when it can reach itself
        let mut seen = HashSet::new();
        let mut pending: Vec<CellId> = self.precedents(cell).collect();

        while let Some(next) = pending.pop() {
            if next == cell {
                return true;
            }
            if seen.insert(next) {
                pending.extend(self.precedents(next));
            }
        }
        false
    }

    /// All cells that lie on a circular reference, sorted row-major
    pub fn circular_cells(&self) -> Vec<CellId> {
        let mut cells: Vec<CellId> = self
            .precedents
            .keys()
            .copied()
            .filter(|&cell| self.has_circular_reference(cell))
            .collect();
        cells.sort_unstable();
        cells
    }
}
