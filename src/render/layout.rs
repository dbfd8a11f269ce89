// src/render/layout.rs

use std::collections::{BTreeMap, HashMap};

use crate::graph::DepGraph;
use crate::sprints::SprintSlot;
use crate::types::TaskId;

/// Grid position of a node: the sprint column it belongs to and its vertical
/// offset within that column, centered on zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePos {
    pub column: usize,
    pub offset: f64,
}

/// One column of the figure: a sprint slot and its members, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct SprintColumn {
    pub slot: SprintSlot,
    pub tasks: Vec<TaskId>,
}

/// Grid placement for every node in the graph.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    positions: HashMap<TaskId, NodePos>,
    columns: Vec<SprintColumn>,
}

impl Layout {
    pub fn position(&self, task: &str) -> Option<NodePos> {
        self.positions.get(task).copied()
    }

    pub fn columns(&self) -> &[SprintColumn] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Size of the tallest column; the vertical scale is derived from this.
    pub fn max_column_size(&self) -> usize {
        self.columns.iter().map(|col| col.tasks.len()).max().unwrap_or(0)
    }
}

/// Group nodes into columns by sprint slot.
///
/// Columns are ordered by ascending slot, which puts unassigned tasks in the
/// rightmost column. Within a column tasks keep the graph's sorted node
/// order and are spread symmetrically around the column's vertical center
/// (`offset = i - len / 2`).
pub fn layout_by_sprint(graph: &DepGraph) -> Layout {
    let mut by_slot: BTreeMap<SprintSlot, Vec<TaskId>> = BTreeMap::new();
    for node in graph.nodes() {
        by_slot.entry(node.slot).or_default().push(node.task.clone());
    }

    let mut positions = HashMap::new();
    let mut columns = Vec::new();

    for (column, (slot, tasks)) in by_slot.into_iter().enumerate() {
        let len = tasks.len() as f64;
        for (i, task) in tasks.iter().enumerate() {
            positions.insert(
                task.clone(),
                NodePos {
                    column,
                    offset: i as f64 - len / 2.0,
                },
            );
        }
        columns.push(SprintColumn { slot, tasks });
    }

    Layout { positions, columns }
}
