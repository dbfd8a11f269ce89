// src/deps/parser.rs

use std::collections::BTreeSet;

use tracing::warn;

use crate::errors::Result;
use crate::types::{DependencyFormat, TaskId};

/// Output of the dependency parser: the tasks that participate in at least
/// one edge (sorted, deduplicated) and the directed edges themselves.
///
/// Edge direction is blocking -> blocked: for an input group
/// `B, A` ("B is blocked by A") we emit the edge `(A, B)`.
/// Repeated pairs are kept as-is; nothing deduplicates edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDependencies {
    pub tasks: Vec<TaskId>,
    pub edges: Vec<(TaskId, TaskId)>,
}

impl ParsedDependencies {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.edges.is_empty()
    }
}

/// Parse dependency CSV text in the selected layout.
///
/// Both layouts reduce to the same per-group rule; `Matrix` first transposes
/// the cell grid so that columns become groups.
pub fn parse_dependencies(
    contents: &str,
    format: DependencyFormat,
) -> Result<ParsedDependencies> {
    let grid = read_grid(contents)?;

    let groups = match format {
        DependencyFormat::Rows => grid,
        DependencyFormat::Matrix => transpose(grid),
    };

    let mut tasks: BTreeSet<TaskId> = BTreeSet::new();
    let mut edges: Vec<(TaskId, TaskId)> = Vec::new();

    for (idx, group) in groups.iter().enumerate() {
        collect_group(idx, group, &mut tasks, &mut edges);
    }

    Ok(ParsedDependencies {
        tasks: tasks.into_iter().collect(),
        edges,
    })
}

/// Read the CSV into a grid of trimmed cells. Blank lines are dropped by the
/// CSV reader; rows may have differing lengths (`flexible`).
fn read_grid(contents: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(contents.as_bytes());

    let mut grid = Vec::new();
    for row in reader.records() {
        let row = row?;
        grid.push(row.iter().map(|cell| cell.trim().to_string()).collect());
    }
    Ok(grid)
}

/// Turn rows into columns, padding short rows with empty cells.
fn transpose(grid: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let width = grid.iter().map(|row| row.len()).max().unwrap_or(0);

    (0..width)
        .map(|col| {
            grid.iter()
                .map(|row| row.get(col).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Apply the shared group rule: the first cell names the blocked task, every
/// later non-empty cell names a task blocking it.
fn collect_group(
    idx: usize,
    group: &[String],
    tasks: &mut BTreeSet<TaskId>,
    edges: &mut Vec<(TaskId, TaskId)>,
) {
    // A group of nothing but empty cells is just padding, not data loss.
    if group.iter().all(|cell| cell.is_empty()) {
        return;
    }

    let blocked = &group[0];
    if blocked.is_empty() {
        warn!(group = idx + 1, "skipping dependency group with an empty task field");
        return;
    }

    for blocking in group.iter().skip(1) {
        if blocking.is_empty() {
            continue;
        }
        tasks.insert(blocking.clone());
        tasks.insert(blocked.clone());
        edges.push((blocking.clone(), blocked.clone()));
    }
}
