#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use sprintgraph::deps::parse_dependencies;
use sprintgraph::graph::DepGraph;
use sprintgraph::sprints::SprintTable;
use sprintgraph::types::DependencyFormat;

/// Builder for sprint-assignment CSV fixtures.
pub struct SprintCsv {
    rows: Vec<(String, String)>,
}

impl SprintCsv {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn with(mut self, task: &str, label: &str) -> Self {
        self.rows.push((task.to_string(), label.to_string()));
        self
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for (task, label) in &self.rows {
            out.push_str(task);
            out.push(',');
            out.push_str(label);
            out.push('\n');
        }
        out
    }

    /// Write the fixture into `dir` under the conventional file name.
    pub fn write_to(&self, dir: &Path) -> PathBuf {
        let path = dir.join("Sprints.csv");
        fs::write(&path, self.to_csv()).expect("Failed to write sprint fixture");
        path
    }
}

impl Default for SprintCsv {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for dependency CSV fixtures (rows layout; transpose-by-hand for
/// matrix fixtures).
pub struct DependencyCsv {
    rows: Vec<Vec<String>>,
}

impl DependencyCsv {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn row(mut self, cells: &[&str]) -> Self {
        self.rows.push(cells.iter().map(|c| c.to_string()).collect());
        self
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(&row.join(","));
            out.push('\n');
        }
        out
    }

    pub fn write_to(&self, dir: &Path) -> PathBuf {
        let path = dir.join("Isblockedby.csv");
        fs::write(&path, self.to_csv()).expect("Failed to write dependency fixture");
        path
    }
}

impl Default for DependencyCsv {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a classified graph straight from CSV text, for tests that only care
/// about the end result.
pub fn graph_from(sprint_csv: &str, dep_csv: &str, format: DependencyFormat) -> DepGraph {
    let sprints = SprintTable::from_csv(sprint_csv, "SP").expect("Failed to parse sprint fixture");
    let parsed =
        parse_dependencies(dep_csv, format).expect("Failed to parse dependency fixture");
    DepGraph::build(&parsed, &sprints)
}
