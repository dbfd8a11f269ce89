// src/types.rs

use clap::ValueEnum;
use serde::Deserialize;

/// Task identifiers are opaque strings taken verbatim from the input CSVs.
pub type TaskId = String;

/// Layout of the dependency CSV.
///
/// Two historical layouts coexist in the data this tool consumes:
///
/// - `Rows`: each row is `blocked_task, blocking_task_1, blocking_task_2, ...`
/// - `Matrix`: the file is read as a matrix and interpreted column-wise;
///   each column is `task, blocking_task_1, blocking_task_2, ...`
///
/// The two shapes are not reliably distinguishable by inspection, so the
/// variant is always selected explicitly (config or `--format`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DependencyFormat {
    Rows,
    Matrix,
}

impl Default for DependencyFormat {
    fn default() -> Self {
        DependencyFormat::Rows
    }
}
