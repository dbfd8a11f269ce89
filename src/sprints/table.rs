// src/sprints/table.rs

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::Result;
use crate::sprints::label::{parse_sprint_label, SprintSlot, UNASSIGNED_LABEL};
use crate::types::TaskId;

/// Sprint assignment for one task: the label as written in the file plus the
/// number extracted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintRecord {
    pub label: String,
    pub number: u32,
}

/// Mapping from task id to sprint assignment, loaded from a two-column CSV
/// (`task_id,SP<n>` per row, no header).
#[derive(Debug, Clone, Default)]
pub struct SprintTable {
    records: HashMap<TaskId, SprintRecord>,
}

impl SprintTable {
    /// Load the sprint table from a CSV file.
    ///
    /// A missing or unreadable file is an error here; without sprint data
    /// there is nothing meaningful to classify.
    pub fn load(path: impl AsRef<Path>, prefix: &str) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        debug!(?path, "loaded sprint CSV");
        Self::from_csv(&contents, prefix)
    }

    /// Parse sprint rows from CSV text.
    ///
    /// - Rows with fewer than two fields are skipped with a warning.
    /// - A later row for the same task overwrites an earlier one.
    /// - A label that does not parse against `prefix` aborts the load.
    pub fn from_csv(contents: &str, prefix: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(contents.as_bytes());

        let mut records: HashMap<TaskId, SprintRecord> = HashMap::new();

        for (row_idx, row) in reader.records().enumerate() {
            let row = row?;

            if row.len() < 2 {
                warn!(row = row_idx + 1, "skipping sprint row with fewer than two fields");
                continue;
            }

            let task = row[0].trim().to_string();
            let label = row[1].trim().to_string();
            let number = parse_sprint_label(&label, prefix)?;

            if let Some(previous) = records.insert(task.clone(), SprintRecord { label, number }) {
                debug!(
                    task = %task,
                    previous = %previous.label,
                    "later sprint row overwrites earlier assignment"
                );
            }
        }

        Ok(Self { records })
    }

    /// Slot for a task; `Unassigned` when the task is not in the table.
    pub fn slot_of(&self, task: &str) -> SprintSlot {
        match self.records.get(task) {
            Some(rec) => SprintSlot::Assigned(rec.number),
            None => SprintSlot::Unassigned,
        }
    }

    /// Display label for a task, falling back to the unassigned sentinel.
    pub fn label_of(&self, task: &str) -> &str {
        self.records
            .get(task)
            .map(|rec| rec.label.as_str())
            .unwrap_or(UNASSIGNED_LABEL)
    }

    pub fn record(&self, task: &str) -> Option<&SprintRecord> {
        self.records.get(task)
    }

    /// All tasks that have a sprint assignment.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
