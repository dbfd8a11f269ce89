// src/graph/classify.rs

use crate::sprints::SprintSlot;
use crate::types::TaskId;

/// Classification of a single dependency edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Normal,
    Violating,
}

impl EdgeKind {
    pub fn is_violating(self) -> bool {
        matches!(self, EdgeKind::Violating)
    }
}

/// Classify an edge from its endpoint slots alone.
///
/// `source` is the blocking task, `target` the blocked one. The edge is
/// violating exactly when both endpoints have a known sprint and the
/// blocking task is scheduled later. An unassigned endpoint never violates;
/// there is no schedule to contradict.
pub fn classify_edge(source: SprintSlot, target: SprintSlot) -> EdgeKind {
    match (source, target) {
        (SprintSlot::Assigned(s), SprintSlot::Assigned(t)) if s > t => EdgeKind::Violating,
        _ => EdgeKind::Normal,
    }
}

/// A violating edge, carrying everything the report and the figure need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub blocking: TaskId,
    pub blocking_label: String,
    pub blocked: TaskId,
    pub blocked_label: String,
}
