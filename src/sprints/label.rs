// src/sprints/label.rs

use crate::errors::{Result, SprintgraphError};

/// Display label used for tasks that appear in the dependency data but have
/// no sprint assignment.
pub const UNASSIGNED_LABEL: &str = "Future Implementation";

/// A task's place in the sprint schedule.
///
/// The derived `Ord` relies on variant order: every `Assigned(n)` sorts
/// before `Unassigned`, so unassigned tasks always land after the last real
/// sprint when grouping or sorting by slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SprintSlot {
    Assigned(u32),
    Unassigned,
}

impl SprintSlot {
    pub fn is_assigned(self) -> bool {
        matches!(self, SprintSlot::Assigned(_))
    }

    /// The sprint number, if assigned.
    pub fn number(self) -> Option<u32> {
        match self {
            SprintSlot::Assigned(n) => Some(n),
            SprintSlot::Unassigned => None,
        }
    }
}

/// Extract the sprint number from a label like `"SP3"`.
///
/// The configured prefix is stripped and the remainder parsed as an integer.
/// A label that is missing the prefix, or whose remainder is not numeric,
/// is an error; sprint labels come from a hand-maintained file and a typo
/// there should stop the run rather than silently misplace a task.
pub fn parse_sprint_label(label: &str, prefix: &str) -> Result<u32> {
    let rest = label.strip_prefix(prefix).ok_or_else(|| {
        SprintgraphError::SprintLabel(format!(
            "'{label}' does not start with prefix '{prefix}'"
        ))
    })?;

    rest.trim().parse::<u32>().map_err(|_| {
        SprintgraphError::SprintLabel(format!(
            "'{label}' does not end in a sprint number"
        ))
    })
}
