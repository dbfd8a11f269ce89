// src/sprints/mod.rs

//! Sprint assignments.
//!
//! - [`label`] parses sprint labels like `"SP3"` and defines the ordering
//!   type used for schedule comparisons.
//! - [`table`] loads the task -> sprint mapping from CSV.

pub mod label;
pub mod table;

pub use label::{parse_sprint_label, SprintSlot, UNASSIGNED_LABEL};
pub use table::{SprintRecord, SprintTable};
