// src/render/mod.rs

//! Presentation: figure layout, SVG output and the console report.
//!
//! Nothing here affects classification; these modules only reflect what the
//! graph already decided.

pub mod layout;
pub mod report;
pub mod svg;

pub use layout::{layout_by_sprint, Layout, NodePos, SprintColumn};
pub use report::{print_violations, write_violations};
pub use svg::{render_svg, write_svg_file};
