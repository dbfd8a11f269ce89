// src/graph/mod.rs

//! Dependency graph construction and edge classification.
//!
//! - [`build`] assembles the directed graph and attaches sprint data to
//!   every node.
//! - [`classify`] holds the edge rule: an edge violates the schedule when
//!   its blocking endpoint sits in a later sprint than its blocked endpoint.

pub mod build;
pub mod classify;

pub use build::{DepGraph, TaskNode};
pub use classify::{classify_edge, EdgeKind, Violation};
