// src/graph/build.rs

use std::collections::{BTreeSet, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::deps::ParsedDependencies;
use crate::graph::classify::{classify_edge, EdgeKind, Violation};
use crate::sprints::{SprintSlot, SprintTable};
use crate::types::TaskId;

/// Node payload: the task id plus its sprint assignment as displayed and as
/// compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskNode {
    pub task: TaskId,
    pub label: String,
    pub slot: SprintSlot,
}

/// Directed dependency graph with classified edges.
///
/// Nodes are the union of every task named in either input file, so a task
/// that has a sprint assignment but no dependencies still shows up in the
/// figure. Parallel edges between the same pair are kept; acyclicity is not
/// required and never checked.
#[derive(Debug, Clone)]
pub struct DepGraph {
    graph: DiGraph<TaskNode, EdgeKind>,
    indices: HashMap<TaskId, NodeIndex>,
}

impl DepGraph {
    /// Assemble the graph from parsed dependencies and the sprint table.
    pub fn build(parsed: &ParsedDependencies, sprints: &SprintTable) -> Self {
        let mut graph = DiGraph::new();
        let mut indices: HashMap<TaskId, NodeIndex> = HashMap::new();

        // Deterministic node order: sorted union of both sources.
        let mut names: BTreeSet<&str> = parsed.tasks.iter().map(String::as_str).collect();
        names.extend(sprints.tasks());

        for name in names {
            let node = TaskNode {
                task: name.to_string(),
                label: sprints.label_of(name).to_string(),
                slot: sprints.slot_of(name),
            };
            let idx = graph.add_node(node);
            indices.insert(name.to_string(), idx);
        }

        for (blocking, blocked) in &parsed.edges {
            let (Some(&src), Some(&dst)) = (indices.get(blocking), indices.get(blocked)) else {
                // Parsed edges only name tasks from the parsed task set.
                continue;
            };
            let kind = classify_edge(graph[src].slot, graph[dst].slot);
            graph.add_edge(src, dst, kind);
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "dependency graph built"
        );

        Self { graph, indices }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up a node by task id.
    pub fn node(&self, task: &str) -> Option<&TaskNode> {
        self.indices.get(task).map(|&idx| &self.graph[idx])
    }

    /// All nodes, in the deterministic build order.
    pub fn nodes(&self) -> impl Iterator<Item = &TaskNode> {
        self.graph.node_weights()
    }

    /// All edges as (blocking node, blocked node, classification), in input
    /// order.
    pub fn edges(&self) -> impl Iterator<Item = (&TaskNode, &TaskNode, EdgeKind)> {
        self.graph.edge_references().map(|edge| {
            (
                &self.graph[edge.source()],
                &self.graph[edge.target()],
                *edge.weight(),
            )
        })
    }

    /// The violating edges, in input order.
    pub fn violations(&self) -> Vec<Violation> {
        self.edges()
            .filter(|(_, _, kind)| kind.is_violating())
            .map(|(source, target, _)| Violation {
                blocking: source.task.clone(),
                blocking_label: source.label.clone(),
                blocked: target.task.clone(),
                blocked_label: target.label.clone(),
            })
            .collect()
    }
}
