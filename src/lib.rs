// src/lib.rs

pub mod cli;
pub mod config;
pub mod deps;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod render;
pub mod sprints;
pub mod types;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::{default_config_path, load_and_validate};
use crate::config::model::ConfigFile;
use crate::deps::{parse_dependencies, read_dependency_file};
use crate::graph::DepGraph;
use crate::render::layout_by_sprint;
use crate::sprints::SprintTable;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config resolution (file + CLI overrides)
/// - sprint table and dependency loading
/// - graph construction and classification
/// - SVG rendering (unless `--report-only`)
/// - the console violation report
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = resolve_config(&args)?;

    // A missing sprint file stops the run; a missing dependency file only
    // degrades it to an empty dataset (see deps::reader).
    let sprints = SprintTable::load(&cfg.inputs.sprints, &cfg.inputs.sprint_prefix)?;
    info!(assignments = sprints.len(), "sprint table loaded");

    let contents = read_dependency_file(&cfg.inputs.dependencies);
    let parsed = parse_dependencies(&contents, cfg.inputs.format)?;
    debug!(
        tasks = parsed.tasks.len(),
        edges = parsed.edges.len(),
        "dependency data parsed"
    );

    let graph = DepGraph::build(&parsed, &sprints);
    let violations = graph.violations();
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        violations = violations.len(),
        "graph classified"
    );

    if !args.report_only {
        let layout = layout_by_sprint(&graph);
        render::write_svg_file(&graph, &layout, &cfg.render)?;
        info!(output = %cfg.render.output, "figure written");
    }

    render::print_violations(&violations)?;
    Ok(())
}

/// Resolve the effective configuration.
///
/// Precedence: CLI flags over config file over built-in defaults. When no
/// `--config` is given, `Sprintgraph.toml` is picked up if present and
/// silently skipped otherwise.
fn resolve_config(args: &CliArgs) -> Result<ConfigFile> {
    let mut cfg = match &args.config {
        Some(path) => load_and_validate(path)?,
        None => {
            let default = default_config_path();
            if default.exists() {
                load_and_validate(&default)?
            } else {
                debug!("no config file found, using built-in defaults");
                ConfigFile::default()
            }
        }
    };

    if let Some(path) = &args.sprints {
        cfg.inputs.sprints = path.clone();
    }
    if let Some(path) = &args.deps {
        cfg.inputs.dependencies = path.clone();
    }
    if let Some(format) = args.format {
        cfg.inputs.format = format;
    }
    if let Some(path) = &args.output {
        cfg.render.output = path.clone();
    }

    Ok(cfg)
}
