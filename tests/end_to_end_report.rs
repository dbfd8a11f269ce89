use std::error::Error;

use sprintgraph::deps::{parse_dependencies, read_dependency_file};
use sprintgraph::graph::DepGraph;
use sprintgraph::render::write_violations;
use sprintgraph::sprints::SprintTable;
use sprintgraph::types::DependencyFormat;
use sprintgraph_test_utils::builders::{DependencyCsv, SprintCsv};
use sprintgraph_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn report_for(graph: &DepGraph) -> String {
    let mut out = Vec::new();
    write_violations(&mut out, &graph.violations()).expect("report write failed");
    String::from_utf8(out).expect("report is not UTF-8")
}

#[test]
fn report_names_blocked_task_first_with_sprint_labels() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let sprints_path = SprintCsv::new()
        .with("A", "SP1")
        .with("B", "SP2")
        .with("C", "SP1")
        .write_to(dir.path());
    let deps_path = DependencyCsv::new()
        .row(&["B", "A"])
        .row(&["C", "B"])
        .write_to(dir.path());

    let sprints = SprintTable::load(&sprints_path, "SP")?;
    let contents = read_dependency_file(&deps_path);
    let parsed = parse_dependencies(&contents, DependencyFormat::Rows)?;
    let graph = DepGraph::build(&parsed, &sprints);

    let report = report_for(&graph);
    assert!(report.contains("Problematic dependencies (tasks blocked by later sprints):"));
    assert!(report.contains("C (SP1) is blocked by B (SP2)"));
    assert!(!report.contains("B (SP2) is blocked by A (SP1)"));

    Ok(())
}

#[test]
fn clean_schedule_reports_no_problems() -> TestResult {
    init_tracing();

    let sprints = SprintTable::from_csv("A,SP1\nB,SP2\n", "SP")?;
    let parsed = parse_dependencies("B,A\n", DependencyFormat::Rows)?;
    let graph = DepGraph::build(&parsed, &sprints);

    assert_eq!(report_for(&graph), "No problematic dependencies found.\n");

    Ok(())
}

#[test]
fn missing_dependency_file_degrades_to_empty_data() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let sprints_path = SprintCsv::new().with("A", "SP1").write_to(dir.path());

    let sprints = SprintTable::load(&sprints_path, "SP")?;
    let contents = read_dependency_file(dir.path().join("no-such-file.csv"));
    assert_eq!(contents, "");

    let parsed = parse_dependencies(&contents, DependencyFormat::Rows)?;
    let graph = DepGraph::build(&parsed, &sprints);

    // The sprint-table task still shows up; there is nothing to violate.
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(report_for(&graph), "No problematic dependencies found.\n");

    Ok(())
}

#[test]
fn violations_keep_input_order() -> TestResult {
    init_tracing();

    let sprints = SprintTable::from_csv("A,SP3\nB,SP2\nC,SP1\n", "SP")?;
    let parsed = parse_dependencies("C,B\nB,A\n", DependencyFormat::Rows)?;
    let graph = DepGraph::build(&parsed, &sprints);

    let report = report_for(&graph);
    let c_line = report.find("C (SP1) is blocked by B (SP2)").unwrap();
    let b_line = report.find("B (SP2) is blocked by A (SP3)").unwrap();
    assert!(c_line < b_line);

    Ok(())
}
