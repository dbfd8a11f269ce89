use std::error::Error;
use std::fs;

use sprintgraph::config::RenderSection;
use sprintgraph::render::{layout_by_sprint, render_svg, write_svg_file};
use sprintgraph::sprints::SprintSlot;
use sprintgraph_test_utils::builders::{graph_from, DependencyCsv, SprintCsv};
use sprintgraph_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn columns_follow_sprint_order_with_unassigned_last() -> TestResult {
    init_tracing();

    let sprints = SprintCsv::new()
        .with("A", "SP1")
        .with("B", "SP3")
        .with("C", "SP1")
        .to_csv();
    // X has no assignment and must land in the rightmost column.
    let deps = DependencyCsv::new().row(&["X", "A"]).row(&["B", "C"]).to_csv();

    let graph = graph_from(&sprints, &deps, Default::default());
    let layout = layout_by_sprint(&graph);

    let slots: Vec<SprintSlot> = layout.columns().iter().map(|col| col.slot).collect();
    assert_eq!(
        slots,
        vec![
            SprintSlot::Assigned(1),
            SprintSlot::Assigned(3),
            SprintSlot::Unassigned
        ]
    );
    assert_eq!(layout.columns()[0].tasks, vec!["A", "C"]);
    assert_eq!(layout.columns()[2].tasks, vec!["X"]);

    Ok(())
}

#[test]
fn column_members_are_spread_around_the_center() -> TestResult {
    init_tracing();

    let sprints = SprintCsv::new()
        .with("A", "SP1")
        .with("B", "SP1")
        .with("C", "SP1")
        .with("D", "SP1")
        .to_csv();
    let graph = graph_from(&sprints, "", Default::default());
    let layout = layout_by_sprint(&graph);

    let offsets: Vec<f64> = layout.columns()[0]
        .tasks
        .iter()
        .map(|task| layout.position(task).unwrap().offset)
        .collect();

    assert_eq!(offsets, vec![-2.0, -1.0, 0.0, 1.0]);
    assert_eq!(layout.max_column_size(), 4);

    Ok(())
}

#[test]
fn svg_highlights_violating_edges() -> TestResult {
    init_tracing();

    let sprints = SprintCsv::new().with("B", "SP2").with("C", "SP1").to_csv();
    let deps = DependencyCsv::new().row(&["C", "B"]).to_csv();
    let graph = graph_from(&sprints, &deps, Default::default());
    let layout = layout_by_sprint(&graph);

    let svg = render_svg(&graph, &layout, &RenderSection::default());

    assert!(svg.starts_with("<svg "));
    assert!(svg.contains("stroke=\"#d62728\""));
    assert!(svg.contains("Is blocked by"));
    assert!(svg.contains(">B</text>"));
    assert!(svg.contains(">SP2</text>"));
    assert!(svg.contains("Task dependencies"));

    Ok(())
}

#[test]
fn svg_draws_normal_edges_without_violation_label() -> TestResult {
    init_tracing();

    let sprints = SprintCsv::new().with("A", "SP1").with("B", "SP2").to_csv();
    let deps = DependencyCsv::new().row(&["B", "A"]).to_csv();
    let graph = graph_from(&sprints, &deps, Default::default());
    let layout = layout_by_sprint(&graph);

    let svg = render_svg(&graph, &layout, &RenderSection::default());

    assert!(svg.contains("marker-end=\"url(#arrow-normal)\""));
    assert!(!svg.contains("Is blocked by"));

    Ok(())
}

#[test]
fn task_names_are_xml_escaped() -> TestResult {
    init_tracing();

    let sprints = SprintCsv::new().with("R&D", "SP1").to_csv();
    let graph = graph_from(&sprints, "", Default::default());
    let layout = layout_by_sprint(&graph);

    let svg = render_svg(&graph, &layout, &RenderSection::default());

    assert!(svg.contains("R&amp;D"));
    assert!(!svg.contains(">R&D<"));

    Ok(())
}

#[test]
fn figure_is_written_to_the_configured_path() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let output = dir.path().join("figure.svg");

    let sprints = SprintCsv::new().with("A", "SP1").with("B", "SP2").to_csv();
    let deps = DependencyCsv::new().row(&["B", "A"]).to_csv();
    let graph = graph_from(&sprints, &deps, Default::default());
    let layout = layout_by_sprint(&graph);

    let opts = RenderSection {
        output: output.to_string_lossy().into_owned(),
        ..RenderSection::default()
    };
    write_svg_file(&graph, &layout, &opts)?;

    let written = fs::read_to_string(&output)?;
    assert!(written.contains("</svg>"));

    Ok(())
}
