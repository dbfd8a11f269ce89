// src/render/svg.rs

use std::fmt::Write as _;
use std::fs;

use tracing::debug;

use crate::config::RenderSection;
use crate::errors::Result;
use crate::graph::{DepGraph, EdgeKind};
use crate::render::layout::Layout;

const MARGIN: f64 = 80.0;
const NODE_RADIUS: f64 = 28.0;

const NODE_FILL: &str = "#add8e6";
const NODE_STROKE: &str = "#4682b4";
const NORMAL_EDGE_COLOR: &str = "#333333";
const VIOLATING_EDGE_COLOR: &str = "#d62728";

/// Label drawn on violating edges.
const VIOLATION_EDGE_LABEL: &str = "Is blocked by";

/// Render the classified graph as a standalone SVG document.
///
/// Normal edges are thin and dark; violating edges are heavier, red and
/// labelled. Each node shows its task id inside the circle and its sprint
/// label above it.
pub fn render_svg(graph: &DepGraph, layout: &Layout, opts: &RenderSection) -> String {
    let canvas = Canvas::new(layout, opts);
    let mut svg = String::new();

    // fmt::Write into a String cannot fail; write results are discarded.
    header(&mut svg, opts);
    edges(&mut svg, graph, layout, &canvas);
    nodes(&mut svg, graph, layout, &canvas);
    title(&mut svg, opts);
    svg.push_str("</svg>\n");

    svg
}

/// Render and write the figure to `opts.output`.
pub fn write_svg_file(graph: &DepGraph, layout: &Layout, opts: &RenderSection) -> Result<()> {
    let svg = render_svg(graph, layout, opts);
    fs::write(&opts.output, svg)?;
    Ok(())
}

/// Maps grid positions (column index, vertical offset) to pixels.
struct Canvas {
    width: f64,
    height: f64,
    columns: usize,
    row_gap: f64,
}

impl Canvas {
    fn new(layout: &Layout, opts: &RenderSection) -> Self {
        let height = opts.height as f64;
        let rows = layout.max_column_size().max(1) as f64;
        Self {
            width: opts.width as f64,
            height,
            columns: layout.column_count(),
            row_gap: (height - 2.0 * MARGIN) / rows,
        }
    }

    fn x(&self, column: usize) -> f64 {
        if self.columns <= 1 {
            return self.width / 2.0;
        }
        let gap = (self.width - 2.0 * MARGIN) / (self.columns - 1) as f64;
        MARGIN + column as f64 * gap
    }

    fn y(&self, offset: f64) -> f64 {
        self.height / 2.0 + offset * self.row_gap
    }
}

fn header(svg: &mut String, opts: &RenderSection) {
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">",
        w = opts.width,
        h = opts.height
    );
    let _ = writeln!(svg, "  <rect width=\"100%\" height=\"100%\" fill=\"white\"/>");
    let _ = writeln!(
        svg,
        "  <defs>\n    <marker id=\"arrow-normal\" viewBox=\"0 0 10 10\" refX=\"9\" refY=\"5\" \
         markerWidth=\"8\" markerHeight=\"8\" orient=\"auto-start-reverse\">\n      \
         <path d=\"M 0 0 L 10 5 L 0 10 z\" fill=\"{normal}\"/>\n    </marker>\n    \
         <marker id=\"arrow-violating\" viewBox=\"0 0 10 10\" refX=\"9\" refY=\"5\" \
         markerWidth=\"8\" markerHeight=\"8\" orient=\"auto-start-reverse\">\n      \
         <path d=\"M 0 0 L 10 5 L 0 10 z\" fill=\"{violating}\"/>\n    </marker>\n  </defs>",
        normal = NORMAL_EDGE_COLOR,
        violating = VIOLATING_EDGE_COLOR
    );
}

fn title(svg: &mut String, opts: &RenderSection) {
    let _ = writeln!(
        svg,
        "  <text x=\"{x}\" y=\"30\" text-anchor=\"middle\" font-size=\"18\">\
         Task dependencies (red = task blocked by a later sprint)</text>",
        x = opts.width / 2
    );
}

fn edges(svg: &mut String, graph: &DepGraph, layout: &Layout, canvas: &Canvas) {
    for (source, target, kind) in graph.edges() {
        let (Some(src), Some(dst)) = (layout.position(&source.task), layout.position(&target.task))
        else {
            continue;
        };

        let (x1, y1) = (canvas.x(src.column), canvas.y(src.offset));
        let (x2, y2) = (canvas.x(dst.column), canvas.y(dst.offset));

        let dx = x2 - x1;
        let dy = y2 - y1;
        let len = (dx * dx + dy * dy).sqrt();
        if len < 2.0 * NODE_RADIUS {
            // Endpoints overlap (self-dependency or a degenerate layout);
            // there is no room to draw a line between the circles.
            debug!(source = %source.task, target = %target.task, "skipping degenerate edge");
            continue;
        }

        // Trim the line to the circle borders so the arrowhead stays visible.
        let (ux, uy) = (dx / len, dy / len);
        let (ax, ay) = (x1 + ux * NODE_RADIUS, y1 + uy * NODE_RADIUS);
        let (bx, by) = (x2 - ux * NODE_RADIUS, y2 - uy * NODE_RADIUS);

        let (color, width, marker) = match kind {
            EdgeKind::Normal => (NORMAL_EDGE_COLOR, 1.5, "arrow-normal"),
            EdgeKind::Violating => (VIOLATING_EDGE_COLOR, 3.0, "arrow-violating"),
        };

        let _ = writeln!(
            svg,
            "  <line x1=\"{ax:.1}\" y1=\"{ay:.1}\" x2=\"{bx:.1}\" y2=\"{by:.1}\" \
             stroke=\"{color}\" stroke-width=\"{width}\" marker-end=\"url(#{marker})\"/>"
        );

        if kind.is_violating() {
            let (mx, my) = ((ax + bx) / 2.0, (ay + by) / 2.0 - 6.0);
            let _ = writeln!(
                svg,
                "  <text x=\"{mx:.1}\" y=\"{my:.1}\" text-anchor=\"middle\" font-size=\"11\" \
                 fill=\"{VIOLATING_EDGE_COLOR}\">{VIOLATION_EDGE_LABEL}</text>"
            );
        }
    }
}

fn nodes(svg: &mut String, graph: &DepGraph, layout: &Layout, canvas: &Canvas) {
    for node in graph.nodes() {
        let Some(pos) = layout.position(&node.task) else {
            continue;
        };
        let (x, y) = (canvas.x(pos.column), canvas.y(pos.offset));

        let _ = writeln!(
            svg,
            "  <circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"{NODE_RADIUS}\" \
             fill=\"{NODE_FILL}\" stroke=\"{NODE_STROKE}\"/>"
        );
        let _ = writeln!(
            svg,
            "  <text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"middle\" \
             dominant-baseline=\"central\" font-size=\"12\">{}</text>",
            xml_escape(&node.task)
        );
        let _ = writeln!(
            svg,
            "  <text x=\"{x:.1}\" y=\"{ly:.1}\" text-anchor=\"middle\" font-size=\"10\" \
             fill=\"#555555\">{}</text>",
            xml_escape(&node.label),
            ly = y - NODE_RADIUS - 8.0
        );
    }
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
