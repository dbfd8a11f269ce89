// src/render/report.rs

use std::io::{self, Write};

use crate::graph::Violation;

/// Write the violation report.
///
/// One line per violating edge:
/// `<blocked> (<its sprint>) is blocked by <blocking> (<its sprint>)`.
pub fn write_violations<W: Write>(out: &mut W, violations: &[Violation]) -> io::Result<()> {
    if violations.is_empty() {
        writeln!(out, "No problematic dependencies found.")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Problematic dependencies (tasks blocked by later sprints):")?;
    writeln!(out, "{}", "-".repeat(60))?;
    for violation in violations {
        writeln!(
            out,
            "{} ({}) is blocked by {} ({})",
            violation.blocked,
            violation.blocked_label,
            violation.blocking,
            violation.blocking_label
        )?;
    }

    Ok(())
}

/// Convenience wrapper writing the report to stdout.
pub fn print_violations(violations: &[Violation]) -> io::Result<()> {
    write_violations(&mut io::stdout().lock(), violations)
}
