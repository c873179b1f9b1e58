//! Report generation: drives grading over a roster and writes the output.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::roster::Roster;
use crate::summary::StudentSummary;

/// Writes one summary line per student to `out`, in roster insertion order.
///
/// # Errors
///
/// A student with an empty score list aborts the run: lines already written
/// stay written, and that student and any after them produce no output.
pub fn write_report(roster: &Roster, out: &mut impl Write) -> Result<()> {
    for student in roster.students() {
        let summary = StudentSummary::from_student(student)?;
        debug!(
            student = %summary.name,
            average = summary.average,
            grade = %summary.grade,
            "Student graded"
        );
        writeln!(out, "{}", summary.line())?;
    }

    Ok(())
}
