use crate::extensions::metrics::HypervolumeMetrics;
use std::io::Write;
use tourmo_core::prelude::*;

/// Writes binary coverage report: a summary table with interpretation followed by details per pair.
pub fn write_coverage_report<W: Write>(mut writer: W, rows: &[CoverageRow]) -> GenericResult<()> {
    writeln!(writer, "Binary Coverage Calculation Report")?;
    writeln!(writer, "==================================")?;
    writeln!(writer)?;
    writeln!(writer, "Implementation following:")?;
    writeln!(writer, "1. 'Performance Assessment of Multiobjective Optimizers' (Zitzler et al., 2003)")?;
    writeln!(writer, "2. 'Evolutionary algorithms for solving multi-objective problems' (Coello et al., 2007)")?;
    writeln!(writer)?;
    writeln!(writer, "The binary coverage metric C(A,B) measures the fraction of solutions in set B")?;
    writeln!(writer, "that are weakly dominated by at least one solution in set A. Values of C(A,B)")?;
    writeln!(writer, "and C(B,A) should be considered together for a complete comparison.")?;
    writeln!(writer)?;

    writeln!(writer, "Summary Table:")?;
    writeln!(writer, "Algorithm A | Algorithm B | C(A,B) | Interpretation")?;
    writeln!(writer, "------------|-------------|--------|---------------")?;
    for row in rows {
        writeln!(
            writer,
            "{:<11} | {:<11} | {:.4} | {}",
            row.algorithm_a,
            row.algorithm_b,
            row.coverage_a_b,
            row.interpretation()
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "Detailed Results:")?;
    writeln!(writer, "----------------")?;
    for row in rows {
        writeln!(writer, "C({}, {}) = {:.4}", row.algorithm_a, row.algorithm_b, row.coverage_a_b)?;
        writeln!(writer, "- {}: {} non-dominated solutions", row.algorithm_a, row.solutions_a)?;
        writeln!(writer, "- {}: {} non-dominated solutions", row.algorithm_b, row.solutions_b)?;
        match &row.note {
            Some(note) => writeln!(writer, "- Note: {note}")?,
            None => writeln!(
                writer,
                "- {:.2}% of {}'s solutions are weakly dominated by at least one solution from {}",
                row.coverage_a_b * 100.,
                row.algorithm_b,
                row.algorithm_a
            )?,
        }
        writeln!(writer)?;
    }

    writer.flush()?;

    Ok(())
}

/// Writes hypervolume report: bounds and reference point used, then results per algorithm.
pub fn write_hypervolume_report<W: Write>(mut writer: W, metrics: &HypervolumeMetrics) -> GenericResult<()> {
    writeln!(writer, "Hypervolume Calculation Report")?;
    writeln!(writer, "==============================")?;
    writeln!(writer)?;
    writeln!(writer, "Implementation following:")?;
    writeln!(writer, "1. 'A Faster Algorithm for Calculating Hypervolume' (While et al., 2006)")?;
    writeln!(writer, "2. 'Performance Assessment of Multiobjective Optimizers' (Zitzler et al., 2003)")?;
    writeln!(writer, "3. 'Adjusting normalization bounds to improve hypervolume' (Wang et al., 2023)")?;
    writeln!(writer)?;

    writeln!(writer, "Problem-specific bounds used for normalization:")?;
    writeln!(writer, "- Ideal point: {}", format_vector(&metrics.bounds.ideal_point()))?;
    writeln!(writer, "- Nadir point: {}", format_vector(&metrics.bounds.nadir_point()))?;
    writeln!(writer)?;
    writeln!(writer, "Reference point: {}", format_vector(&metrics.reference))?;
    writeln!(writer, "(Note: maximized objectives are stored as negated values)")?;
    writeln!(writer)?;

    writeln!(writer, "Algorithm Results:")?;
    writeln!(writer, "-----------------")?;
    for row in metrics.rows.iter() {
        writeln!(writer, "{}:", row.algorithm)?;
        writeln!(writer, "  - Solutions: {}", row.solution_count)?;
        writeln!(writer, "  - Raw Hypervolume: {}", row.raw_hypervolume)?;
        writeln!(writer, "  - Normalized Hypervolume: {}", row.hypervolume)?;
        for issue in row.issues.iter() {
            let severity = if issue.is_inconsistency() { "Warning" } else { "Note" };
            writeln!(writer, "  - {severity}: {issue}")?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "Higher hypervolume values indicate better approximation sets, capturing both")?;
    writeln!(writer, "convergence to the Pareto front and diversity of solutions.")?;

    writer.flush()?;

    Ok(())
}

fn format_vector(vector: &ObjectiveVector) -> String {
    let values = vector.values().iter().map(|value| format!("{value:.2}")).collect::<Vec<_>>();

    format!("[{}]", values.join(", "))
}
