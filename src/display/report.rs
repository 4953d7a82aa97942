use crate::grid::BenchmarkReport;
use std::fmt::Write;

/// Renders a report as a short human-readable block.
pub fn format_report(report: &BenchmarkReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "grid benchmark: N = {}, K = {}",
        report.config.peak_width, report.config.commit_count
    );
    let _ = writeln!(
        out,
        "  nodes: {} ({} sources, {} unary, {} binary), depth {}, max fan-out {}",
        report.shape.total_nodes,
        report.shape.sources,
        report.shape.unary,
        report.shape.binary,
        report.shape.depth,
        report.shape.max_fan_out
    );
    if report.config.commit_count > 0 {
        let per_commit_us = report.elapsed_secs * 1e6 / report.config.commit_count as f64;
        let _ = writeln!(
            out,
            "  elapsed: {:.6} s ({:.3} us/commit)",
            report.elapsed_secs, per_commit_us
        );
    } else {
        let _ = writeln!(out, "  elapsed: 0 s (no commits issued)");
    }
    out
}

/// Serializes a report to pretty-printed JSON.
pub fn to_json(report: &BenchmarkReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
