use crate::domain::ir::IrNode;
use crate::domain::metrics::UnitScores;

pub mod sequence_exporter;

/// Front-end collaborator: produces fully-constructed, validated IR trees.
/// The core never requests further data from it mid-computation.
pub trait TreeLoader {
    fn load(&self, path: &str) -> anyhow::Result<IrNode>;
}

/// Reporting collaborator: receives the per-unit scalar scores.
pub trait ReportExporter {
    fn export(&self, report: &[UnitScores], path: &str) -> std::io::Result<()>;
}
