//! Evaluation Usecase
//!
//! Wires the tree-loading and report-writing collaborators around the
//! pure scoring core.

use crate::domain::ir::IrNode;
use crate::domain::metrics::{MetricSuite, UnitScores};
use crate::ports::{ReportExporter, TreeLoader};
use anyhow::{Context, Result};
use rayon::prelude::*;

/// One reference tree with the candidate trees synthesized for it.
pub struct EvaluationUnit {
    pub name: String,
    pub reference: IrNode,
    pub candidates: Vec<IrNode>,
}

/// Score every unit with the suite.
///
/// Trees are immutable and metrics are pure, so units are scored in
/// parallel with no synchronization; output order matches input order.
pub fn score_units(units: &[EvaluationUnit], suite: &MetricSuite) -> Vec<UnitScores> {
    units
        .par_iter()
        .map(|unit| UnitScores {
            unit: unit.name.clone(),
            scores: suite.evaluate(&unit.reference, &unit.candidates),
        })
        .collect()
}

pub struct EvaluateUsecase<'a> {
    pub loader: &'a dyn TreeLoader,
    pub exporter: &'a dyn ReportExporter,
}

impl<'a> EvaluateUsecase<'a> {
    /// Load one reference and its candidates, score them, and write the
    /// report to `output`.
    pub fn run(
        &self,
        unit_name: &str,
        reference_path: &str,
        candidate_paths: &[String],
        suite: &MetricSuite,
        output: &str,
    ) -> Result<Vec<UnitScores>> {
        let reference = self.loader.load(reference_path)?;
        let candidates = candidate_paths
            .iter()
            .map(|p| self.loader.load(p))
            .collect::<Result<Vec<_>>>()?;

        let unit = EvaluationUnit {
            name: unit_name.to_string(),
            reference,
            candidates,
        };
        let report = score_units(&[unit], suite);

        self.exporter
            .export(&report, output)
            .with_context(|| format!("Failed to write report to {}", output))?;
        Ok(report)
    }
}
