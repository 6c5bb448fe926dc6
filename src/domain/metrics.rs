//! Similarity Metrics
//!
//! Scores one reference tree against a candidate set. Metrics are pure
//! functions of their inputs: no mutation, no partial or streamed output.

use crate::domain::ir::{trees_equal, IrNode};
use serde::{Deserialize, Serialize};

/// A scalar similarity metric over one reference tree and N >= 1
/// candidate trees.
pub trait Metric: Send + Sync {
    fn name(&self) -> &'static str;
    fn score(&self, reference: &IrNode, candidates: &[IrNode]) -> f64;
}

/// One named score produced by a metric run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricScore {
    pub metric: String,
    pub value: f64,
}

/// Scores for one reference-vs-candidates evaluation unit, labeled so a
/// report over many units stays attributable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitScores {
    pub unit: String,
    pub scores: Vec<MetricScore>,
}

/// 1.0 if any candidate is structurally equal to the reference, else 0.0.
pub struct ExactMatch;

impl Metric for ExactMatch {
    fn name(&self) -> &'static str {
        "exact_match"
    }

    fn score(&self, reference: &IrNode, candidates: &[IrNode]) -> f64 {
        if candidates.iter().any(|c| trees_equal(reference, c)) {
            1.0
        } else {
            0.0
        }
    }
}

/// Smallest absolute statement-count gap over the candidate set,
/// normalized by the reference's statement count.
///
/// A zero-statement reference cannot divide: the score is 0.0 when some
/// candidate also counts zero, else a sentinel 1.0. Division by zero is
/// never allowed to propagate.
pub struct StatementCountDeviation;

impl Metric for StatementCountDeviation {
    fn name(&self) -> &'static str {
        "statement_count_deviation"
    }

    fn score(&self, reference: &IrNode, candidates: &[IrNode]) -> f64 {
        let ref_count = reference.statement_count();
        let min_deviation = candidates
            .iter()
            .map(|c| c.statement_count().abs_diff(ref_count))
            .min();

        match min_deviation {
            Some(0) => 0.0,
            Some(d) if ref_count > 0 => d as f64 / ref_count as f64,
            // Zero-statement reference with a nonzero gap, or an empty
            // candidate list: sentinel maximum.
            _ => 1.0,
        }
    }
}

/// An ordered collection of metrics run together over one evaluation unit.
pub struct MetricSuite {
    metrics: Vec<Box<dyn Metric>>,
}

impl Default for MetricSuite {
    /// The standard suite: exact match plus statement-count deviation.
    fn default() -> Self {
        Self {
            metrics: vec![Box::new(ExactMatch), Box::new(StatementCountDeviation)],
        }
    }
}

impl MetricSuite {
    pub fn new(metrics: Vec<Box<dyn Metric>>) -> Self {
        Self { metrics }
    }

    /// Run every metric over the unit, in suite order.
    pub fn evaluate(&self, reference: &IrNode, candidates: &[IrNode]) -> Vec<MetricScore> {
        self.metrics
            .iter()
            .map(|m| MetricScore {
                metric: m.name().to_string(),
                value: m.score(reference, candidates),
            })
            .collect()
    }
}
