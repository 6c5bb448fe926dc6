use crate::api::dto::ReportDto;
use crate::domain::metrics::UnitScores;
use crate::ports::ReportExporter;
use std::io::Result;

/// Writes the evaluation report as pretty-printed JSON.
pub struct JsonReportWriter;

impl ReportExporter for JsonReportWriter {
    fn export(&self, report: &[UnitScores], path: &str) -> Result<()> {
        let dto = ReportDto::from(report.to_vec());
        let content = serde_json::to_string_pretty(&dto)
            .map_err(std::io::Error::from)?;
        std::fs::write(path, content)
    }
}

/// Writes the evaluation report as human-readable text, one unit block
/// per reference with its metric scores indented below.
pub struct TextReportWriter;

impl TextReportWriter {
    pub fn to_text(report: &[UnitScores]) -> String {
        let mut lines = Vec::new();
        for unit in report {
            lines.push(format!("unit {}", unit.unit));
            for score in &unit.scores {
                lines.push(format!("  {} = {:.4}", score.metric, score.value));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

impl ReportExporter for TextReportWriter {
    fn export(&self, report: &[UnitScores], path: &str) -> Result<()> {
        std::fs::write(path, Self::to_text(report))
    }
}
