use serde::Serialize;

use crate::model::outcome::ScoreResult;
use crate::report::Verdict;

#[derive(Debug, Serialize)]
pub struct ReportDoc {
    pub tool_name: String,
    pub tool_version: String,
    pub analyses: Vec<AnalysisRecord>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisRecord {
    pub label: String,
    pub score: f64,
    pub verdict: &'static str,
    pub bin_centers: Vec<f64>,
    pub empirical_density: Vec<f64>,
    pub theoretical_density: Vec<f64>,
}

pub fn build_report(results: &[ScoreResult]) -> ReportDoc {
    let analyses = results
        .iter()
        .map(|r| AnalysisRecord {
            label: r.label.clone(),
            score: r.score,
            verdict: Verdict::from_score(r.score).key(),
            bin_centers: r.spectrum.centers.to_vec(),
            empirical_density: r.spectrum.empirical.to_vec(),
            theoretical_density: r.spectrum.theoretical.to_vec(),
        })
        .collect();

    ReportDoc {
        tool_name: "spectral-audit".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        analyses,
    }
}

pub fn render_report_json(results: &[ScoreResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&build_report(results))
}
