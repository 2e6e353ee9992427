use crate::model::outcome::ScoreResult;
use crate::report::{Verdict, format_score};

pub fn render_report_text(result: &ScoreResult) -> String {
    let verdict = Verdict::from_score(result.score);
    let mut out = String::new();

    out.push_str(&format!("Spectral Integrity Report: {}\n", result.label));
    out.push_str(&format!(
        "Structural integrity: {}%\n",
        format_score(result.score)
    ));
    out.push_str(&format!("Verdict: {}\n\n", verdict.statement()));

    out
}
