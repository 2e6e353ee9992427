use std::path::Path;

use crate::model::outcome::ScoreResult;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Text,
    Json,
    Both,
}

/// Three-way classification of an integrity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Robust,
    Transitional,
    Noise,
}

impl Verdict {
    pub fn from_score(score: f64) -> Self {
        if score > 80.0 {
            Verdict::Robust
        } else if score < 30.0 {
            Verdict::Noise
        } else {
            Verdict::Transitional
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Verdict::Robust => "robust",
            Verdict::Transitional => "transitional",
            Verdict::Noise => "noise",
        }
    }

    pub fn statement(self) -> &'static str {
        match self {
            Verdict::Robust => "ROBUST SYSTEM (GUE - natural order)",
            Verdict::Transitional => "TRANSITIONAL / SUSPECT",
            Verdict::Noise => "NOISE OR FRACTURE (Poisson - random)",
        }
    }
}

pub fn format_score(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn write_reports(
    results: &[ScoreResult],
    out_dir: &Path,
    mode: ReportMode,
) -> std::io::Result<()> {
    std::fs::create_dir_all(out_dir)?;

    if matches!(mode, ReportMode::Text | ReportMode::Both) {
        let mut body = String::new();
        for result in results {
            body.push_str(&text::render_report_text(result));
        }
        let path = out_dir.join("report.txt");
        std::fs::write(&path, body)?;
        tracing::info!("wrote {}", path.display());
    }

    if matches!(mode, ReportMode::Json | ReportMode::Both) {
        let payload = json::render_report_json(results).map_err(std::io::Error::other)?;
        let path = out_dir.join("report.json");
        std::fs::write(&path, payload)?;
        tracing::info!("wrote {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(Verdict::from_score(100.0), Verdict::Robust);
        assert_eq!(Verdict::from_score(80.01), Verdict::Robust);
        assert_eq!(Verdict::from_score(80.0), Verdict::Transitional);
        assert_eq!(Verdict::from_score(30.0), Verdict::Transitional);
        assert_eq!(Verdict::from_score(29.99), Verdict::Noise);
        assert_eq!(Verdict::from_score(0.01), Verdict::Noise);
    }

    #[test]
    fn test_format_score_two_decimals() {
        assert_eq!(format_score(72.12589), "72.13");
        assert_eq!(format_score(100.0), "100.00");
    }
}
