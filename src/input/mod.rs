use std::path::Path;

use thiserror::Error;

pub mod synthetic;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error at line {line}: invalid number {token:?}")]
    Parse { line: usize, token: String },
    #[error("no numeric values found in {0}")]
    Empty(String),
}

/// Reads a whitespace- or comma-separated list of floats from a text file.
/// Blank lines are skipped and `#` starts a comment.
pub fn load_samples(path: &Path) -> Result<Vec<f64>, InputError> {
    let content = std::fs::read_to_string(path)?;
    let values = parse_samples(&content)?;
    if values.is_empty() {
        return Err(InputError::Empty(path.display().to_string()));
    }
    tracing::info!("loaded {} values from {}", values.len(), path.display());
    Ok(values)
}

pub fn parse_samples(content: &str) -> Result<Vec<f64>, InputError> {
    let mut out = Vec::new();
    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.split('#').next().unwrap_or("");
        for token in line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let value = token.parse::<f64>().map_err(|_| InputError::Parse {
                line: idx + 1,
                token: token.to_string(),
            })?;
            out.push(value);
        }
    }
    Ok(out)
}
