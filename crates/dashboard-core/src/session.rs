use anyhow::{bail, Result};

use inference::{InferenceError, Prediction, RiskLevel, FEATURE_NAMES};

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Parse one prompt line into raw indicator values.
///
/// Accepts comma or whitespace separators and `_` digit grouping for large
/// rupiah amounts ("3_500_000 650 9.5 25.0 90.0"). Length is not enforced
/// here — the core rejects wrong-dimension vectors, and that path must stay
/// exercised.
pub fn parse_indicators(line: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for token in line.split(|c: char| c == ',' || c.is_whitespace()) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let cleaned = token.replace('_', "");
        match cleaned.parse::<f64>() {
            Ok(v) => values.push(v),
            Err(_) => bail!("not a number: {token:?}"),
        }
    }
    if values.is_empty() {
        bail!("empty input");
    }
    Ok(values)
}

/// The prompt header listing the expected indicator order.
pub fn prompt_header() -> String {
    format!(
        "Enter {} indicators ({}), or 'quit':",
        FEATURE_NAMES.len(),
        FEATURE_NAMES.join(", ")
    )
}

fn level_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Aman => GREEN,
        RiskLevel::Rentan => YELLOW,
        RiskLevel::Rawan => RED,
    }
}

/// Render a color-coded verdict with guidance text and the vote breakdown.
pub fn render_prediction(prediction: &Prediction, color: bool) -> String {
    let label = prediction.level.label();
    let verdict = if color {
        let tint = level_color(prediction.level);
        format!("{BOLD}{tint}{label}{RESET}")
    } else {
        label.to_string()
    };
    format!(
        "Region classified as {verdict} (votes {}/{}/{}, nearest distance {:.3})\n  {}",
        prediction.votes[0],
        prediction.votes[1],
        prediction.votes[2],
        prediction.nearest_distance,
        prediction.level.guidance(),
    )
}

/// Render a request-scoped inference failure. Only the offending request is
/// rejected; the session keeps serving.
pub fn render_request_error(err: &InferenceError) -> String {
    match err {
        InferenceError::UnknownClass(id) => {
            format!("Unrecognized risk label (class id {id}); model artifact may be inconsistent.")
        }
        other => format!("Input rejected: {other}"),
    }
}

#[cfg(test)]
mod tests;
