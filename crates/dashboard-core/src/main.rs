mod config;
mod session;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use inference::{InferenceError, Predictor};

use config::DashboardConfig;
use session::{parse_indicators, prompt_header, render_prediction, render_request_error};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = DashboardConfig::load()?;

    // Both artifacts or nothing: a process that cannot load the fitted
    // scaler and classifier must refuse to serve predictions.
    let predictor = Predictor::from_files(&config.scaler_path, &config.model_path)
        .map_err(|e| {
            error!(
                scaler = %config.scaler_path.display(),
                model = %config.model_path.display(),
                "artifact load failed: {e}"
            );
            e
        })
        .context("refusing to serve without both fitted artifacts")?;

    info!(
        scaler_id = predictor.scaler_id(),
        model_id = predictor.model_id(),
        k = predictor.neighbor_count(),
        reference_points = predictor.reference_len(),
        "panganwatch dashboard core started"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&predictor, &config, stdin.lock(), stdout.lock())?;

    info!("panganwatch stopped");
    Ok(())
}

/// Synchronous prompt loop. One line, one prediction; malformed input
/// rejects that request only.
fn run_session<R: BufRead, W: Write>(
    predictor: &Predictor,
    config: &DashboardConfig,
    reader: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "{}", prompt_header())?;
    for line in reader.lines() {
        let line = line.context("stdin read failed")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            break;
        }

        let raw = match parse_indicators(trimmed) {
            Ok(values) => values,
            Err(e) => {
                writeln!(out, "Input rejected: {e}")?;
                continue;
            }
        };

        match predictor.predict(&raw) {
            Ok(prediction) => {
                debug!(
                    class_id = prediction.class_id,
                    nearest_distance = prediction.nearest_distance,
                    "prediction served"
                );
                writeln!(out, "{}", render_prediction(&prediction, config.color))?;
            }
            Err(e @ InferenceError::EmptyReferenceSet) => {
                // Load-time validation makes this unreachable; if it ever
                // fires the artifact is corrupt and the process must stop.
                error!("corrupt reference set: {e}");
                return Err(e.into());
            }
            Err(e) => {
                writeln!(out, "{}", render_request_error(&e))?;
            }
        }
    }
    Ok(())
}
