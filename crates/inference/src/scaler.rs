use serde::{Deserialize, Serialize};

use crate::constants::{FEATURE_COUNT, FEATURE_NAMES};
use crate::error::InferenceError;

/// Fitted standard-scaler parameters — loaded from JSON at startup.
///
/// Exported from the offline training run: per-indicator mean and scale
/// (standard deviation) over the training set. Applying them reproduces the
/// training-time `(x - mean) / scale` transform exactly, which is required
/// for the reference set's standardized coordinates to stay comparable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParams {
    /// Human-readable artifact identifier.
    #[serde(default)]
    pub artifact_id: String,
    /// Per-indicator mean (length = FEATURE_COUNT).
    pub mean: Vec<f64>,
    /// Per-indicator scale (length = FEATURE_COUNT).
    pub scale: Vec<f64>,
    /// Indicator names (for validation; must match FEATURE_NAMES order).
    #[serde(default)]
    pub feature_names: Vec<String>,
}

impl ScalerParams {
    /// Validate that the artifact is structurally sound.
    pub fn validate(&self) -> Result<(), InferenceError> {
        if self.mean.len() != FEATURE_COUNT {
            return Err(InferenceError::DimensionMismatch {
                expected: FEATURE_COUNT,
                got: self.mean.len(),
            });
        }
        if self.scale.len() != FEATURE_COUNT {
            return Err(InferenceError::DimensionMismatch {
                expected: FEATURE_COUNT,
                got: self.scale.len(),
            });
        }
        for (i, &m) in self.mean.iter().enumerate() {
            if !m.is_finite() {
                return Err(InferenceError::NonFiniteParam {
                    field: "mean",
                    index: i,
                    value: m,
                });
            }
        }
        for (i, &s) in self.scale.iter().enumerate() {
            if !s.is_finite() {
                return Err(InferenceError::NonFiniteParam {
                    field: "scale",
                    index: i,
                    value: s,
                });
            }
            if s == 0.0 {
                return Err(InferenceError::ZeroScale { index: i });
            }
        }
        validate_feature_names(&self.feature_names)?;
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> Result<Self, InferenceError> {
        let params: Self = serde_json::from_str(json).map_err(InferenceError::ParseJson)?;
        params.validate()?;
        Ok(params)
    }

    /// Load from a JSON file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, InferenceError> {
        let content = std::fs::read_to_string(path).map_err(InferenceError::Io)?;
        Self::from_json(&content)
    }

    /// Standardize one raw indicator vector: `out[i] = (raw[i] - mean[i]) / scale[i]`.
    ///
    /// Pure — no clamping, no rounding. Rejects wrong-length and non-finite
    /// input; both are request-scoped errors.
    pub fn standardize(&self, raw: &[f64]) -> Result<[f64; FEATURE_COUNT], InferenceError> {
        if raw.len() != FEATURE_COUNT {
            return Err(InferenceError::DimensionMismatch {
                expected: FEATURE_COUNT,
                got: raw.len(),
            });
        }
        for (i, &v) in raw.iter().enumerate() {
            if !v.is_finite() {
                return Err(InferenceError::NonFiniteInput { index: i, value: v });
            }
        }

        let mut out = [0.0f64; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            out[i] = (raw[i] - self.mean[i]) / self.scale[i];
        }
        Ok(out)
    }
}

/// Artifacts may omit feature names; when present they must match training
/// order exactly, since a silent reorder would scramble every prediction.
pub(crate) fn validate_feature_names(names: &[String]) -> Result<(), InferenceError> {
    if names.is_empty() {
        return Ok(());
    }
    if names.len() != FEATURE_COUNT {
        return Err(InferenceError::DimensionMismatch {
            expected: FEATURE_COUNT,
            got: names.len(),
        });
    }
    for (i, (got, expected)) in names.iter().zip(FEATURE_NAMES.iter()).enumerate() {
        if got != expected {
            return Err(InferenceError::FeatureNameMismatch {
                index: i,
                expected,
                got: got.clone(),
            });
        }
    }
    Ok(())
}
