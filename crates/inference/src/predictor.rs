use std::path::Path;

use crate::error::InferenceError;
use crate::knn::ReferenceSet;
use crate::labels::{RiskLevel, CLASS_COUNT};
use crate::scaler::ScalerParams;

/// The inference pipeline: standardize → classify → resolve label.
///
/// Stateless after construction — both artifacts are validated once and
/// never mutated, so `&Predictor` is safe to share across threads with no
/// locking. There is no reload path; a new model means a new process.
#[derive(Debug, Clone)]
pub struct Predictor {
    scaler: ScalerParams,
    reference: ReferenceSet,
}

/// Result of one prediction, with the vote breakdown for the audit trail.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub level: RiskLevel,
    pub class_id: u32,
    /// Votes per class among the K neighbors, indexed by class id.
    pub votes: [usize; CLASS_COUNT],
    /// Euclidean distance to the nearest reference point, in standardized
    /// units. Large values flag inputs far outside the training data.
    pub nearest_distance: f64,
}

impl Predictor {
    /// Build from already-deserialized artifacts, re-validating both.
    pub fn new(scaler: ScalerParams, reference: ReferenceSet) -> Result<Self, InferenceError> {
        scaler.validate()?;
        reference.validate()?;
        Ok(Self { scaler, reference })
    }

    /// Load both artifacts from JSON files. Any failure here is fatal at
    /// startup: the process must not serve predictions with a partial or
    /// corrupt model.
    pub fn from_files(scaler_path: &Path, model_path: &Path) -> Result<Self, InferenceError> {
        let scaler = ScalerParams::from_file(scaler_path)?;
        let reference = ReferenceSet::from_file(model_path)?;
        Self::new(scaler, reference)
    }

    /// Classify one raw indicator vector.
    ///
    /// Deterministic and side-effect free: identical input against the same
    /// artifacts always yields the identical `Prediction`.
    pub fn predict(&self, raw: &[f64]) -> Result<Prediction, InferenceError> {
        let standardized = self.scaler.standardize(raw)?;
        let vote = self.reference.classify(&standardized)?;
        let level = RiskLevel::from_class_id(vote.class_id)?;
        Ok(Prediction {
            level,
            class_id: vote.class_id,
            votes: vote.votes,
            nearest_distance: vote.nearest_distance,
        })
    }

    pub fn scaler_id(&self) -> &str {
        &self.scaler.artifact_id
    }

    pub fn model_id(&self) -> &str {
        &self.reference.artifact_id
    }

    pub fn neighbor_count(&self) -> usize {
        self.reference.k
    }

    pub fn reference_len(&self) -> usize {
        self.reference.len()
    }
}
