use serde::{Deserialize, Serialize};

use crate::constants::FEATURE_COUNT;
use crate::error::InferenceError;
use crate::labels::CLASS_COUNT;
use crate::scaler::validate_feature_names;

/// One labeled training point in standardized space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferencePoint {
    /// Standardized coordinates (length = FEATURE_COUNT).
    pub features: Vec<f64>,
    /// Encoded risk class: 0 = Aman, 1 = Rentan, 2 = Rawan.
    pub class_id: u32,
}

/// Fitted K-nearest-neighbor classifier — loaded from JSON at startup.
///
/// The entire "model" is the standardized training set plus the neighbor
/// count; classification is a linear scan, which at the scale of a
/// per-region indicator table is faster than any index would be.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceSet {
    /// Human-readable artifact identifier.
    #[serde(default)]
    pub artifact_id: String,
    /// Neighbor count baked in at training time.
    pub k: usize,
    /// Distance metric the model was fitted under. Only "euclidean" is
    /// implemented; anything else is rejected at load.
    #[serde(default = "default_metric")]
    pub metric: String,
    /// Vote weighting. Only "uniform" is implemented; a distance-weighted
    /// artifact must be rejected rather than silently mis-voted.
    #[serde(default = "default_weights")]
    pub weights: String,
    /// Labeled training points in standardized space.
    pub points: Vec<ReferencePoint>,
    /// Indicator names (for validation; must match FEATURE_NAMES order).
    #[serde(default)]
    pub feature_names: Vec<String>,
}

fn default_metric() -> String {
    "euclidean".to_string()
}

fn default_weights() -> String {
    "uniform".to_string()
}

/// Outcome of one classification, with the vote breakdown kept for the
/// audit trail.
#[derive(Debug, Clone)]
pub struct ClassVote {
    /// Winning class id.
    pub class_id: u32,
    /// Votes per class among the K neighbors, indexed by class id.
    pub votes: [usize; CLASS_COUNT],
    /// Euclidean distance to the single nearest neighbor.
    pub nearest_distance: f64,
}

impl ReferenceSet {
    /// Validate that the artifact is structurally sound.
    pub fn validate(&self) -> Result<(), InferenceError> {
        if self.points.is_empty() {
            return Err(InferenceError::EmptyReferenceSet);
        }
        if self.k == 0 || self.k > self.points.len() {
            return Err(InferenceError::InvalidNeighborCount {
                k: self.k,
                points: self.points.len(),
            });
        }
        if self.metric != "euclidean" {
            return Err(InferenceError::UnsupportedMetric(self.metric.clone()));
        }
        if self.weights != "uniform" {
            return Err(InferenceError::UnsupportedWeighting(self.weights.clone()));
        }
        for point in &self.points {
            if point.features.len() != FEATURE_COUNT {
                return Err(InferenceError::DimensionMismatch {
                    expected: FEATURE_COUNT,
                    got: point.features.len(),
                });
            }
            for (i, &v) in point.features.iter().enumerate() {
                if !v.is_finite() {
                    return Err(InferenceError::NonFiniteParam {
                        field: "reference point",
                        index: i,
                        value: v,
                    });
                }
            }
            if point.class_id as usize >= CLASS_COUNT {
                return Err(InferenceError::UnknownClass(point.class_id));
            }
        }
        validate_feature_names(&self.feature_names)?;
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> Result<Self, InferenceError> {
        let set: Self = serde_json::from_str(json).map_err(InferenceError::ParseJson)?;
        set.validate()?;
        Ok(set)
    }

    /// Load from a JSON file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, InferenceError> {
        let content = std::fs::read_to_string(path).map_err(InferenceError::Io)?;
        Self::from_json(&content)
    }

    /// Classify one standardized vector by plurality vote among the K
    /// nearest reference points.
    ///
    /// Candidates are ordered by `(distance, class_id)` under
    /// `f64::total_cmp`, so the result is independent of how the points are
    /// stored. Plurality ties break toward the tied class holding the
    /// nearest neighbor.
    pub fn classify(&self, standardized: &[f64]) -> Result<ClassVote, InferenceError> {
        if self.points.is_empty() {
            return Err(InferenceError::EmptyReferenceSet);
        }
        if standardized.len() != FEATURE_COUNT {
            return Err(InferenceError::DimensionMismatch {
                expected: FEATURE_COUNT,
                got: standardized.len(),
            });
        }

        // Squared distances order identically to distances; the sqrt is
        // deferred to the one value we report.
        let mut candidates: Vec<(f64, u32)> = self
            .points
            .iter()
            .map(|p| (squared_distance(standardized, &p.features), p.class_id))
            .collect();
        candidates.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        // validate() guarantees 1 <= k <= len; clamp anyway so a hand-built
        // set can never slice out of range.
        let k = self.k.clamp(1, candidates.len());
        let neighbors = &candidates[..k];

        let mut votes = [0usize; CLASS_COUNT];
        for &(_, class_id) in neighbors {
            // validate() bounds class ids, but a hand-built set bypasses it;
            // an out-of-range id is a data inconsistency, not a panic.
            if class_id as usize >= CLASS_COUNT {
                return Err(InferenceError::UnknownClass(class_id));
            }
            votes[class_id as usize] += 1;
        }
        let top = votes.iter().copied().max().unwrap_or(0);

        // Neighbors are already nearest-first, so the first neighbor whose
        // class reached the plurality count is the nearest-distance winner.
        let mut winner = None;
        for &(_, class_id) in neighbors {
            if votes[class_id as usize] == top {
                winner = Some(class_id);
                break;
            }
        }
        let class_id = winner.unwrap_or(neighbors[0].1);

        Ok(ClassVote {
            class_id,
            votes,
            nearest_distance: neighbors[0].0.sqrt(),
        })
    }

    /// Number of stored reference points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(ai, bi)| {
            let d = ai - bi;
            d * d
        })
        .sum()
}
