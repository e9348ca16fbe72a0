/// Errors from artifact loading, validation, and inference.
///
/// Load-time variants (everything except `DimensionMismatch`,
/// `NonFiniteInput`, and `UnknownClass`) are fatal: a process that cannot
/// validate both artifacts must not serve predictions. The request-scoped
/// variants reject a single prediction and leave the process healthy.
#[derive(Debug)]
pub enum InferenceError {
    /// Input or artifact vector has the wrong number of indicators.
    DimensionMismatch { expected: usize, got: usize },
    /// A raw input value is NaN or infinite.
    NonFiniteInput { index: usize, value: f64 },
    /// The classifier artifact holds no reference points.
    EmptyReferenceSet,
    /// The classifier voted for a class id outside the label map.
    UnknownClass(u32),
    /// A scaler mean/scale entry or reference coordinate is NaN or infinite.
    NonFiniteParam {
        field: &'static str,
        index: usize,
        value: f64,
    },
    /// A scale entry of zero would divide away the indicator entirely.
    ZeroScale { index: usize },
    /// Neighbor count is zero or exceeds the reference set size.
    InvalidNeighborCount { k: usize, points: usize },
    /// The artifact was fitted under a distance metric we do not implement.
    UnsupportedMetric(String),
    /// The artifact was fitted with a vote weighting we do not implement.
    UnsupportedWeighting(String),
    /// An artifact's recorded feature order disagrees with training order.
    FeatureNameMismatch {
        index: usize,
        expected: &'static str,
        got: String,
    },
    ParseJson(serde_json::Error),
    Io(std::io::Error),
}

impl std::fmt::Display for InferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionMismatch { expected, got } => {
                write!(f, "indicator dimension mismatch: expected {expected}, got {got}")
            }
            Self::NonFiniteInput { index, value } => {
                write!(f, "non-finite input at index {index}: {value}")
            }
            Self::EmptyReferenceSet => write!(f, "reference set holds no points"),
            Self::UnknownClass(id) => write!(f, "class id {id} has no risk label"),
            Self::NonFiniteParam { field, index, value } => {
                write!(f, "non-finite {field} at index {index}: {value}")
            }
            Self::ZeroScale { index } => write!(f, "scale entry at index {index} is zero"),
            Self::InvalidNeighborCount { k, points } => {
                write!(f, "neighbor count {k} invalid for {points} reference points")
            }
            Self::UnsupportedMetric(m) => write!(f, "unsupported distance metric: {m}"),
            Self::UnsupportedWeighting(w) => write!(f, "unsupported vote weighting: {w}"),
            Self::FeatureNameMismatch { index, expected, got } => {
                write!(f, "feature order mismatch at index {index}: expected {expected}, got {got}")
            }
            Self::ParseJson(e) => write!(f, "artifact JSON parse error: {e}"),
            Self::Io(e) => write!(f, "artifact file IO error: {e}"),
        }
    }
}

impl std::error::Error for InferenceError {}
