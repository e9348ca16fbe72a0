//! Food-insecurity risk inference core.
//!
//! The runtime half of an offline-trained pipeline: a fitted standard
//! scaler and a K-nearest-neighbor classifier are loaded as JSON artifacts
//! and applied, unchanged, to five regional indicators. No training, no
//! gradient computation — inference only.
//!
//! ```text
//! [raw indicators] ─→ Standardize ─→ [z-scores] ─→ KNN vote ─→ class id ─→ RiskLevel
//! ```
//!
//! Both artifacts are immutable after load, so a `Predictor` can be shared
//! across threads behind a plain reference with no locking.

mod constants;
mod error;
mod knn;
mod labels;
mod predictor;
mod scaler;

pub use constants::{FEATURE_COUNT, FEATURE_NAMES};
pub use error::InferenceError;
pub use knn::{ClassVote, ReferencePoint, ReferenceSet};
pub use labels::{RiskLevel, CLASS_COUNT, RISK_LABELS};
pub use predictor::{Prediction, Predictor};
pub use scaler::ScalerParams;
