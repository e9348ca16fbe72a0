use crate::error::InferenceError;

/// Number of risk classes the model was trained against.
pub const CLASS_COUNT: usize = 3;

/// Canonical label strings in class-id order (matches training encoding:
/// 0 = Aman, 1 = Rentan, 2 = Rawan).
pub const RISK_LABELS: [&str; CLASS_COUNT] = ["Aman", "Rentan", "Rawan"];

/// Food-insecurity risk level for a region.
///
/// Carries both the canonical Indonesian label the model was trained
/// against and the operator guidance text, so presentation code can branch
/// on the variant instead of string-matching labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    /// Safe — vulnerability indicators well below the risk thresholds.
    Aman,
    /// Vulnerable — several indicators near the training-set average.
    Rentan,
    /// At risk — requires immediate intervention.
    Rawan,
}

impl RiskLevel {
    /// Resolve an encoded class id to its risk level.
    ///
    /// Ids outside the label map are a data inconsistency, not a crash:
    /// callers surface the error as an "unrecognized" result.
    pub fn from_class_id(id: u32) -> Result<Self, InferenceError> {
        match id {
            0 => Ok(RiskLevel::Aman),
            1 => Ok(RiskLevel::Rentan),
            2 => Ok(RiskLevel::Rawan),
            other => Err(InferenceError::UnknownClass(other)),
        }
    }

    pub fn class_id(&self) -> u32 {
        match self {
            RiskLevel::Aman => 0,
            RiskLevel::Rentan => 1,
            RiskLevel::Rawan => 2,
        }
    }

    /// Canonical label string, exactly as encoded at training time.
    pub fn label(&self) -> &'static str {
        RISK_LABELS[self.class_id() as usize]
    }

    /// Operator guidance shown alongside the verdict.
    pub fn guidance(&self) -> &'static str {
        match self {
            RiskLevel::Aman => {
                "Indicators show very low vulnerability risk, comparable to Ciamis."
            }
            RiskLevel::Rentan => {
                "Needs monitoring: several indicators sit at the training-set average. \
                 This is the majority cluster."
            }
            RiskLevel::Rawan => {
                "Requires immediate intervention. Indicator profile resembles Bogor, \
                 Sukabumi, and Garut."
            }
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
