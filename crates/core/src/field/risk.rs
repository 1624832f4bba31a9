//! Peak-intensity risk bucketing.

use serde::{Deserialize, Serialize};

use super::field_data::Field;

/// Thresholds on peak field intensity separating the risk buckets.
///
/// Comparisons are strict, so a peak sitting exactly on a threshold falls
/// into the bucket below it.
pub mod thresholds {
    /// Above this the situation is critical.
    pub const CRITICAL: f32 = 0.8;
    /// Above this the situation is high risk.
    pub const HIGH: f32 = 0.6;
    /// Above this the situation is moderate; anything lower is low risk.
    pub const MODERATE: f32 = 0.3;
}

/// Coarse risk bucket derived from a field's hottest cell.
///
/// Ordered by severity, so buckets compare directly: `Critical > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    /// Buckets a raw peak intensity.
    #[must_use]
    pub fn from_peak(value: f32) -> Self {
        if value > thresholds::CRITICAL {
            Self::Critical
        } else if value > thresholds::HIGH {
            Self::High
        } else if value > thresholds::MODERATE {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Buckets an entire field by its hottest cell.
    #[must_use]
    pub fn classify(field: &Field) -> Self {
        Self::from_peak(field.peak().2)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Critical => "Critical",
        };
        write!(f, "{label}")
    }
}
