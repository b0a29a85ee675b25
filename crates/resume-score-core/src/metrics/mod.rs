//! The five metric calculators.
//!
//! Each calculator is a pure function from a resume and a lexicon to a
//! [`MetricScore`]. None depends on another's output. [`METRICS`] lists
//! them with their weights; the aggregator walks that table, so adding a
//! metric means adding a module, a [`MetricKind`] variant and a row.

pub mod ats;
pub mod content;
pub mod impact;
pub mod skills;
pub mod structure;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::report::MetricScore;
use crate::resume::ResumeData;

/// Identifies one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    /// Applicant-tracking-system parseability.
    AtsCompatibility,
    /// Bullet writing quality.
    ContentQuality,
    /// Skills list quality.
    SkillsKeywords,
    /// Quantified outcomes.
    ImpactAchievements,
    /// Layout and length.
    StructureFormatting,
}

impl MetricKind {
    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AtsCompatibility => "ATS Compatibility",
            Self::ContentQuality => "Content Quality",
            Self::SkillsKeywords => "Skills & Keywords",
            Self::ImpactAchievements => "Impact & Achievements",
            Self::StructureFormatting => "Structure & Formatting",
        }
    }
}

/// Signature shared by every calculator.
pub type Evaluate = fn(&ResumeData, &Lexicon) -> MetricScore;

/// One row of the metric table.
#[derive(Debug, Clone, Copy)]
pub struct MetricSpec {
    /// Which metric this row computes.
    pub kind: MetricKind,
    /// Share of the overall score. All weights sum to 1.0.
    pub weight: f64,
    /// The calculator.
    pub evaluate: Evaluate,
}

/// Every metric, in ranking order, with its weight.
pub const METRICS: &[MetricSpec] = &[
    MetricSpec {
        kind: MetricKind::AtsCompatibility,
        weight: 0.30,
        evaluate: ats::evaluate,
    },
    MetricSpec {
        kind: MetricKind::ContentQuality,
        weight: 0.25,
        evaluate: content::evaluate,
    },
    MetricSpec {
        kind: MetricKind::SkillsKeywords,
        weight: 0.20,
        evaluate: skills::evaluate,
    },
    MetricSpec {
        kind: MetricKind::ImpactAchievements,
        weight: 0.15,
        evaluate: impact::evaluate,
    },
    MetricSpec {
        kind: MetricKind::StructureFormatting,
        weight: 0.10,
        evaluate: structure::evaluate,
    },
];

/// Width of each band in a count ramp.
const RAMP_STEP: usize = 5;

/// Piecewise-linear points for a count.
///
/// `stops[i]` is the value at `i * 5`; counts between stops interpolate
/// linearly and counts past the last stop get the last value.
pub(crate) fn ramp(count: usize, stops: &[u32; 4]) -> u32 {
    let last = stops.len() - 1;
    let band = count / RAMP_STEP;
    if band >= last {
        return stops[last];
    }
    let (lo, hi) = (stops[band], stops[band + 1]);
    let offset = (count - band * RAMP_STEP) as f64 / RAMP_STEP as f64;
    lo + (offset * f64::from(hi - lo)).round() as u32
}

/// `round(ratio / full_at * points)`, without a ceiling.
pub(crate) fn scaled(ratio: f64, full_at: f64, points: u32) -> u32 {
    (ratio / full_at * f64::from(points)).round() as u32
}

/// `part / whole`, or zero when `whole` is zero.
pub(crate) fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let sum: f64 = METRICS.iter().map(|m| m.weight).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn every_kind_listed_once() {
        let kinds: std::collections::HashSet<_> = METRICS.iter().map(|m| m.kind).collect();
        assert_eq!(kinds.len(), METRICS.len());
        assert_eq!(METRICS.len(), 5);
    }

    #[test]
    fn ramp_interpolates_between_stops() {
        let stops = [0, 10, 20, 30];
        assert_eq!(ramp(0, &stops), 0);
        assert_eq!(ramp(3, &stops), 6);
        assert_eq!(ramp(5, &stops), 10);
        assert_eq!(ramp(12, &stops), 24);
        assert_eq!(ramp(15, &stops), 30);
        assert_eq!(ramp(40, &stops), 30);
    }

    #[test]
    fn ramp_uneven_stops() {
        let stops = [0, 20, 35, 50];
        assert_eq!(ramp(2, &stops), 8);
        assert_eq!(ramp(7, &stops), 26);
        assert_eq!(ramp(14, &stops), 47);
    }

    #[test]
    fn scaled_rounds() {
        assert_eq!(scaled(0.35, 0.70, 35), 18);
        assert_eq!(scaled(0.60, 0.60, 20), 20);
        assert_eq!(scaled(0.0, 0.60, 70), 0);
    }

    #[test]
    fn ratio_handles_zero() {
        assert_eq!(ratio(3, 0), 0.0);
        assert!((ratio(1, 4) - 0.25).abs() < f64::EPSILON);
    }
}
