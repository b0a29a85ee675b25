//! Experience-level classification.
//!
//! Buckets a candidate into a tier from the number of listed roles. Years
//! are estimated at a flat two per role; actual dates are not consulted.

use std::ops::RangeInclusive;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::resume::ResumeData;

/// Assumed tenure per listed role.
const YEARS_PER_ROLE: usize = 2;

/// Estimated years at which a candidate counts as senior.
const SENIOR_YEARS: usize = 10;

/// Role count at which a candidate counts as senior regardless of years.
const SENIOR_ROLES: usize = 5;

/// Estimated years at which a candidate counts as mid-level.
const MID_YEARS: usize = 3;

/// Career tier driving per-tier thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// Early career.
    Entry,
    /// Several roles.
    Mid,
    /// Long career.
    Senior,
}

impl ExperienceLevel {
    /// Acceptable non-blank bullet count per job.
    pub const fn bullet_band(&self) -> RangeInclusive<usize> {
        match self {
            Self::Entry => 3..=5,
            Self::Mid => 5..=7,
            Self::Senior => 7..=10,
        }
    }

    /// Target resume length in pages.
    pub const fn target_pages(&self) -> u32 {
        match self {
            Self::Entry => 1,
            Self::Mid | Self::Senior => 2,
        }
    }

    /// Returns the level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Mid => "mid",
            Self::Senior => "senior",
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a resume by its number of work-experience entries.
pub fn classify(resume: &ResumeData) -> ExperienceLevel {
    let roles = resume.work_experience.len();
    let estimated_years = roles * YEARS_PER_ROLE;

    if estimated_years >= SENIOR_YEARS || roles >= SENIOR_ROLES {
        ExperienceLevel::Senior
    } else if estimated_years >= MID_YEARS {
        ExperienceLevel::Mid
    } else {
        ExperienceLevel::Entry
    }
}
