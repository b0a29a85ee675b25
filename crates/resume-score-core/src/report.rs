//! Value types produced by scoring.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::metrics::MetricKind;

/// Every metric is scored out of this.
pub const MAX_SCORE: u8 = 100;

/// Qualitative bucket for a 0–100 score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// 90 and above.
    Excellent,
    /// 75–89.
    Good,
    /// 60–74.
    Fair,
    /// Below 60.
    #[default]
    Poor,
}

impl Status {
    /// Map a score to its status. This is the only place the thresholds live.
    pub const fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Excellent,
            75..=89 => Self::Good,
            60..=74 => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Returns the status as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How urgently an item should be addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Address first.
    High,
    /// Worth doing.
    Medium,
    /// Polish.
    Low,
}

impl Priority {
    /// Sort rank: high sorts first.
    pub const fn rank(&self) -> u8 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Returns the priority as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editor section an item links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    /// Name and contact fields.
    PersonalInfo,
    /// Professional summary.
    Summary,
    /// Work history.
    Experience,
    /// Education history.
    Education,
    /// Skills list.
    Skills,
}

/// A concrete improvement suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActionableItem {
    /// Stable key, identical across runs on identical input.
    pub id: String,
    /// Short headline.
    pub title: String,
    /// What to change and why.
    pub description: String,
    /// Urgency.
    pub priority: Priority,
    /// Section to jump to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<SectionId>,
}

impl ActionableItem {
    /// Create an item.
    pub fn new(
        id: impl Into<String>,
        priority: Priority,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            priority,
            section_id: None,
        }
    }

    /// Link the item to an editor section.
    #[must_use]
    pub fn in_section(mut self, section: SectionId) -> Self {
        self.section_id = Some(section);
        self
    }
}

/// Feedback sentences for one metric, keyed by status.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackTable {
    /// Shown for [`Status::Excellent`].
    pub excellent: &'static str,
    /// Shown for [`Status::Good`].
    pub good: &'static str,
    /// Shown for [`Status::Fair`].
    pub fair: &'static str,
    /// Shown for [`Status::Poor`].
    pub poor: &'static str,
}

impl FeedbackTable {
    /// Message for a status.
    pub const fn message(&self, status: Status) -> &'static str {
        match status {
            Status::Excellent => self.excellent,
            Status::Good => self.good,
            Status::Fair => self.fair,
            Status::Poor => self.poor,
        }
    }
}

/// Result of one metric calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricScore {
    /// 0–100.
    pub score: u8,
    /// Always [`MAX_SCORE`].
    pub max_score: u8,
    /// Derived from `score`.
    pub status: Status,
    /// One fixed sentence.
    pub feedback: String,
    /// Suggestions, in emission order.
    pub actionable_items: Vec<ActionableItem>,
}

impl MetricScore {
    /// Assemble a score, deriving status and feedback from `score`.
    ///
    /// Scores above [`MAX_SCORE`] are pulled back down.
    pub fn new(score: u32, feedback: &FeedbackTable, actionable_items: Vec<ActionableItem>) -> Self {
        let score = u8::try_from(score.min(u32::from(MAX_SCORE))).unwrap_or(MAX_SCORE);
        let status = Status::from_score(score);
        Self {
            score,
            max_score: MAX_SCORE,
            status,
            feedback: feedback.message(status).to_string(),
            actionable_items,
        }
    }
}

/// The five metric results, by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// How well an applicant tracking system can parse the resume.
    pub ats_compatibility: MetricScore,
    /// Bullet writing quality.
    pub content_quality: MetricScore,
    /// Skills list quality.
    pub skills_keywords: MetricScore,
    /// Quantified outcomes.
    pub impact_achievements: MetricScore,
    /// Layout and length.
    pub structure_formatting: MetricScore,
}

impl ScoreBreakdown {
    /// The result for one metric.
    pub const fn get(&self, kind: MetricKind) -> &MetricScore {
        match kind {
            MetricKind::AtsCompatibility => &self.ats_compatibility,
            MetricKind::ContentQuality => &self.content_quality,
            MetricKind::SkillsKeywords => &self.skills_keywords,
            MetricKind::ImpactAchievements => &self.impact_achievements,
            MetricKind::StructureFormatting => &self.structure_formatting,
        }
    }

    /// Mutable access to the result for one metric.
    pub const fn get_mut(&mut self, kind: MetricKind) -> &mut MetricScore {
        match kind {
            MetricKind::AtsCompatibility => &mut self.ats_compatibility,
            MetricKind::ContentQuality => &mut self.content_quality,
            MetricKind::SkillsKeywords => &mut self.skills_keywords,
            MetricKind::ImpactAchievements => &mut self.impact_achievements,
            MetricKind::StructureFormatting => &mut self.structure_formatting,
        }
    }
}

/// A ranked suggestion in the final output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Stable key of the originating item.
    pub id: String,
    /// Urgency.
    pub priority: Priority,
    /// Short headline.
    pub title: String,
    /// What to change and why.
    pub description: String,
    /// Section to jump to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<SectionId>,
}

impl From<ActionableItem> for Recommendation {
    fn from(item: ActionableItem) -> Self {
        Self {
            id: item.id,
            priority: item.priority,
            title: item.title,
            description: item.description,
            section_id: item.section_id,
        }
    }
}

/// Final scoring result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumeScore {
    /// Weighted 0–100 score.
    pub overall: u8,
    /// Per-metric results.
    pub breakdown: ScoreBreakdown,
    /// Top suggestions, most urgent first.
    pub recommendations: Vec<Recommendation>,
}
