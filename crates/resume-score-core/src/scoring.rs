//! Aggregation and recommendation ranking.
//!
//! [`ResumeScorer`] runs every row of [`METRICS`] against a resume, folds
//! the weighted scores into one overall number and keeps the most urgent
//! suggestions.

use crate::lexicon::Lexicon;
use crate::metrics::METRICS;
use crate::report::{ActionableItem, Recommendation, ResumeScore, ScoreBreakdown};
use crate::resume::ResumeData;

/// Most recommendations returned in a [`ResumeScore`].
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Score a resume with the built-in lexicon.
pub fn compute_resume_score(resume: &ResumeData) -> ResumeScore {
    score_with(resume, Lexicon::builtin())
}

/// Scores resumes against a fixed lexicon.
///
/// Holds no state beyond the lexicon, so one scorer can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct ResumeScorer {
    lexicon: Lexicon,
}

impl ResumeScorer {
    /// Create a scorer using a custom lexicon.
    pub const fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// The lexicon this scorer classifies words with.
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score a resume.
    pub fn score(&self, resume: &ResumeData) -> ResumeScore {
        score_with(resume, &self.lexicon)
    }
}

#[tracing::instrument(skip_all, fields(
    roles = resume.work_experience.len(),
    skills = resume.skills.len(),
))]
fn score_with(resume: &ResumeData, lexicon: &Lexicon) -> ResumeScore {
    let mut breakdown = ScoreBreakdown::default();
    let mut weighted = 0.0;
    let mut items = Vec::new();

    for metric in METRICS {
        let result = (metric.evaluate)(resume, lexicon);
        tracing::debug!(metric = metric.kind.label(), score = result.score, "metric scored");
        weighted += metric.weight * f64::from(result.score);
        items.extend(result.actionable_items.iter().cloned());
        *breakdown.get_mut(metric.kind) = result;
    }

    let overall = overall_from(weighted);
    tracing::info!(overall, items = items.len(), "scored resume");

    ResumeScore {
        overall,
        breakdown,
        recommendations: rank(items),
    }
}

/// Round the weighted sum into the 0–100 range.
fn overall_from(weighted: f64) -> u8 {
    weighted.round().clamp(0.0, 100.0) as u8
}

/// Stable-sort by priority and keep the first [`MAX_RECOMMENDATIONS`].
///
/// Items of equal priority keep their metric order, then their emission
/// order within the metric.
pub fn rank(mut items: Vec<ActionableItem>) -> Vec<Recommendation> {
    items.sort_by_key(|item| item.priority.rank());
    items
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(Recommendation::from)
        .collect()
}
