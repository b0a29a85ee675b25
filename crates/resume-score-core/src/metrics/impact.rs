//! Impact and achievements: do the bullets quantify results?
//!
//! Buckets: metric coverage (70), outcome-tied metrics (20), career
//! progression (10).

use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::Lexicon;
use crate::report::{ActionableItem, FeedbackTable, MetricScore, Priority, SectionId};
use crate::resume::ResumeData;

use super::{ratio, scaled};

const FEEDBACK: FeedbackTable = FeedbackTable {
    excellent: "Your achievements are well quantified and outcome-focused.",
    good: "Good use of metrics. Tie a few more of them to outcomes.",
    fair: "Add numbers to show the scale and impact of your work.",
    poor: "Your bullets describe duties, not results. Quantify your impact.",
};

/// Any quantity: percentages, dollar amounts, "N+" / "Nk+" counts, or
/// "by/over/under N".
static BASIC_METRIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+(?:\.\d+)?\s*%|\$\s?\d|\b\d[\d,.]*\s*[km]?\+|\b(?:by|over|under)\s+\$?\d")
        .expect("valid regex")
});

/// A quantity tied to an explicit outcome ("increased X by 30%",
/// "saved $2M", "25% reduction").
static STRONG_METRIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:increased|improved|boosted|grew|raised|accelerated|reduced|decreased|cut|lowered|shortened)\b[^.;]*?\bby\s+\$?\d",
        r"|\b(?:saved|generated|delivered|secured|drove)\s+(?:over\s+|more\s+than\s+)?\$\s?\d",
        r"|\b\d+(?:\.\d+)?\s*%\s+(?:increase|reduction|decrease|improvement|growth|faster|fewer|less|more)\b",
    ))
    .expect("valid regex")
});

const COVERAGE_POINTS: u32 = 70;
const COVERAGE_TARGET: f64 = 0.60;
const COVERAGE_FLOOR: f64 = 0.40;
const COVERAGE_FLOOR_POINTS: u32 = 50;

const OUTCOME_POINTS: u32 = 20;
const OUTCOME_TARGET: f64 = 0.60;

/// Whether a bullet contains any quantity.
pub fn has_metric(bullet: &str) -> bool {
    BASIC_METRIC.is_match(bullet)
}

/// Whether a bullet ties a quantity to an outcome.
pub fn has_outcome_metric(bullet: &str) -> bool {
    STRONG_METRIC.is_match(bullet)
}

/// Score quantified impact.
#[tracing::instrument(skip_all)]
pub fn evaluate(resume: &ResumeData, _lexicon: &Lexicon) -> MetricScore {
    let bullets: Vec<&str> = resume.bullets().collect();

    if bullets.is_empty() {
        return MetricScore::new(
            0,
            &FEEDBACK,
            vec![
                ActionableItem::new(
                    "impact-no-bullets",
                    Priority::High,
                    "Describe your achievements",
                    "Add bullet points to your roles that show what changed because of your work.",
                )
                .in_section(SectionId::Experience),
            ],
        );
    }

    let with_metric = bullets.iter().filter(|b| has_metric(b)).count();
    let with_outcome = bullets.iter().filter(|b| has_outcome_metric(b)).count();

    let mut items = Vec::new();
    let coverage = coverage_points(with_metric, bullets.len(), &mut items);
    let outcomes = outcome_points(with_outcome, with_metric, bullets.len(), &mut items);
    let progression = progression_points(resume.work_experience.len());

    tracing::debug!(
        bullets = bullets.len(),
        with_metric,
        with_outcome,
        coverage,
        outcomes,
        progression,
        "impact buckets"
    );

    MetricScore::new(coverage + outcomes + progression, &FEEDBACK, items)
}

fn coverage_points(with_metric: usize, total: usize, items: &mut Vec<ActionableItem>) -> u32 {
    let share = ratio(with_metric, total);
    if share >= COVERAGE_TARGET {
        COVERAGE_POINTS
    } else if share >= COVERAGE_FLOOR {
        items.push(
            ActionableItem::new(
                "impact-metrics",
                Priority::Medium,
                "Quantify more bullets",
                format!(
                    "{with_metric} of {total} bullets include a number. Aim for at least 60%."
                ),
            )
            .in_section(SectionId::Experience),
        );
        COVERAGE_FLOOR_POINTS
    } else if with_metric > 0 {
        items.push(
            ActionableItem::new(
                "impact-metrics",
                Priority::High,
                "Quantify your achievements",
                format!(
                    "Only {with_metric} of {total} bullets include a number. Add percentages, dollar amounts, or counts."
                ),
            )
            .in_section(SectionId::Experience),
        );
        scaled(share, COVERAGE_TARGET, COVERAGE_POINTS)
    } else {
        items.push(
            ActionableItem::new(
                "impact-no-metrics",
                Priority::High,
                "Add measurable results",
                "None of your bullets include a number. Show scale and results with percentages, dollar amounts, or team sizes.",
            )
            .in_section(SectionId::Experience),
        );
        0
    }
}

fn outcome_points(
    with_outcome: usize,
    with_metric: usize,
    total: usize,
    items: &mut Vec<ActionableItem>,
) -> u32 {
    // Not capped here: a share above the target can push the metric past 100,
    // and `MetricScore::new` pulls the total back down.
    let points = scaled(ratio(with_outcome, total), OUTCOME_TARGET, OUTCOME_POINTS);
    if points < OUTCOME_POINTS && with_metric > 0 {
        items.push(
            ActionableItem::new(
                "impact-outcomes",
                Priority::Low,
                "Tie numbers to outcomes",
                "Phrase metrics as results, for example \"reduced costs by 20%\" or \"generated $1M in new revenue\".",
            )
            .in_section(SectionId::Experience),
        );
    }
    points
}

const fn progression_points(roles: usize) -> u32 {
    match roles {
        0 => 0,
        1 => 5,
        _ => 10,
    }
}
