//! Content quality: are the bullets well written?
//!
//! Operates on every non-blank work-experience bullet. Buckets: action-verb
//! openings (35), bullet length (25), clichés (20), repeated openings (20).

use std::collections::BTreeMap;

use crate::lexicon::Lexicon;
use crate::report::{ActionableItem, FeedbackTable, MetricScore, Priority, SectionId};
use crate::resume::ResumeData;
use crate::text;

use super::{ratio, scaled};

const FEEDBACK: FeedbackTable = FeedbackTable {
    excellent: "Your bullet points are strong, concise, and action-oriented.",
    good: "Your content is solid with room for sharper wording.",
    fair: "Your bullet points need stronger verbs and tighter phrasing.",
    poor: "Your experience descriptions need significant rework.",
};

const ACTION_VERB_POINTS: u32 = 35;
const ACTION_VERB_TARGET: f64 = 0.70;
const ACTION_VERB_FLOOR: f64 = 0.50;
const ACTION_VERB_FLOOR_POINTS: u32 = 25;

const LENGTH_POINTS: u32 = 25;
const MAX_BULLET_CHARS: usize = 150;
const MIN_BULLET_CHARS: usize = 40;

const CLICHE_POINTS: u32 = 20;
const CLICHE_PENALTY: u32 = 5;
const CLICHES_LISTED: usize = 3;

const REPETITION_POINTS: u32 = 20;
const REPETITION_PENALTY: u32 = 3;
const REPETITION_FLOOR: u32 = 10;
/// An opening word used more often than this counts as repeated.
const MAX_OPENING_USES: usize = 2;

/// Score bullet-writing quality.
#[tracing::instrument(skip_all)]
pub fn evaluate(resume: &ResumeData, lexicon: &Lexicon) -> MetricScore {
    let bullets: Vec<&str> = resume.bullets().collect();

    if bullets.is_empty() {
        return MetricScore::new(
            0,
            &FEEDBACK,
            vec![
                ActionableItem::new(
                    "content-no-bullets",
                    Priority::High,
                    "Add bullet points",
                    "Describe each role with 3-6 bullet points covering what you did and what it achieved.",
                )
                .in_section(SectionId::Experience),
            ],
        );
    }

    let mut items = Vec::new();
    let verbs = action_verb_points(&bullets, lexicon, &mut items);
    let length = length_points(&bullets, &mut items);
    let cliches = cliche_points(&bullets, lexicon, &mut items);
    let repetition = repetition_points(&bullets, &mut items);

    tracing::debug!(
        bullets = bullets.len(),
        verbs,
        length,
        cliches,
        repetition,
        "content buckets"
    );

    MetricScore::new(verbs + length + cliches + repetition, &FEEDBACK, items)
}

fn action_verb_points(bullets: &[&str], lexicon: &Lexicon, items: &mut Vec<ActionableItem>) -> u32 {
    let mut strong = 0;
    let mut weak = 0;
    for bullet in bullets {
        let word = text::first_word(bullet);
        if lexicon.is_action_verb(&word) {
            strong += 1;
        } else if lexicon.is_weak_verb(&word) {
            weak += 1;
        }
    }

    let share = ratio(strong, bullets.len());
    let points = if share >= ACTION_VERB_TARGET {
        ACTION_VERB_POINTS
    } else if share >= ACTION_VERB_FLOOR {
        items.push(
            ActionableItem::new(
                "content-action-verbs",
                Priority::Medium,
                "Start more bullets with action verbs",
                format!(
                    "{strong} of {} bullets open with a strong action verb. Aim for at least 70%.",
                    bullets.len()
                ),
            )
            .in_section(SectionId::Experience),
        );
        ACTION_VERB_FLOOR_POINTS
    } else {
        items.push(
            ActionableItem::new(
                "content-action-verbs",
                Priority::High,
                "Lead with action verbs",
                format!(
                    "Only {strong} of {} bullets open with a strong action verb such as \"Led\", \"Built\", or \"Increased\".",
                    bullets.len()
                ),
            )
            .in_section(SectionId::Experience),
        );
        scaled(share, ACTION_VERB_TARGET, ACTION_VERB_POINTS)
    };

    if weak > 0 {
        items.push(
            ActionableItem::new(
                "content-weak-verbs",
                Priority::Medium,
                "Replace weak verbs",
                format!(
                    "{weak} bullets open with weak verbs like \"helped\" or \"worked on\". Say what you did directly."
                ),
            )
            .in_section(SectionId::Experience),
        );
    }

    points
}

fn length_points(bullets: &[&str], items: &mut Vec<ActionableItem>) -> u32 {
    let mut too_long = 0;
    let mut too_short = 0;
    for bullet in bullets {
        let len = text::char_len(bullet);
        if len > MAX_BULLET_CHARS {
            too_long += 1;
        } else if len < MIN_BULLET_CHARS {
            too_short += 1;
        }
    }
    let well_formed = bullets.len() - too_long - too_short;

    if too_long > 0 {
        items.push(
            ActionableItem::new(
                "content-long-bullets",
                Priority::Medium,
                "Shorten long bullets",
                format!(
                    "{too_long} bullets run past {MAX_BULLET_CHARS} characters. Split them or cut filler words."
                ),
            )
            .in_section(SectionId::Experience),
        );
    }
    if too_short > 0 {
        items.push(
            ActionableItem::new(
                "content-short-bullets",
                Priority::Low,
                "Expand short bullets",
                format!(
                    "{too_short} bullets are under {MIN_BULLET_CHARS} characters. Add context or a result."
                ),
            )
            .in_section(SectionId::Experience),
        );
    }

    scaled(ratio(well_formed, bullets.len()), 1.0, LENGTH_POINTS)
}

fn cliche_points(bullets: &[&str], lexicon: &Lexicon, items: &mut Vec<ActionableItem>) -> u32 {
    let joined = bullets.join(" ");
    let found = lexicon.find_cliches(&joined);
    if found.is_empty() {
        return CLICHE_POINTS;
    }

    let listed: Vec<String> = found
        .iter()
        .take(CLICHES_LISTED)
        .map(|c| format!("\"{c}\""))
        .collect();
    items.push(
        ActionableItem::new(
            "content-cliches",
            Priority::Medium,
            "Cut clichés",
            format!(
                "Replace overused phrases such as {} with specific evidence.",
                listed.join(", ")
            ),
        )
        .in_section(SectionId::Experience),
    );

    let penalty = CLICHE_PENALTY.saturating_mul(u32::try_from(found.len()).unwrap_or(u32::MAX));
    CLICHE_POINTS.saturating_sub(penalty)
}

fn repetition_points(bullets: &[&str], items: &mut Vec<ActionableItem>) -> u32 {
    let mut openings: BTreeMap<String, usize> = BTreeMap::new();
    for bullet in bullets {
        let word = text::first_word(bullet);
        if !word.is_empty() {
            *openings.entry(word).or_insert(0) += 1;
        }
    }

    let repeated: Vec<&str> = openings
        .iter()
        .filter(|(_, count)| **count > MAX_OPENING_USES)
        .map(|(word, _)| word.as_str())
        .collect();
    if repeated.is_empty() {
        return REPETITION_POINTS;
    }

    items.push(
        ActionableItem::new(
            "content-repetition",
            Priority::Low,
            "Vary your opening verbs",
            format!(
                "These words open more than {MAX_OPENING_USES} bullets each: {}.",
                repeated.join(", ")
            ),
        )
        .in_section(SectionId::Experience),
    );

    let penalty = REPETITION_PENALTY.saturating_mul(u32::try_from(repeated.len()).unwrap_or(u32::MAX));
    REPETITION_POINTS
        .saturating_sub(penalty)
        .max(REPETITION_FLOOR)
}
