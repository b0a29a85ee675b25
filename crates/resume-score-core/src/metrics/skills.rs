//! Skills and keywords: is the skills list specific, balanced and unique?
//!
//! Buckets: hard-skill count (50), soft/hard balance (30), diversity (20).

use std::collections::HashSet;

use crate::lexicon::Lexicon;
use crate::report::{ActionableItem, FeedbackTable, MetricScore, Priority, SectionId};
use crate::resume::{ResumeData, Skill};

use super::{ramp, ratio};

const FEEDBACK: FeedbackTable = FeedbackTable {
    excellent: "Your skills section is comprehensive and well balanced.",
    good: "Your skills section is solid. A few additions would strengthen it.",
    fair: "Your skills section needs more specific, technical skills.",
    poor: "Your skills section needs significant expansion.",
};

/// Hard-skill points at 0, 5, 10 and 15+ hard skills.
const HARD_SKILL_STOPS: [u32; 4] = [0, 20, 35, 50];

const BALANCED_SOFT_SHARE: f64 = 0.30;
const HEAVY_SOFT_SHARE: f64 = 0.50;

/// Raw counts over a skills list. Every entry counts, duplicates included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillStats {
    /// All entries.
    pub total: usize,
    /// Entries in the soft-skill lexicon.
    pub soft: usize,
    /// Everything else.
    pub hard: usize,
    /// Entries whose name (case-insensitive) already appeared earlier.
    pub duplicates: usize,
}

/// Count hard, soft and duplicate skills.
pub fn classify_skills(skills: &[Skill], lexicon: &Lexicon) -> SkillStats {
    let soft = skills.iter().filter(|s| lexicon.is_soft_skill(&s.name)).count();
    let unique: HashSet<String> = skills
        .iter()
        .map(|s| s.name.trim().to_lowercase())
        .collect();
    SkillStats {
        total: skills.len(),
        soft,
        hard: skills.len() - soft,
        duplicates: skills.len() - unique.len(),
    }
}

/// Score the skills list.
#[tracing::instrument(skip_all)]
pub fn evaluate(resume: &ResumeData, lexicon: &Lexicon) -> MetricScore {
    if resume.skills.is_empty() {
        return MetricScore::new(
            0,
            &FEEDBACK,
            vec![
                ActionableItem::new(
                    "skills-none",
                    Priority::High,
                    "Add a skills section",
                    "List 10-15 relevant skills, mostly technical or job-specific ones.",
                )
                .in_section(SectionId::Skills),
            ],
        );
    }

    let stats = classify_skills(&resume.skills, lexicon);
    let mut items = Vec::new();
    let hard = hard_skill_points(stats.hard, &mut items);
    let balance = balance_points(&stats, &mut items);
    let diversity = diversity_points(stats.duplicates, &mut items);

    tracing::debug!(?stats, hard, balance, diversity, "skills buckets");

    MetricScore::new(hard + balance + diversity, &FEEDBACK, items)
}

fn hard_skill_points(hard: usize, items: &mut Vec<ActionableItem>) -> u32 {
    if hard < 5 {
        items.push(
            ActionableItem::new(
                "skills-hard-low",
                Priority::High,
                "Add technical skills",
                format!(
                    "You list {hard} hard skills. Add tools, languages, and methods you actually use."
                ),
            )
            .in_section(SectionId::Skills),
        );
    } else if hard < 10 {
        items.push(
            ActionableItem::new(
                "skills-hard-moderate",
                Priority::Medium,
                "Round out your technical skills",
                format!("You list {hard} hard skills. 10-15 gives recruiters a fuller picture."),
            )
            .in_section(SectionId::Skills),
        );
    }
    ramp(hard, &HARD_SKILL_STOPS)
}

fn balance_points(stats: &SkillStats, items: &mut Vec<ActionableItem>) -> u32 {
    let soft_share = ratio(stats.soft, stats.total);
    if soft_share <= BALANCED_SOFT_SHARE {
        30
    } else if soft_share <= HEAVY_SOFT_SHARE {
        items.push(
            ActionableItem::new(
                "skills-balance",
                Priority::Medium,
                "Favor hard skills",
                format!(
                    "{} of {} skills are soft skills. Keep the list weighted toward concrete, verifiable skills.",
                    stats.soft, stats.total
                ),
            )
            .in_section(SectionId::Skills),
        );
        15
    } else {
        items.push(
            ActionableItem::new(
                "skills-soft-heavy",
                Priority::High,
                "Show soft skills, don't list them",
                "Most of your skills are soft skills. Demonstrate them in your experience bullets instead and list technical skills here.",
            )
            .in_section(SectionId::Skills),
        );
        5
    }
}

fn diversity_points(duplicates: usize, items: &mut Vec<ActionableItem>) -> u32 {
    if duplicates == 0 {
        return 20;
    }
    items.push(
        ActionableItem::new(
            "skills-duplicates",
            Priority::Low,
            "Remove duplicate skills",
            format!("{duplicates} skills are listed more than once."),
        )
        .in_section(SectionId::Skills),
    );
    10
}
