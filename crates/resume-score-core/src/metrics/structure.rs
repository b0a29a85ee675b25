//! Structure and formatting: bullet counts and length for the candidate's tier.
//!
//! Buckets: bullet count (50), estimated length (30), blank-bullet
//! consistency (20).

use crate::experience::{self, ExperienceLevel};
use crate::lexicon::Lexicon;
use crate::report::{ActionableItem, FeedbackTable, MetricScore, Priority, SectionId};
use crate::resume::ResumeData;

use super::{ratio, scaled};

const FEEDBACK: FeedbackTable = FeedbackTable {
    excellent: "Your resume is well structured for your experience level.",
    good: "Your structure is solid with minor room to tighten.",
    fair: "Rebalance bullets and length to suit your experience level.",
    poor: "Your resume's structure needs significant work.",
};

const BULLET_POINTS: u32 = 50;

/// Rough content units that fit on one page.
const UNITS_PER_PAGE: f64 = 12.0;
const UNITS_PER_ROLE: f64 = 2.0;
const UNITS_PER_DEGREE: f64 = 1.5;
const UNITS_PER_BULLET: f64 = 0.25;

/// Estimated printed length in pages, never less than one.
pub fn estimate_pages(resume: &ResumeData) -> u32 {
    let bullets = resume
        .work_experience
        .iter()
        .map(|job| job.bullet_count())
        .sum::<usize>();
    let units = resume.work_experience.len() as f64 * UNITS_PER_ROLE
        + resume.education.len() as f64 * UNITS_PER_DEGREE
        + bullets as f64 * UNITS_PER_BULLET;
    ((units / UNITS_PER_PAGE).ceil() as u32).max(1)
}

/// Score structure against the candidate's tier.
#[tracing::instrument(skip_all)]
pub fn evaluate(resume: &ResumeData, _lexicon: &Lexicon) -> MetricScore {
    let level = experience::classify(resume);
    let pages = estimate_pages(resume);

    let mut items = Vec::new();
    let bullets = bullet_count_points(resume, level, &mut items);
    let length = length_points(pages, level, &mut items);
    let formatting = formatting_points(resume, &mut items);

    tracing::debug!(%level, pages, bullets, length, formatting, "structure buckets");

    MetricScore::new(bullets + length + formatting, &FEEDBACK, items)
}

fn bullet_count_points(
    resume: &ResumeData,
    level: ExperienceLevel,
    items: &mut Vec<ActionableItem>,
) -> u32 {
    let jobs = &resume.work_experience;
    if jobs.is_empty() {
        return 0;
    }

    let band = level.bullet_band();
    let in_band = jobs
        .iter()
        .filter(|job| band.contains(&job.bullet_count()))
        .count();
    let off_band = jobs.len() - in_band;

    if off_band > 0 {
        items.push(
            ActionableItem::new(
                "structure-bullet-count",
                Priority::Medium,
                "Adjust bullets per role",
                format!(
                    "{off_band} of {} roles fall outside {}-{} bullets, the usual range at the {level} level.",
                    jobs.len(),
                    band.start(),
                    band.end(),
                ),
            )
            .in_section(SectionId::Experience),
        );
    }

    scaled(ratio(in_band, jobs.len()), 1.0, BULLET_POINTS)
}

fn length_points(pages: u32, level: ExperienceLevel, items: &mut Vec<ActionableItem>) -> u32 {
    let target = level.target_pages();

    if pages == target {
        30
    } else if pages < target {
        items.push(
            ActionableItem::new(
                "structure-length-short",
                Priority::Low,
                "Add more detail",
                format!(
                    "Your resume is about {pages} page(s). At the {level} level, {target} pages lets you show your full scope."
                ),
            )
            .in_section(SectionId::Experience),
        );
        20
    } else if pages == target + 1 {
        items.push(
            ActionableItem::new(
                "structure-length-long",
                Priority::Medium,
                "Tighten your resume",
                format!(
                    "Your resume is about {pages} pages. Aim for {target} at the {level} level by trimming older or less relevant bullets."
                ),
            )
            .in_section(SectionId::Experience),
        );
        20
    } else {
        items.push(
            ActionableItem::new(
                "structure-length-long",
                Priority::High,
                "Cut your resume down",
                format!(
                    "Your resume is about {pages} pages, well over the {target} expected at the {level} level."
                ),
            )
            .in_section(SectionId::Experience),
        );
        10
    }
}

fn formatting_points(resume: &ResumeData, items: &mut Vec<ActionableItem>) -> u32 {
    let blank = resume
        .work_experience
        .iter()
        .flat_map(|job| &job.description)
        .filter(|b| b.trim().is_empty())
        .count();

    if blank == 0 {
        return 20;
    }
    items.push(
        ActionableItem::new(
            "structure-empty-bullets",
            Priority::Medium,
            "Remove empty bullets",
            format!("{blank} bullet points are empty. Fill them in or delete them."),
        )
        .in_section(SectionId::Experience),
    );
    10
}
