//! ATS compatibility: can an applicant tracking system read this resume?
//!
//! Five capped buckets summing to 100:
//!
//! | Bucket            | Points |
//! |-------------------|--------|
//! | Contact details   | 25     |
//! | Standard sections | 20     |
//! | Keyword density   | 30     |
//! | Parsing safety    | 15     |
//! | Summary           | 10     |

use crate::lexicon::Lexicon;
use crate::report::{ActionableItem, FeedbackTable, MetricScore, Priority, SectionId};
use crate::resume::ResumeData;
use crate::text;

use super::ramp;

const FEEDBACK: FeedbackTable = FeedbackTable {
    excellent: "Your resume is highly ATS-friendly and should parse cleanly.",
    good: "Your resume is ATS-friendly with a few gaps to close.",
    fair: "Some ATS systems may struggle with your resume.",
    poor: "Your resume is likely to be filtered out by ATS systems.",
};

/// Keyword-density points at 0, 5, 10 and 15+ skills.
const KEYWORD_STOPS: [u32; 4] = [0, 10, 20, 30];

const PARSING_SAFETY_POINTS: u32 = 15;
const MIN_PHONE_CHARS: usize = 10;
const FULL_SUMMARY_CHARS: usize = 100;
const SHORT_SUMMARY_CHARS: usize = 50;

/// Score ATS compatibility.
#[tracing::instrument(skip_all)]
pub fn evaluate(resume: &ResumeData, _lexicon: &Lexicon) -> MetricScore {
    let mut items = Vec::new();

    let contact = contact_points(resume, &mut items);
    let sections = section_points(resume, &mut items);
    let keywords = keyword_points(resume.skills.len(), &mut items);
    let parsing = parsing_points(resume, &mut items);
    let summary = summary_points(&resume.personal_info.summary, &mut items);

    tracing::debug!(contact, sections, keywords, parsing, summary, "ats buckets");

    MetricScore::new(
        contact + sections + keywords + parsing + summary,
        &FEEDBACK,
        items,
    )
}

fn contact_points(resume: &ResumeData, items: &mut Vec<ActionableItem>) -> u32 {
    let info = &resume.personal_info;
    let mut points = 0;

    if text::is_valid_email(&info.email) {
        points += 10;
    } else {
        items.push(
            ActionableItem::new(
                "ats-email",
                Priority::High,
                "Add a valid email address",
                "Recruiters and ATS systems need a working email to contact you.",
            )
            .in_section(SectionId::PersonalInfo),
        );
    }

    if text::char_len(&info.phone) >= MIN_PHONE_CHARS {
        points += 8;
    } else {
        items.push(
            ActionableItem::new(
                "ats-phone",
                Priority::High,
                "Add a complete phone number",
                "Include a phone number with area code so recruiters can reach you.",
            )
            .in_section(SectionId::PersonalInfo),
        );
    }

    if !info.first_name.trim().is_empty() && !info.last_name.trim().is_empty() {
        points += 5;
    }
    if !info.location.trim().is_empty() {
        points += 2;
    }

    points
}

fn section_points(resume: &ResumeData, items: &mut Vec<ActionableItem>) -> u32 {
    let mut points = 0;

    if resume.work_experience.is_empty() {
        items.push(
            ActionableItem::new(
                "ats-experience-missing",
                Priority::High,
                "Add work experience",
                "ATS systems look for a work experience section on every resume.",
            )
            .in_section(SectionId::Experience),
        );
    } else {
        points += 8;
    }

    if resume.education.is_empty() {
        items.push(
            ActionableItem::new(
                "ats-education-missing",
                Priority::Medium,
                "Add your education",
                "Many ATS filters check for an education section.",
            )
            .in_section(SectionId::Education),
        );
    } else {
        points += 6;
    }

    if resume.skills.is_empty() {
        // Same remedy as the skills metric's empty case, so the same key.
        items.push(
            ActionableItem::new(
                "skills-none",
                Priority::High,
                "Add a skills section",
                "ATS systems match keywords against your skills section, and yours is empty.",
            )
            .in_section(SectionId::Skills),
        );
    } else {
        points += 6;
    }

    points
}

fn keyword_points(skill_count: usize, items: &mut Vec<ActionableItem>) -> u32 {
    if skill_count < 5 {
        items.push(
            ActionableItem::new(
                "ats-keywords-low",
                Priority::High,
                "Add more keywords",
                format!(
                    "You list {skill_count} skills. Aim for 10-15 relevant skills so ATS keyword searches find you."
                ),
            )
            .in_section(SectionId::Skills),
        );
    } else if skill_count < 10 {
        items.push(
            ActionableItem::new(
                "ats-keywords-moderate",
                Priority::Medium,
                "Expand your keywords",
                format!(
                    "You list {skill_count} skills. Adding a few more relevant ones (10-15 total) improves ATS matching."
                ),
            )
            .in_section(SectionId::Skills),
        );
    }

    ramp(skill_count, &KEYWORD_STOPS)
}

fn parsing_points(resume: &ResumeData, items: &mut Vec<ActionableItem>) -> u32 {
    // Inspect the document as a whole, the way a parser would receive it.
    let serialized = serde_json::to_string(resume).unwrap_or_default();
    let mut points = PARSING_SAFETY_POINTS;

    if text::has_non_standard_symbols(&serialized) {
        points -= 5;
        items.push(
            ActionableItem::new(
                "ats-special-characters",
                Priority::Medium,
                "Remove decorative symbols",
                "Fancy bullets and symbols can garble ATS parsing. Use plain text and standard hyphens.",
            )
            .in_section(SectionId::Experience),
        );
    }

    if text::has_whitespace_run(&serialized) {
        points -= 5;
        items.push(
            ActionableItem::new(
                "ats-spacing",
                Priority::Low,
                "Avoid table-like spacing",
                "Runs of spaces often come from tables or columns, which many ATS systems read out of order.",
            )
            .in_section(SectionId::Experience),
        );
    }

    points
}

fn summary_points(summary: &str, items: &mut Vec<ActionableItem>) -> u32 {
    let len = text::char_len(summary);
    if len >= FULL_SUMMARY_CHARS {
        10
    } else if len >= SHORT_SUMMARY_CHARS {
        items.push(
            ActionableItem::new(
                "ats-summary-short",
                Priority::Low,
                "Expand your summary",
                "A summary of at least 100 characters gives ATS systems more context to match.",
            )
            .in_section(SectionId::Summary),
        );
        5
    } else {
        items.push(
            ActionableItem::new(
                "ats-summary-missing",
                Priority::Medium,
                "Write a professional summary",
                "Add a 2-3 sentence summary highlighting your experience and key skills.",
            )
            .in_section(SectionId::Summary),
        );
        0
    }
}
