//! Built-in word lists for resume analysis.
//!
//! Action verbs, weak verbs, clichés, and soft skills. All entries are
//! lowercase. These back [`Lexicon::builtin`](crate::lexicon::Lexicon::builtin)
//! and are never mutated.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Strong, achievement-oriented verbs expected at the start of a bullet.
pub static ACTION_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Leadership
        "led", "managed", "directed", "supervised", "coordinated", "oversaw", "headed",
        "spearheaded", "orchestrated", "mentored", "coached", "guided", "championed",
        "mobilized", "chaired",
        // Building and creating
        "built", "created", "designed", "developed", "engineered", "established", "founded",
        "implemented", "initiated", "introduced", "launched", "pioneered", "architected",
        "programmed", "prototyped", "authored", "produced", "formulated", "devised",
        // Improving
        "improved", "increased", "enhanced", "optimized", "streamlined", "accelerated",
        "boosted", "expanded", "grew", "maximized", "modernized", "refined", "revamped",
        "redesigned", "restructured", "transformed", "upgraded", "strengthened", "scaled",
        // Reducing
        "reduced", "decreased", "cut", "eliminated", "minimized", "consolidated", "lowered",
        "saved", "automated", "simplified",
        // Achieving
        "achieved", "attained", "delivered", "exceeded", "completed", "won", "earned",
        "secured", "surpassed", "generated", "captured", "closed",
        // Analysis
        "analyzed", "assessed", "audited", "evaluated", "identified", "investigated",
        "measured", "researched", "quantified", "diagnosed", "forecasted", "modeled",
        "tested", "validated", "resolved", "troubleshot", "debugged",
        // Communication
        "negotiated", "presented", "persuaded", "advocated", "collaborated", "partnered",
        "facilitated", "influenced", "trained", "educated", "published", "wrote",
        // Operations
        "administered", "executed", "integrated", "migrated", "deployed", "maintained",
        "operated", "organized", "planned", "prioritized", "scheduled", "standardized",
        "drove", "owned", "shipped", "converted", "recruited", "hired",
    ]
    .into_iter()
    .collect()
});

/// Passive or low-information verbs that weaken a bullet's opening.
pub static WEAK_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "helped",
        "assisted",
        "worked",
        "handled",
        "did",
        "made",
        "was",
        "were",
        "tried",
        "participated",
        "responsible",
        "involved",
        "used",
        "utilized",
        "got",
        "went",
        "dealt",
        "attended",
    ]
    .into_iter()
    .collect()
});

/// Overused, low-information resume phrases.
///
/// Kept as an ordered list so reported matches come out in a stable order.
pub static CLICHES: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    vec![
        "team player",
        "hard worker",
        "hardworking",
        "detail-oriented",
        "detail oriented",
        "results-driven",
        "results driven",
        "go-getter",
        "self-starter",
        "self starter",
        "think outside the box",
        "proven track record",
        "works well under pressure",
        "fast learner",
        "quick learner",
        "strong work ethic",
        "excellent communication skills",
        "people person",
        "go above and beyond",
        "wear many hats",
        "synergy",
        "dynamic individual",
        "passionate about",
        "responsible for",
        "duties included",
        "references available upon request",
    ]
});

/// Skill names treated as soft skills. Everything else counts as a hard skill.
pub static SOFT_SKILLS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "communication",
        "communication skills",
        "teamwork",
        "leadership",
        "problem solving",
        "problem-solving",
        "critical thinking",
        "time management",
        "adaptability",
        "creativity",
        "collaboration",
        "interpersonal skills",
        "work ethic",
        "attention to detail",
        "emotional intelligence",
        "conflict resolution",
        "public speaking",
        "negotiation",
        "organization",
        "organizational skills",
        "presentation skills",
        "decision making",
        "decision-making",
        "flexibility",
        "empathy",
        "mentoring",
        "customer service",
        "multitasking",
        "self-motivation",
        "active listening",
        "team building",
        "patience",
    ]
    .into_iter()
    .collect()
});
