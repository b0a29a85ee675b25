//! Lexicon tables used by the metric calculators.
//!
//! A [`Lexicon`] bundles the action-verb, weak-verb, cliché and soft-skill
//! lists together with a compiled cliché matcher. The built-in instance is
//! created once per process and shared read-only. Callers that need
//! different vocabulary build their own through [`Lexicon::builder`].

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};

use crate::config::LexiconConfig;
use crate::error::{LexiconError, LexiconResult};
use crate::word_lists::{ACTION_VERBS, CLICHES, SOFT_SKILLS, WEAK_VERBS};

static BUILTIN: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::builder()
        .build()
        .expect("built-in lexicon is valid")
});

/// Immutable vocabulary consulted during scoring.
#[derive(Debug, Clone)]
pub struct Lexicon {
    action_verbs: HashSet<String>,
    weak_verbs: HashSet<String>,
    soft_skills: HashSet<String>,
    cliches: Vec<String>,
    cliche_matcher: AhoCorasick,
}

impl Lexicon {
    /// The shared built-in lexicon.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Start a builder seeded with the built-in lists.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Build a lexicon from the built-in lists extended by `config`.
    pub fn from_config(config: &LexiconConfig) -> LexiconResult<Self> {
        Self::builder()
            .with_action_verbs(config.action_verbs.iter().cloned())
            .with_weak_verbs(config.weak_verbs.iter().cloned())
            .with_cliches(config.cliches.iter().cloned())
            .with_soft_skills(config.soft_skills.iter().cloned())
            .build()
    }

    /// Whether `word` (already lowercased) is an action verb.
    pub fn is_action_verb(&self, word: &str) -> bool {
        self.action_verbs.contains(word)
    }

    /// Whether `word` (already lowercased) is a weak verb.
    pub fn is_weak_verb(&self, word: &str) -> bool {
        self.weak_verbs.contains(word)
    }

    /// Whether a skill name is a soft skill. Case and surrounding
    /// whitespace are ignored.
    pub fn is_soft_skill(&self, name: &str) -> bool {
        self.soft_skills.contains(&name.trim().to_lowercase())
    }

    /// Distinct clichés appearing anywhere in `text`, in lexicon order.
    pub fn find_cliches(&self, text: &str) -> Vec<&str> {
        let hits: BTreeSet<usize> = self
            .cliche_matcher
            .find_overlapping_iter(&text.to_lowercase())
            .map(|m| m.pattern().as_usize())
            .collect();
        hits.into_iter().map(|i| self.cliches[i].as_str()).collect()
    }

    /// Number of terms in one list.
    pub fn count(&self, kind: LexiconKind) -> usize {
        match kind {
            LexiconKind::ActionVerbs => self.action_verbs.len(),
            LexiconKind::WeakVerbs => self.weak_verbs.len(),
            LexiconKind::Cliches => self.cliches.len(),
            LexiconKind::SoftSkills => self.soft_skills.len(),
        }
    }

    /// All terms of one list, sorted.
    pub fn terms(&self, kind: LexiconKind) -> Vec<&str> {
        let mut terms: Vec<&str> = match kind {
            LexiconKind::ActionVerbs => self.action_verbs.iter().map(String::as_str).collect(),
            LexiconKind::WeakVerbs => self.weak_verbs.iter().map(String::as_str).collect(),
            LexiconKind::Cliches => self.cliches.iter().map(String::as_str).collect(),
            LexiconKind::SoftSkills => self.soft_skills.iter().map(String::as_str).collect(),
        };
        terms.sort_unstable();
        terms
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

/// The four word lists a lexicon is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LexiconKind {
    /// Strong bullet-opening verbs.
    ActionVerbs,
    /// Weak bullet-opening verbs.
    WeakVerbs,
    /// Overused phrases.
    Cliches,
    /// Soft skill names.
    SoftSkills,
}

impl LexiconKind {
    /// All kinds, in display order.
    pub const ALL: [Self; 4] = [
        Self::ActionVerbs,
        Self::WeakVerbs,
        Self::Cliches,
        Self::SoftSkills,
    ];

    /// Returns the kind as a kebab-case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ActionVerbs => "action-verbs",
            Self::WeakVerbs => "weak-verbs",
            Self::Cliches => "cliches",
            Self::SoftSkills => "soft-skills",
        }
    }
}

impl std::fmt::Display for LexiconKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builder for a custom [`Lexicon`].
#[derive(Debug, Clone)]
pub struct LexiconBuilder {
    action_verbs: Vec<String>,
    weak_verbs: Vec<String>,
    soft_skills: Vec<String>,
    cliches: Vec<String>,
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self {
            action_verbs: ACTION_VERBS.iter().map(|s| (*s).to_string()).collect(),
            weak_verbs: WEAK_VERBS.iter().map(|s| (*s).to_string()).collect(),
            soft_skills: SOFT_SKILLS.iter().map(|s| (*s).to_string()).collect(),
            cliches: CLICHES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl LexiconBuilder {
    /// Start from empty lists instead of the built-ins.
    pub const fn empty() -> Self {
        Self {
            action_verbs: Vec::new(),
            weak_verbs: Vec::new(),
            soft_skills: Vec::new(),
            cliches: Vec::new(),
        }
    }

    /// Add action verbs.
    pub fn with_action_verbs<I, S>(mut self, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.action_verbs.extend(verbs.into_iter().map(Into::into));
        self
    }

    /// Add weak verbs.
    pub fn with_weak_verbs<I, S>(mut self, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.weak_verbs.extend(verbs.into_iter().map(Into::into));
        self
    }

    /// Add cliché phrases.
    pub fn with_cliches<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cliches.extend(phrases.into_iter().map(Into::into));
        self
    }

    /// Add soft skill names.
    pub fn with_soft_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.soft_skills.extend(skills.into_iter().map(Into::into));
        self
    }

    /// Normalize every term and compile the cliché matcher.
    pub fn build(self) -> LexiconResult<Lexicon> {
        let action_verbs = normalize_set(self.action_verbs, "action verb")?;
        let weak_verbs = normalize_set(self.weak_verbs, "weak verb")?;
        let soft_skills = normalize_set(self.soft_skills, "soft skill")?;

        // Deduplicate without losing first-seen order.
        let mut seen = HashSet::new();
        let mut cliches = Vec::with_capacity(self.cliches.len());
        for phrase in normalize(self.cliches, "cliché")? {
            if seen.insert(phrase.clone()) {
                cliches.push(phrase);
            }
        }

        // Terms are lowercased here and haystacks in `find_cliches`.
        let cliche_matcher = AhoCorasickBuilder::new().build(&cliches)?;

        tracing::debug!(
            action_verbs = action_verbs.len(),
            weak_verbs = weak_verbs.len(),
            soft_skills = soft_skills.len(),
            cliches = cliches.len(),
            "lexicon built"
        );

        Ok(Lexicon {
            action_verbs,
            weak_verbs,
            soft_skills,
            cliches,
            cliche_matcher,
        })
    }
}

fn normalize(terms: Vec<String>, list: &'static str) -> LexiconResult<Vec<String>> {
    terms
        .into_iter()
        .map(|t| {
            let t = t.trim().to_lowercase();
            if t.is_empty() {
                Err(LexiconError::EmptyTerm { list })
            } else {
                Ok(t)
            }
        })
        .collect()
}

fn normalize_set(terms: Vec<String>, list: &'static str) -> LexiconResult<HashSet<String>> {
    Ok(normalize(terms, list)?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_classifies_verbs() {
        let lex = Lexicon::builtin();
        assert!(lex.is_action_verb("led"));
        assert!(lex.is_weak_verb("helped"));
        assert!(!lex.is_action_verb("helped"));
    }

    #[test]
    fn soft_skill_lookup_ignores_case() {
        let lex = Lexicon::builtin();
        assert!(lex.is_soft_skill("Teamwork"));
        assert!(lex.is_soft_skill("  LEADERSHIP "));
        assert!(!lex.is_soft_skill("Rust"));
    }

    #[test]
    fn finds_distinct_cliches_case_insensitively() {
        let lex = Lexicon::builtin();
        let found = lex.find_cliches("A TEAM PLAYER and a team player who is a Self-Starter");
        assert_eq!(found, vec!["team player", "self-starter"]);
    }

    #[test]
    fn non_ascii_cliches_ignore_case() {
        let lex = Lexicon::builder()
            .with_cliches(["Café culture"])
            .build()
            .unwrap();
        assert_eq!(lex.find_cliches("Built a CAFÉ CULTURE"), vec!["café culture"]);
    }

    #[test]
    fn no_cliches_in_plain_text() {
        let lex = Lexicon::builtin();
        assert!(lex.find_cliches("Shipped the billing service").is_empty());
    }

    #[test]
    fn builder_extends_builtins() {
        let lex = Lexicon::builder()
            .with_action_verbs(["Rearchitected"])
            .with_cliches(["rock star"])
            .with_soft_skills(["Grit"])
            .build()
            .unwrap();
        assert!(lex.is_action_verb("rearchitected"));
        assert!(lex.is_action_verb("led"));
        assert_eq!(lex.find_cliches("a Rock Star engineer"), vec!["rock star"]);
        assert!(lex.is_soft_skill("grit"));
    }

    #[test]
    fn empty_builder_has_no_terms() {
        let lex = LexiconBuilder::empty().build().unwrap();
        assert!(!lex.is_action_verb("led"));
        assert!(lex.find_cliches("team player").is_empty());
        assert_eq!(lex.count(LexiconKind::ActionVerbs), 0);
    }

    #[test]
    fn blank_term_is_rejected() {
        let err = Lexicon::builder().with_weak_verbs(["  "]).build().unwrap_err();
        assert!(matches!(err, LexiconError::EmptyTerm { list: "weak verb" }));
    }

    #[test]
    fn duplicate_cliches_collapse() {
        let lex = LexiconBuilder::empty()
            .with_cliches(["Team Player", "team player"])
            .build()
            .unwrap();
        assert_eq!(lex.terms(LexiconKind::Cliches), vec!["team player"]);
    }

    #[test]
    fn from_config_extends_lists() {
        let config = LexiconConfig {
            weak_verbs: vec!["touched".to_string()],
            ..LexiconConfig::default()
        };
        let lex = Lexicon::from_config(&config).unwrap();
        assert!(lex.is_weak_verb("touched"));
        assert!(lex.is_weak_verb("helped"));
    }

    #[test]
    fn terms_are_sorted() {
        let terms = Lexicon::builtin().terms(LexiconKind::WeakVerbs);
        let mut sorted = terms.clone();
        sorted.sort_unstable();
        assert_eq!(terms, sorted);
    }
}
