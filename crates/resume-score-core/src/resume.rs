//! The resume document consumed by the scoring engine.
//!
//! Field names follow the camelCase shape the upstream data layer produces.
//! Every field is optional on the wire: absent values and explicit `null`s
//! both decode to the empty value, so scoring never sees a partial document.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{InputError, InputResult};

/// A structured resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    /// Contact details and summary.
    #[serde(deserialize_with = "null_as_default")]
    pub personal_info: PersonalInfo,
    /// Work history, most recent first.
    #[serde(deserialize_with = "null_as_default")]
    pub work_experience: Vec<WorkExperience>,
    /// Education history.
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    /// Listed skills.
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<Skill>,
}

/// Contact details and free-text summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    /// Given name.
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    /// Family name.
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    /// Email address.
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    /// Phone number, any formatting.
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    /// City, region, or similar.
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    /// Professional summary paragraph.
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    /// LinkedIn profile URL.
    #[serde(deserialize_with = "null_as_default")]
    pub linkedin: String,
    /// Personal website URL.
    #[serde(deserialize_with = "null_as_default")]
    pub website: String,
}

/// One job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    /// Employer name.
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    /// Job title.
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    /// Work location.
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    /// Start date as entered (free-form).
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    /// End date as entered (free-form).
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    /// Whether this is the current position.
    #[serde(deserialize_with = "null_as_default")]
    pub current: bool,
    /// Bullet points, in display order.
    #[serde(deserialize_with = "null_as_default")]
    pub description: Vec<String>,
    /// Highlighted achievements, in display order.
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
}

/// One degree or program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    /// School name.
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    /// Degree earned.
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    /// Field of study.
    #[serde(deserialize_with = "null_as_default")]
    pub field: String,
    /// Graduation date as entered (free-form).
    #[serde(deserialize_with = "null_as_default")]
    pub graduation_date: String,
    /// Grade point average as entered.
    #[serde(deserialize_with = "null_as_default")]
    pub gpa: String,
}

/// One listed skill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    /// Skill name as entered.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Grouping label chosen by the user.
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    /// Self-assessed proficiency.
    #[serde(deserialize_with = "null_as_default")]
    pub level: String,
}

impl Skill {
    /// Create a skill with a name and category.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            level: String::new(),
        }
    }
}

impl ResumeData {
    /// All non-blank bullet strings across every job, in document order.
    pub fn bullets(&self) -> impl Iterator<Item = &str> {
        self.work_experience
            .iter()
            .flat_map(|job| job.description.iter())
            .map(String::as_str)
            .filter(|b| !b.trim().is_empty())
    }
}

impl WorkExperience {
    /// Number of non-blank bullets in this job.
    pub fn bullet_count(&self) -> usize {
        self.description
            .iter()
            .filter(|b| !b.trim().is_empty())
            .count()
    }
}

/// Supported encodings for a resume document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON (default).
    #[default]
    Json,
    /// YAML.
    Yaml,
}

impl InputFormat {
    /// Pick a format from a file extension. Unknown extensions fall back to JSON.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext.map(str::to_ascii_lowercase).as_deref() {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Decode a resume document.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn parse_resume(text: &str, format: InputFormat) -> InputResult<ResumeData> {
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }
    let resume = match format {
        InputFormat::Json => serde_json::from_str(text)?,
        InputFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(resume)
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
