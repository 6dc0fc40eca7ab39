//! Candidate profile, transcript turns, and question set models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::state::Stage;
use super::validation::parse_tech_stack;

/// Number of fields a complete profile carries.
pub const PROFILE_FIELD_COUNT: usize = 7;

/// Everything collected about the candidate so far.
///
/// Fields are filled one per accepted answer and never cleared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Kept as the candidate typed it; validated as a decimal in `[0, 50]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_positions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
}

/// The profile field a collection stage writes on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FullName,
    Email,
    Phone,
    YearsOfExperience,
    DesiredPositions,
    CurrentLocation,
    TechStack,
}

impl ProfileField {
    /// Which field an accepted answer in `stage` fills, if any.
    pub fn for_stage(stage: Stage) -> Option<ProfileField> {
        match stage {
            Stage::CollectingName => Some(Self::FullName),
            Stage::CollectingEmail => Some(Self::Email),
            Stage::CollectingPhone => Some(Self::Phone),
            Stage::CollectingExperience => Some(Self::YearsOfExperience),
            Stage::CollectingPosition => Some(Self::DesiredPositions),
            Stage::CollectingLocation => Some(Self::CurrentLocation),
            Stage::CollectingTechStack => Some(Self::TechStack),
            Stage::Greeting | Stage::Assessment | Stage::Complete | Stage::Ended => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::YearsOfExperience => "Experience",
            Self::DesiredPositions => "Position",
            Self::CurrentLocation => "Location",
            Self::TechStack => "Tech Stack",
        }
    }
}

impl CandidateProfile {
    /// Store an accepted answer in `field`.
    ///
    /// Text fields keep the raw input; the tech stack is parsed into tokens.
    pub fn record(&mut self, field: ProfileField, raw_input: &str) {
        let value = raw_input.to_string();
        match field {
            ProfileField::FullName => self.full_name = Some(value),
            ProfileField::Email => self.email = Some(value),
            ProfileField::Phone => self.phone = Some(value),
            ProfileField::YearsOfExperience => self.years_of_experience = Some(value),
            ProfileField::DesiredPositions => self.desired_positions = Some(value),
            ProfileField::CurrentLocation => self.current_location = Some(value),
            ProfileField::TechStack => self.tech_stack = Some(parse_tech_stack(raw_input)),
        }
    }

    /// Display value of a field, or `None` if it hasn't been collected.
    pub fn display_value(&self, field: ProfileField) -> Option<String> {
        match field {
            ProfileField::FullName => self.full_name.clone(),
            ProfileField::Email => self.email.clone(),
            ProfileField::Phone => self.phone.clone(),
            ProfileField::YearsOfExperience => {
                self.years_of_experience.as_ref().map(|y| format!("{y} years"))
            }
            ProfileField::DesiredPositions => self.desired_positions.clone(),
            ProfileField::CurrentLocation => self.current_location.clone(),
            ProfileField::TechStack => self.tech_stack.as_ref().map(|t| t.join(", ")),
        }
    }

    /// Number of populated fields, out of [`PROFILE_FIELD_COUNT`].
    pub fn completed_fields(&self) -> usize {
        ALL_FIELDS
            .iter()
            .filter(|f| self.display_value(**f).is_some())
            .count()
    }

    pub fn completion_percent(&self) -> u8 {
        ((self.completed_fields() as f64 / PROFILE_FIELD_COUNT as f64) * 100.0).round() as u8
    }

    pub fn is_complete(&self) -> bool {
        self.completed_fields() == PROFILE_FIELD_COUNT
    }
}

/// Fields in display order.
pub const ALL_FIELDS: [ProfileField; PROFILE_FIELD_COUNT] = [
    ProfileField::FullName,
    ProfileField::Email,
    ProfileField::Phone,
    ProfileField::YearsOfExperience,
    ProfileField::DesiredPositions,
    ProfileField::CurrentLocation,
    ProfileField::TechStack,
];

/// Questions generated for one skill in the candidate's tech stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalQuestion {
    /// Skill label exactly as the candidate wrote it.
    pub technology: String,
    pub questions: Vec<String>,
}

impl TechnicalQuestion {
    /// Plain-text block: the skill label followed by numbered questions.
    pub fn render(&self) -> String {
        let mut parts = vec![format!("## {}", self.technology)];
        for (i, q) in self.questions.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, q));
        }
        parts.join("\n")
    }
}

/// Who produced a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Candidate,
    Assistant,
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Candidate => write!(f, "candidate"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// One appended entry in the session transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub id: Uuid,
    pub speaker: Speaker,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn new(speaker: Speaker, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            speaker,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}
