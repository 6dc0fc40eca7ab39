//! Screening state machine — which stage of the interview the candidate is in.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::model::CandidateProfile;
use super::validation::{
    is_valid_email, is_valid_experience, is_valid_name, is_valid_phone, parse_tech_stack,
};

/// Words that end the conversation when they appear anywhere in the input.
pub const ENDING_KEYWORDS: [&str; 8] = [
    "bye",
    "goodbye",
    "exit",
    "quit",
    "end",
    "stop",
    "thanks",
    "thank you",
];

/// The stages of the screening conversation.
///
/// Progresses linearly: Greeting → CollectingName → … → CollectingTechStack →
/// Assessment → Complete. Any stage after Greeting can jump to Ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Greeting,
    CollectingName,
    CollectingEmail,
    CollectingPhone,
    CollectingExperience,
    CollectingPosition,
    CollectingLocation,
    CollectingTechStack,
    Assessment,
    Complete,
    Ended,
}

/// Coarse grouping of stages shown to the candidate as interview milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewPhase {
    InformationGathering,
    TechnicalAssessment,
    InterviewComplete,
}

impl Stage {
    /// Linear order used for progress reporting. `Ended` is not part of it.
    pub const ORDER: [Stage; 10] = [
        Stage::Greeting,
        Stage::CollectingName,
        Stage::CollectingEmail,
        Stage::CollectingPhone,
        Stage::CollectingExperience,
        Stage::CollectingPosition,
        Stage::CollectingLocation,
        Stage::CollectingTechStack,
        Stage::Assessment,
        Stage::Complete,
    ];

    /// Next stage when the current stage's answer is accepted.
    pub fn next(&self) -> Option<Stage> {
        use Stage::*;
        match self {
            Greeting => Some(CollectingName),
            CollectingName => Some(CollectingEmail),
            CollectingEmail => Some(CollectingPhone),
            CollectingPhone => Some(CollectingExperience),
            CollectingExperience => Some(CollectingPosition),
            CollectingPosition => Some(CollectingLocation),
            CollectingLocation => Some(CollectingTechStack),
            CollectingTechStack => Some(Assessment),
            Assessment => Some(Complete),
            Complete | Ended => None,
        }
    }

    /// Check if a single turn can move from `self` to `target`.
    ///
    /// Covers forward steps, re-prompts on collection stages, exits to
    /// `Ended`, and the terminal self-loops.
    pub fn can_transition_to(&self, target: Stage) -> bool {
        if self.next() == Some(target) {
            return true;
        }
        if target == Stage::Ended {
            return *self != Stage::Greeting;
        }
        *self == target && (self.is_collecting() || self.is_terminal())
    }

    /// Whether this stage asks the candidate for a profile field.
    pub fn is_collecting(&self) -> bool {
        use Stage::*;
        matches!(
            self,
            CollectingName
                | CollectingEmail
                | CollectingPhone
                | CollectingExperience
                | CollectingPosition
                | CollectingLocation
                | CollectingTechStack
        )
    }

    /// Whether data collection is over.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Ended)
    }

    /// Whether a host should keep its input open in this stage.
    ///
    /// The machine still processes input in `Complete`, so a late "bye" is
    /// honoured if it arrives.
    pub fn accepts_input(&self) -> bool {
        !self.is_terminal()
    }

    /// Interview progress as a percentage of the linear order.
    pub fn progress_percent(&self) -> u8 {
        let last = (Self::ORDER.len() - 1) as f64;
        match Self::ORDER.iter().position(|s| s == self) {
            Some(index) => ((index as f64 / last) * 100.0).round() as u8,
            None => 100,
        }
    }

    pub fn interview_phase(&self) -> InterviewPhase {
        match self {
            Self::Assessment => InterviewPhase::TechnicalAssessment,
            Self::Complete | Self::Ended => InterviewPhase::InterviewComplete,
            _ => InterviewPhase::InformationGathering,
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::Greeting
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Greeting => "greeting",
            Self::CollectingName => "collecting_name",
            Self::CollectingEmail => "collecting_email",
            Self::CollectingPhone => "collecting_phone",
            Self::CollectingExperience => "collecting_experience",
            Self::CollectingPosition => "collecting_position",
            Self::CollectingLocation => "collecting_location",
            Self::CollectingTechStack => "collecting_tech_stack",
            Self::Assessment => "assessment",
            Self::Complete => "complete",
            Self::Ended => "ended",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Stage {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greeting" => Ok(Self::Greeting),
            "collecting_name" => Ok(Self::CollectingName),
            "collecting_email" => Ok(Self::CollectingEmail),
            "collecting_phone" => Ok(Self::CollectingPhone),
            "collecting_experience" => Ok(Self::CollectingExperience),
            "collecting_position" => Ok(Self::CollectingPosition),
            "collecting_location" => Ok(Self::CollectingLocation),
            "collecting_tech_stack" => Ok(Self::CollectingTechStack),
            "assessment" => Ok(Self::Assessment),
            "complete" => Ok(Self::Complete),
            "ended" => Ok(Self::Ended),
            _ => Err(format!("Unknown stage: {}", s)),
        }
    }
}

impl InterviewPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::InformationGathering => "Information Gathering",
            Self::TechnicalAssessment => "Technical Assessment",
            Self::InterviewComplete => "Interview Complete",
        }
    }
}

/// Case-insensitive substring scan for any ending keyword.
pub fn contains_ending_keyword(input: &str) -> bool {
    let lowered = input.to_lowercase();
    ENDING_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Whether `input` satisfies the validator guarding `stage`.
///
/// Stages without a validator always accept.
pub fn accepts(stage: Stage, input: &str) -> bool {
    use Stage::*;
    match stage {
        CollectingName => is_valid_name(input),
        CollectingEmail => is_valid_email(input),
        CollectingPhone => is_valid_phone(input),
        CollectingExperience => is_valid_experience(input),
        CollectingPosition | CollectingLocation => input.trim().chars().count() >= 2,
        CollectingTechStack => !parse_tech_stack(input).is_empty(),
        Greeting | Assessment | Complete | Ended => true,
    }
}

/// Compute the next stage for one turn.
///
/// An ending keyword wins over everything else once past the greeting. The
/// profile is not consulted; it is part of the signature so hosts pass the
/// same snapshot they pass to the reply builder.
pub fn advance(stage: Stage, raw_input: &str, _profile: &CandidateProfile) -> Stage {
    if stage != Stage::Greeting && contains_ending_keyword(raw_input) {
        debug!(from = %stage, "Ending keyword detected");
        return Stage::Ended;
    }

    if stage.is_terminal() {
        return stage;
    }

    if accepts(stage, raw_input) {
        let next = stage.next().unwrap_or(stage);
        debug!(from = %stage, to = %next, "Answer accepted");
        next
    } else {
        debug!(stage = %stage, "Answer rejected, re-prompting");
        stage
    }
}
