//! Assistant reply text for each stage of the screening conversation.

use tracing::warn;

use super::model::{ALL_FIELDS, CandidateProfile, ProfileField};
use super::state::Stage;

/// Opening message, shown before the candidate has typed anything.
pub const GREETING: &str = "\
Hello! 👋 Welcome to TalentScout's AI Hiring Assistant. I'm here to help streamline your \
application process by gathering some essential information and asking a few technical \
questions based on your expertise.

This conversation will take about 5-10 minutes, and all information will be kept \
confidential in accordance with data privacy standards.

Whenever you're ready, say hello and we'll get started!";

/// Returned for a stage pair the transition table cannot produce.
pub const FALLBACK: &str =
    "I apologize, but I didn't understand that. Could you please rephrase your response?";

const COMPLETE_REMINDER: &str = "\
Thank you for your time! Your application has been recorded. You can type 'bye' or 'exit' \
to end this conversation. Have a great day! 🌟";

const GOODBYE: &str = "\
Thank you for using TalentScout's Hiring Assistant! Goodbye and best of luck with your job \
search! 👋";

/// Reply for the turn that moved the conversation from `previous` to `stage`.
///
/// A turn that stays on a collection stage is a re-prompt and restates the
/// expected format. Entering a stage asks its question, echoing the value
/// just accepted where that helps the candidate confirm it.
pub fn reply(previous: Stage, stage: Stage, raw_input: &str, profile: &CandidateProfile) -> String {
    if !previous.can_transition_to(stage) {
        warn!(from = %previous, to = %stage, "No reply defined for stage pair");
        return FALLBACK.to_string();
    }

    if previous == stage && stage.is_collecting() {
        return reprompt(stage).to_string();
    }

    match stage {
        // Nothing transitions back into the greeting; `ScreeningSession::start` sends it.
        Stage::Greeting => FALLBACK.to_string(),
        Stage::CollectingName => "Great, let's get started! What's your full name?".to_string(),
        Stage::CollectingEmail => format!(
            "Nice to meet you, {}! Now, what's your email address?",
            profile.full_name.as_deref().unwrap_or(raw_input).trim()
        ),
        Stage::CollectingPhone => {
            "Great! What's your phone number? You can include country code if needed.".to_string()
        }
        Stage::CollectingExperience => "\
Perfect! How many years of professional experience do you have in technology/software \
development? (You can use decimals, e.g., 2.5)"
            .to_string(),
        Stage::CollectingPosition => "\
Excellent! What position(s) are you interested in? You can mention multiple roles if you're \
open to different opportunities."
            .to_string(),
        Stage::CollectingLocation => {
            "Thanks! What's your current location? (City, State/Country)".to_string()
        }
        Stage::CollectingTechStack => "\
Almost done with the basics! Now, please list your technical skills and tech stack. Include \
programming languages, frameworks, databases, tools, etc. You can separate them with commas.

For example: JavaScript, React, Node.js, Python, Django, PostgreSQL, AWS, Docker"
            .to_string(),
        Stage::Assessment => assessment_reply(profile),
        Stage::Complete if previous == Stage::Assessment => completion_reply(),
        Stage::Complete => COMPLETE_REMINDER.to_string(),
        Stage::Ended => GOODBYE.to_string(),
    }
}

/// Format reminder for a rejected answer.
fn reprompt(stage: Stage) -> &'static str {
    match stage {
        Stage::CollectingName => {
            "I need your full name to proceed. Please provide your first and last name \
             (letters only, no numbers or special characters)."
        }
        Stage::CollectingEmail => {
            "Please provide a valid email address (e.g., john.doe@example.com)."
        }
        Stage::CollectingPhone => {
            "Please provide a valid phone number. It should be at least 10 digits and can \
             include spaces, dashes, or parentheses."
        }
        Stage::CollectingExperience => {
            "Please provide a valid number of years (0-50). For example: 2, 3.5, or 0 for \
             entry level."
        }
        Stage::CollectingPosition => {
            "Please tell me what kind of position you're looking for (e.g., Software Engineer, \
             Data Scientist, DevOps Engineer, etc.)."
        }
        Stage::CollectingLocation => {
            "Please provide your current location (city and state/country)."
        }
        Stage::CollectingTechStack => {
            "Please provide at least one technology from your tech stack. This helps me \
             generate relevant technical questions for you."
        }
        _ => FALLBACK,
    }
}

/// Entering the assessment: confirm the stack and play back the whole profile.
fn assessment_reply(profile: &CandidateProfile) -> String {
    let stack = profile
        .tech_stack
        .as_ref()
        .map(|t| t.join(", "))
        .unwrap_or_default();

    format!(
        "Excellent! I've recorded your tech stack: {stack}.\n\n\
         Based on your expertise, I've prepared some technical questions to assess your \
         proficiency. These questions will help our recruitment team understand your skill \
         level better.\n\n\
         {}\n\n\
         Take your time with the questions below, and reply whenever you're ready to continue.",
        profile_summary(profile)
    )
}

fn completion_reply() -> String {
    "\
Thank you for completing the technical assessment! 🎉

**Next Steps:**
1. Our recruitment team will review your information and responses
2. If you're a good fit, we'll contact you within 2-3 business days
3. We may schedule a more detailed technical interview or connect you directly with hiring managers

**Data Privacy Note:** All your information is stored securely and will only be used for \
recruitment purposes. You can request data deletion at any time by contacting us.

Thank you for your interest in TalentScout! Is there anything else you'd like to know about \
our process?"
        .to_string()
}

/// Bulleted summary of every collected field.
pub fn profile_summary(profile: &CandidateProfile) -> String {
    let mut parts = vec!["Here's a summary of your information:".to_string()];
    for field in ALL_FIELDS {
        let value = profile
            .display_value(field)
            .unwrap_or_else(|| "(not provided)".to_string());
        parts.push(format!("• {}: {}", summary_label(field), value));
    }
    parts.join("\n")
}

fn summary_label(field: ProfileField) -> &'static str {
    match field {
        ProfileField::DesiredPositions => "Position Interest",
        other => other.label(),
    }
}
