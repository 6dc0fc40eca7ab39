//! Candidate screening — a guided, multi-turn conversation.
//!
//! The assistant walks one candidate through a fixed sequence of questions
//! (identity, contact details, experience, role, location, tech stack),
//! validating each answer before moving on. Once the tech stack is accepted
//! it builds a set of technical questions keyed on the candidate's skills.

pub mod manager;
pub mod model;
pub mod prompts;
pub mod questions;
pub mod state;
pub mod validation;

pub use manager::{ScreeningSession, ScreeningStatus, TurnOutcome};
pub use model::{CandidateProfile, ProfileField, Speaker, TechnicalQuestion, Turn};
pub use questions::generate_technical_questions;
pub use state::{InterviewPhase, Stage, advance};
