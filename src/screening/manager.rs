//! ScreeningSession — owns one candidate's stage, profile, transcript, and
//! question set, and runs the conversation one turn at a time.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::ScreeningConfig;

use super::model::{CandidateProfile, ProfileField, Speaker, TechnicalQuestion, Turn};
use super::prompts::{GREETING, reply};
use super::questions::{generate_technical_questions, is_known_skill};
use super::state::{InterviewPhase, Stage, accepts, advance};
use super::validation::sanitize_input;

/// Result of processing one candidate message.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// Stage the turn started in.
    pub previous: Stage,
    /// Stage the conversation is in now.
    pub stage: Stage,
    /// Assistant reply, already appended to the transcript.
    pub reply: String,
    /// Set only on the turn that entered the assessment.
    pub questions: Option<Vec<TechnicalQuestion>>,
    /// Field written by this turn, if any.
    pub recorded: Option<ProfileField>,
}

/// One candidate's screening conversation.
///
/// Turns are processed strictly in order through `&mut self`; nothing is
/// shared between sessions.
pub struct ScreeningSession {
    stage: Stage,
    profile: CandidateProfile,
    transcript: Vec<Turn>,
    questions: Option<Vec<TechnicalQuestion>>,
    rng: StdRng,
    started: bool,
}

impl ScreeningSession {
    /// Create a session; the question shuffle is seeded from `config`, or
    /// from OS entropy when no seed is configured.
    pub fn new(config: &ScreeningConfig) -> Self {
        let rng = match config.question_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng)
    }

    /// Create a session with an explicit random source.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            stage: Stage::default(),
            profile: CandidateProfile::default(),
            transcript: Vec::new(),
            questions: None,
            rng,
            started: false,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn profile(&self) -> &CandidateProfile {
        &self.profile
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// The generated question set, if the tech stack has been accepted.
    pub fn questions(&self) -> Option<&[TechnicalQuestion]> {
        self.questions.as_deref()
    }

    /// Questions a host should display: only while the assessment is open.
    pub fn visible_questions(&self) -> Option<&[TechnicalQuestion]> {
        if self.stage == Stage::Assessment {
            self.questions()
        } else {
            None
        }
    }

    /// Append the greeting. Returns `None` if the session already started.
    pub fn start(&mut self) -> Option<&Turn> {
        if self.started {
            return None;
        }
        self.started = true;
        info!("Screening session started");
        self.push_turn(Speaker::Assistant, GREETING);
        self.transcript.last()
    }

    /// Process one candidate message.
    ///
    /// Records the message, advances the stage, writes the stage's profile
    /// field when the answer was accepted, builds the question set on entry
    /// to the assessment, and records the reply.
    pub fn handle_turn(&mut self, raw_input: &str) -> TurnOutcome {
        if !self.started {
            // Hosts that skip `start()` still get a transcript that opens with the greeting.
            self.start();
        }
        self.push_turn(Speaker::Candidate, raw_input);

        let previous = self.stage;
        let next = advance(previous, raw_input, &self.profile);

        let recorded = self.record_answer(previous, next, raw_input);

        let mut questions = None;
        if previous == Stage::CollectingTechStack && next == Stage::Assessment {
            let stack = self.profile.tech_stack.clone().unwrap_or_default();
            let generated = generate_technical_questions(&stack, &mut self.rng);
            info!(
                technologies = generated.len(),
                from_bank = stack.iter().filter(|t| is_known_skill(t)).count(),
                "Technical questions generated"
            );
            self.questions = Some(generated.clone());
            questions = Some(generated);
        }

        self.stage = next;
        if next == Stage::Ended && previous != Stage::Ended {
            info!(from = %previous, "Screening session ended by candidate");
        }

        let text = reply(previous, next, raw_input, &self.profile);
        self.push_turn(Speaker::Assistant, &text);

        TurnOutcome {
            previous,
            stage: next,
            reply: text,
            questions,
            recorded,
        }
    }

    /// Write the field for `previous` if this turn accepted an answer.
    ///
    /// Only a forward step counts; an exit keyword routes to `Ended` and is
    /// never stored, even when the rest of the answer would validate.
    fn record_answer(
        &mut self,
        previous: Stage,
        next: Stage,
        raw_input: &str,
    ) -> Option<ProfileField> {
        let field = ProfileField::for_stage(previous)?;
        if Some(next) != previous.next() {
            return None;
        }
        debug_assert!(accepts(previous, raw_input));
        self.profile.record(field, raw_input);
        debug!(field = ?field, "Profile field recorded");
        Some(field)
    }

    fn push_turn(&mut self, speaker: Speaker, content: &str) {
        self.transcript.push(Turn::new(speaker, sanitize_input(content)));
    }

    /// Snapshot for hosts and status endpoints.
    pub fn status(&self) -> ScreeningStatus {
        ScreeningStatus {
            stage: self.stage,
            phase: self.stage.interview_phase(),
            progress_percent: self.stage.progress_percent(),
            accepts_input: self.stage.accepts_input(),
            completed_fields: self.profile.completed_fields(),
            profile: self.profile.clone(),
            questions: self.questions.clone(),
            transcript_len: self.transcript.len(),
        }
    }
}

/// Serializable session snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningStatus {
    pub stage: Stage,
    pub phase: InterviewPhase,
    pub progress_percent: u8,
    pub accepts_input: bool,
    pub completed_fields: usize,
    pub profile: CandidateProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<TechnicalQuestion>>,
    pub transcript_len: usize,
}
