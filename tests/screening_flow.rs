//! End-to-end screening sessions driven through the public API.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use talent_scout::screening::prompts::{FALLBACK, reply};
use talent_scout::screening::questions::known_questions;
use talent_scout::screening::validation::{is_valid_experience, parse_tech_stack};
use talent_scout::screening::{
    CandidateProfile, ScreeningSession, Speaker, Stage, advance, generate_technical_questions,
};

fn seeded_session() -> ScreeningSession {
    ScreeningSession::with_rng(StdRng::seed_from_u64(2024))
}

#[test]
fn eight_turns_reach_assessment_with_full_profile() {
    let mut session = seeded_session();
    session.start();

    let inputs = [
        "hello",
        "Jane Doe",
        "jane.doe@example.com",
        "+1 (555) 123-4567",
        "3",
        "Engineer",
        "Remote",
        "Go, Rust",
    ];
    let expected_stages = [
        Stage::CollectingName,
        Stage::CollectingEmail,
        Stage::CollectingPhone,
        Stage::CollectingExperience,
        Stage::CollectingPosition,
        Stage::CollectingLocation,
        Stage::CollectingTechStack,
        Stage::Assessment,
    ];

    for (input, expected) in inputs.iter().zip(expected_stages) {
        let outcome = session.handle_turn(input);
        assert_eq!(outcome.stage, expected, "after {input:?}");
    }

    let profile = session.profile();
    assert_eq!(profile.full_name.as_deref(), Some("Jane Doe"));
    assert_eq!(profile.email.as_deref(), Some("jane.doe@example.com"));
    assert_eq!(profile.phone.as_deref(), Some("+1 (555) 123-4567"));
    assert_eq!(profile.years_of_experience.as_deref(), Some("3"));
    assert_eq!(profile.desired_positions.as_deref(), Some("Engineer"));
    assert_eq!(profile.current_location.as_deref(), Some("Remote"));
    assert_eq!(
        profile.tech_stack,
        Some(vec!["Go".to_string(), "Rust".to_string()])
    );
    assert!(profile.is_complete());

    let questions = session.questions().expect("question set built");
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].technology, "Go");
    assert_eq!(questions[1].technology, "Rust");

    // Greeting plus a candidate/assistant pair per turn.
    assert_eq!(session.transcript().len(), 1 + 2 * inputs.len());
}

#[test]
fn rejection_is_idempotent_on_every_collection_stage() {
    let valid = [
        "Jane Doe",
        "jane@example.com",
        "5551234567",
        "4",
        "Data Scientist",
        "Berlin",
    ];
    let invalid = ["J4ne", "jane-at-example", "555", "fifty", "x", " "];

    let mut session = seeded_session();
    session.handle_turn("hi");

    for (good, bad) in valid.iter().zip(invalid) {
        let stage = session.stage();
        let before = session.profile().clone();
        for _ in 0..3 {
            let outcome = session.handle_turn(bad);
            assert_eq!(outcome.stage, stage);
            assert!(outcome.recorded.is_none());
            assert_eq!(session.profile(), &before);
        }
        session.handle_turn(good);
        assert_ne!(session.stage(), stage);
    }
    assert_eq!(session.stage(), Stage::CollectingTechStack);
}

#[test]
fn exponent_experience_out_of_range_is_rejected() {
    let profile = CandidateProfile::default();
    assert_eq!(
        advance(Stage::CollectingExperience, "1e2", &profile),
        Stage::CollectingExperience
    );

    let mut session = seeded_session();
    for input in ["hi", "Jane Doe", "j@x.io", "5551234567"] {
        session.handle_turn(input);
    }
    let outcome = session.handle_turn("6e1");
    assert_eq!(outcome.stage, Stage::CollectingExperience);
    assert!(session.profile().years_of_experience.is_none());

    assert_eq!(session.handle_turn("5e0").stage, Stage::CollectingPosition);
    assert_eq!(session.profile().years_of_experience.as_deref(), Some("5e0"));
}

#[test]
fn empty_tech_stack_is_reprompted() {
    let mut session = seeded_session();
    for input in ["hi", "Jane Doe", "j@x.io", "5551234567", "1", "QA", "Oslo"] {
        session.handle_turn(input);
    }
    let outcome = session.handle_turn(" , \n ");
    assert_eq!(outcome.stage, Stage::CollectingTechStack);
    assert!(outcome.questions.is_none());
    assert!(session.profile().tech_stack.is_none());
}

#[test]
fn bye_during_email_ends_without_recording() {
    let profile = CandidateProfile::default();
    assert_eq!(
        advance(Stage::CollectingEmail, "ByE@example.com", &profile),
        Stage::Ended
    );

    let mut session = seeded_session();
    session.handle_turn("hi");
    session.handle_turn("Jane Doe");
    let outcome = session.handle_turn("okay BYE now");
    assert_eq!(outcome.stage, Stage::Ended);
    assert!(session.profile().email.is_none());

    // Ended is a self-loop.
    for input in ["hello?", "Jane Doe", "restart"] {
        assert_eq!(session.handle_turn(input).stage, Stage::Ended);
    }
}

#[test]
fn complete_then_bye_ends() {
    let mut session = seeded_session();
    for input in [
        "hi", "Jane Doe", "j@x.io", "5551234567", "1", "QA", "Oslo", "Rust", "ok",
    ] {
        session.handle_turn(input);
    }
    assert_eq!(session.stage(), Stage::Complete);
    assert_eq!(session.handle_turn("what happens next?").stage, Stage::Complete);
    assert_eq!(session.handle_turn("bye").stage, Stage::Ended);
    assert_eq!(session.handle_turn("anything").stage, Stage::Ended);
}

#[test]
fn generator_known_and_unknown() {
    let stack = vec!["Python".to_string(), "Haskell".to_string()];
    let result = generate_technical_questions(&stack, &mut StdRng::seed_from_u64(99));
    assert_eq!(result.len(), 2);

    let bank: HashSet<&str> = known_questions("Python").unwrap().iter().copied().collect();
    assert_eq!(result[0].questions.len(), 4);
    assert!(result[0].questions.iter().all(|q| bank.contains(q.as_str())));

    assert_eq!(result[1].questions.len(), 4);
    assert!(result[1].questions.iter().all(|q| q.contains("Haskell")));
}

#[test]
fn normalizers_and_validators() {
    assert_eq!(
        parse_tech_stack("React, , Node.js\nPython"),
        vec!["React", "Node.js", "Python"]
    );
    assert!(is_valid_experience("2.5"));
    assert!(!is_valid_experience("51"));
    assert!(!is_valid_experience("abc"));
}

#[test]
fn transcript_alternates_and_is_append_only() {
    let mut session = seeded_session();
    session.start();
    session.handle_turn("hi");
    let snapshot: Vec<_> = session.transcript().iter().map(|t| t.id).collect();

    session.handle_turn("Jane Doe");
    let after: Vec<_> = session.transcript().iter().map(|t| t.id).collect();
    assert_eq!(&after[..snapshot.len()], snapshot.as_slice());

    let speakers: Vec<_> = session.transcript().iter().map(|t| t.speaker).collect();
    assert_eq!(
        speakers,
        vec![
            Speaker::Assistant,
            Speaker::Candidate,
            Speaker::Assistant,
            Speaker::Candidate,
            Speaker::Assistant,
        ]
    );
}

#[test]
fn impossible_reply_pair_is_safe() {
    let text = reply(
        Stage::CollectingPhone,
        Stage::Complete,
        "",
        &CandidateProfile::default(),
    );
    assert_eq!(text, FALLBACK);
}
