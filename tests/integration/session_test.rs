//! Integration tests for session playback through the public API

use std::time::{Duration, Instant};

use termfolio::{Catalog, Command, Mode, Session, SessionEvent, Timing, TranscriptLine, Transition};

use crate::helpers::{drive, type_line};

const STEP: Duration = Duration::from_millis(10);

fn started(mode: Mode, catalog: Catalog) -> (Session, Instant) {
    let start = Instant::now();
    let mut session = Session::new(mode, catalog, Timing::default());
    session.start(start);
    (session, start)
}

fn output_lines(session: &Session) -> Vec<String> {
    session
        .transcript()
        .into_iter()
        .filter_map(|line| match line {
            TranscriptLine::Output(text) => Some(text),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Scripted
// ============================================================================

#[test]
fn scripted_builtin_plays_every_command_once() {
    let catalog = Catalog::builtin();
    let total = catalog.len();
    let (mut session, start) = started(Mode::Scripted, catalog);

    let transitions = drive(&mut session, start, Duration::from_secs(60), STEP);

    let typed: Vec<usize> = transitions
        .iter()
        .filter_map(|t| match t {
            Transition::CommandTyped(i) => Some(*i),
            _ => None,
        })
        .collect();
    assert_eq!(typed, (0..total).collect::<Vec<_>>());
    assert_eq!(
        transitions.iter().filter(|t| **t == Transition::Finished).count(),
        1
    );
    assert_eq!(transitions.last(), Some(&Transition::Finished));
    assert!(matches!(
        session.transcript().last(),
        Some(TranscriptLine::Prompt { .. })
    ));
}

#[test]
fn scripted_lines_reveal_in_order() {
    let catalog = Catalog::new(vec![
        Command::new("boot", ["one", "two", "three"]),
        Command::new("next", ["four"]),
    ])
    .unwrap();
    let (mut session, start) = started(Mode::Scripted, catalog);

    let transitions = drive(&mut session, start, Duration::from_secs(20), STEP);

    let reveals: Vec<(usize, usize)> = transitions
        .iter()
        .filter_map(|t| match t {
            Transition::LineRevealed { index, visible } => Some((*index, *visible)),
            _ => None,
        })
        .collect();
    assert_eq!(reveals, vec![(0, 1), (0, 2), (0, 3), (1, 1)]);
    assert_eq!(output_lines(&session), vec!["one", "two", "three", "four"]);
}

#[test]
fn scripted_ignores_keystrokes() {
    let (mut session, start) = started(Mode::Scripted, Catalog::builtin());
    drive(&mut session, start, Duration::from_secs(60), STEP);
    let before = session.transcript();

    assert!(type_line(&mut session, "about").is_empty());
    assert_eq!(session.transcript(), before);
}

// ============================================================================
// Interactive
// ============================================================================

#[test]
fn interactive_intro_then_commands() {
    let (mut session, start) = started(Mode::Interactive, Catalog::builtin());

    let transitions = drive(&mut session, start, Duration::from_secs(5), STEP);
    assert_eq!(transitions, vec![Transition::IntroTyped]);
    assert!(session.accepts_input());
    assert!(output_lines(&session).contains(&"System ready.".to_string()));

    let transitions = type_line(&mut session, "ABOUT");
    assert_eq!(transitions, vec![Transition::Submitted { recognized: true }]);

    let transitions = type_line(&mut session, "foo");
    assert_eq!(transitions, vec![Transition::Submitted { recognized: false }]);

    let lines = output_lines(&session);
    assert_eq!(
        &lines[lines.len() - 4..],
        &[
            "Name: Maleyha Fatima".to_string(),
            "Role: Software Developer".to_string(),
            "Interests: Backend, Full Stack, AI/ML".to_string(),
            "'foo' is not recognized as a command.".to_string(),
        ]
    );
    assert_eq!(
        session.transcript().last(),
        Some(&TranscriptLine::Prompt {
            input: String::new(),
            cursor: true,
        })
    );
}

#[test]
fn interactive_intro_typed_fires_once() {
    let (mut session, start) = started(Mode::Interactive, Catalog::builtin());

    let transitions = drive(&mut session, start, Duration::from_secs(30), STEP);

    assert_eq!(transitions, vec![Transition::IntroTyped]);
}

#[test]
fn interactive_commands_echo_as_typed() {
    let (mut session, start) = started(Mode::Interactive, Catalog::builtin());
    drive(&mut session, start, Duration::from_secs(5), STEP);

    type_line(&mut session, "  Skills  ");

    let commands: Vec<String> = session
        .transcript()
        .into_iter()
        .filter_map(|line| match line {
            TranscriptLine::Command { text, .. } => Some(text),
            _ => None,
        })
        .collect();
    assert_eq!(commands.last().map(String::as_str), Some("Skills"));
}
