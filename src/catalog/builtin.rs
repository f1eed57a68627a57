//! The portfolio shipped with the binary.

use super::Command;

/// Shown for lines that exist only for vertical spacing.
pub const SPACER: &str = "\u{00A0}";

const ENTRIES: &[(&str, &[&str])] = &[
    (
        "run maleyha's_portfolio.exe",
        &[
            "Preparing portfolio...",
            "System ready.",
            SPACER,
            "Welcome to my terminal portfolio!",
            "This is a simulation of a Windows command prompt.",
            "Type help to see a list of available commands.",
            "P.S. This portfolio is best viewed on desktop.",
        ],
    ),
    (
        "about",
        &[
            "Name: Maleyha Fatima",
            "Role: Software Developer",
            "Interests: Backend, Full Stack, AI/ML",
        ],
    ),
    (
        "education",
        &[
            "University of Guelph",
            "BComp Software Engineering Honors",
            "2022 - Expected: Spring 2027",
            "4th Year Student",
            "GPA: 74/100",
        ],
    ),
    (
        "skills",
        &["JavaScript, TypeScript, React, Node.js, CSS, HTML"],
    ),
    (
        "help",
        &[
            "Available commands:",
            "  about       Who I am",
            "  education   Where I study",
            "  skills      What I work with",
            "  help        Show this list",
        ],
    ),
];

pub(super) fn commands() -> Vec<Command> {
    ENTRIES
        .iter()
        .map(|(trigger, output)| Command::new(*trigger, output.iter().copied()))
        .collect()
}
