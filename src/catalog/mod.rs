//! Command catalog
//!
//! The ordered, read-only table of commands a session can show. The first
//! entry is the intro that types itself when a session starts.
//!
//! A catalog is either the built-in portfolio or a TOML file:
//!
//! ```toml
//! [[commands]]
//! trigger = "about"
//! output = ["Name: ...", "Role: ..."]
//! ```

mod builtin;

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{CatalogError, UnrecognizedCommand};

pub use builtin::SPACER;

/// Text to show for an output line: spacer placeholders become empty.
pub fn display_line(line: &str) -> &str {
    if line == SPACER {
        ""
    } else {
        line
    }
}

/// One canned command and the lines it prints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Command {
    /// Text a visitor must type (matched case-insensitively)
    pub trigger: String,
    /// Output lines in display order
    #[serde(default)]
    pub output: Vec<String>,
}

impl Command {
    pub fn new<I, S>(trigger: impl Into<String>, output: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            trigger: trigger.into(),
            output: output.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `input` selects this command.
    pub fn matches(&self, input: &str) -> bool {
        self.trigger.to_lowercase() == input.to_lowercase()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    commands: Vec<Command>,
}

/// Ordered, non-empty list of commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    commands: Vec<Command>,
}

impl Catalog {
    /// Build a catalog from commands in display order.
    pub fn new(commands: Vec<Command>) -> Result<Self, CatalogError> {
        if commands.is_empty() {
            return Err(CatalogError::Empty);
        }
        for command in &commands {
            if command.trigger.trim().is_empty() {
                warn!("Catalog entry with blank trigger can never be matched");
            }
        }
        Ok(Self { commands })
    }

    /// The portfolio compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            commands: builtin::commands(),
        }
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.commands)
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&content)?;
        info!(path = %path.display(), commands = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// The built-in catalog, or the one at `path` when given.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// The command that types itself when a session starts.
    pub fn intro(&self) -> &Command {
        &self.commands[0]
    }

    pub fn get(&self, index: usize) -> Option<&Command> {
        self.commands.get(index)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Find the first command whose trigger equals `input`, ignoring case.
    ///
    /// `input` is expected to be trimmed already; the error carries it
    /// verbatim so the message echoes what the visitor typed.
    pub fn resolve(&self, input: &str) -> Result<&Command, UnrecognizedCommand> {
        self.commands
            .iter()
            .find(|command| command.matches(input))
            .ok_or_else(|| UnrecognizedCommand {
                input: input.to_string(),
            })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
