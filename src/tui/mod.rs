//! TUI (Text User Interface) module for termfolio
//!
//! This module draws the command-prompt window using ratatui/crossterm and
//! runs the event loop that drives a session.

pub mod app;
pub mod keyboard;
pub mod portfolio_app;
pub mod status_footer;
pub mod theme;
pub mod ui;

// Re-export the app and shared types for commands and external use
pub use app::App;
pub use portfolio_app::{Chrome, PortfolioApp};
pub use theme::Theme;
