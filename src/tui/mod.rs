//! Terminal User Interface module
//!
//! This module provides the interactive SmartBudgetX interface using ratatui:
//! the budget form, the actual-vs-ideal chart, the insights panel and the
//! onboarding wizard, switched from a sidebar.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
