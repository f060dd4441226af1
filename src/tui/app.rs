//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Ledger and profile changes go through the services so the session file
//! and audit log stay in step with what is on screen.

use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::export::{export_report, ReportFormat};
use crate::models::{InvestArea, Ledger, OnboardingProfile, RowUpdate, StockPreference};
use crate::services::{summarize_ledger, DerivedSummary, LedgerService, ProfileService};
use crate::setup::{OnboardingStep, OnboardingWizard};
use crate::storage::Storage;

use super::widgets::TextInput;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Form,
    Chart,
    Insights,
    Onboarding,
}

impl ActiveView {
    /// Views in switcher order, keyed 1 to 4
    pub const ALL: [ActiveView; 4] = [
        ActiveView::Form,
        ActiveView::Chart,
        ActiveView::Insights,
        ActiveView::Onboarding,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ActiveView::Form => "Budget",
            ActiveView::Chart => "Chart",
            ActiveView::Insights => "Insights",
            ActiveView::Onboarding => "Onboarding",
        }
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    Sidebar,
    #[default]
    Main,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// The field the text editor is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Income,
    Label(usize),
    Amount(usize),
    Name,
    Goal,
}

impl EditTarget {
    pub fn title(&self) -> &'static str {
        match self {
            EditTarget::Income => "Monthly income",
            EditTarget::Label(_) => "Label",
            EditTarget::Amount(_) => "Amount",
            EditTarget::Name => "Name",
            EditTarget::Goal => "Goal",
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(self, EditTarget::Income | EditTarget::Amount(_))
    }
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Current input mode
    pub input_mode: InputMode,

    /// Selected row index in the budget form
    pub selected_row: usize,

    /// Line editor shared by every editable field
    pub editor: TextInput,

    /// Field the editor writes back to on commit
    pub editing: Option<EditTarget>,

    /// Onboarding wizard state
    pub wizard: OnboardingWizard,

    /// Highlighted option on the invest-areas and stock-preference steps
    pub wizard_cursor: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Whether the help overlay is shown
    pub show_help: bool,
}

impl<'a> App<'a> {
    /// Create a new App instance
    ///
    /// The wizard starts from the stored profile so re-onboarding edits the
    /// previous answers.
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        let wizard = match ProfileService::new(storage).get() {
            Ok(Some(profile)) => OnboardingWizard::with_draft(profile),
            _ => OnboardingWizard::new(),
        };

        Self {
            storage,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            input_mode: InputMode::default(),
            selected_row: 0,
            editor: TextInput::new(),
            editing: None,
            wizard,
            wizard_cursor: 0,
            status_message: None,
            show_help: false,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.focused_panel = FocusedPanel::Main;
        if view == ActiveView::Onboarding {
            self.wizard_cursor = 0;
        }
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// Current ledger; an unreadable session renders as empty
    pub fn ledger(&self) -> Ledger {
        self.storage
            .session
            .get()
            .map(|session| session.ledger)
            .unwrap_or_else(|_| Ledger::empty())
    }

    /// Stored profile, if onboarding has finished
    pub fn profile(&self) -> Option<OnboardingProfile> {
        ProfileService::new(self.storage).get().ok().flatten()
    }

    /// Totals for the current ledger
    pub fn summary(&self) -> DerivedSummary {
        summarize_ledger(&self.ledger())
    }

    /// Currency symbol from settings
    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Move the row selection up
    pub fn move_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Move the row selection down, bounded by `max` rows
    pub fn move_down(&mut self, max: usize) {
        if self.selected_row < max.saturating_sub(1) {
            self.selected_row += 1;
        }
    }

    /// Keep the selection inside the ledger after rows disappear
    fn clamp_selection(&mut self) {
        let len = self.ledger().len();
        self.selected_row = self.selected_row.min(len.saturating_sub(1));
    }

    /// Append a blank row and select it
    pub fn add_row(&mut self) -> BudgetResult<()> {
        let (index, _) = LedgerService::new(self.storage).add_row(None, None, None)?;
        self.selected_row = index;
        self.set_status(format!("Added row #{}", index));
        Ok(())
    }

    /// Remove the selected row
    pub fn delete_selected(&mut self) -> BudgetResult<()> {
        let removed = LedgerService::new(self.storage).remove_row(self.selected_row)?;
        if let Some(row) = removed {
            let label = if row.label.is_empty() { "row" } else { row.label.as_str() };
            self.set_status(format!("Removed {}", label));
        }
        self.clamp_selection();
        Ok(())
    }

    /// Reclassify the selected row with the next tag
    pub fn cycle_selected_tag(&mut self) -> BudgetResult<()> {
        let Some(row) = self.ledger().row(self.selected_row).cloned() else {
            return Ok(());
        };
        let tag = row.tag.cycle();
        LedgerService::new(self.storage).update_row(self.selected_row, vec![RowUpdate::Tag(tag)])?;
        Ok(())
    }

    /// Open the editor on a field, pre-filled with its current value
    pub fn begin_edit(&mut self, target: EditTarget) {
        let ledger = self.ledger();
        let current = match target {
            EditTarget::Income => Some(ledger.income.clone()),
            EditTarget::Label(i) => ledger.row(i).map(|r| r.label.clone()),
            EditTarget::Amount(i) => ledger.row(i).map(|r| r.amount.clone()),
            EditTarget::Name => Some(self.wizard.draft().name.clone()),
            EditTarget::Goal => Some(self.wizard.draft().goal.clone()),
        };
        let Some(current) = current else {
            return;
        };

        self.editor = TextInput::new()
            .label(target.title())
            .numeric(target.is_numeric())
            .content(current)
            .focused(true);
        self.editing = Some(target);
        self.input_mode = InputMode::Editing;
    }

    /// Write the editor content back to its field
    pub fn commit_edit(&mut self) -> BudgetResult<()> {
        let Some(target) = self.editing.take() else {
            return Ok(());
        };
        self.input_mode = InputMode::Normal;
        let value = self.editor.value().to_string();
        let ledger = LedgerService::new(self.storage);

        match target {
            EditTarget::Income => {
                ledger.set_income(&value)?;
            }
            EditTarget::Label(i) => {
                ledger.update_row(i, vec![RowUpdate::Label(value)])?;
            }
            EditTarget::Amount(i) => {
                ledger.update_row(i, vec![RowUpdate::Amount(value)])?;
            }
            EditTarget::Name => self.wizard.set_name(value),
            EditTarget::Goal => self.wizard.set_goal(value),
        }
        Ok(())
    }

    /// Drop the editor without saving
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.input_mode = InputMode::Normal;
    }

    /// Number of selectable options on the current wizard step
    pub fn wizard_option_count(&self) -> usize {
        match self.wizard.step() {
            OnboardingStep::InvestAreas => InvestArea::ALL.len(),
            OnboardingStep::StockPref => StockPreference::ALL.len(),
            _ => 0,
        }
    }

    /// Advance the wizard, or finish it on the review step
    pub fn wizard_next(&mut self) -> BudgetResult<()> {
        if self.wizard.step().is_last() {
            return self.finish_onboarding();
        }
        self.wizard.next();
        self.wizard_cursor = 0;
        Ok(())
    }

    /// Step the wizard back
    pub fn wizard_back(&mut self) {
        self.wizard.back();
        self.wizard_cursor = 0;
    }

    /// Toggle or pick the option under the cursor
    pub fn wizard_select(&mut self) {
        match self.wizard.step() {
            OnboardingStep::InvestAreas => {
                if let Some(area) = InvestArea::ALL.get(self.wizard_cursor) {
                    self.wizard.toggle_invest(*area);
                }
            }
            OnboardingStep::StockPref => {
                let picked = StockPreference::ALL.get(self.wizard_cursor).copied();
                if picked.is_some() && self.wizard.draft().stock_pref == picked {
                    self.wizard.set_stock_pref(None);
                } else {
                    self.wizard.set_stock_pref(picked);
                }
            }
            _ => {}
        }
    }

    /// Store the wizard draft as the profile
    pub fn finish_onboarding(&mut self) -> BudgetResult<()> {
        let Some(profile) = self.wizard.finish() else {
            return Ok(());
        };
        ProfileService::new(self.storage).complete(profile)?;
        self.set_status("Onboarding complete");
        self.switch_view(ActiveView::Insights);
        Ok(())
    }

    /// Write the report in the default format
    pub fn export(&mut self) -> BudgetResult<PathBuf> {
        let format: ReportFormat = self.settings.default_export_format;
        let path = export_report(self.storage, self.settings, format, None)?;
        self.set_status(format!("Report saved to {}", path.display()));
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::models::Tag;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let storage = Storage::open(paths, &settings).unwrap();
        (temp_dir, storage, settings)
    }

    #[test]
    fn test_edit_income_sanitizes() {
        let (_temp, storage, settings) = create_test_storage();
        let mut app = App::new(&storage, &settings);

        app.begin_edit(EditTarget::Income);
        assert_eq!(app.input_mode, InputMode::Editing);
        for c in "4a500".chars() {
            app.editor.insert(c);
        }
        app.commit_edit().unwrap();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.ledger().income, "4500");
    }

    #[test]
    fn test_cancel_edit_keeps_value() {
        let (_temp, storage, settings) = create_test_storage();
        let mut app = App::new(&storage, &settings);

        app.begin_edit(EditTarget::Label(0));
        app.editor.insert('!');
        app.cancel_edit();

        assert_eq!(app.ledger().rows[0].label, "Rent / Mortgage");
        assert!(app.editing.is_none());
    }

    #[test]
    fn test_add_and_delete_rows_track_selection() {
        let (_temp, storage, settings) = create_test_storage();
        let mut app = App::new(&storage, &settings);

        app.add_row().unwrap();
        assert_eq!(app.selected_row, 6);
        assert_eq!(app.ledger().len(), 7);

        app.delete_selected().unwrap();
        assert_eq!(app.ledger().len(), 6);
        assert_eq!(app.selected_row, 5);
    }

    #[test]
    fn test_cycle_tag() {
        let (_temp, storage, settings) = create_test_storage();
        let mut app = App::new(&storage, &settings);

        app.cycle_selected_tag().unwrap();
        assert_eq!(app.ledger().rows[0].tag, Tag::Want);
    }

    #[test]
    fn test_wizard_flow_stores_profile() {
        let (_temp, storage, settings) = create_test_storage();
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::Onboarding);

        app.begin_edit(EditTarget::Name);
        for c in "Sam".chars() {
            app.editor.insert(c);
        }
        app.commit_edit().unwrap();
        app.wizard_next().unwrap();

        app.wizard_cursor = 2;
        app.wizard_select();
        app.wizard_next().unwrap();

        app.wizard_select();
        app.wizard_next().unwrap();
        assert_eq!(app.wizard.step(), OnboardingStep::Review);

        app.wizard_next().unwrap();
        let profile = app.profile().unwrap();
        assert_eq!(profile.name, "Sam");
        assert!(profile.invest_areas.contains(&InvestArea::Etfs));
        assert_eq!(profile.stock_pref, Some(StockPreference::Tech));
        assert_eq!(app.active_view, ActiveView::Insights);
    }

    #[test]
    fn test_wizard_back_at_start_stays() {
        let (_temp, storage, settings) = create_test_storage();
        let mut app = App::new(&storage, &settings);
        app.wizard_back();
        assert_eq!(app.wizard.step(), OnboardingStep::Identity);
    }
}
