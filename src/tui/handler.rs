//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state. Failed actions are reported in the status bar instead
//! of tearing the interface down.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::error::BudgetResult;
use crate::setup::OnboardingStep;

use super::app::{ActiveView, App, EditTarget, FocusedPanel, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.show_help {
        // Any key closes help
        app.show_help = false;
        return Ok(());
    }

    let outcome = match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    };

    if let Err(e) = outcome {
        warn!(error = %e, "TUI action failed");
        app.set_status(format!("Error: {}", e));
    }
    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> BudgetResult<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return Ok(());
        }
        KeyCode::Tab => {
            app.toggle_panel_focus();
            return Ok(());
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.switch_view(ActiveView::ALL[index]);
            app.clear_status();
            return Ok(());
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => {
            handle_sidebar_key(app, key);
            Ok(())
        }
        FocusedPanel::Main => handle_main_panel_key(app, key),
    }
}

/// Handle keys when sidebar is focused
fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    let position = ActiveView::ALL
        .iter()
        .position(|v| *v == app.active_view)
        .unwrap_or(0);

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let next = (position + 1).min(ActiveView::ALL.len() - 1);
            app.active_view = ActiveView::ALL[next];
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.active_view = ActiveView::ALL[position.saturating_sub(1)];
        }
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            app.switch_view(app.active_view);
        }
        _ => {}
    }
}

/// Handle keys when main panel is focused
fn handle_main_panel_key(app: &mut App, key: KeyEvent) -> BudgetResult<()> {
    match app.active_view {
        ActiveView::Form => handle_form_key(app, key),
        ActiveView::Chart => Ok(()),
        ActiveView::Insights => handle_insights_key(app, key),
        ActiveView::Onboarding => handle_onboarding_key(app, key),
    }
}

/// Handle keys in the budget form
fn handle_form_key(app: &mut App, key: KeyEvent) -> BudgetResult<()> {
    let row_count = app.ledger().len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(row_count),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_row = 0,
        KeyCode::Char('G') | KeyCode::End => app.selected_row = row_count.saturating_sub(1),

        KeyCode::Char('i') => app.begin_edit(EditTarget::Income),
        KeyCode::Char('a') | KeyCode::Char('n') => app.add_row()?,
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected()?,
        KeyCode::Char('t') => app.cycle_selected_tag()?,
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit(EditTarget::Label(app.selected_row)),
        KeyCode::Char('m') => app.begin_edit(EditTarget::Amount(app.selected_row)),
        _ => {}
    }
    Ok(())
}

/// Handle keys in the insights view
fn handle_insights_key(app: &mut App, key: KeyEvent) -> BudgetResult<()> {
    if let KeyCode::Char('x') | KeyCode::Char('e') = key.code {
        app.export()?;
    }
    Ok(())
}

/// Handle keys in the onboarding wizard
fn handle_onboarding_key(app: &mut App, key: KeyEvent) -> BudgetResult<()> {
    let options = app.wizard_option_count();

    match key.code {
        KeyCode::Enter => app.wizard_next()?,
        KeyCode::Backspace | KeyCode::Esc | KeyCode::Char('b') => app.wizard_back(),
        KeyCode::Char('j') | KeyCode::Down if options > 0 => {
            if app.wizard_cursor + 1 < options {
                app.wizard_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up if options > 0 => {
            app.wizard_cursor = app.wizard_cursor.saturating_sub(1);
        }
        KeyCode::Char(' ') if options > 0 => app.wizard_select(),
        KeyCode::Char('n') if app.wizard.step() == OnboardingStep::Identity => {
            app.begin_edit(EditTarget::Name)
        }
        KeyCode::Char('g') if app.wizard.step() == OnboardingStep::Identity => {
            app.begin_edit(EditTarget::Goal)
        }
        _ => {}
    }
    Ok(())
}

/// Handle keys while a field is being edited
fn handle_editing_key(app: &mut App, key: KeyEvent) -> BudgetResult<()> {
    match key.code {
        KeyCode::Enter => app.commit_edit()?,
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => app.editor.backspace(),
        KeyCode::Delete => app.editor.delete(),
        KeyCode::Left => app.editor.move_left(),
        KeyCode::Right => app.editor.move_right(),
        KeyCode::Home => app.editor.move_start(),
        KeyCode::End => app.editor.move_end(),
        KeyCode::Char(c) => {
            app.editor.insert(c);
        }
        _ => {}
    }
    Ok(())
}
