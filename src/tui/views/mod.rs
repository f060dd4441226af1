//! TUI Views module
//!
//! Contains the main views (budget form, chart, insights, onboarding) as
//! well as the sidebar, the status bar and the help overlay.

pub mod chart;
pub mod form;
pub mod help;
pub mod insights;
pub mod onboarding;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveView, App};
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    match app.active_view {
        ActiveView::Form => form::render(frame, app, layout.main),
        ActiveView::Chart => chart::render(frame, app, layout.main),
        ActiveView::Insights => insights::render(frame, app, layout.main),
        ActiveView::Onboarding => onboarding::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.show_help {
        help::render(frame);
    }
}

/// Border color for the main panel
pub(crate) fn main_border_color(app: &App) -> ratatui::style::Color {
    use crate::tui::app::FocusedPanel;
    use ratatui::style::Color;

    if app.focused_panel == FocusedPanel::Main {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::config::settings::Settings;
    use crate::storage::Storage;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn draw_all_views(width: u16, height: u16) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let storage = Storage::open(paths, &settings).unwrap();
        let mut app = App::new(&storage, &settings);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();

        for view in ActiveView::ALL {
            app.switch_view(view);
            terminal.draw(|frame| render(frame, &mut app)).unwrap();
        }
        app.show_help = true;
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
    }

    #[test]
    fn test_views_render_at_normal_size() {
        draw_all_views(120, 40);
    }

    #[test]
    fn test_views_render_in_tiny_terminal() {
        draw_all_views(20, 6);
    }
}
