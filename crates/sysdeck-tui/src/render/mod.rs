//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use sysdeck_app::state::{AppState, EnvPanel, EnvPhase, Region};

use crate::theme;

const PENDING_PLACEHOLDER: &str = "waiting for host…";

/// Render the complete UI (View function in TEA)
///
/// Three fixed regions, each owned by exactly one loader: `os` and `app` are
/// single-line panels, `env` takes the rest of the screen.
pub fn view(frame: &mut Frame, state: &AppState) {
    let [os_area, app_area, env_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_text_region(frame, os_area, "Operating System", "OS Error", &state.os_region);
    render_text_region(frame, app_area, "Application", "App Error", &state.app_region);
    render_env_region(frame, env_area, &state.env);
    render_footer(frame, footer_area);
}

/// One single-line region: placeholder, populated text, or styled error.
fn render_text_region(frame: &mut Frame, area: Rect, title: &str, error_prefix: &str, region: &Region) {
    let line = match region {
        Region::Pending => Line::from(Span::styled(PENDING_PLACEHOLDER, theme::pending_style())),
        Region::Populated(text) => Line::from(text.as_str()),
        Region::Failed(message) => Line::from(Span::styled(
            format!("{error_prefix}: {message}"),
            theme::error_style(),
        )),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(title.to_string());

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// The environment region: an error block on failure, otherwise one row per
/// variable with its copy control.
fn render_env_region(frame: &mut Frame, area: Rect, env: &EnvPanel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title("Environment".to_string());

    match &env.phase {
        EnvPhase::Failed(message) => {
            let line = Line::from(Span::styled(
                format!("Env Error: {message}"),
                theme::error_style(),
            ));
            frame.render_widget(Paragraph::new(line).block(block), area);
        }
        EnvPhase::Pending if env.rows.is_empty() => {
            let line = Line::from(Span::styled(PENDING_PLACEHOLDER, theme::pending_style()));
            frame.render_widget(Paragraph::new(line).block(block), area);
        }
        _ => {
            let items: Vec<ListItem> = env.rows.iter().map(env_row_item).collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(theme::selection_style());

            let mut list_state = ListState::default().with_selected(Some(env.selected));
            frame.render_stateful_widget(list, area, &mut list_state);
        }
    }
}

fn env_row_item(row: &sysdeck_app::state::EnvRow) -> ListItem<'_> {
    let control_style = if row.feedback_active() {
        theme::copied_style()
    } else {
        theme::copy_style()
    };

    ListItem::new(Line::from(vec![
        Span::raw(row.display_text()),
        Span::raw("  "),
        Span::styled(format!("[{}]", row.copy_label), control_style),
    ]))
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = Line::from(Span::styled(
        " ↑/↓ select row · Enter/c copy · q quit",
        theme::hint_style(),
    ));
    frame.render_widget(Paragraph::new(hints), area);
}
