//! Render smoke tests against a test backend

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use sysdeck_app::{update, AppState, Message};
use sysdeck_core::{AppConfig, EnvVar, OsInfo};

use super::view;

fn render_to_text(state: &AppState) -> String {
    let backend = TestBackend::new(64, 16);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| view(frame, state)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn populated_state() -> AppState {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::OsInfoLoaded {
            info: OsInfo {
                name: "Linux".to_string(),
                version: "6.8.0".to_string(),
            },
        },
    );
    update(
        &mut state,
        Message::AppConfigLoaded {
            config: AppConfig {
                application_id: "org.example.panel".to_string(),
                version: None,
            },
        },
    );
    update(
        &mut state,
        Message::EnvsLoaded {
            envs: vec![EnvVar::new("HOME", "/home/user")],
        },
    );
    state
}

#[test]
fn test_initial_view_shows_placeholders() {
    let text = render_to_text(&AppState::new());

    assert!(text.contains("Operating System"));
    assert!(text.contains("Application"));
    assert!(text.contains("Environment"));
    assert!(text.contains("waiting for host"));
}

#[test]
fn test_populated_view_shows_exact_region_texts() {
    let text = render_to_text(&populated_state());

    assert!(text.contains("OS: Linux 6.8.0"));
    assert!(text.contains("App ID: org.example.panel"));
    assert!(text.contains("HOME = /home/user"));
    assert!(text.contains("[Copy]"));
}

#[test]
fn test_failed_regions_show_error_texts() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::OsInfoFailed {
            error: "metadata unavailable".to_string(),
        },
    );
    update(
        &mut state,
        Message::EnvsFailed {
            error: "fetch rejected".to_string(),
        },
    );

    let text = render_to_text(&state);
    assert!(text.contains("OS Error: metadata unavailable"));
    assert!(text.contains("Env Error: fetch rejected"));
}

#[test]
fn test_copy_feedback_label_is_rendered() {
    let mut state = populated_state();
    update(&mut state, Message::CopySucceeded { row: 0 });

    let text = render_to_text(&state);
    assert!(text.contains("[Copied!]"));
}
