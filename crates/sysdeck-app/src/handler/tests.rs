//! Update-function tests covering the loader, termination, and copy
//! feedback contracts.

use sysdeck_core::{AppConfig, AppPhase, EnvVar, HostEvent, OsInfo};

use crate::message::Message;
use crate::state::{AppState, EnvPhase, COPIED_LABEL, COPY_LABEL};

use super::{update, UpdateAction};

fn sample_os_info() -> OsInfo {
    OsInfo {
        name: "Linux".to_string(),
        version: "6.8.0".to_string(),
    }
}

fn sample_config() -> AppConfig {
    AppConfig {
        application_id: "org.example.panel".to_string(),
        version: None,
    }
}

/// Run `Ready` then a successful env load, leaving two rows A,B.
fn state_with_rows() -> AppState {
    let mut state = AppState::new();
    update(&mut state, Message::Host(HostEvent::Ready));
    update(
        &mut state,
        Message::EnvsLoaded {
            envs: vec![EnvVar::new("A", "1"), EnvVar::new("B", "2")],
        },
    );
    state
}

// ─────────────────────────────────────────────────────────
// Readiness dispatch
// ─────────────────────────────────────────────────────────

#[test]
fn test_ready_dispatches_all_three_loaders() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Host(HostEvent::Ready));

    assert_eq!(
        result.actions,
        vec![
            UpdateAction::LoadOsInfo,
            UpdateAction::LoadAppInfo,
            UpdateAction::LoadEnvs,
        ]
    );
    assert_eq!(state.phase, AppPhase::Running);
}

// ─────────────────────────────────────────────────────────
// OS / App regions
// ─────────────────────────────────────────────────────────

#[test]
fn test_os_info_success_renders_exact_text() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::OsInfoLoaded {
            info: sample_os_info(),
        },
    );

    assert_eq!(state.os_region.text(), Some("OS: Linux 6.8.0"));
}

#[test]
fn test_os_info_failure_renders_error() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::OsInfoFailed {
            error: "Host error: capability missing".to_string(),
        },
    );

    assert!(state.os_region.is_failed());
    assert!(state
        .os_region
        .error()
        .unwrap()
        .contains("capability missing"));
    // The failure never bleeds into the other regions.
    assert!(state.app_region.is_pending());
}

#[test]
fn test_empty_failure_message_gets_generic_fallback() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::AppConfigFailed {
            error: "   ".to_string(),
        },
    );

    assert_eq!(state.app_region.error(), Some("Unknown error"));
}

#[test]
fn test_app_config_success_renders_exact_text() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::AppConfigLoaded {
            config: sample_config(),
        },
    );

    assert_eq!(state.app_region.text(), Some("App ID: org.example.panel"));
}

// ─────────────────────────────────────────────────────────
// Environment region
// ─────────────────────────────────────────────────────────

#[test]
fn test_env_rows_preserve_host_order_and_own_their_values() {
    let state = state_with_rows();

    assert_eq!(state.env.rows.len(), 2);
    assert_eq!(state.env.rows[0].display_text(), "A = 1");
    assert_eq!(state.env.rows[1].display_text(), "B = 2");
    assert_eq!(state.env.rows[0].value, "1");
    assert_eq!(state.env.rows[1].value, "2");
}

#[test]
fn test_duplicate_env_load_appends_rows() {
    let mut state = state_with_rows();
    update(
        &mut state,
        Message::EnvsLoaded {
            envs: vec![EnvVar::new("A", "1"), EnvVar::new("B", "2")],
        },
    );

    // Documented current behavior: a duplicate dispatch duplicates the rows.
    assert_eq!(state.env.rows.len(), 4);
}

#[test]
fn test_env_failure_sets_error_block() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::EnvsFailed {
            error: "timed out".to_string(),
        },
    );

    assert_eq!(state.env.phase, EnvPhase::Failed("timed out".to_string()));
    assert!(state.env.rows.is_empty());
}

// ─────────────────────────────────────────────────────────
// Clipboard copy + feedback
// ─────────────────────────────────────────────────────────

#[test]
fn test_copy_selected_carries_the_rows_captured_value() {
    let mut state = state_with_rows();
    state.env.selected = 1;

    let result = update(&mut state, Message::CopySelected);
    assert_eq!(
        result.actions,
        vec![UpdateAction::CopyToClipboard {
            row: 1,
            text: "2".to_string(),
        }]
    );
}

#[test]
fn test_copy_selected_with_no_rows_is_inert() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::CopySelected);
    assert!(result.actions.is_empty());
}

#[test]
fn test_copy_success_swaps_label_and_schedules_reset() {
    let mut state = state_with_rows();

    let result = update(&mut state, Message::CopySucceeded { row: 0 });

    assert_eq!(state.env.rows[0].copy_label, COPIED_LABEL);
    assert_eq!(
        result.actions,
        vec![UpdateAction::ScheduleCopyReset {
            row: 0,
            generation: 1,
        }]
    );
}

#[test]
fn test_reset_restores_original_label() {
    let mut state = state_with_rows();
    update(&mut state, Message::CopySucceeded { row: 0 });

    update(
        &mut state,
        Message::CopyResetElapsed {
            row: 0,
            generation: 1,
        },
    );

    assert_eq!(state.env.rows[0].copy_label, COPY_LABEL);
    assert!(!state.env.rows[0].feedback_active());
}

#[test]
fn test_reentrant_copy_yields_single_effective_reset() {
    let mut state = state_with_rows();

    update(&mut state, Message::CopySucceeded { row: 0 });
    let second = update(&mut state, Message::CopySucceeded { row: 0 });
    assert_eq!(
        second.actions,
        vec![UpdateAction::ScheduleCopyReset {
            row: 0,
            generation: 2,
        }]
    );

    // The first copy's reset fires but is stale: the label stays "Copied!".
    update(
        &mut state,
        Message::CopyResetElapsed {
            row: 0,
            generation: 1,
        },
    );
    assert_eq!(state.env.rows[0].copy_label, COPIED_LABEL);

    // The second copy's reset restores the pre-copy label, not "Copied!".
    update(
        &mut state,
        Message::CopyResetElapsed {
            row: 0,
            generation: 2,
        },
    );
    assert_eq!(state.env.rows[0].copy_label, COPY_LABEL);
}

#[test]
fn test_copy_failure_changes_nothing() {
    let mut state = state_with_rows();

    let result = update(
        &mut state,
        Message::CopyFailed {
            row: 0,
            error: "clipboard unavailable".to_string(),
        },
    );

    assert!(result.actions.is_empty());
    assert_eq!(state.env.rows[0].copy_label, COPY_LABEL);
    assert!(!state.env.rows[0].feedback_active());
}

#[test]
fn test_feedback_is_independent_per_row() {
    let mut state = state_with_rows();

    update(&mut state, Message::CopySucceeded { row: 0 });
    assert_eq!(state.env.rows[0].copy_label, COPIED_LABEL);
    assert_eq!(state.env.rows[1].copy_label, COPY_LABEL);
}

// ─────────────────────────────────────────────────────────
// Termination
// ─────────────────────────────────────────────────────────

#[test]
fn test_window_close_requests_exit_exactly_once() {
    let mut state = AppState::new();

    let first = update(&mut state, Message::Host(HostEvent::WindowClose));
    assert_eq!(first.actions, vec![UpdateAction::RequestExit]);
    assert_eq!(state.phase, AppPhase::Quitting);

    let second = update(&mut state, Message::Host(HostEvent::WindowClose));
    assert!(second.actions.is_empty());
}

#[test]
fn test_window_close_before_ready_still_terminates() {
    let mut state = AppState::new();
    assert_eq!(state.phase, AppPhase::Connecting);

    let result = update(&mut state, Message::Host(HostEvent::WindowClose));
    assert_eq!(result.actions, vec![UpdateAction::RequestExit]);
    assert!(state.phase.is_quitting());
}

#[test]
fn test_quit_key_takes_the_same_exit_path() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::RequestQuit);

    assert_eq!(result.actions, vec![UpdateAction::RequestExit]);
    assert!(state.phase.is_quitting());
}

#[test]
fn test_disconnect_keeps_regions_intact() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::OsInfoLoaded {
            info: sample_os_info(),
        },
    );

    update(&mut state, Message::Host(HostEvent::Disconnected));

    assert_eq!(state.os_region.text(), Some("OS: Linux 6.8.0"));
    assert!(!state.phase.is_quitting());
}
