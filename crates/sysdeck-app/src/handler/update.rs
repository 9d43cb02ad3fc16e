//! Main update function - handles state transitions (TEA pattern)
//!
//! This is the only place application state is mutated. Loader tasks and the
//! host connection communicate with it exclusively through messages, so the
//! three display regions can be fed by concurrently completing fetches
//! without any locking.

use sysdeck_core::prelude::*;
use sysdeck_core::{AppPhase, HostEvent};

use crate::message::Message;
use crate::state::{AppState, Region};

use super::{keys, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or actions
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Host Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::Host(HostEvent::Ready) => {
            debug!("Host signalled ready, dispatching loaders");
            state.phase = AppPhase::Running;
            // The three loaders are independent: they run concurrently and
            // may complete in any order.
            UpdateResult::actions(vec![
                UpdateAction::LoadOsInfo,
                UpdateAction::LoadAppInfo,
                UpdateAction::LoadEnvs,
            ])
        }

        Message::Host(HostEvent::WindowClose) => {
            debug!("Host signalled window close");
            request_termination(state)
        }

        Message::Host(HostEvent::Disconnected) => {
            // In-flight requests were already failed by the connection task;
            // regions keep whatever they showed last.
            warn!("Host connection lost");
            UpdateResult::none()
        }

        Message::RequestQuit => request_termination(state),

        // ─────────────────────────────────────────────────────────
        // OS Info Loader
        // ─────────────────────────────────────────────────────────
        Message::OsInfoLoaded { info } => {
            state.os_region = Region::Populated(format!("OS: {} {}", info.name, info.version));
            UpdateResult::none()
        }

        Message::OsInfoFailed { error } => {
            error!("Failed to load OS info: {error}");
            state.os_region = Region::Failed(failure_text(error));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // App Info Loader
        // ─────────────────────────────────────────────────────────
        Message::AppConfigLoaded { config } => {
            state.app_region = Region::Populated(format!("App ID: {}", config.application_id));
            UpdateResult::none()
        }

        Message::AppConfigFailed { error } => {
            error!("Failed to load app config: {error}");
            state.app_region = Region::Failed(failure_text(error));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Environment Lister
        // ─────────────────────────────────────────────────────────
        Message::EnvsLoaded { envs } => {
            debug!("Loaded {} environment variables", envs.len());
            state.env.append(envs);
            UpdateResult::none()
        }

        Message::EnvsFailed { error } => {
            error!("Failed to load environment variables: {error}");
            state.env.fail(failure_text(error));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Row Selection / Clipboard Copier
        // ─────────────────────────────────────────────────────────
        Message::SelectPrevRow => {
            state.env.select_prev();
            UpdateResult::none()
        }

        Message::SelectNextRow => {
            state.env.select_next();
            UpdateResult::none()
        }

        Message::CopySelected => match state.env.selected_value() {
            Some((row, text)) => UpdateResult::action(UpdateAction::CopyToClipboard { row, text }),
            None => UpdateResult::none(),
        },

        Message::CopySucceeded { row } => match state.env.rows.get_mut(row) {
            Some(env_row) => {
                let generation = env_row.begin_feedback();
                UpdateResult::action(UpdateAction::ScheduleCopyReset { row, generation })
            }
            None => UpdateResult::none(),
        },

        Message::CopyFailed { row, error } => {
            // Copy is a convenience affordance: failures are logged but not
            // surfaced in the view.
            warn!("Clipboard write for row {row} failed: {error}");
            UpdateResult::none()
        }

        Message::CopyResetElapsed { row, generation } => {
            if let Some(env_row) = state.env.rows.get_mut(row) {
                env_row.end_feedback(generation);
            }
            UpdateResult::none()
        }

        Message::Tick => UpdateResult::none(),
    }
}

/// Request process termination through the host, exactly once.
///
/// Duplicate close signals (or a quit key after one) are absorbed here: once
/// the phase is `Quitting` there is nothing further to request.
fn request_termination(state: &mut AppState) -> UpdateResult {
    if state.phase.is_quitting() {
        return UpdateResult::none();
    }
    state.phase = AppPhase::Quitting;
    UpdateResult::action(UpdateAction::RequestExit)
}

/// Failure message for a region, with a generic fallback when the host sent
/// no usable text.
fn failure_text(error: String) -> String {
    if error.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        error
    }
}
