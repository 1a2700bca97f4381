// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::note::HideOutcome;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The "show" button was pressed.
    ShowPressed,
    /// The note card was tapped.
    NoteTapped,
    /// A hide timer finished.
    NoteExpired(HideOutcome),
    /// Animation frame while the card is sliding.
    Frame(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Overrides the configured auto-hide duration (milliseconds).
    pub duration_ms: Option<i64>,
    /// Disables haptic feedback regardless of the config file.
    pub no_vibrate: bool,
    /// Logs haptic pulses instead of reporting no hardware.
    pub simulate_haptics: bool,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SNACKNOTE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional tracing filter, e.g. `snacknote=debug`.
    pub log_filter: Option<String>,
}
