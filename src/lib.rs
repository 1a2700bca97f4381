// SPDX-License-Identifier: MPL-2.0
//! `snacknote` is a transient notification card for Iced applications.
//!
//! A note slides in from the top edge over the host content, shows a title
//! and a body, optionally fires a haptic pulse, and hides itself after a
//! configured duration. Tapping the card runs a callback without closing it.
//!
//! - [`note`] - Observable note state and its show/hide timer
//! - [`ui`] - Overlay renderer, slide transition and widgets
//! - [`haptics`] - Vibration capability resolved from the host
//! - [`config`] - `settings.toml` loading and saving
//! - [`app`] - Demo application used by the `snacknote` binary

pub mod app;
pub mod config;
pub mod error;
pub mod haptics;
pub mod note;
pub mod telemetry;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
