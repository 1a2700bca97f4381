// SPDX-License-Identifier: MPL-2.0
//! Haptic feedback for note presentation.
//!
//! The platform exposes vibration hardware in one of two ways depending on
//! its API level: older platforms hand out the vibrator service directly,
//! newer ones hand out a vibrator manager that yields a default vibrator.
//! [`resolve`] inspects the [`HostContext`] once and returns a single
//! [`Vibrator`] capability, so callers never branch on the platform again.

mod desktop;
mod host;

pub use desktop::DesktopHost;
pub use host::{ApiLevel, HostContext, VibratorDevice, VibratorManager};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Length of the pulse fired when a note is shown.
pub const NOTE_PULSE_DURATION: Duration = Duration::from_millis(300);

/// Errors that can occur when triggering haptic feedback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HapticError {
    /// The host has no vibration hardware.
    #[error("haptic feedback not supported")]
    NotSupported,
    /// The platform rejected the request.
    #[error("vibration failed: {0}")]
    Platform(String),
}

/// A single vibration of fixed duration, played at the device's default
/// amplitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneShot {
    pub duration: Duration,
}

impl OneShot {
    /// The pulse fired by every note that has vibration enabled.
    pub const NOTE: OneShot = OneShot {
        duration: NOTE_PULSE_DURATION,
    };
}

/// A resolved vibration capability.
pub trait Vibrator: Send + Sync + fmt::Debug {
    /// Fires a one-shot pulse. Implementations return immediately.
    ///
    /// # Errors
    ///
    /// Returns [`HapticError`] when the hardware is missing or the platform
    /// rejects the effect.
    fn pulse(&self, effect: OneShot) -> Result<(), HapticError>;
}

/// Vibrator backed by the directly exposed vibrator service.
#[derive(Debug)]
pub struct LegacyVibrator {
    device: Arc<dyn VibratorDevice>,
}

impl LegacyVibrator {
    #[must_use]
    pub fn new(device: Arc<dyn VibratorDevice>) -> Self {
        Self { device }
    }
}

impl Vibrator for LegacyVibrator {
    fn pulse(&self, effect: OneShot) -> Result<(), HapticError> {
        self.device.vibrate(effect)
    }
}

/// Vibrator backed by a vibrator manager.
///
/// The default vibrator is looked up on every pulse since the manager may
/// swap it (e.g. when an input device is attached).
#[derive(Debug)]
pub struct ManagedVibrator {
    manager: Arc<dyn VibratorManager>,
}

impl ManagedVibrator {
    #[must_use]
    pub fn new(manager: Arc<dyn VibratorManager>) -> Self {
        Self { manager }
    }
}

impl Vibrator for ManagedVibrator {
    fn pulse(&self, effect: OneShot) -> Result<(), HapticError> {
        self.manager
            .default_vibrator()
            .ok_or(HapticError::NotSupported)?
            .vibrate(effect)
    }
}

/// Stand-in used when the host offers no vibration service at all.
#[derive(Debug, Default)]
pub struct NoVibrator;

impl Vibrator for NoVibrator {
    fn pulse(&self, _effect: OneShot) -> Result<(), HapticError> {
        Ok(())
    }
}

/// Selects the vibration capability for `host`.
///
/// Hosts at or above [`ApiLevel::VIBRATOR_MANAGER`] are reached through their
/// vibrator manager, older hosts through the plain vibrator service. A host
/// lacking the relevant service degrades to [`NoVibrator`].
#[must_use]
pub fn resolve(host: &dyn HostContext) -> Arc<dyn Vibrator> {
    let api_level = host.api_level();

    if api_level >= ApiLevel::VIBRATOR_MANAGER {
        if let Some(manager) = host.vibrator_manager_service() {
            tracing::debug!(?api_level, "using vibrator manager");
            return Arc::new(ManagedVibrator::new(manager));
        }
    } else if let Some(device) = host.vibrator_service() {
        tracing::debug!(?api_level, "using vibrator service");
        return Arc::new(LegacyVibrator::new(device));
    }

    tracing::debug!(?api_level, "no vibration service available");
    Arc::new(NoVibrator)
}
