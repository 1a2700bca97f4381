// SPDX-License-Identifier: MPL-2.0
//! Host context for desktop windows.
//!
//! Desktop machines have no vibration motor, so the plain host offers no
//! services and notes fall back to [`super::NoVibrator`]. With simulation
//! enabled the host reports a modern API level and a manager whose default
//! vibrator logs each pulse, which keeps the haptic path observable while
//! developing on a desktop.

use super::host::{ApiLevel, HostContext, VibratorDevice, VibratorManager};
use super::{HapticError, OneShot};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopHost {
    simulate_haptics: bool,
}

impl DesktopHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose vibrator writes pulses to the log instead of a motor.
    #[must_use]
    pub fn simulated() -> Self {
        Self {
            simulate_haptics: true,
        }
    }

    #[must_use]
    pub fn simulates_haptics(&self) -> bool {
        self.simulate_haptics
    }
}

impl HostContext for DesktopHost {
    fn api_level(&self) -> ApiLevel {
        if self.simulate_haptics {
            ApiLevel::VIBRATOR_MANAGER
        } else {
            ApiLevel::default()
        }
    }

    fn vibrator_service(&self) -> Option<Arc<dyn VibratorDevice>> {
        None
    }

    fn vibrator_manager_service(&self) -> Option<Arc<dyn VibratorManager>> {
        if self.simulate_haptics {
            Some(Arc::new(LogManager))
        } else {
            None
        }
    }
}

#[derive(Debug)]
struct LogManager;

impl VibratorManager for LogManager {
    fn default_vibrator(&self) -> Option<Arc<dyn VibratorDevice>> {
        Some(Arc::new(LogVibrator))
    }
}

#[derive(Debug)]
struct LogVibrator;

impl VibratorDevice for LogVibrator {
    fn vibrate(&self, effect: OneShot) -> Result<(), HapticError> {
        tracing::info!(
            duration_ms = effect.duration.as_millis() as u64,
            "simulated haptic pulse"
        );
        Ok(())
    }
}
