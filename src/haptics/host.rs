// SPDX-License-Identifier: MPL-2.0
//! Platform service lookup consumed by the haptics layer.

use super::{HapticError, OneShot};
use std::fmt;
use std::sync::Arc;

/// Platform API level reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ApiLevel(pub u32);

impl ApiLevel {
    /// First level that exposes vibrators through a manager service.
    pub const VIBRATOR_MANAGER: ApiLevel = ApiLevel(31);
}

/// A physical vibrator.
pub trait VibratorDevice: Send + Sync + fmt::Debug {
    /// Fires `effect` and returns without waiting for it to finish.
    ///
    /// # Errors
    ///
    /// Returns [`HapticError`] if the platform rejects the effect.
    fn vibrate(&self, effect: OneShot) -> Result<(), HapticError>;
}

/// Service that owns the device's vibrators.
pub trait VibratorManager: Send + Sync + fmt::Debug {
    /// Returns the system default vibrator, if there is one.
    fn default_vibrator(&self) -> Option<Arc<dyn VibratorDevice>>;
}

/// Handle used to look up platform services.
///
/// Only consulted while a note state is constructed.
pub trait HostContext {
    fn api_level(&self) -> ApiLevel;

    /// The directly exposed vibrator service (older platforms).
    fn vibrator_service(&self) -> Option<Arc<dyn VibratorDevice>>;

    /// The vibrator manager service (newer platforms).
    fn vibrator_manager_service(&self) -> Option<Arc<dyn VibratorManager>>;
}
