// SPDX-License-Identifier: MPL-2.0
//! Test doubles for the haptics host and float assertions.

pub use approx::assert_abs_diff_eq;

use crate::haptics::{
    ApiLevel, HapticError, HostContext, OneShot, VibratorDevice, VibratorManager,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-4;

/// Vibrator that records every effect it is asked to play.
#[derive(Debug, Default)]
pub struct RecordingDevice {
    pulses: Mutex<Vec<OneShot>>,
    failure: Option<String>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Device that records the attempt and then reports a platform error.
    pub fn failing(reason: &str) -> Self {
        Self {
            pulses: Mutex::default(),
            failure: Some(reason.to_string()),
        }
    }

    pub fn pulses(&self) -> Vec<OneShot> {
        self.pulses.lock().unwrap().clone()
    }
}

impl VibratorDevice for RecordingDevice {
    fn vibrate(&self, effect: OneShot) -> Result<(), HapticError> {
        self.pulses.lock().unwrap().push(effect);
        match &self.failure {
            Some(reason) => Err(HapticError::Platform(reason.clone())),
            None => Ok(()),
        }
    }
}

#[derive(Debug)]
pub struct RecordingManager {
    device: Option<Arc<RecordingDevice>>,
}

impl RecordingManager {
    pub fn new(device: Arc<RecordingDevice>) -> Self {
        Self {
            device: Some(device),
        }
    }

    /// Manager that has no default vibrator.
    pub fn empty() -> Self {
        Self { device: None }
    }
}

impl VibratorManager for RecordingManager {
    fn default_vibrator(&self) -> Option<Arc<dyn VibratorDevice>> {
        self.device
            .clone()
            .map(|device| device as Arc<dyn VibratorDevice>)
    }
}

/// Host that counts service lookups and shares one recording device.
#[derive(Debug)]
pub struct RecordingHost {
    api_level: ApiLevel,
    device: Arc<RecordingDevice>,
    has_services: bool,
    service_lookups: AtomicUsize,
    manager_lookups: AtomicUsize,
}

impl RecordingHost {
    pub fn new(api_level: ApiLevel) -> Self {
        Self::with_device(api_level, RecordingDevice::new())
    }

    pub fn with_device(api_level: ApiLevel, device: RecordingDevice) -> Self {
        Self {
            api_level,
            device: Arc::new(device),
            has_services: true,
            service_lookups: AtomicUsize::new(0),
            manager_lookups: AtomicUsize::new(0),
        }
    }

    pub fn without_services(api_level: ApiLevel) -> Self {
        Self {
            has_services: false,
            ..Self::new(api_level)
        }
    }

    pub fn device(&self) -> Arc<RecordingDevice> {
        Arc::clone(&self.device)
    }

    pub fn service_lookups(&self) -> usize {
        self.service_lookups.load(Ordering::SeqCst)
    }

    pub fn manager_lookups(&self) -> usize {
        self.manager_lookups.load(Ordering::SeqCst)
    }

    /// Total number of service lookups of either kind.
    pub fn lookups(&self) -> usize {
        self.service_lookups() + self.manager_lookups()
    }
}

impl HostContext for RecordingHost {
    fn api_level(&self) -> ApiLevel {
        self.api_level
    }

    fn vibrator_service(&self) -> Option<Arc<dyn VibratorDevice>> {
        self.service_lookups.fetch_add(1, Ordering::SeqCst);
        self.has_services
            .then(|| Arc::clone(&self.device) as Arc<dyn VibratorDevice>)
    }

    fn vibrator_manager_service(&self) -> Option<Arc<dyn VibratorManager>> {
        self.manager_lookups.fetch_add(1, Ordering::SeqCst);
        self.has_services.then(|| {
            Arc::new(RecordingManager::new(Arc::clone(&self.device))) as Arc<dyn VibratorManager>
        })
    }
}
