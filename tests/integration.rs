// SPDX-License-Identifier: MPL-2.0
use snacknote::config::{self, Config, NoteSection};
use snacknote::haptics::{
    ApiLevel, DesktopHost, HapticError, HostContext, OneShot, VibratorDevice, VibratorManager,
};
use snacknote::note::{HideOutcome, NoteSlot, SnackNoteState};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::tempdir;
use tokio::time::Instant;

/// Pre-manager host whose vibrator remembers every effect.
#[derive(Debug, Default)]
struct LegacyHost {
    pulses: Arc<Mutex<Vec<OneShot>>>,
}

#[derive(Debug)]
struct Motor(Arc<Mutex<Vec<OneShot>>>);

impl VibratorDevice for Motor {
    fn vibrate(&self, effect: OneShot) -> Result<(), HapticError> {
        self.0.lock().unwrap().push(effect);
        Ok(())
    }
}

impl HostContext for LegacyHost {
    fn api_level(&self) -> ApiLevel {
        ApiLevel(26)
    }

    fn vibrator_service(&self) -> Option<Arc<dyn VibratorDevice>> {
        Some(Arc::new(Motor(Arc::clone(&self.pulses))))
    }

    fn vibrator_manager_service(&self) -> Option<Arc<dyn VibratorManager>> {
        None
    }
}

#[tokio::test(start_paused = true)]
async fn show_timeline_follows_configured_duration() {
    let host = LegacyHost::default();
    let mut slot = NoteSlot::new();
    let state = slot.remember(2000, true, &host).clone();
    let start = Instant::now();

    let shown = tokio::spawn({
        let state = state.clone();
        async move { state.show("Uploaded", "3 files", || {}).await }
    });

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert!(state.is_visible());
    assert_eq!(state.title(), "Uploaded");
    assert_eq!(state.body(), "3 files");

    shown.await.expect("show task panicked");
    assert!(!state.is_visible());
    assert!(start.elapsed() >= Duration::from_millis(2000));
    assert_eq!(*host.pulses.lock().unwrap(), vec![OneShot::NOTE]);
}

#[tokio::test(start_paused = true)]
async fn overlapping_notes_hide_at_latest_deadline() {
    let state = SnackNoteState::create(1000, false, &DesktopHost::new());

    let first = state.begin("A", "first", || {});
    let first = tokio::spawn(first.run());
    tokio::time::sleep(Duration::from_millis(600)).await;
    let second = tokio::spawn(state.begin("B", "second", || {}).run());

    assert_eq!(first.await.unwrap(), HideOutcome::Superseded);
    assert!(state.is_visible());
    assert_eq!(second.await.unwrap(), HideOutcome::Hidden);
    assert!(!state.is_visible());
}

#[test]
fn config_drives_note_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        note: NoteSection {
            duration_ms: 750,
            vibration: false,
        },
        ..Config::default()
    };

    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    let note_config = loaded.note_config();
    assert_eq!(note_config.duration.millis(), 750);
    assert!(!note_config.vibration_enabled);

    dir.close().expect("Failed to close temporary directory");
}
