// SPDX-License-Identifier: MPL-2.0
//! Presentation state of a snack note.
//!
//! The state lives in a `tokio::sync::watch` channel: every field change is
//! published as a fresh [`Snapshot`], and the view layer re-reads the snapshot
//! whenever the channel reports a change. Showing a note is split in two:
//! [`SnackNoteState::begin`] applies the synchronous part (fields, haptic
//! pulse, visibility) and hands back a [`HideTimer`] whose [`HideTimer::run`]
//! waits out the auto-hide duration.
//!
//! Each `begin` bumps a generation counter. A hide timer only clears
//! visibility if no newer note was shown in the meantime, so showing a note
//! while another is up restarts the countdown.

use super::duration::AutoHideDuration;
use crate::haptics::{self, HostContext, OneShot, Vibrator};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Callback run when the note card is tapped.
#[derive(Clone)]
pub struct TapAction(Arc<dyn Fn() + Send + Sync>);

impl TapAction {
    pub fn new(action: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(action))
    }

    #[must_use]
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn invoke(&self) {
        (self.0)();
    }

    /// Returns true if both handles wrap the same callback.
    #[must_use]
    pub fn same_as(&self, other: &TapAction) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for TapAction {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for TapAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TapAction(..)")
    }
}

impl<F> From<F> for TapAction
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(action: F) -> Self {
        Self::new(action)
    }
}

/// Everything the view needs to render the note.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub visible: bool,
    pub title: String,
    pub body: String,
    pub on_tap: TapAction,
    /// Number of notes shown so far. Identifies the most recent `begin`.
    pub generation: u64,
}

/// Construction-time settings of a note state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteConfig {
    pub duration: AutoHideDuration,
    pub vibration_enabled: bool,
}

impl NoteConfig {
    #[must_use]
    pub fn new(duration_millis: i64, vibration_enabled: bool) -> Self {
        Self {
            duration: AutoHideDuration::from_millis(duration_millis),
            vibration_enabled,
        }
    }
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            duration: AutoHideDuration::default(),
            vibration_enabled: crate::config::DEFAULT_VIBRATION,
        }
    }
}

/// What a finished [`HideTimer`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideOutcome {
    /// The note this timer belonged to was hidden.
    Hidden,
    /// A newer note was shown first; visibility was left alone.
    Superseded,
}

/// Shared handle to the state of one note slot.
///
/// Clones refer to the same state.
#[derive(Debug, Clone)]
pub struct SnackNoteState {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: NoteConfig,
    vibrator: Arc<dyn Vibrator>,
    store: watch::Sender<Snapshot>,
}

impl SnackNoteState {
    /// Creates a hidden note state. The vibration capability is resolved from
    /// `host` here and reused by every `show`.
    pub fn new(config: NoteConfig, host: &dyn HostContext) -> Self {
        Self::with_vibrator(config, haptics::resolve(host))
    }

    pub fn create(duration_millis: i64, vibration_enabled: bool, host: &dyn HostContext) -> Self {
        Self::new(NoteConfig::new(duration_millis, vibration_enabled), host)
    }

    /// Creates a state around an already resolved vibrator.
    pub fn with_vibrator(config: NoteConfig, vibrator: Arc<dyn Vibrator>) -> Self {
        let (store, _) = watch::channel(Snapshot::default());
        Self {
            inner: Arc::new(Inner {
                config,
                vibrator,
                store,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> NoteConfig {
        self.inner.config
    }

    /// Shows a note and suspends until its auto-hide duration has elapsed.
    pub async fn show(
        &self,
        title: impl Into<String>,
        text: impl Into<String>,
        on_tap: impl Into<TapAction>,
    ) {
        let _ = self.begin(title, text, on_tap).run().await;
    }

    /// Applies the immediate part of showing a note.
    ///
    /// Fields are overwritten first, then the haptic pulse fires (if enabled),
    /// then the note becomes visible. The returned timer performs the hide.
    ///
    /// Nothing else hides the note: if the timer is dropped without being run,
    /// the note stays visible until a later timer from this state completes.
    /// Use [`SnackNoteState::show`] when the caller can await the hide itself.
    pub fn begin(
        &self,
        title: impl Into<String>,
        text: impl Into<String>,
        on_tap: impl Into<TapAction>,
    ) -> HideTimer {
        let (title, body, on_tap) = (title.into(), text.into(), on_tap.into());
        self.inner.store.send_modify(|note| {
            note.title = title;
            note.body = body;
            note.on_tap = on_tap;
        });

        if self.inner.config.vibration_enabled {
            if let Err(err) = self.inner.vibrator.pulse(OneShot::NOTE) {
                tracing::warn!(%err, "haptic pulse failed, showing note without it");
            }
        }

        let mut generation = 0;
        self.inner.store.send_modify(|note| {
            note.visible = true;
            note.generation += 1;
            generation = note.generation;
        });

        let delay = self.inner.config.duration.as_duration();
        tracing::debug!(generation, delay_ms = delay.as_millis() as u64, "note shown");

        HideTimer {
            state: self.clone(),
            generation,
            delay,
        }
    }

    /// Runs the stored tap callback. The note stays visible.
    pub fn tap(&self) {
        // Clone first so the callback may call back into this state.
        let action = self.inner.store.borrow().on_tap.clone();
        action.invoke();
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.inner.store.borrow().clone()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.inner.store.borrow().visible
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.inner.store.borrow().title.clone()
    }

    #[must_use]
    pub fn body(&self) -> String {
        self.inner.store.borrow().body.clone()
    }

    /// Returns a receiver that is notified on every field change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.inner.store.subscribe()
    }

    /// Returns true if both handles refer to the same state.
    #[must_use]
    pub fn ptr_eq(&self, other: &SnackNoteState) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn expire(&self, generation: u64) -> HideOutcome {
        let mut outcome = HideOutcome::Superseded;
        self.inner.store.send_if_modified(|note| {
            if note.generation != generation {
                return false;
            }
            outcome = HideOutcome::Hidden;
            std::mem::replace(&mut note.visible, false)
        });

        match outcome {
            HideOutcome::Hidden => tracing::debug!(generation, "note hidden"),
            HideOutcome::Superseded => {
                tracing::debug!(generation, "hide skipped, a newer note is showing");
            }
        }
        outcome
    }
}

/// Pending hide of a shown note.
#[derive(Debug)]
#[must_use = "the note is only hidden once the timer runs"]
pub struct HideTimer {
    state: SnackNoteState,
    generation: u64,
    delay: Duration,
}

impl HideTimer {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits out the delay, then hides the note unless a newer one replaced it.
    pub async fn run(self) -> HideOutcome {
        tokio::time::sleep(self.delay).await;
        self.state.expire(self.generation)
    }
}
