// SPDX-License-Identifier: MPL-2.0
//! Demo application: a button that shows numbered notes.
//!
//! The `App` owns the note slot for its window. Every message goes through
//! `update`, which re-reads the note's watch channel afterwards and retargets
//! the slide transition when visibility flipped.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::haptics::DesktopHost;
use crate::note::{NoteConfig, NoteSlot, SnackNoteState, Snapshot};
use crate::ui::snack_note::NoteStyle;
use crate::ui::transition::Transition;
use iced::{window, Element, Subscription, Task, Theme};
use std::time::Instant;
use tokio::sync::watch;

pub const WINDOW_DEFAULT_WIDTH: f32 = 420.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    slot: NoteSlot,
    note_config: NoteConfig,
    host: DesktopHost,
    /// Change feed of the note state; drives the transition.
    changes: watch::Receiver<Snapshot>,
    /// Last snapshot seen on `changes`, rendered by `view`.
    current: Snapshot,
    transition: Transition,
    now: Instant,
    style: NoteStyle,
    shown: u32,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure, flags are only consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        if let Some(warning) = warning {
            tracing::warn!(%warning, "using default settings");
        }

        let mut note_config = config.note_config();
        if let Some(duration_ms) = flags.duration_ms {
            note_config = NoteConfig::new(duration_ms, note_config.vibration_enabled);
        }
        if flags.no_vibrate {
            note_config.vibration_enabled = false;
        }

        let host = if flags.simulate_haptics {
            DesktopHost::simulated()
        } else {
            DesktopHost::new()
        };

        tracing::info!(
            duration_ms = note_config.duration.millis(),
            vibration = note_config.vibration_enabled,
            simulate_haptics = host.simulates_haptics(),
            "starting"
        );

        let style = NoteStyle::from_appearance(&config.appearance);
        (Self::with_settings(note_config, host, style), Task::none())
    }

    /// Builds the application without touching the config file.
    pub fn with_settings(note_config: NoteConfig, host: DesktopHost, style: NoteStyle) -> Self {
        let mut slot = NoteSlot::new();
        let changes = slot.remember_with(note_config, &host).subscribe();
        let current = changes.borrow().clone();

        Self {
            slot,
            note_config,
            host,
            changes,
            current,
            transition: Transition::default(),
            now: Instant::now(),
            style,
            shown: 0,
        }
    }

    fn note(&mut self) -> &SnackNoteState {
        self.slot.remember_with(self.note_config, &self.host)
    }

    fn title(&self) -> String {
        "SnackNote".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();

        let task = match message {
            Message::ShowPressed => {
                self.shown += 1;
                let number = self.shown;
                let timer = self.note().begin(
                    format!("Note #{number}"),
                    "Tap the card to log a message",
                    move || tracing::info!(note = number, "note tapped"),
                );
                Task::perform(timer.run(), Message::NoteExpired)
            }
            Message::NoteTapped => {
                self.note().tap();
                Task::none()
            }
            Message::NoteExpired(outcome) => {
                tracing::debug!(?outcome, "hide timer finished");
                Task::none()
            }
            Message::Frame(now) => {
                self.now = now;
                Task::none()
            }
        };

        self.sync_note();
        task
    }

    /// Pulls the latest snapshot and starts a slide if visibility changed.
    fn sync_note(&mut self) {
        if !self.changes.has_changed().unwrap_or(false) {
            return;
        }
        self.current = self.changes.borrow_and_update().clone();
        if self.transition.retarget(self.current.visible, self.now) {
            tracing::debug!(visible = self.current.visible, "note slide started");
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            note: &self.current,
            transition: &self.transition,
            now: self.now,
            style: self.style,
        })
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_frame_subscription(&self.transition, self.now)
    }

    /// The snapshot currently rendered.
    #[must_use]
    pub fn current_note(&self) -> &Snapshot {
        &self.current
    }

    #[must_use]
    pub fn transition(&self) -> &Transition {
        &self.transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::with_settings(
            NoteConfig::new(3000, true),
            DesktopHost::new(),
            NoteStyle::default(),
        )
    }

    #[test]
    fn starts_with_hidden_note() {
        let app = app();
        assert!(!app.current_note().visible);
        assert!(!app.transition().is_visible());
    }

    #[test]
    fn show_pressed_renders_numbered_note() {
        let mut app = app();

        let _task = app.update(Message::ShowPressed);
        let _task = app.update(Message::ShowPressed);

        assert!(app.current_note().visible);
        assert_eq!(app.current_note().title, "Note #2");
        assert_eq!(app.current_note().generation, 2);
        assert!(app.transition().is_visible());
    }

    #[test]
    fn tapping_keeps_note_visible() {
        let mut app = app();
        let _task = app.update(Message::ShowPressed);

        let _task = app.update(Message::NoteTapped);

        assert!(app.current_note().visible);
        assert!(app.transition().is_visible());
    }

    #[test]
    fn frames_do_not_change_note() {
        let mut app = app();
        let _task = app.update(Message::ShowPressed);
        let generation = app.current_note().generation;

        let _task = app.update(Message::Frame(Instant::now()));

        assert_eq!(app.current_note().generation, generation);
    }

    #[test]
    fn note_is_remembered_across_updates() {
        let mut app = app();
        let first = app.note().clone();
        let _task = app.update(Message::ShowPressed);

        assert!(app.note().ptr_eq(&first));
    }

    #[test]
    fn view_builds_while_note_is_shown() {
        let mut app = app();
        let _task = app.update(Message::ShowPressed);

        let _element = app.view();
    }
}
