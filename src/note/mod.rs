// SPDX-License-Identifier: MPL-2.0
//! Snack note state: what is shown, for how long, and what a tap does.
//!
//! # Usage
//!
//! ```
//! use snacknote::haptics::DesktopHost;
//! use snacknote::note::NoteSlot;
//!
//! # async fn demo() {
//! let mut slot = NoteSlot::new();
//! let state = slot.remember(3000, true, &DesktopHost::new()).clone();
//!
//! // Suspends until the note hides again
//! state.show("Saved", "Your changes are safe", || println!("tapped")).await;
//! # }
//! ```
//!
//! Inside an Iced `update`, prefer [`SnackNoteState::begin`] and run the
//! returned [`HideTimer`] as a task so the hide comes back as a message.

mod duration;
mod slot;
mod state;

pub use duration::AutoHideDuration;
pub use slot::NoteSlot;
pub use state::{HideOutcome, HideTimer, NoteConfig, SnackNoteState, Snapshot, TapAction};
