// SPDX-License-Identifier: MPL-2.0
//! User interface for the note overlay.
//!
//! Follows the Elm-style "state down, messages up" pattern: the view reads a
//! note [`Snapshot`](crate::note::Snapshot) and emits a message on tap, and the
//! application routes that message back to the note state.
//!
//! - [`snack_note`] - Overlay renderer layering the card over host content
//! - [`transition`] - Slide-in/slide-out timing
//! - [`widgets`] - Custom Iced widgets (measured slide wrapper)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod snack_note;
pub mod transition;
pub mod widgets;
