// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::note::Snapshot;
use crate::ui::snack_note::{self, NoteStyle, ViewContext as NoteViewContext};
use crate::ui::transition::Transition;
use iced::widget::{button, Container, Text};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub note: &'a Snapshot,
    pub transition: &'a Transition,
    pub now: Instant,
    pub style: NoteStyle,
}

/// Renders a centered "show" button under the note overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Container::new(button(Text::new("Show SnackNote")).on_press(Message::ShowPressed))
        .center(Length::Fill);

    snack_note::view(
        NoteViewContext {
            note: ctx.note,
            transition: ctx.transition,
            now: ctx.now,
            style: ctx.style,
            on_tap: Message::NoteTapped,
        },
        content,
    )
}
