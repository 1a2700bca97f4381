// SPDX-License-Identifier: MPL-2.0
//! Overlay renderer for a snack note.
//!
//! The host content always fills the area. While a note is shown (and while
//! it slides out) a card is layered on top of it, anchored to the top edge.
//! Tapping the card emits the caller's message; hiding is left to the note's
//! auto-hide timer.

use crate::config::AppearanceSection;
use crate::note::Snapshot;
use crate::ui::design_tokens::{palette, shadow, sizing, spacing, typography};
use crate::ui::transition::Transition;
use crate::ui::widgets::slide_in;
use iced::border::Radius;
use iced::font::Weight;
use iced::widget::{container, mouse_area, Column, Container, Stack, Text};
use iced::advanced::text;
use iced::{mouse, Background, Border, Color, Element, Font, Length, Padding, Theme};
use std::time::Instant;

/// Shape and color of the note card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteStyle {
    pub radius: Radius,
    pub background: Color,
}

impl Default for NoteStyle {
    fn default() -> Self {
        Self {
            radius: crate::config::DEFAULT_CORNER_RADIUS.into(),
            background: palette::WHITE,
        }
    }
}

impl NoteStyle {
    #[must_use]
    pub fn from_appearance(appearance: &AppearanceSection) -> Self {
        Self {
            radius: appearance.clamped_corner_radius().into(),
            background: appearance.background_color(),
        }
    }

    #[must_use]
    pub fn radius(mut self, radius: impl Into<Radius>) -> Self {
        self.radius = radius.into();
        self
    }

    #[must_use]
    pub fn background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }
}

/// Context required to render the note overlay.
pub struct ViewContext<'a, Message> {
    pub note: &'a Snapshot,
    pub transition: &'a Transition,
    pub now: Instant,
    pub style: NoteStyle,
    /// Emitted when the card is tapped.
    pub on_tap: Message,
}

/// Renders `content` with the note card layered on top of it.
pub fn view<'a, Message, Renderer>(
    ctx: ViewContext<'a, Message>,
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: text::Renderer<Font = Font> + 'a,
{
    let base = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if ctx.transition.is_present(ctx.now) {
        let progress = ctx.transition.progress(ctx.now);
        let slide = slide_in(card(ctx.note, ctx.style, ctx.on_tap), progress)
            .min_height(sizing::NOTE_MIN_HEIGHT);

        stack = stack.push(
            Container::new(slide)
                .width(Length::Fill)
                .padding(Padding {
                    top: spacing::XS,
                    right: spacing::XS,
                    bottom: 0.0,
                    left: spacing::XS,
                }),
        );
    }

    stack.into()
}

/// The card itself: title and body inside a tap zone without press feedback.
fn card<'a, Message, Renderer>(
    note: &'a Snapshot,
    style: NoteStyle,
    on_tap: Message,
) -> Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: text::Renderer<Font = Font> + 'a,
{
    let title = Text::new(note.title.as_str())
        .size(typography::TITLE)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });
    let body = Text::new(note.body.as_str()).size(typography::BODY);

    let surface = Container::new(Column::new().push(title).push(body))
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(move |theme: &Theme| card_style(theme, style));

    // Exiting cards are drawn but no longer react to taps
    if note.visible {
        mouse_area(surface)
            .on_press(on_tap)
            .interaction(mouse::Interaction::Pointer)
            .into()
    } else {
        surface.into()
    }
}

fn card_style(_theme: &Theme, style: NoteStyle) -> container::Style {
    container::Style {
        background: Some(Background::Color(style.background)),
        border: Border {
            radius: style.radius,
            ..Border::default()
        },
        shadow: shadow::ELEVATION_4,
        text_color: Some(palette::GRAY_900),
        ..Default::default()
    }
}
