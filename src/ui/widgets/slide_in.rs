// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that shifts its content upward by a fraction of the
//! content's own measured height.
//!
//! The offset is derived during layout, once the content has been measured,
//! so the slide distance always matches the rendered card whatever its text.

use crate::ui::transition::slide_offset;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Point, Rectangle, Size};

pub struct SlideIn<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    progress: f32,
    min_height: f32,
}

impl<'a, Message, Theme, Renderer> SlideIn<'a, Message, Theme, Renderer> {
    /// Wraps `content`, placed according to `progress` (0.0 hidden, 1.0 at rest).
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>, progress: f32) -> Self {
        Self {
            content: content.into(),
            progress,
            min_height: 0.0,
        }
    }

    /// Sets the minimum height the content is laid out with.
    #[must_use]
    pub fn min_height(mut self, min_height: f32) -> Self {
        self.min_height = min_height;
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for SlideIn<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.min_height(self.min_height);
        let content = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &limits);
        let size = content.size();
        let offset = slide_offset(self.progress, size.height);

        layout::Node::with_children(size, vec![content.move_to(Point::new(0.0, offset))])
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                content_layout,
                cursor,
                viewport,
            );
        }
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget_mut().update(
                &mut tree.children[0],
                event,
                content_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        layout
            .children()
            .next()
            .map_or(mouse::Interaction::default(), |content_layout| {
                self.content.as_widget().mouse_interaction(
                    &tree.children[0],
                    content_layout,
                    cursor,
                    viewport,
                    renderer,
                )
            })
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget_mut().operate(
                &mut tree.children[0],
                content_layout,
                renderer,
                operation,
            );
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let content_layout = layout.children().next()?;
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            content_layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<SlideIn<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(slide: SlideIn<'a, Message, Theme, Renderer>) -> Self {
        Self::new(slide)
    }
}

/// Helper function to create a slide wrapper.
pub fn slide_in<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    progress: f32,
) -> SlideIn<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    SlideIn::new(content, progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use iced::widget::{text, Space};
    use iced::Theme;

    /// Lays out a slide around a full-width block of `height` in a 400x600 window.
    fn lay_out(height: f32, progress: f32, min_height: f32) -> layout::Node {
        let mut element: Element<'_, (), Theme, ()> = slide_in(
            Space::new().width(Length::Fill).height(Length::Fixed(height)),
            progress,
        )
        .min_height(min_height)
        .into();
        let mut tree = widget::Tree::new(&element);
        element.as_widget_mut().layout(
            &mut tree,
            &(),
            &layout::Limits::new(Size::ZERO, Size::new(400.0, 600.0)),
        )
    }

    #[test]
    fn builder_stores_progress_and_min_height() {
        let slide: SlideIn<'_, (), iced::Theme, iced::Renderer> =
            slide_in(text("note"), 0.25).min_height(64.0);

        assert_eq!(slide.progress, 0.25);
        assert_eq!(slide.min_height, 64.0);
    }

    #[test]
    fn size_follows_content() {
        let slide: SlideIn<'_, (), iced::Theme, iced::Renderer> = slide_in(text("note"), 1.0);
        let content: Element<'_, (), iced::Theme, iced::Renderer> = text("note").into();

        assert_eq!(slide.size(), content.as_widget().size());
    }

    #[test]
    fn hidden_content_sits_above_by_110_percent_of_its_height() {
        let node = lay_out(100.0, 0.0, 0.0);
        let content = node.children()[0].bounds();

        assert_abs_diff_eq!(content.y, -110.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(node.size().height, 100.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn settled_content_sits_at_rest() {
        let node = lay_out(100.0, 1.0, 0.0);

        assert_abs_diff_eq!(node.children()[0].bounds().y, 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn halfway_offset_scales_with_measured_height() {
        let short = lay_out(50.0, 0.5, 0.0);
        let tall = lay_out(200.0, 0.5, 0.0);

        assert_abs_diff_eq!(short.children()[0].bounds().y, -27.5, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(tall.children()[0].bounds().y, -110.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn min_height_grows_short_content_and_its_slide() {
        let node = lay_out(40.0, 0.0, 64.0);
        let content = node.children()[0].bounds();

        assert_abs_diff_eq!(node.size().height, 64.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(content.height, 64.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(content.y, -70.4, epsilon = F32_EPSILON);
    }
}
