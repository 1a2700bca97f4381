// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::transition::Transition;
use iced::{time, Subscription};
use std::time::{Duration, Instant};

/// Interval between animation frames while the card slides.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Ticks animation frames only while the note transition is running.
pub fn create_frame_subscription(transition: &Transition, now: Instant) -> Subscription<Message> {
    if transition.is_animating(now) {
        time::every(FRAME_INTERVAL).map(Message::Frame)
    } else {
        Subscription::none()
    }
}
