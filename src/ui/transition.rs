// SPDX-License-Identifier: MPL-2.0
//! Slide transition driving the note card in and out.
//!
//! Progress runs from 0.0 (card fully above the screen) to 1.0 (card at rest).
//! Retargeting mid-flight starts from the current progress, so a note that is
//! re-shown while sliding out turns around instead of jumping.

use std::time::{Duration, Instant};

/// Time for a full slide in either direction.
pub const SLIDE_DURATION: Duration = Duration::from_millis(300);

/// Distance travelled, as a multiple of the card height. Slightly above 1.0
/// so the card shadow also leaves the screen.
pub const SLIDE_DISTANCE_FACTOR: f32 = 1.1;

/// Vertical offset of a card of height `height` at `progress`.
#[must_use]
pub fn slide_offset(progress: f32, height: f32) -> f32 {
    -(1.0 - progress.clamp(0.0, 1.0)) * SLIDE_DISTANCE_FACTOR * height
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy)]
pub struct Transition {
    visible: bool,
    from: f32,
    started_at: Option<Instant>,
    duration: Duration,
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(SLIDE_DURATION)
    }
}

impl Transition {
    /// Creates a settled, hidden transition.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            visible: false,
            from: 0.0,
            started_at: None,
            duration,
        }
    }

    /// Target visibility.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Points the transition at `visible`. Returns true if an animation started.
    pub fn retarget(&mut self, visible: bool, now: Instant) -> bool {
        if visible == self.visible {
            return false;
        }
        self.from = self.progress(now);
        self.visible = visible;
        self.started_at = Some(now);
        true
    }

    /// Eased progress at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let to = if self.visible { 1.0 } else { 0.0 };
        let Some(started_at) = self.started_at else {
            return to;
        };
        if self.duration.is_zero() {
            return to;
        }

        let t = (now.saturating_duration_since(started_at).as_secs_f32()
            / self.duration.as_secs_f32())
        .min(1.0);
        self.from + (to - self.from) * ease_out_cubic(t)
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|started_at| now.saturating_duration_since(started_at) < self.duration)
    }

    /// Whether the card must be rendered: shown, or still sliding out.
    #[must_use]
    pub fn is_present(&self, now: Instant) -> bool {
        self.visible || self.is_animating(now)
    }
}
