// SPDX-License-Identifier: MPL-2.0
//! Auto-hide duration domain type.
//!
//! Callers hand in a signed millisecond count (the configuration format has
//! no unsigned integers), and anything at or below zero means the note hides
//! as soon as it has been made visible.

use std::time::Duration;

/// How long a shown note stays visible.
///
/// # Example
///
/// ```
/// use snacknote::note::AutoHideDuration;
///
/// let duration = AutoHideDuration::from_millis(3000);
/// assert_eq!(duration.millis(), 3000);
///
/// // Negative values are clamped to zero
/// assert!(AutoHideDuration::from_millis(-5).is_immediate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AutoHideDuration(u64);

impl AutoHideDuration {
    /// Creates a duration, clamping negative values to zero.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self(u64::try_from(millis).unwrap_or(0))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true if the note hides right after becoming visible.
    #[must_use]
    pub fn is_immediate(self) -> bool {
        self.0 == 0
    }
}

impl Default for AutoHideDuration {
    fn default() -> Self {
        Self(crate::config::DEFAULT_DURATION_MS)
    }
}
