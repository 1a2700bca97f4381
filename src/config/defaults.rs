// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Note**: Auto-hide timing and haptic feedback
//! - **Appearance**: Card shape and background

// ==========================================================================
// Note Defaults
// ==========================================================================

/// Default time a shown note stays visible (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Whether a shown note vibrates by default.
pub const DEFAULT_VIBRATION: bool = true;

// ==========================================================================
// Appearance Defaults
// ==========================================================================

/// Default card corner radius (in logical pixels).
pub const DEFAULT_CORNER_RADIUS: f32 = 16.0;

/// Minimum card corner radius.
pub const MIN_CORNER_RADIUS: f32 = 0.0;

/// Maximum card corner radius.
pub const MAX_CORNER_RADIUS: f32 = 48.0;

/// Default card background, as `#RRGGBB`.
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_radius_default_is_within_bounds() {
        assert!(DEFAULT_CORNER_RADIUS >= MIN_CORNER_RADIUS);
        assert!(DEFAULT_CORNER_RADIUS <= MAX_CORNER_RADIUS);
    }

    #[test]
    fn default_background_is_a_hex_color() {
        assert!(DEFAULT_BACKGROUND.starts_with('#'));
        assert_eq!(DEFAULT_BACKGROUND.len(), 7);
    }
}
