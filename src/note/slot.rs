// SPDX-License-Identifier: MPL-2.0
//! Memoized note state for a UI scope.

use super::state::{NoteConfig, SnackNoteState};
use crate::haptics::HostContext;

/// Holds the note state of one screen or session.
///
/// The first [`NoteSlot::remember`] call creates the state; later calls return
/// the same instance and ignore their arguments, so the host is consulted only
/// once. Dropping the slot drops the state along with it.
#[derive(Debug, Default)]
pub struct NoteSlot {
    state: Option<SnackNoteState>,
}

impl NoteSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remember(
        &mut self,
        duration_millis: i64,
        vibration_enabled: bool,
        host: &dyn HostContext,
    ) -> &SnackNoteState {
        self.remember_with(NoteConfig::new(duration_millis, vibration_enabled), host)
    }

    pub fn remember_with(&mut self, config: NoteConfig, host: &dyn HostContext) -> &SnackNoteState {
        self.state
            .get_or_insert_with(|| SnackNoteState::new(config, host))
    }

    #[must_use]
    pub fn get(&self) -> Option<&SnackNoteState> {
        self.state.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haptics::ApiLevel;
    use crate::test_utils::RecordingHost;

    #[test]
    fn empty_slot_has_no_state() {
        assert!(NoteSlot::new().get().is_none());
    }

    #[test]
    fn remember_returns_the_same_state() {
        let host = RecordingHost::new(ApiLevel(30));
        let mut slot = NoteSlot::new();

        let first = slot.remember(3000, true, &host).clone();
        let second = slot.remember(500, false, &host).clone();

        assert!(first.ptr_eq(&second));
        assert_eq!(host.lookups(), 1, "host should be consulted once");
        assert_eq!(second.config().duration.millis(), 3000);
        assert!(second.config().vibration_enabled);
    }

    #[test]
    fn separate_slots_hold_separate_states() {
        let host = RecordingHost::new(ApiLevel(30));
        let mut a = NoteSlot::new();
        let mut b = NoteSlot::new();

        let first = a.remember(3000, false, &host).clone();
        let second = b.remember(3000, false, &host).clone();

        assert!(!first.ptr_eq(&second));
    }
}
