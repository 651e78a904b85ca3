use crate::section::Section;
use crate::view::View;

use std::collections::BTreeSet;

/// Section-access state for a single session.
///
/// `Home` is always a member of the unlocked set. Only the controller mutates
/// this; everyone else sees snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessState {
    active_section: Section,
    unlocked_sections: BTreeSet<Section>,
    gate_open: bool,
}

impl AccessState {
    /// Initial state: home selected, only home unlocked, gate closed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active_section: Section::Home,
            unlocked_sections: BTreeSet::from([Section::Home]),
            gate_open: false,
        }
    }

    /// The currently selected section.
    #[must_use]
    pub const fn active_section(&self) -> Section {
        self.active_section
    }

    /// Whether the authentication overlay is displayed.
    #[must_use]
    pub const fn is_gate_open(&self) -> bool {
        self.gate_open
    }

    /// Whether the section has been unlocked in this session.
    #[must_use]
    pub fn is_unlocked(&self, section: Section) -> bool {
        section.is_home() || self.unlocked_sections.contains(&section)
    }

    /// Unlocked sections in sidebar order.
    pub fn unlocked_sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.unlocked_sections.iter().copied()
    }

    /// Whether anything beyond home has been unlocked.
    #[must_use]
    pub fn can_logout(&self) -> bool {
        self.unlocked_sections.len() > 1
    }

    /// Decide what to display.
    #[must_use]
    pub fn resolve_view(&self) -> View {
        if self.gate_open {
            View::Gate
        } else if !self.is_unlocked(self.active_section) {
            View::Locked
        } else {
            View::Content(self.active_section)
        }
    }

    pub(crate) const fn set_active_section(&mut self, section: Section) {
        self.active_section = section;
    }

    pub(crate) const fn set_gate_open(&mut self, open: bool) {
        self.gate_open = open;
    }

    /// Returns `false` if the section was already unlocked.
    pub(crate) fn unlock(&mut self, section: Section) -> bool {
        self.unlocked_sections.insert(section)
    }

    /// Drop every unlock except home and return to home. The gate is left as-is.
    pub(crate) fn reset(&mut self) {
        self.unlocked_sections = BTreeSet::from([Section::Home]);
        self.active_section = Section::Home;
    }
}

impl Default for AccessState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AccessState::new();

        assert_eq!(state.active_section(), Section::Home);
        assert!(!state.is_gate_open());
        assert_eq!(state.unlocked_sections().collect::<Vec<_>>(), vec![Section::Home]);
        assert!(!state.can_logout());
        assert_eq!(state.resolve_view(), View::Content(Section::Home));
    }

    #[test]
    fn test_gate_takes_priority() {
        let mut state = AccessState::new();
        state.set_active_section(Section::Analysis);
        assert_eq!(state.resolve_view(), View::Locked);

        state.set_gate_open(true);
        assert_eq!(state.resolve_view(), View::Gate);

        state.unlock(Section::Analysis);
        assert_eq!(state.resolve_view(), View::Gate);
    }

    #[test]
    fn test_unlock_is_idempotent() {
        let mut state = AccessState::new();

        assert!(state.unlock(Section::Logistics));
        assert!(!state.unlock(Section::Logistics));
        assert_eq!(
            state.unlocked_sections().collect::<Vec<_>>(),
            vec![Section::Home, Section::Logistics]
        );
    }

    #[test]
    fn test_reset_keeps_home_and_gate() {
        let mut state = AccessState::new();
        state.unlock(Section::Dispatch);
        state.unlock(Section::Maintenance);
        state.set_active_section(Section::Dispatch);
        state.set_gate_open(true);

        state.reset();

        assert_eq!(state.active_section(), Section::Home);
        assert_eq!(state.unlocked_sections().collect::<Vec<_>>(), vec![Section::Home]);
        assert!(state.is_gate_open());
    }

    #[test]
    fn test_unlocked_sections_follow_sidebar_order() {
        let mut state = AccessState::new();
        state.unlock(Section::Dispatch);
        state.unlock(Section::Maintenance);
        state.unlock(Section::ThirdPartyLogistics);

        assert_eq!(
            state.unlocked_sections().collect::<Vec<_>>(),
            vec![
                Section::Home,
                Section::Maintenance,
                Section::ThirdPartyLogistics,
                Section::Dispatch,
            ]
        );
    }
}
