//! The section-access state machine.

use crate::section::Section;
use crate::state::AccessState;
use crate::view::{View, ViewChange};

use std::fmt;

use crossbeam_channel::{Receiver, Sender, unbounded};
use tracing::{debug, info, trace};

/// Which tab of the gate form was submitted.
///
/// Both modes unlock the active section; no credentials are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthMode {
    /// Existing account.
    #[default]
    Login,

    /// New account.
    Signup,
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Signup => write!(f, "signup"),
        }
    }
}

/// Owns the [`AccessState`] of a session and applies transitions to it.
///
/// Every operation is total and completes immediately. After a transition that
/// changes the state, each subscriber receives a [`ViewChange`].
#[derive(Debug, Default)]
pub struct AccessController {
    state: AccessState,
    subscribers: Vec<Sender<ViewChange>>,
}

impl AccessController {
    /// Create a controller in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: AccessState::new(),
            subscribers: Vec::new(),
        }
    }

    /// Subscribe to view changes.
    ///
    /// The receiver only sees changes made after this call; use
    /// [`AccessController::resolve_view`] for the current view.
    pub fn subscribe(&mut self) -> Receiver<ViewChange> {
        let (sender, receiver) = unbounded();
        self.subscribers.push(sender);
        receiver
    }

    /// Select a section. An open gate stays open.
    pub fn select_section(&mut self, section: Section) {
        if self.state.active_section() == section {
            return;
        }

        debug!(from = %self.state.active_section(), to = %section, "section selected");
        self.state.set_active_section(section);
        self.notify();
    }

    /// Open the authentication gate.
    pub fn request_access(&mut self) {
        if self.state.is_gate_open() {
            return;
        }

        debug!(section = %self.state.active_section(), "access requested");
        self.state.set_gate_open(true);
        self.notify();
    }

    /// Close the authentication gate without unlocking anything.
    pub fn close_access_request(&mut self) {
        if !self.state.is_gate_open() {
            return;
        }

        debug!(section = %self.state.active_section(), "access request closed");
        self.state.set_gate_open(false);
        self.notify();
    }

    /// Unlock the active section and close the gate.
    ///
    /// This is a mock gate: the mode is recorded in logs only and never
    /// causes a rejection.
    pub fn authenticate(&mut self, mode: AuthMode) {
        let section = self.state.active_section();
        let newly_unlocked = self.state.unlock(section);
        let was_open = self.state.is_gate_open();
        self.state.set_gate_open(false);

        if newly_unlocked {
            info!(%section, %mode, "section unlocked");
        } else {
            debug!(%section, %mode, "section already unlocked");
        }

        if newly_unlocked || was_open {
            self.notify();
        }
    }

    /// Forget every unlock and return to home. An open gate stays open.
    pub fn logout(&mut self) {
        let before = self.state.clone();
        self.state.reset();

        info!(from = %before.active_section(), "logged out");

        if before != self.state {
            self.notify();
        }
    }

    /// Decide what to display for the current state.
    #[must_use]
    pub fn resolve_view(&self) -> View {
        self.state.resolve_view()
    }

    /// Read-only view of the current state.
    #[must_use]
    pub const fn state(&self) -> &AccessState {
        &self.state
    }

    /// The currently selected section.
    #[must_use]
    pub const fn active_section(&self) -> Section {
        self.state.active_section()
    }

    /// Whether the authentication gate is open.
    #[must_use]
    pub const fn is_gate_open(&self) -> bool {
        self.state.is_gate_open()
    }

    /// Whether the section has been unlocked in this session.
    #[must_use]
    pub fn is_unlocked(&self, section: Section) -> bool {
        self.state.is_unlocked(section)
    }

    /// Unlocked sections in sidebar order.
    pub fn unlocked_sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.state.unlocked_sections()
    }

    /// Whether there is anything for logout to reset.
    #[must_use]
    pub fn can_logout(&self) -> bool {
        self.state.can_logout()
    }

    fn notify(&mut self) {
        let change = ViewChange {
            view: self.state.resolve_view(),
            state: self.state.clone(),
        };

        trace!(view = %change.view, subscribers = self.subscribers.len(), "notifying");

        // Drop subscribers whose receiver is gone
        self.subscribers
            .retain(|subscriber| subscriber.send(change.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tracing_test::traced_test;

    fn drain(receiver: &Receiver<ViewChange>) -> Vec<View> {
        receiver.try_iter().map(|change| change.view).collect()
    }

    #[test]
    fn test_select_section_keeps_gate_open() {
        let mut controller = AccessController::new();
        controller.select_section(Section::Maintenance);
        controller.request_access();

        controller.select_section(Section::Logistics);

        assert!(controller.is_gate_open());
        assert_eq!(controller.active_section(), Section::Logistics);
        assert_eq!(controller.resolve_view(), View::Gate);
    }

    #[test]
    fn test_request_access_is_idempotent() {
        let mut controller = AccessController::new();
        let receiver = controller.subscribe();

        controller.request_access();
        controller.request_access();

        assert_eq!(drain(&receiver), vec![View::Gate]);
    }

    #[test]
    fn test_close_when_already_closed() {
        let mut controller = AccessController::new();
        let receiver = controller.subscribe();

        controller.close_access_request();

        assert!(!controller.is_gate_open());
        assert!(drain(&receiver).is_empty());
    }

    #[test]
    fn test_authenticate_without_open_gate_still_unlocks() {
        let mut controller = AccessController::new();
        controller.select_section(Section::Analysis);

        controller.authenticate(AuthMode::Login);

        assert_eq!(controller.resolve_view(), View::Content(Section::Analysis));
    }

    #[test]
    fn test_authenticate_on_home_changes_nothing() {
        let mut controller = AccessController::new();
        let receiver = controller.subscribe();

        controller.authenticate(AuthMode::Signup);

        assert!(!controller.can_logout());
        assert!(drain(&receiver).is_empty());
    }

    #[test]
    fn test_logout_leaves_gate_open() {
        let mut controller = AccessController::new();
        controller.select_section(Section::Dispatch);
        controller.authenticate(AuthMode::Login);
        controller.request_access();

        controller.logout();

        assert!(controller.is_gate_open());
        assert_eq!(controller.active_section(), Section::Home);
        assert!(!controller.is_unlocked(Section::Dispatch));
        assert_matches!(controller.resolve_view(), View::Gate);
    }

    #[test]
    fn test_can_logout_after_unlock() {
        let mut controller = AccessController::new();
        assert!(!controller.can_logout());

        controller.select_section(Section::Logistics);
        controller.authenticate(AuthMode::Login);
        assert!(controller.can_logout());

        controller.logout();
        assert!(!controller.can_logout());
    }

    #[test]
    fn test_notifications_carry_state_snapshot() {
        let mut controller = AccessController::new();
        let receiver = controller.subscribe();

        controller.select_section(Section::Maintenance);
        controller.request_access();
        controller.authenticate(AuthMode::Login);

        let changes: Vec<ViewChange> = receiver.try_iter().collect();
        assert_eq!(changes.len(), 3);
        assert_eq!(changes[0].view, View::Locked);
        assert_eq!(changes[1].view, View::Gate);
        assert_eq!(changes[2].view, View::Content(Section::Maintenance));
        assert!(changes[2].state.is_unlocked(Section::Maintenance));
        assert!(!changes[0].state.is_unlocked(Section::Maintenance));
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut controller = AccessController::new();
        let dropped = controller.subscribe();
        let kept = controller.subscribe();
        drop(dropped);

        controller.select_section(Section::Dispatch);

        assert_eq!(controller.subscribers.len(), 1);
        assert_eq!(drain(&kept), vec![View::Locked]);
    }

    #[test]
    #[traced_test]
    fn test_authentication_is_logged() {
        let mut controller = AccessController::new();
        controller.select_section(Section::ThirdPartyLogistics);
        controller.authenticate(AuthMode::Signup);

        assert!(logs_contain("section unlocked"));
        assert!(logs_contain("thirdPartyLogistics"));
        assert!(logs_contain("signup"));
    }

    #[test]
    #[traced_test]
    fn test_repeat_authentication_is_not_logged_as_unlock() {
        let mut controller = AccessController::new();
        controller.authenticate(AuthMode::Login);

        assert!(!logs_contain("section unlocked"));
        assert!(logs_contain("section already unlocked"));
    }
}
