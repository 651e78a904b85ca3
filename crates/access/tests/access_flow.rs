//! End-to-end behaviour of the access controller.

use assert_matches::assert_matches;
use opti_transit_access::{AccessController, AuthMode, Section, View};

fn gated_sections() -> impl Iterator<Item = Section> {
    Section::ALL.into_iter().filter(|section| !section.is_home())
}

#[test]
fn test_every_gated_section_starts_locked() {
    for section in gated_sections() {
        let mut controller = AccessController::new();
        controller.select_section(section);
        assert_eq!(controller.resolve_view(), View::Locked, "{section}");
    }
}

#[test]
fn test_home_is_never_locked() {
    let mut controller = AccessController::new();
    assert_eq!(controller.resolve_view(), View::Content(Section::Home));

    controller.select_section(Section::Maintenance);
    controller.authenticate(AuthMode::Login);
    controller.logout();
    controller.select_section(Section::Dispatch);
    controller.select_section(Section::Home);

    assert_eq!(controller.resolve_view(), View::Content(Section::Home));
    assert!(controller.is_unlocked(Section::Home));
}

#[test]
fn test_request_access_always_shows_gate() {
    for section in Section::ALL {
        let mut controller = AccessController::new();
        controller.select_section(section);
        controller.request_access();
        assert_eq!(controller.resolve_view(), View::Gate, "{section}");

        controller.authenticate(AuthMode::Login);
        controller.request_access();
        assert_eq!(controller.resolve_view(), View::Gate, "{section}");
    }
}

#[test]
fn test_unlock_survives_navigation() {
    let mut controller = AccessController::new();
    controller.select_section(Section::Maintenance);
    controller.authenticate(AuthMode::Login);

    controller.select_section(Section::Logistics);
    assert_eq!(controller.resolve_view(), View::Locked);

    controller.select_section(Section::Maintenance);
    assert_eq!(controller.resolve_view(), View::Content(Section::Maintenance));

    controller.authenticate(AuthMode::Login);
    assert_eq!(
        controller.unlocked_sections().collect::<Vec<_>>(),
        vec![Section::Home, Section::Maintenance]
    );
    assert_eq!(controller.resolve_view(), View::Content(Section::Maintenance));
}

#[test]
fn test_signup_matches_login() {
    for section in gated_sections() {
        let mut login = AccessController::new();
        login.select_section(section);
        login.request_access();
        login.authenticate(AuthMode::Login);

        let mut signup = AccessController::new();
        signup.select_section(section);
        signup.request_access();
        signup.authenticate(AuthMode::Signup);

        assert_eq!(login.state(), signup.state());
        assert_eq!(login.resolve_view(), signup.resolve_view());
    }
}

#[test]
fn test_logout_relocks_everything() {
    let mut controller = AccessController::new();
    for section in gated_sections() {
        controller.select_section(section);
        controller.authenticate(AuthMode::Login);
    }

    controller.logout();
    assert_eq!(controller.active_section(), Section::Home);

    for section in gated_sections() {
        controller.select_section(section);
        assert_eq!(controller.resolve_view(), View::Locked, "{section}");
    }
}

#[test]
fn test_dispatch_round_trip_scenario() {
    let mut controller = AccessController::new();
    let changes = controller.subscribe();

    controller.select_section(Section::Dispatch);
    assert_eq!(controller.resolve_view(), View::Locked);

    controller.request_access();
    assert_eq!(controller.resolve_view(), View::Gate);

    controller.authenticate(AuthMode::Login);
    assert_eq!(controller.resolve_view(), View::Content(Section::Dispatch));

    controller.logout();
    controller.select_section(Section::Dispatch);
    assert_eq!(controller.resolve_view(), View::Locked);

    let views: Vec<View> = changes.try_iter().map(|change| change.view).collect();
    assert_eq!(
        views,
        vec![
            View::Locked,
            View::Gate,
            View::Content(Section::Dispatch),
            View::Content(Section::Home),
            View::Locked,
        ]
    );
}

#[test]
fn test_close_access_request_returns_to_previous_view() {
    let mut controller = AccessController::new();
    controller.select_section(Section::Analysis);
    controller.request_access();
    controller.close_access_request();
    assert_eq!(controller.resolve_view(), View::Locked);

    controller.close_access_request();
    assert!(!controller.is_gate_open());
    assert_matches!(controller.resolve_view(), View::Locked);
}
