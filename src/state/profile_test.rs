use super::*;
use crate::util::session::MemorySession;

fn profile() -> UserProfile {
    UserProfile {
        email: "a@b.com".to_owned(),
        first_name: "Anna".to_owned(),
        last_name: "Kiss".to_owned(),
    }
}

#[test]
fn success_renders_the_profile() {
    let session = MemorySession::with_token("T1");
    let mut state = ProfileState::default();

    let redirect = state.apply_outcome(ProfileOutcome::Success(profile()), &session);

    assert_eq!(redirect, None);
    assert_eq!(state.profile, Some(profile()));
    assert_eq!(state.error, None);
    assert_eq!(session.get(), Some("T1".to_owned()));
}

#[test]
fn unauthorized_clears_the_session_and_redirects_to_login() {
    // An expired token comes back as 401.
    let session = MemorySession::with_token("expired");
    let mut state = ProfileState::default();

    let redirect = state.apply_outcome(ProfileOutcome::Unauthorized, &session);

    assert_eq!(redirect, Some(Redirect::Login));
    assert_eq!(session.get(), None);
    assert_eq!(state.profile, None);
}

#[test]
fn other_statuses_surface_a_message_without_redirecting() {
    let session = MemorySession::with_token("T1");
    let mut state = ProfileState::default();

    let redirect = state.apply_outcome(
        ProfileOutcome::OtherHttp(500, "Internal Server Error".to_owned()),
        &session,
    );

    assert_eq!(redirect, None);
    assert_eq!(state.error.as_deref(), Some("Error 500: Internal Server Error"));
    // The token is kept: only a 401 ends the session.
    assert_eq!(session.get(), Some("T1".to_owned()));
}

#[test]
fn network_failure_surfaces_the_generic_message() {
    let session = MemorySession::with_token("T1");
    let mut state = ProfileState::default();

    let redirect = state.apply_outcome(ProfileOutcome::NetworkFailure, &session);

    assert_eq!(redirect, None);
    assert_eq!(state.error.as_deref(), Some("Hálózati hiba"));
}

#[test]
fn logout_clears_the_session_and_targets_login() {
    let session = MemorySession::with_token("T1");
    assert_eq!(logout(&session), Redirect::Login);
    assert_eq!(session.get(), None);
}
