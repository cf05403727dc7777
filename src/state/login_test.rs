use super::*;
use crate::util::session::MemorySession;

fn filled_form() -> LoginForm {
    let mut form = LoginForm::default();
    form.username.input("a@b.com".to_owned());
    form.password.input("abc12345".to_owned());
    form
}

#[test]
fn begin_submit_refuses_invalid_form() {
    let mut form = LoginForm::default();
    assert!(!form.begin_submit());
    assert!(!form.submitting);
}

#[test]
fn begin_submit_is_a_no_op_while_pending() {
    let mut form = filled_form();
    assert!(form.begin_submit());
    assert!(form.submitting);
    // Double-click while the request is in flight: no second request.
    assert!(!form.begin_submit());
}

#[test]
fn begin_submit_clears_previous_server_error() {
    let mut form = filled_form();
    form.error = Some(MSG_BAD_CREDENTIALS);
    assert!(form.begin_submit());
    assert_eq!(form.error, None);
}

#[test]
fn field_errors_follow_the_rule_order() {
    let mut form = LoginForm::default();
    assert_eq!(form.username_error(), Some(MSG_REQUIRED));
    form.username.input("not-an-address".to_owned());
    assert_eq!(form.username_error(), Some(MSG_EMAIL));
    form.password.input("abc".to_owned());
    assert_eq!(form.password_error(), Some(MSG_PASSWORD_MIN));
    form.password.input("ABCDEFGH".to_owned());
    assert_eq!(form.password_error(), Some(MSG_PASSWORD_DIGIT));
    form.password.input("ABCDEFG1".to_owned());
    assert_eq!(form.password_error(), Some(MSG_PASSWORD_LOWER));
}

#[test]
fn success_stores_token_and_redirects_to_profile() {
    let session = MemorySession::default();
    let mut form = filled_form();
    assert!(form.begin_submit());

    let redirect = form.apply_outcome(LoginOutcome::Success("T1".to_owned()), &session);

    assert_eq!(redirect, Some(Redirect::Profile));
    assert_eq!(session.get(), Some("T1".to_owned()));
    assert!(!form.submitting);
    assert_eq!(form.error, None);
}

#[test]
fn invalid_credentials_keep_fields_and_session_untouched() {
    let session = MemorySession::default();
    let mut form = filled_form();
    assert!(form.begin_submit());

    let redirect = form.apply_outcome(LoginOutcome::InvalidCredentials, &session);

    assert_eq!(redirect, None);
    assert_eq!(form.error, Some(MSG_BAD_CREDENTIALS));
    assert_eq!(session.get(), None);
    assert_eq!(form.username.value, "a@b.com");
    assert_eq!(form.password.value, "abc12345");
    // The form is interactive again.
    assert!(!form.submitting);
}

#[test]
fn invalid_input_and_network_failure_show_their_own_messages() {
    let session = MemorySession::default();

    let mut form = filled_form();
    form.begin_submit();
    form.apply_outcome(LoginOutcome::InvalidInput, &session);
    assert_eq!(form.error, Some(MSG_BAD_INPUT));

    let mut form = filled_form();
    form.begin_submit();
    form.apply_outcome(LoginOutcome::NetworkFailure, &session);
    assert_eq!(form.error, Some(MSG_NETWORK));
    assert!(!form.submitting);
}

#[test]
fn credentials_copy_the_current_field_values() {
    let form = filled_form();
    let credentials = form.credentials();
    assert_eq!(credentials.username, "a@b.com");
    assert_eq!(credentials.password, "abc12345");
}
