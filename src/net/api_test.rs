use super::*;

#[test]
fn login_statuses_map_to_distinct_outcomes() {
    assert_eq!(login_status_outcome(400), LoginOutcome::InvalidInput);
    assert_eq!(login_status_outcome(401), LoginOutcome::InvalidCredentials);
    assert_eq!(login_status_outcome(500), LoginOutcome::NetworkFailure);
    assert_eq!(login_status_outcome(503), LoginOutcome::NetworkFailure);
}

#[test]
fn register_statuses_map_to_distinct_outcomes() {
    assert_eq!(register_status_outcome(400), RegisterOutcome::InvalidInput);
    assert_eq!(register_status_outcome(409), RegisterOutcome::Conflict);
    assert_eq!(register_status_outcome(500), RegisterOutcome::NetworkFailure);
}

#[test]
fn profile_statuses_keep_their_code_except_unauthorized() {
    assert_eq!(
        profile_status_outcome(401, "Unauthorized"),
        ProfileOutcome::Unauthorized
    );
    assert_eq!(
        profile_status_outcome(404, "Not Found"),
        ProfileOutcome::OtherHttp(404, "Not Found".to_owned())
    );
    assert_eq!(
        profile_status_outcome(500, "Internal Server Error"),
        ProfileOutcome::OtherHttp(500, "Internal Server Error".to_owned())
    );
}

#[test]
fn login_response_reads_camel_case_token_field() {
    let body: crate::net::types::LoginResponse =
        serde_json::from_value(serde_json::json!({"accessToken": "T1"})).expect("login body");
    assert_eq!(body.access_token, "T1");
}

#[test]
fn user_profile_reads_camel_case_fields() {
    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "email": "a@b.com",
        "firstName": "Anna",
        "lastName": "Kiss"
    }))
    .expect("profile body");
    assert_eq!(profile.email, "a@b.com");
    assert_eq!(profile.first_name, "Anna");
    assert_eq!(profile.last_name, "Kiss");
}

#[test]
fn registration_request_writes_camel_case_fields() {
    let request = RegistrationRequest {
        username: "a@b.com".to_owned(),
        password: "abc12345".to_owned(),
        password_confirm: "abc12345".to_owned(),
        first_name: "Anna".to_owned(),
        last_name: "Kiss".to_owned(),
    };
    let value = serde_json::to_value(&request).expect("request body");
    assert_eq!(
        value,
        serde_json::json!({
            "username": "a@b.com",
            "password": "abc12345",
            "passwordConfirm": "abc12345",
            "firstName": "Anna",
            "lastName": "Kiss"
        })
    );
}
