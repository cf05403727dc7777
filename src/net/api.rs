//! REST calls to the account service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR): stubs returning `NetworkFailure` since the endpoints are only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Expected HTTP error statuses come back as tagged outcome variants so
//! callers can tell a validation rejection, an auth failure, and a
//! transport error apart without parsing strings. Transport failures and
//! unexpected statuses are logged; no call is ever retried here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, RegistrationRequest, UserProfile};

#[cfg(feature = "hydrate")]
use super::types::LoginResponse;

/// Base URL of the account service.
#[cfg(feature = "hydrate")]
const API_BASE: &str = "http://localhost:5000";

/// Result of a login attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// 2xx with an access token in the body.
    Success(String),
    /// 400 — the service rejected the request shape.
    InvalidInput,
    /// 401 — wrong username or password.
    InvalidCredentials,
    /// No usable response: DNS, connection refused, timeout, or an
    /// unparseable/unexpected reply.
    NetworkFailure,
}

/// Result of a registration attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum RegisterOutcome {
    /// 2xx with the created user record.
    Success(serde_json::Value),
    /// 400 — the service rejected the request shape.
    InvalidInput,
    /// 409 — a user with this address already exists.
    Conflict,
    /// No usable response from the service.
    NetworkFailure,
}

/// Result of a profile fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileOutcome {
    Success(UserProfile),
    /// 401 — the presented token is missing, expired, or revoked.
    Unauthorized,
    /// Any other non-2xx status, with its reason phrase for the error
    /// message.
    OtherHttp(u16, String),
    /// No usable response from the service.
    NetworkFailure,
}

/// POST the credentials to `/user/login`.
pub async fn login(credentials: &Credentials) -> LoginOutcome {
    #[cfg(feature = "hydrate")]
    {
        let request = match gloo_net::http::Request::post(&format!("{API_BASE}/user/login"))
            .json(credentials)
        {
            Ok(request) => request,
            Err(_) => return LoginOutcome::NetworkFailure,
        };
        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("login request failed: {e}");
                return LoginOutcome::NetworkFailure;
            }
        };
        if resp.ok() {
            match resp.json::<LoginResponse>().await {
                Ok(body) => LoginOutcome::Success(body.access_token),
                Err(e) => {
                    leptos::logging::warn!("login response body invalid: {e}");
                    LoginOutcome::NetworkFailure
                }
            }
        } else {
            let status = resp.status();
            if !matches!(status, 400 | 401) {
                leptos::logging::warn!("login: unexpected status {status}");
            }
            login_status_outcome(status)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        LoginOutcome::NetworkFailure
    }
}

/// POST the registration request to `/user`.
pub async fn register(request: &RegistrationRequest) -> RegisterOutcome {
    #[cfg(feature = "hydrate")]
    {
        let req = match gloo_net::http::Request::post(&format!("{API_BASE}/user")).json(request) {
            Ok(req) => req,
            Err(_) => return RegisterOutcome::NetworkFailure,
        };
        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("registration request failed: {e}");
                return RegisterOutcome::NetworkFailure;
            }
        };
        if resp.ok() {
            match resp.json::<serde_json::Value>().await {
                Ok(user) => RegisterOutcome::Success(user),
                Err(e) => {
                    leptos::logging::warn!("registration response body invalid: {e}");
                    RegisterOutcome::NetworkFailure
                }
            }
        } else {
            let status = resp.status();
            if !matches!(status, 400 | 409) {
                leptos::logging::warn!("registration: unexpected status {status}");
            }
            register_status_outcome(status)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        RegisterOutcome::NetworkFailure
    }
}

/// GET `/user` with the token as a bearer credential.
pub async fn fetch_profile(token: &str) -> ProfileOutcome {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(&format!("{API_BASE}/user"))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("profile request failed: {e}");
                return ProfileOutcome::NetworkFailure;
            }
        };
        if resp.ok() {
            match resp.json::<UserProfile>().await {
                Ok(profile) => ProfileOutcome::Success(profile),
                Err(e) => {
                    leptos::logging::warn!("profile response body invalid: {e}");
                    ProfileOutcome::NetworkFailure
                }
            }
        } else {
            profile_status_outcome(resp.status(), &resp.status_text())
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        ProfileOutcome::NetworkFailure
    }
}

/// Map a non-2xx login status to its outcome.
pub fn login_status_outcome(status: u16) -> LoginOutcome {
    match status {
        400 => LoginOutcome::InvalidInput,
        401 => LoginOutcome::InvalidCredentials,
        _ => LoginOutcome::NetworkFailure,
    }
}

/// Map a non-2xx registration status to its outcome.
pub fn register_status_outcome(status: u16) -> RegisterOutcome {
    match status {
        400 => RegisterOutcome::InvalidInput,
        409 => RegisterOutcome::Conflict,
        _ => RegisterOutcome::NetworkFailure,
    }
}

/// Map a non-2xx profile status to its outcome. Unlike the submit
/// endpoints, every unexpected status is surfaced with its code and
/// reason phrase.
pub fn profile_status_outcome(status: u16, status_text: &str) -> ProfileOutcome {
    match status {
        401 => ProfileOutcome::Unauthorized,
        status => ProfileOutcome::OtherHttp(status, status_text.to_owned()),
    }
}
