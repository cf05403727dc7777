//! Profile page controller: fetch-on-mount outcome folding and logout.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::api::ProfileOutcome;
use crate::net::types::UserProfile;
use crate::state::Redirect;
use crate::util::session::SessionStore;

const MSG_NETWORK: &str = "Hálózati hiba";

/// State behind the profile page. The profile record lives only for the
/// duration of one page view and is never cached across views.
#[derive(Clone, Debug, Default)]
pub struct ProfileState {
    pub profile: Option<UserProfile>,
    pub error: Option<String>,
}

impl ProfileState {
    /// Fold a fetch outcome into the page state. A 401 ends the session:
    /// the stored token is dropped and the caller redirects to login.
    /// Other failures surface a message and leave the page where it is.
    pub fn apply_outcome(
        &mut self,
        outcome: ProfileOutcome,
        session: &dyn SessionStore,
    ) -> Option<Redirect> {
        match outcome {
            ProfileOutcome::Success(profile) => {
                self.profile = Some(profile);
                None
            }
            ProfileOutcome::Unauthorized => {
                session.clear();
                Some(Redirect::Login)
            }
            ProfileOutcome::OtherHttp(status, status_text) => {
                self.error = Some(format!("Error {status}: {status_text}"));
                None
            }
            ProfileOutcome::NetworkFailure => {
                self.error = Some(MSG_NETWORK.to_owned());
                None
            }
        }
    }
}

/// Drop the session token and send the user back to the login page,
/// regardless of any in-flight request.
pub fn logout(session: &dyn SessionStore) -> Redirect {
    session.clear();
    Redirect::Login
}
