//! Login form controller: field state, validation wiring, and outcome
//! folding for the login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::api::LoginOutcome;
use crate::net::types::Credentials;
use crate::state::{Field, Redirect};
use crate::util::session::SessionStore;
use crate::validate::{Check, Rule, first_error};

const MSG_REQUIRED: &str = "Kötelező mező";
const MSG_EMAIL: &str = "Érvénytelen email cím";
const MSG_PASSWORD_MIN: &str =
    "A jelszónak legalább 8 karakter hosszúnak kell lennie, 1 számmal és 1 kisbetűvel";
const MSG_PASSWORD_DIGIT: &str = "A jelszónak tartalmaznia kell legalább egy számot";
const MSG_PASSWORD_LOWER: &str = "A jelszónak tartalmaznia kell legalább egy kisbetűt";

/// Shown on a 400 response.
pub const MSG_BAD_INPUT: &str = "Hibás adatok";
/// Shown on a 401 response.
pub const MSG_BAD_CREDENTIALS: &str = "Hibás felhasználónév vagy jelszó";
/// Shown when no response arrived at all.
pub const MSG_NETWORK: &str = "Hálózati hiba";

// The login identifier is email-shaped even though the service only knows
// it as `username`.
const USERNAME_RULES: [Rule; 2] = [
    Rule::new(Check::Required, MSG_REQUIRED),
    Rule::new(Check::Email, MSG_EMAIL),
];

const PASSWORD_RULES: [Rule; 4] = [
    Rule::new(Check::Required, MSG_REQUIRED),
    Rule::new(Check::MinLen(8), MSG_PASSWORD_MIN),
    Rule::new(Check::HasDigit, MSG_PASSWORD_DIGIT),
    Rule::new(Check::HasLowercase, MSG_PASSWORD_LOWER),
];

/// State behind the login page.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub username: Field,
    pub password: Field,
    pub submitting: bool,
    /// Server-reported error shown above the submit button.
    pub error: Option<&'static str>,
}

impl LoginForm {
    pub fn username_error(&self) -> Option<&'static str> {
        first_error(&self.username.value, &USERNAME_RULES)
    }

    pub fn password_error(&self) -> Option<&'static str> {
        first_error(&self.password.value, &PASSWORD_RULES)
    }

    /// Aggregate validity: every field passes its rules.
    pub fn is_valid(&self) -> bool {
        self.username_error().is_none() && self.password_error().is_none()
    }

    /// Submit guard. Flips to submitting only when the form is valid and
    /// no submission is in flight; a second call while one is pending is
    /// a no-op. Returns whether the caller should issue the request.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting || !self.is_valid() {
            return false;
        }
        self.submitting = true;
        self.error = None;
        true
    }

    /// Request body for the current field values.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.value.clone(),
            password: self.password.value.clone(),
        }
    }

    /// Fold a login outcome back into the form. On success the token is
    /// handed to the session store and the caller navigates to the
    /// profile; on failure field values are retained so the user can
    /// correct and retry.
    pub fn apply_outcome(
        &mut self,
        outcome: LoginOutcome,
        session: &dyn SessionStore,
    ) -> Option<Redirect> {
        self.submitting = false;
        match outcome {
            LoginOutcome::Success(token) => {
                session.set(&token);
                Some(Redirect::Profile)
            }
            LoginOutcome::InvalidInput => {
                self.error = Some(MSG_BAD_INPUT);
                None
            }
            LoginOutcome::InvalidCredentials => {
                self.error = Some(MSG_BAD_CREDENTIALS);
                None
            }
            LoginOutcome::NetworkFailure => {
                self.error = Some(MSG_NETWORK);
                None
            }
        }
    }
}
