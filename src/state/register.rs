//! Registration form controller: five fields, confirm-password matching,
//! and the transient notice shown for the outcome.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use crate::net::api::RegisterOutcome;
use crate::net::types::RegistrationRequest;
use crate::state::Field;
use crate::validate::{Check, Rule, first_error};

const MSG_REQUIRED: &str = "Kötelező mező";
const MSG_EMAIL: &str = "Érvényes email címet kell megadni";
const MSG_PASSWORD_MIN: &str =
    "A jelszónak legalább 8 karakter hosszúnak kell lennie,1 számmal és 1 kisbetűvel";
const MSG_PASSWORD_DIGIT: &str = "Tartalmazzon legalább 1 számot";
const MSG_PASSWORD_LOWER: &str = "Tartalmazzon legalább 1 kisbetűt";
const MSG_PASSWORD_MISMATCH: &str = "A jelszó nem egyezik";

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

const NAME_RULES: [Rule; 1] = [Rule::new(Check::Required, MSG_REQUIRED)];

/// Transient outcome notice, the toast equivalent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

const NOTICE_CREATED: Notice = Notice {
    kind: NoticeKind::Success,
    title: "Sikeres regisztráció!",
    description: "Most már bejelentkezhet.",
};

const NOTICE_INVALID: Notice = Notice {
    kind: NoticeKind::Error,
    title: "Hiba",
    description: "A bevitt adatok érvénytelenek.",
};

const NOTICE_CONFLICT: Notice = Notice {
    kind: NoticeKind::Error,
    title: "Hiba",
    description: "A felhasználó már létezik.",
};

/// State behind the registration page.
#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub first_name: Field,
    pub last_name: Field,
    pub username: Field,
    pub password: Field,
    pub password_confirm: Field,
    pub submitting: bool,
    pub notice: Option<Notice>,
    // Bumped whenever the notice changes, so a delayed dismissal can tell
    // whether the notice it targets is still the one on screen.
    notice_generation: u32,
}

impl RegisterForm {
    pub fn first_name_error(&self) -> Option<&'static str> {
        first_error(&self.first_name.value, &NAME_RULES)
    }

    pub fn last_name_error(&self) -> Option<&'static str> {
        first_error(&self.last_name.value, &NAME_RULES)
    }

    pub fn username_error(&self) -> Option<&'static str> {
        first_error(&self.username.value, &USERNAME_RULES)
    }

    pub fn password_error(&self) -> Option<&'static str> {
        first_error(&self.password.value, &PASSWORD_RULES)
    }

    /// Confirm-password needs both values, so it bypasses the rule list:
    /// required first, then exact equality with the password field. The
    /// result changes whenever either field changes.
    pub fn password_confirm_error(&self) -> Option<&'static str> {
        if self.password_confirm.value.is_empty() {
            return Some(MSG_REQUIRED);
        }
        if self.password_confirm.value != self.password.value {
            return Some(MSG_PASSWORD_MISMATCH);
        }
        None
    }

    /// Aggregate validity: every field passes, including the confirm
    /// match. Mismatched passwords block submission regardless of the
    /// other fields.
    pub fn is_valid(&self) -> bool {
        self.first_name_error().is_none()
            && self.last_name_error().is_none()
            && self.username_error().is_none()
            && self.password_error().is_none()
            && self.password_confirm_error().is_none()
    }

    /// Submit guard, identical contract to the login form's.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting || !self.is_valid() {
            return false;
        }
        self.submitting = true;
        self.notice = None;
        self.notice_generation = self.notice_generation.wrapping_add(1);
        true
    }

    /// Request body for the current field values.
    pub fn request(&self) -> RegistrationRequest {
        RegistrationRequest {
            username: self.username.value.clone(),
            password: self.password.value.clone(),
            password_confirm: self.password_confirm.value.clone(),
            first_name: self.first_name.value.clone(),
            last_name: self.last_name.value.clone(),
        }
    }

    /// Fold a registration outcome back into the form. Returns `true`
    /// when the account was created and the caller should move the user
    /// to the login page after the confirmation delay. Submitting clears
    /// on every path so the submit control re-enables.
    pub fn apply_outcome(&mut self, outcome: RegisterOutcome) -> bool {
        self.submitting = false;
        match outcome {
            RegisterOutcome::Success(_) => {
                self.reset();
                self.set_notice(NOTICE_CREATED);
                true
            }
            RegisterOutcome::InvalidInput => {
                self.set_notice(NOTICE_INVALID);
                false
            }
            RegisterOutcome::Conflict => {
                self.set_notice(NOTICE_CONFLICT);
                false
            }
            // Already logged by the request layer; the form stays as-is.
            RegisterOutcome::NetworkFailure => false,
        }
    }

    fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.notice_generation = self.notice_generation.wrapping_add(1);
    }

    /// Stamp identifying the currently shown notice. Capture it when the
    /// notice appears and pass it to [`Self::dismiss_notice`] later.
    pub fn notice_generation(&self) -> u32 {
        self.notice_generation
    }

    /// Clear the notice, but only if it is still the one identified by
    /// `generation`. A dismissal scheduled for an earlier notice must not
    /// take down whatever replaced it in the meantime.
    pub fn dismiss_notice(&mut self, generation: u32) {
        if self.notice_generation == generation {
            self.notice = None;
        }
    }

    /// Clear every field and touched flag (the cancel button, and the
    /// post-success reset). Any visible notice is left alone.
    pub fn reset(&mut self) {
        self.first_name = Field::default();
        self.last_name = Field::default();
        self.username = Field::default();
        self.password = Field::default();
        self.password_confirm = Field::default();
    }
}
