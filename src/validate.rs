//! Declarative field validation.
//!
//! A [`Rule`] pairs a pure string predicate with the message shown when it
//! fails. Rules are evaluated in list order and only the FIRST failing
//! rule's message is reported, so each field surfaces one error at a time.
//! Forms own their rule lists because the message texts differ per form.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// A single validation predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    /// Value must be non-empty.
    Required,
    /// Value must look like `local@domain`.
    Email,
    /// Value must be at least this many characters long.
    MinLen(usize),
    /// Value must contain at least one ASCII digit.
    HasDigit,
    /// Value must contain at least one ASCII lowercase letter.
    HasLowercase,
}

/// A check paired with the message reported when it fails.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    pub const fn new(check: Check, message: &'static str) -> Self {
        Self { check, message }
    }
}

/// Evaluate `rules` in order and return the first failing rule's message,
/// or `None` when every rule passes.
pub fn first_error(value: &str, rules: &[Rule]) -> Option<&'static str> {
    rules
        .iter()
        .find(|rule| !passes(value, rule.check))
        .map(|rule| rule.message)
}

fn passes(value: &str, check: Check) -> bool {
    match check {
        Check::Required => !value.is_empty(),
        Check::Email => is_email_shaped(value),
        Check::MinLen(min) => value.chars().count() >= min,
        Check::HasDigit => value.chars().any(|c| c.is_ascii_digit()),
        Check::HasLowercase => value.chars().any(|c| c.is_ascii_lowercase()),
    }
}

/// Loose `local@domain` shape check: exactly one `@`, a non-empty local
/// part, a domain with an interior dot, and no whitespace anywhere. The
/// server remains the authority on real address validity.
fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
