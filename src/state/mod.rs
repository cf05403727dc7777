//! Form controllers.
//!
//! DESIGN
//! ======
//! One module per form so each page depends on a small focused model.
//! Controllers are plain structs the pages wrap in signals: they hold
//! field values, the submit guard, and outcome folding, and they receive
//! the session store as an explicit dependency instead of reaching for
//! browser storage themselves.

pub mod login;
pub mod profile;
pub mod register;

/// A single text input: the current value plus whether the user has
/// blurred it. Errors are only shown for touched fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Field {
    pub value: String,
    pub touched: bool,
}

impl Field {
    /// Replace the value on an input event.
    pub fn input(&mut self, value: String) {
        self.value = value;
    }

    /// Mark the field as touched on blur.
    pub fn blur(&mut self) {
        self.touched = true;
    }
}

/// Navigation requested by a controller. The router, not the controller,
/// performs the actual navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Profile,
}

impl Redirect {
    /// Router path for this target.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Profile => "/profile",
        }
    }
}
