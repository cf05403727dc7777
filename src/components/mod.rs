//! Shared UI components.

pub mod form_field;
pub mod notice;
