//! Browser-environment helpers.

pub mod session;
