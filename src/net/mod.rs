//! HTTP layer: request/response bodies and calls to the account service.

pub mod api;
pub mod types;
