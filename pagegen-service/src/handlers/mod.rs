//! HTTP handlers for the page generation gateway.

pub mod health;
pub mod metrics;
pub mod page;
pub mod prompt;
