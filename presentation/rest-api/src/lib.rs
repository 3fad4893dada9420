//! HTTP surface of the budget tracker: configuration, routes, and the
//! composition root that wires them to the business and infrastructure crates.

pub mod api;
pub mod config;
pub mod setup;
