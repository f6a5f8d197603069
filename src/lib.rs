// ABOUTME: Library root for respec - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod derive;
pub mod error;
pub mod hooks;
pub mod model;
pub mod runtime;
pub mod spec;
