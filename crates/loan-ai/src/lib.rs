//! Rule-based loan decision gate.
//!
//! The [`workflows::lending`] module holds the four-attribute decision engine and the
//! exhaustive truth table used to prove it. Configuration, telemetry, and the error
//! type are shared with the HTTP service in `services/api`.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
