//! Infrastructure layer
//!
//! Cross-cutting concerns that sit outside the formulas themselves:
//! centralised log wording and subscriber setup.

pub mod log_messages;
pub mod telemetry;
