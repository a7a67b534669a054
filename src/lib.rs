//! LCIS formulas - the computational core of an EV climate intelligence stack
//!
//! Closed-form business formulas for carbon credits, degradation-aware
//! charging, swap-station integrity, blended asset valuation, cross-border
//! data value and sodium-ion blending, plus the IP portfolio table and a
//! scenario sweep that exercises all of them.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::Application;
pub use error::{Error, Result};
