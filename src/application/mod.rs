//! Application services
//!
//! Coordinates configuration and the domain formulas into a full scenario
//! sweep.

pub mod app;
pub mod simulation;

pub use app::Application;
pub use simulation::SimulationReport;
