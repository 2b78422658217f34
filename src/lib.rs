//! PetPocket - Virtual Pet Life-Simulation Engine

pub mod actions;
pub mod core;
pub mod engine;
pub mod evolution;
pub mod simulation;

pub use engine::{CompanionView, PetEngine, PetState};
pub use simulation::SimulationEvent;
