pub mod events;
pub mod misbehavior;
pub mod sickness;
pub mod tick;
pub mod weather;

pub use tick::{run_tick, SimulationEvent};
pub use weather::{decay_multipliers, roll_weather, DecayMultipliers};
