//! Read-only projection for the conversational companion service
//!
//! The dialogue layer contextualizes chat with a slice of pet state. It never
//! mutates the engine; there is no inbound interface from that service.

use serde::Serialize;

use super::{PetEngine, PetState};
use crate::core::types::{LifeStage, Personality, Species, Weather};

/// What the companion service gets to see
#[derive(Debug, Clone, Serialize)]
pub struct CompanionView {
    pub name: String,
    pub species: Species,
    pub stage: LifeStage,
    pub hunger: f32,
    pub happiness: f32,
    pub health: f32,
    pub energy: f32,
    pub is_sleeping: bool,
    pub is_sick: bool,
    pub weather: Weather,
    pub personality: Personality,
    pub bond: f32,
    /// Age in simulated minutes
    pub age: f32,
}

impl From<&PetState> for CompanionView {
    fn from(state: &PetState) -> Self {
        Self {
            name: state.name.clone(),
            species: state.species,
            stage: state.stage,
            hunger: state.hunger,
            happiness: state.happiness,
            health: state.health,
            energy: state.energy,
            is_sleeping: state.is_sleeping,
            is_sick: state.is_sick,
            weather: state.weather,
            personality: state.personality,
            bond: state.bond,
            age: state.age,
        }
    }
}

impl PetEngine {
    pub fn companion_view(&self) -> CompanionView {
        CompanionView::from(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Difficulty;

    #[test]
    fn test_projection_tracks_state() {
        let mut engine = PetEngine::from_seed(42);
        engine
            .adopt("Biscuit", Species::Puppup, Difficulty::Easy, 0)
            .unwrap();
        engine.state.hunger = 12.5;
        engine.state.is_sick = true;

        let view = engine.companion_view();
        assert_eq!(view.name, "Biscuit");
        assert_eq!(view.hunger, 12.5);
        assert!(view.is_sick);
        assert_eq!(view.species, Species::Puppup);
    }
}
