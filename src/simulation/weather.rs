//! Weather rotation and decay-multiplier composition

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::types::{LifeStage, Personality, Weather};

/// Pick a new weather via a cumulative-weight draw (sunny is most common)
pub fn roll_weather(rng: &mut ChaCha8Rng) -> Weather {
    let total: u32 = Weather::ALL.iter().map(|w| w.spawn_weight()).sum();
    let mut r = rng.gen_range(0..total);
    for &weather in Weather::ALL.iter() {
        let weight = weather.spawn_weight();
        if r < weight {
            return weather;
        }
        r -= weight;
    }
    Weather::Sunny
}

/// Per-stat decay multipliers for one tick
#[derive(Debug, Clone, Copy)]
pub struct DecayMultipliers {
    pub hunger: f32,
    pub happiness: f32,
    pub hygiene: f32,
    pub energy: f32,
}

impl Default for DecayMultipliers {
    fn default() -> Self {
        Self {
            hunger: 1.0,
            happiness: 1.0,
            hygiene: 1.0,
            energy: 1.0,
        }
    }
}

/// Compose the decay multipliers for this tick.
///
/// Order matters for readability, not math: weather first, then personality,
/// then the senior energy tax. `happiness` is the pre-decay value; athletic
/// pets only burn happiness faster while they are still in good spirits.
pub fn decay_multipliers(
    weather: Weather,
    personality: Personality,
    happiness: f32,
    stage: LifeStage,
) -> DecayMultipliers {
    let mut m = DecayMultipliers::default();

    match weather {
        Weather::Sunny => {
            m.happiness = 0.7;
            m.energy = 0.8;
        }
        Weather::Rainy => m.happiness = 1.5,
        Weather::Cold => m.hunger = 1.5,
        Weather::Hot => m.hygiene = 1.5,
        Weather::Storm => {
            m.hunger = 2.0;
            m.happiness = 2.0;
            m.hygiene = 2.0;
            m.energy = 2.0;
        }
    }

    match personality {
        Personality::Lazy => m.energy *= 1.5,
        Personality::Anxious => m.happiness *= 1.3,
        Personality::Athletic if happiness > 50.0 => m.happiness *= 1.2,
        _ => {}
    }

    if stage == LifeStage::Senior {
        m.energy *= 1.5;
    }

    m
}
