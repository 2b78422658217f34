//! Tick system - the time-driven state transition
//!
//! This is the core update that ties together:
//! aging -> weather -> decay -> poop -> sickness -> health pressure ->
//! death checks -> critical events -> misbehavior
//!
//! Elapsed time is computed from the delta to `last_update`, not the call
//! cadence, so missed or late invocations (a backgrounded UI, a reloaded
//! session) are absorbed in one call. Calls closer together than the
//! debounce floor are no-ops.
//!
//! Every stochastic system uses an independent elapsed-scaled Bernoulli draw
//! per tick rather than a scheduled timer, so the caller's real-world cadence
//! controls event granularity.

use crate::core::config::config;
use crate::core::types::{
    CriticalEvent, LifeStage, Misbehavior, Personality, TimestampMs, Weather, MS_PER_MINUTE,
};
use crate::engine::state::clamp_stat;
use crate::engine::PetEngine;
use crate::simulation::weather::{decay_multipliers, roll_weather};
use crate::simulation::{events as critical, misbehavior, sickness};

use rand::Rng;

/// Observable transitions produced by one tick, for the UI action log.
///
/// Purely informational: the state itself is the source of truth.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationEvent {
    /// The pet crossed a life-stage threshold
    StageAdvanced { stage: LifeStage },
    /// Hourly weather rotation picked a new sky
    WeatherChanged { weather: Weather },
    /// A poop appeared (count is the new total)
    PoopSpawned { count: u8 },
    /// Sickness onset
    FellSick,
    /// A critical emergency started
    EventSpawned { event: CriticalEvent },
    /// An emergency went unanswered past its timeout
    EventTimedOut { event: CriticalEvent },
    /// A teen misbehavior started
    MisbehaviorStarted { misbehavior: Misbehavior },
    /// A misbehavior nobody responded to cleared silently
    MisbehaviorExpired { misbehavior: Misbehavior },
    /// Terminal: the pet died this tick
    Died { cause: String },
}

impl PetEngine {
    /// Advance the simulation to `now_ms`. See [`run_tick`].
    pub fn tick(&mut self, now_ms: TimestampMs) -> Vec<SimulationEvent> {
        run_tick(self, now_ms)
    }
}

/// Run a single simulation tick.
///
/// No-op unless the pet is adopted and alive, and at least the debounce
/// floor (half a simulated minute) has passed since the last effective tick.
/// Returns the observable transitions for display.
pub fn run_tick(engine: &mut PetEngine, now_ms: TimestampMs) -> Vec<SimulationEvent> {
    let mut events = Vec::new();
    let cfg = config();
    let PetEngine { state, rng } = engine;

    if !state.adopted || state.is_dead {
        return events;
    }
    let elapsed = now_ms.saturating_sub(state.last_update) as f32 / MS_PER_MINUTE;
    if elapsed < cfg.debounce_minutes {
        return events;
    }

    // Age and stage advance
    state.age += elapsed;
    let new_stage = LifeStage::for_age(state.age);
    if new_stage != state.stage {
        state.stage = new_stage;
        events.push(SimulationEvent::StageAdvanced { stage: new_stage });
    }

    // Weather rotation, roughly hourly
    let weather_age_ms = now_ms.saturating_sub(state.weather_changed_at) as f32;
    if weather_age_ms > cfg.weather_rotation_minutes * MS_PER_MINUTE {
        state.weather = roll_weather(rng);
        state.weather_changed_at = now_ms;
        events.push(SimulationEvent::WeatherChanged {
            weather: state.weather,
        });
    }

    // Base decay, shaped by weather, personality and stage. Sleep pauses
    // everything except energy recovery; waking is a manual action.
    let mult = decay_multipliers(state.weather, state.personality, state.happiness, state.stage);
    if !state.is_sleeping {
        state.hunger = clamp_stat(state.hunger - elapsed * cfg.hunger_decay * mult.hunger);
        state.happiness = clamp_stat(state.happiness - elapsed * cfg.happiness_decay * mult.happiness);
        state.hygiene = clamp_stat(state.hygiene - elapsed * cfg.hygiene_decay * mult.hygiene);
        state.energy = clamp_stat(state.energy - elapsed * cfg.energy_decay * mult.energy);
    } else {
        state.energy = clamp_stat(state.energy + elapsed * cfg.sleep_energy_regen);
    }

    // Poop spawn (happens even in sleep)
    let poop_chance = if state.personality == Personality::Messy {
        cfg.poop_chance_messy
    } else {
        cfg.poop_chance
    };
    if rng.gen::<f32>() < elapsed * poop_chance {
        state.poops = (state.poops + 1).min(cfg.max_poops);
        state.hygiene = clamp_stat(state.hygiene - 10.0);
        events.push(SimulationEvent::PoopSpawned { count: state.poops });
    }

    // Sickness onset and progression
    if sickness::try_onset(state, rng, elapsed, now_ms) {
        events.push(SimulationEvent::FellSick);
    }
    sickness::apply_sickness(state, elapsed, now_ms);

    // Health pressure from neglected hunger/hygiene; the critical band
    // stacks on top of the low band
    if state.hunger < cfg.low_stat_threshold || state.hygiene < cfg.low_stat_threshold {
        state.health = clamp_stat(state.health - elapsed * cfg.low_stat_drain);
    }
    if state.hunger < cfg.critical_stat_threshold || state.hygiene < cfg.critical_stat_threshold {
        state.health = clamp_stat(state.health - elapsed * cfg.critical_stat_drain);
    }

    // Senior peaceful passing
    if !state.is_dead && state.stage == LifeStage::Senior && state.age > cfg.old_age_minutes {
        if rng.gen::<f32>() < elapsed * cfg.old_age_chance {
            state.kill("Passed away peacefully of old age");
        }
    }

    // Health-zero death; never overrides a cause recorded earlier this tick
    if state.health <= 0.0 {
        state.kill("Health reached zero");
    }

    // Critical events and misbehavior (both skip sleeping or dead pets)
    if let Some(event) = critical::try_spawn(state, rng, elapsed, now_ms) {
        events.push(SimulationEvent::EventSpawned { event });
    }
    if let Some(event) = critical::expire_overdue(state, now_ms) {
        events.push(SimulationEvent::EventTimedOut { event });
    }
    if let Some(m) = misbehavior::try_spawn(state, rng, elapsed, now_ms) {
        events.push(SimulationEvent::MisbehaviorStarted { misbehavior: m });
    }
    if let Some(m) = misbehavior::expire_overdue(state, now_ms) {
        events.push(SimulationEvent::MisbehaviorExpired { misbehavior: m });
    }

    state.last_update = now_ms;

    if state.is_dead {
        tracing::debug!(cause = %state.death_cause, age = state.age, "pet died");
        events.push(SimulationEvent::Died {
            cause: state.death_cause.clone(),
        });
    }

    events
}
