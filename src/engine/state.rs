//! The pet state aggregate

use serde::{Deserialize, Serialize};

use crate::core::types::{
    CriticalEvent, Difficulty, LifeStage, Misbehavior, Personality, Species, TimestampMs, Weather,
};

/// Clamp a need stat to its valid range
pub fn clamp_stat(v: f32) -> f32 {
    v.clamp(0.0, 100.0)
}

/// The five need stats, for callers that address one generically
/// (store items declare their effect as a need + delta)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeedKind {
    Hunger,
    Happiness,
    Health,
    Hygiene,
    Energy,
}

/// The complete persistent state of one pet.
///
/// This is the snapshot unit: the persistence adapter serializes exactly this
/// struct, and `PetEngine::restore` replaces it wholesale. Every mutation path
/// (tick and action handlers) clamps need stats on write, so a state that
/// entered through the public API always has `hunger`, `happiness`, `health`,
/// `hygiene`, `energy` and `bond` within [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetState {
    // Identity
    pub name: String,
    pub species: Species,
    pub personality: Personality,
    pub difficulty: Difficulty,

    // Lifecycle
    pub stage: LifeStage,
    /// Age in simulated minutes, monotone while alive
    pub age: f32,
    pub created_at: TimestampMs,
    pub last_update: TimestampMs,
    pub adopted: bool,
    /// Terminal. Once set, tick and every action except reset are no-ops.
    pub is_dead: bool,
    /// Human-readable cause, set once when `is_dead` flips
    pub death_cause: String,

    // Needs, all clamped to [0, 100]
    pub hunger: f32,
    pub happiness: f32,
    pub health: f32,
    pub hygiene: f32,
    pub energy: f32,

    // Secondary status
    pub is_sleeping: bool,
    pub poops: u8,
    pub is_sick: bool,
    pub sick_since: Option<TimestampMs>,
    pub weather: Weather,
    pub weather_changed_at: TimestampMs,
    pub active_event: Option<CriticalEvent>,
    pub event_started_at: Option<TimestampMs>,
    pub event_taps: u32,
    pub active_misbehavior: Option<Misbehavior>,
    pub misbehavior_at: Option<TimestampMs>,

    // Economy
    pub coins: u32,
    pub level: u32,
    /// Resets on level-up; see `PetEngine::grant_xp` for the rollover rule
    pub xp: f32,
    pub bond: f32,
    pub play_coins_this_hour: u32,
    pub play_coins_hour_start: TimestampMs,
}

impl Default for PetState {
    /// Pristine pre-adoption state. Timestamps are zero until `adopt` stamps
    /// them with the caller's clock.
    fn default() -> Self {
        Self {
            name: String::new(),
            species: Species::Meowchi,
            personality: Personality::Lazy,
            difficulty: Difficulty::Normal,

            stage: LifeStage::Egg,
            age: 0.0,
            created_at: 0,
            last_update: 0,
            adopted: false,
            is_dead: false,
            death_cause: String::new(),

            hunger: 80.0,
            happiness: 80.0,
            health: 100.0,
            hygiene: 80.0,
            energy: 100.0,

            is_sleeping: false,
            poops: 0,
            is_sick: false,
            sick_since: None,
            weather: Weather::Sunny,
            weather_changed_at: 0,
            active_event: None,
            event_started_at: None,
            event_taps: 0,
            active_misbehavior: None,
            misbehavior_at: None,

            coins: 50,
            level: 1,
            xp: 0.0,
            bond: 0.0,
            play_coins_this_hour: 0,
            play_coins_hour_start: 0,
        }
    }
}

impl PetState {
    /// Average of the five need stats, used by the evolution calculator
    pub fn avg_stats(&self) -> f32 {
        (self.hunger + self.happiness + self.health + self.hygiene + self.energy) / 5.0
    }

    /// Whether the pet responds to tick and player intent at all
    pub fn is_active(&self) -> bool {
        self.adopted && !self.is_dead
    }

    /// Mark the pet dead. The first recorded cause wins; later deaths in the
    /// same tick never overwrite it.
    pub fn kill(&mut self, cause: &str) {
        self.is_dead = true;
        if self.death_cause.is_empty() {
            self.death_cause = cause.to_string();
        }
    }

    /// Clear sickness state (heal, fever treatment)
    pub fn cure(&mut self) {
        self.is_sick = false;
        self.sick_since = None;
    }

    /// Clear the active critical event and its tap counter
    pub fn clear_event(&mut self) {
        self.active_event = None;
        self.event_started_at = None;
        self.event_taps = 0;
    }

    /// Clear the active misbehavior
    pub fn clear_misbehavior(&mut self) {
        self.active_misbehavior = None;
        self.misbehavior_at = None;
    }

    /// Read one need stat
    pub fn need(&self, kind: NeedKind) -> f32 {
        match kind {
            NeedKind::Hunger => self.hunger,
            NeedKind::Happiness => self.happiness,
            NeedKind::Health => self.health,
            NeedKind::Hygiene => self.hygiene,
            NeedKind::Energy => self.energy,
        }
    }

    /// Adjust one need stat by a (possibly negative) delta, clamped
    pub fn adjust_need(&mut self, kind: NeedKind, delta: f32) {
        let slot = match kind {
            NeedKind::Hunger => &mut self.hunger,
            NeedKind::Happiness => &mut self.happiness,
            NeedKind::Health => &mut self.health,
            NeedKind::Hygiene => &mut self.hygiene,
            NeedKind::Energy => &mut self.energy,
        };
        *slot = clamp_stat(*slot + delta);
    }
}
