//! PetEngine - the owned, injectable state container
//!
//! One engine owns one pet: the `PetState` aggregate plus the deterministic
//! random source that drives every stochastic draw (weather, poop, sickness,
//! events, play rewards). There is no process-wide singleton; embedders hold
//! the engine wherever their event loop lives and call into it synchronously.

pub mod companion;
pub mod snapshot;
pub mod state;

pub use companion::CompanionView;
pub use state::{clamp_stat, NeedKind, PetState};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::error::{PetError, Result};
use crate::core::types::{Difficulty, Personality, Species, TimestampMs};
use crate::evolution::{self, EvolutionInfo};
use crate::simulation::weather::roll_weather;

/// Maximum pet name length in characters
pub const MAX_NAME_LEN: usize = 16;

/// The pet simulation engine.
///
/// Single-threaded, single-writer: every method is `&mut self` (or `&self`
/// for reads), so each call is its own atomic read-modify-write section.
/// Nothing here blocks or performs I/O.
pub struct PetEngine {
    pub state: PetState,
    /// Random number generator (deterministic, injectable for tests)
    pub rng: ChaCha8Rng,
}

impl PetEngine {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self {
            state: PetState::default(),
            rng,
        }
    }

    /// Engine with a seeded RNG, for deterministic runs and tests
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Engine with an OS-entropy RNG, for normal play
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// Adopt a fresh pet, replacing whatever state was there before.
    ///
    /// Personality and initial weather are rolled here and never change
    /// afterwards (weather changes, personality does not). The stage is
    /// forced to egg regardless of anything else.
    pub fn adopt(
        &mut self,
        name: &str,
        species: Species,
        difficulty: Difficulty,
        now_ms: TimestampMs,
    ) -> Result<()> {
        let len = name.chars().count();
        if len == 0 || len > MAX_NAME_LEN {
            return Err(PetError::InvalidName(format!(
                "name must be 1-{} characters, got {}",
                MAX_NAME_LEN, len
            )));
        }

        let personality = {
            use rand::Rng;
            Personality::ALL[self.rng.gen_range(0..Personality::ALL.len())]
        };
        let weather = roll_weather(&mut self.rng);

        self.state = PetState {
            name: name.to_string(),
            species,
            difficulty,
            personality,
            weather,
            weather_changed_at: now_ms,
            created_at: now_ms,
            last_update: now_ms,
            play_coins_hour_start: now_ms,
            adopted: true,
            ..PetState::default()
        };

        tracing::debug!(name, ?species, ?difficulty, ?personality, "adopted pet");
        Ok(())
    }

    /// Return to the pristine pre-adoption state. The only operation that
    /// works on a dead pet.
    pub fn reset(&mut self) {
        self.state = PetState::default();
    }

    // === Economy primitives (external reward sources, store flow) ===

    /// Unconditional coin credit (minigame rewards, daily bonus)
    pub fn add_coins(&mut self, amount: u32) {
        self.state.coins += amount;
    }

    /// Atomic check-and-debit. Returns false without mutating state if the
    /// balance is insufficient.
    pub fn spend_coins(&mut self, amount: u32) -> bool {
        if self.state.coins < amount {
            return false;
        }
        self.state.coins -= amount;
        true
    }

    /// XP credit with the same single-step level rollover as feed/play
    pub fn add_xp(&mut self, amount: f32) {
        self.grant_xp(amount);
    }

    /// Single-step XP rollover: at most one level per call.
    ///
    /// A grant bigger than two thresholds leaves `xp` above the next
    /// requirement until the next grant rolls it again.
    pub(crate) fn grant_xp(&mut self, amount: f32) {
        self.state.xp += amount;
        let needed = self.state.level as f32 * crate::core::config::config().xp_per_level;
        if self.state.xp >= needed {
            self.state.xp -= needed;
            self.state.level += 1;
        }
    }

    /// Apply a purchased item's declared effect: one clamped stat increment
    pub fn apply_item_effect(&mut self, need: NeedKind, value: f32) {
        if !self.state.is_active() {
            return;
        }
        self.state.adjust_need(need, value);
    }

    /// Current evolution form, recomputed from live state on every call
    pub fn evolution(&self) -> EvolutionInfo {
        evolution::evaluate(
            self.state.species,
            self.state.stage,
            self.state.bond,
            self.state.avg_stats(),
            self.state.personality,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{LifeStage, Personality};

    fn adopted_engine() -> PetEngine {
        let mut engine = PetEngine::from_seed(42);
        engine
            .adopt("Mochi", Species::Meowchi, Difficulty::Normal, 1_000_000)
            .unwrap();
        engine
    }

    #[test]
    fn test_adopt_resets_to_egg() {
        let engine = adopted_engine();
        assert!(engine.state.adopted);
        assert_eq!(engine.state.stage, LifeStage::Egg);
        assert_eq!(engine.state.name, "Mochi");
        assert_eq!(engine.state.last_update, 1_000_000);
    }

    #[test]
    fn test_adopt_rejects_bad_names() {
        let mut engine = PetEngine::from_seed(42);
        assert!(engine
            .adopt("", Species::Puppup, Difficulty::Easy, 0)
            .is_err());
        assert!(engine
            .adopt("abcdefghijklmnopq", Species::Puppup, Difficulty::Easy, 0)
            .is_err());
        assert!(engine
            .adopt("abcdefghijklmnop", Species::Puppup, Difficulty::Easy, 0)
            .is_ok());
    }

    #[test]
    fn test_adopt_is_deterministic_per_seed() {
        let a = adopted_engine();
        let b = adopted_engine();
        assert_eq!(a.state.personality, b.state.personality);
        assert_eq!(a.state.weather, b.state.weather);
    }

    #[test]
    fn test_spend_coins_atomic() {
        let mut engine = adopted_engine();
        assert_eq!(engine.state.coins, 50);
        assert!(!engine.spend_coins(51));
        assert_eq!(engine.state.coins, 50);
        assert!(engine.spend_coins(50));
        assert_eq!(engine.state.coins, 0);
    }

    #[test]
    fn test_xp_rollover_boundary() {
        let mut engine = adopted_engine();
        // level 1 needs exactly 50 xp
        engine.add_xp(49.0);
        assert_eq!(engine.state.level, 1);
        assert_eq!(engine.state.xp, 49.0);

        engine.reset();
        engine
            .adopt("Mochi", Species::Meowchi, Difficulty::Normal, 0)
            .unwrap();
        engine.add_xp(50.0);
        assert_eq!(engine.state.level, 2);
        assert_eq!(engine.state.xp, 0.0);
    }

    #[test]
    fn test_xp_rollover_is_single_step() {
        let mut engine = adopted_engine();
        // 50 (level 1) + 100 (level 2) + extra in one grant: only one level
        engine.add_xp(175.0);
        assert_eq!(engine.state.level, 2);
        assert_eq!(engine.state.xp, 125.0);
    }

    #[test]
    fn test_reset_clears_death() {
        let mut engine = adopted_engine();
        engine.state.kill("Health reached zero");
        engine.reset();
        assert!(!engine.state.is_dead);
        assert!(!engine.state.adopted);
        assert!(engine.state.death_cause.is_empty());
    }

    #[test]
    fn test_item_effect_clamped() {
        let mut engine = adopted_engine();
        engine.state.energy = 90.0;
        engine.apply_item_effect(NeedKind::Energy, 50.0);
        assert_eq!(engine.state.energy, 100.0);
    }

    #[test]
    fn test_item_effect_noop_when_dead() {
        let mut engine = adopted_engine();
        engine.state.kill("Choked");
        engine.state.energy = 10.0;
        engine.apply_item_effect(NeedKind::Energy, 50.0);
        assert_eq!(engine.state.energy, 10.0);
    }

    #[test]
    fn test_personality_is_one_of_catalog() {
        let engine = adopted_engine();
        assert!(Personality::ALL.contains(&engine.state.personality));
    }
}
