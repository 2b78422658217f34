//! Player-intent mutations
//!
//! Every handler is a silent no-op over malformed intent: a dead pet, a
//! sleeping pet where that matters, an empty wallet, a missing event. Callers
//! pre-check affordability via read-only state (a UI disables the button);
//! the returned bool/outcome exists for testability, not control flow.

use rand::Rng;

use crate::actions::catalog::{FoodId, FoodQuality};
use crate::core::config::config;
use crate::core::types::{
    CriticalEvent, DisciplineResponse, LifeStage, Personality, TimestampMs, MS_PER_MINUTE,
};
use crate::engine::state::clamp_stat;
use crate::engine::PetEngine;

/// How a discipline call landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisciplineOutcome {
    Correct,
    Incorrect,
    Ignored,
}

impl PetEngine {
    /// Feed one item from the food catalog.
    ///
    /// Returns true if the pet actually ate. A picky eater offered basic
    /// food sulks (happiness -5) without eating and without being charged.
    /// Sickness halves the hunger and happiness gains; the health gain is
    /// unscaled.
    pub fn feed(&mut self, food: FoodId) -> bool {
        let stats = food.stats();
        let state = &mut self.state;
        if !state.is_active() || state.is_sleeping {
            return false;
        }
        if state.coins < stats.cost {
            return false;
        }
        if state.personality == Personality::PickyEater && stats.quality == FoodQuality::Basic {
            state.happiness = clamp_stat(state.happiness - 5.0);
            return false;
        }

        let sick_penalty = if state.is_sick { 0.5 } else { 1.0 };
        state.hunger = clamp_stat(state.hunger + stats.hunger * sick_penalty);
        state.happiness = clamp_stat(state.happiness + stats.happiness * sick_penalty);
        state.health = clamp_stat(state.health + stats.health);
        state.energy = clamp_stat(state.energy - 2.0);
        state.coins -= stats.cost;
        state.bond = clamp_stat(state.bond + 1.0);

        let xp = (stats.cost as f32 / 5.0).ceil();
        self.grant_xp(xp);
        true
    }

    /// Play a round. Coin earnings are random but capped per rolling hour;
    /// athletic pets play harder in both directions.
    pub fn play(&mut self, now_ms: TimestampMs) -> bool {
        let cfg = config();
        if !self.state.is_active()
            || self.state.is_sleeping
            || self.state.energy < cfg.play_energy_floor
        {
            return false;
        }

        // Roll the hourly window forward if it has lapsed
        let window_ms = 60.0 * MS_PER_MINUTE;
        if now_ms.saturating_sub(self.state.play_coins_hour_start) as f32 > window_ms {
            self.state.play_coins_this_hour = 0;
            self.state.play_coins_hour_start = now_ms;
        }

        let cap = cfg.play_coin_hourly_cap;
        let earned = if self.state.play_coins_this_hour >= cap {
            0
        } else {
            let roll = self.rng.gen_range(cfg.play_coin_min..=cfg.play_coin_max);
            roll.min(cap - self.state.play_coins_this_hour)
        };

        let athletic = self.state.personality == Personality::Athletic;
        let happiness_gain = if athletic { 30.0 } else { 20.0 };
        let energy_cost = if athletic { 20.0 } else { 15.0 };

        let state = &mut self.state;
        state.happiness = clamp_stat(state.happiness + happiness_gain);
        state.energy = clamp_stat(state.energy - energy_cost);
        state.hunger = clamp_stat(state.hunger - 5.0);
        state.bond = clamp_stat(state.bond + 2.0);
        state.coins += earned;
        state.play_coins_this_hour += earned;

        self.grant_xp(5.0);
        true
    }

    /// Scoop the poops and freshen up. Works even while the pet sleeps.
    pub fn clean(&mut self) -> bool {
        let state = &mut self.state;
        if !state.is_active() {
            return false;
        }
        state.poops = 0;
        state.hygiene = clamp_stat(state.hygiene + 30.0);
        state.happiness = clamp_stat(state.happiness + 5.0);
        state.bond = clamp_stat(state.bond + 1.0);
        true
    }

    pub fn sleep(&mut self) -> bool {
        if !self.state.is_active() {
            return false;
        }
        self.state.is_sleeping = true;
        true
    }

    /// Waking is always manual, even at full energy
    pub fn wake(&mut self) -> bool {
        if !self.state.is_active() {
            return false;
        }
        self.state.is_sleeping = false;
        true
    }

    /// Administer medicine. Costs double at senior stage, cures sickness,
    /// and the pet hates every second of it.
    pub fn heal(&mut self) -> bool {
        let cfg = config();
        let state = &mut self.state;
        if !state.is_active() {
            return false;
        }
        let cost = if state.stage == LifeStage::Senior {
            cfg.heal_cost * 2
        } else {
            cfg.heal_cost
        };
        if state.coins < cost {
            return false;
        }
        state.coins -= cost;
        state.health = clamp_stat(state.health + 40.0);
        state.happiness = clamp_stat(state.happiness - 10.0);
        state.cure();
        true
    }

    /// One tap toward resolving a tap-driven event (choking, escaped).
    /// Returns true when this tap clears the event.
    pub fn tap_event(&mut self) -> bool {
        let state = &mut self.state;
        if !state.is_active() {
            return false;
        }
        let event = match state.active_event {
            Some(e) => e,
            None => return false,
        };
        let taps = state.event_taps + 1;
        if let Some(required) = event.taps_required() {
            if taps >= required {
                state.clear_event();
                state.bond = clamp_stat(state.bond + 5.0);
                return true;
            }
        }
        state.event_taps = taps;
        false
    }

    /// The positive resolution for non-tap events. Fever treatment requires
    /// coins; without them nothing happens and the event stays active.
    pub fn resolve_event(&mut self) -> bool {
        let fever_cost = config().fever_treatment_cost;
        let state = &mut self.state;
        if !state.is_active() {
            return false;
        }
        match state.active_event {
            Some(CriticalEvent::Nightmare) => {
                state.happiness = clamp_stat(state.happiness + 10.0);
                state.bond = clamp_stat(state.bond + 3.0);
            }
            Some(CriticalEvent::Tantrum) => {
                state.happiness = clamp_stat(state.happiness + 5.0);
                state.bond = clamp_stat(state.bond + 2.0);
            }
            Some(CriticalEvent::Fever) => {
                if state.coins < fever_cost {
                    return false;
                }
                state.coins -= fever_cost;
                state.health = clamp_stat(state.health + 30.0);
                state.cure();
            }
            // Tap-driven events resolve through tap_event
            Some(CriticalEvent::Choking) | Some(CriticalEvent::Escaped) | None => return false,
        }
        state.clear_event();
        true
    }

    /// Ignore the active event, taking the same penalty as a timeout
    pub fn dismiss_event(&mut self, now_ms: TimestampMs) -> bool {
        let state = &mut self.state;
        if !state.is_active() {
            return false;
        }
        let event = match state.active_event {
            Some(e) => e,
            None => return false,
        };
        crate::simulation::events::apply_ignored_penalty(state, event, now_ms);
        state.clear_event();
        true
    }

    /// Answer the active misbehavior. The misbehavior clears regardless of
    /// the outcome; only the rewards differ.
    pub fn discipline(&mut self, response: DisciplineResponse) -> Option<DisciplineOutcome> {
        let state = &mut self.state;
        if !state.is_active() {
            return None;
        }
        let misbehavior = state.active_misbehavior?;

        let outcome = if response == DisciplineResponse::Ignore {
            state.bond = clamp_stat(state.bond - 5.0);
            DisciplineOutcome::Ignored
        } else if response == misbehavior.correct_response() {
            state.bond = clamp_stat(state.bond + 3.0);
            state.happiness = clamp_stat(state.happiness + 5.0);
            DisciplineOutcome::Correct
        } else {
            state.happiness = clamp_stat(state.happiness - 10.0);
            DisciplineOutcome::Incorrect
        };

        state.clear_misbehavior();
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Difficulty, Misbehavior, Species};

    fn engine() -> PetEngine {
        let mut engine = PetEngine::from_seed(42);
        engine
            .adopt("Pip", Species::Meowchi, Difficulty::Normal, 0)
            .unwrap();
        engine
    }

    #[test]
    fn test_feed_applies_stats_and_charges() {
        let mut engine = engine();
        engine.state.personality = Personality::Lazy;
        engine.state.hunger = 50.0;
        assert!(engine.feed(FoodId::Apple));
        assert_eq!(engine.state.hunger, 70.0);
        assert_eq!(engine.state.coins, 45);
        assert_eq!(engine.state.bond, 1.0);
        assert_eq!(engine.state.energy, 98.0);
        // ceil(5 / 5) = 1 xp
        assert_eq!(engine.state.xp, 1.0);
    }

    #[test]
    fn test_picky_eater_rejects_basic_food() {
        let mut engine = engine();
        engine.state.personality = Personality::PickyEater;
        engine.state.hunger = 50.0;
        let happiness = engine.state.happiness;
        let coins = engine.state.coins;

        assert!(!engine.feed(FoodId::Bread));
        assert_eq!(engine.state.hunger, 50.0);
        assert_eq!(engine.state.happiness, happiness - 5.0);
        assert_eq!(engine.state.coins, coins);

        // Premium food goes down fine
        assert!(engine.feed(FoodId::Burger));
        assert_eq!(engine.state.hunger, 90.0);
    }

    #[test]
    fn test_feed_sick_penalty_halves_gains() {
        let mut engine = engine();
        engine.state.personality = Personality::Lazy;
        engine.state.is_sick = true;
        engine.state.hunger = 20.0;
        engine.state.happiness = 20.0;
        engine.state.health = 50.0;
        assert!(engine.feed(FoodId::Sushi));
        // hunger 60 * 0.5, happiness 20 * 0.5, health unscaled
        assert_eq!(engine.state.hunger, 50.0);
        assert_eq!(engine.state.happiness, 30.0);
        assert_eq!(engine.state.health, 55.0);
    }

    #[test]
    fn test_feed_requires_funds_and_wakefulness() {
        let mut engine = engine();
        engine.state.coins = 2;
        assert!(!engine.feed(FoodId::Bread)); // costs 3
        engine.state.coins = 50;
        engine.state.is_sleeping = true;
        assert!(!engine.feed(FoodId::Bread));
    }

    #[test]
    fn test_play_hourly_coin_cap() {
        let mut engine = engine();
        engine.state.energy = 100.0;
        let start_coins = engine.state.coins;
        // Play many times inside one hour; energy is topped up so only the
        // coin cap limits earnings
        for _ in 0..20 {
            engine.state.energy = 100.0;
            engine.play(1_000);
        }
        assert_eq!(engine.state.play_coins_this_hour, 30);
        assert_eq!(engine.state.coins - start_coins, 30);

        // A new hour reopens the window
        engine.state.energy = 100.0;
        assert!(engine.play(2 * 60 * 60_000));
        assert!(engine.state.play_coins_this_hour > 0);
    }

    #[test]
    fn test_play_refuses_when_exhausted() {
        let mut engine = engine();
        engine.state.energy = 9.0;
        assert!(!engine.play(0));
    }

    #[test]
    fn test_clean_works_while_sleeping() {
        let mut engine = engine();
        engine.state.is_sleeping = true;
        engine.state.poops = 4;
        engine.state.hygiene = 40.0;
        assert!(engine.clean());
        assert_eq!(engine.state.poops, 0);
        assert_eq!(engine.state.hygiene, 70.0);
    }

    #[test]
    fn test_heal_cures_and_costs_double_for_seniors() {
        let mut engine = engine();
        engine.state.is_sick = true;
        engine.state.sick_since = Some(5);
        engine.state.health = 30.0;
        engine.state.coins = 100;
        assert!(engine.heal());
        assert_eq!(engine.state.coins, 80);
        assert_eq!(engine.state.health, 70.0);
        assert!(!engine.state.is_sick);
        assert_eq!(engine.state.sick_since, None);

        engine.state.stage = LifeStage::Senior;
        engine.state.coins = 39;
        assert!(!engine.heal());
        engine.state.coins = 40;
        assert!(engine.heal());
        assert_eq!(engine.state.coins, 0);
    }

    #[test]
    fn test_tap_event_threshold() {
        let mut engine = engine();
        engine.state.active_event = Some(CriticalEvent::Choking);
        engine.state.event_started_at = Some(0);
        engine.state.event_taps = 14;

        assert!(engine.tap_event());
        assert!(engine.state.active_event.is_none());
        assert_eq!(engine.state.event_taps, 0);
        assert_eq!(engine.state.bond, 5.0);
    }

    #[test]
    fn test_tap_event_counts_up() {
        let mut engine = engine();
        engine.state.active_event = Some(CriticalEvent::Escaped);
        engine.state.event_started_at = Some(0);
        for expected in 1..20 {
            assert!(!engine.tap_event());
            assert_eq!(engine.state.event_taps, expected);
        }
        assert!(engine.tap_event());
        assert!(engine.state.active_event.is_none());
    }

    #[test]
    fn test_resolve_fever_needs_funds() {
        let mut engine = engine();
        engine.state.active_event = Some(CriticalEvent::Fever);
        engine.state.event_started_at = Some(0);
        engine.state.is_sick = true;
        engine.state.health = 40.0;
        engine.state.coins = 29;

        assert!(!engine.resolve_event());
        assert_eq!(engine.state.active_event, Some(CriticalEvent::Fever));

        engine.state.coins = 35;
        assert!(engine.resolve_event());
        assert!(engine.state.active_event.is_none());
        assert_eq!(engine.state.coins, 5);
        assert_eq!(engine.state.health, 70.0);
        assert!(!engine.state.is_sick);
    }

    #[test]
    fn test_resolve_nightmare_comforts() {
        let mut engine = engine();
        engine.state.active_event = Some(CriticalEvent::Nightmare);
        engine.state.event_started_at = Some(0);
        engine.state.happiness = 50.0;
        assert!(engine.resolve_event());
        assert_eq!(engine.state.happiness, 60.0);
        assert_eq!(engine.state.bond, 3.0);
        assert!(engine.state.active_event.is_none());
    }

    #[test]
    fn test_dismiss_matches_timeout_penalty() {
        let mut engine = engine();
        engine.state.active_event = Some(CriticalEvent::Tantrum);
        engine.state.event_started_at = Some(0);
        engine.state.happiness = 80.0;
        assert!(engine.dismiss_event(1_000));
        assert_eq!(engine.state.happiness, 55.0);
        assert!(engine.state.active_event.is_none());
    }

    #[test]
    fn test_discipline_correct_response() {
        let mut engine = engine();
        engine.state.active_misbehavior = Some(Misbehavior::RunsAround);
        engine.state.misbehavior_at = Some(0);
        engine.state.happiness = 50.0;
        engine.state.bond = 10.0;

        let outcome = engine.discipline(DisciplineResponse::Praise);
        assert_eq!(outcome, Some(DisciplineOutcome::Correct));
        assert_eq!(engine.state.bond, 13.0);
        assert_eq!(engine.state.happiness, 55.0);
        assert!(engine.state.active_misbehavior.is_none());
    }

    #[test]
    fn test_discipline_wrong_and_ignored() {
        let mut engine = engine();
        engine.state.active_misbehavior = Some(Misbehavior::RefusesEat);
        engine.state.misbehavior_at = Some(0);
        engine.state.happiness = 50.0;
        let outcome = engine.discipline(DisciplineResponse::Praise);
        assert_eq!(outcome, Some(DisciplineOutcome::Incorrect));
        assert_eq!(engine.state.happiness, 40.0);

        engine.state.active_misbehavior = Some(Misbehavior::ThrowsToys);
        engine.state.misbehavior_at = Some(0);
        engine.state.bond = 20.0;
        let outcome = engine.discipline(DisciplineResponse::Ignore);
        assert_eq!(outcome, Some(DisciplineOutcome::Ignored));
        assert_eq!(engine.state.bond, 15.0);
    }

    #[test]
    fn test_all_actions_noop_when_dead() {
        let mut engine = engine();
        engine.state.active_event = Some(CriticalEvent::Tantrum);
        engine.state.active_misbehavior = Some(Misbehavior::WontSleep);
        engine.state.kill("Choked");
        let frozen = engine.snapshot();

        assert!(!engine.feed(FoodId::Steak));
        assert!(!engine.play(0));
        assert!(!engine.clean());
        assert!(!engine.sleep());
        assert!(!engine.wake());
        assert!(!engine.heal());
        assert!(!engine.tap_event());
        assert!(!engine.resolve_event());
        assert!(!engine.dismiss_event(0));
        assert_eq!(engine.discipline(DisciplineResponse::Scold), None);

        let after = engine.snapshot();
        assert_eq!(after.hunger, frozen.hunger);
        assert_eq!(after.happiness, frozen.happiness);
        assert_eq!(after.coins, frozen.coins);
        assert_eq!(after.bond, frozen.bond);
        assert_eq!(after.active_event, frozen.active_event);
    }
}
