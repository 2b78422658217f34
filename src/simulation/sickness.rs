//! Sickness onset, drain and the untreated-illness window

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::config;
use crate::core::types::{Difficulty, Personality, TimestampMs, MS_PER_MINUTE};
use crate::engine::state::{clamp_stat, PetState};

/// Roll for sickness onset. Only possible while hunger or hygiene is low.
/// Returns true if the pet just fell sick.
pub fn try_onset(
    state: &mut PetState,
    rng: &mut ChaCha8Rng,
    elapsed_minutes: f32,
    now_ms: TimestampMs,
) -> bool {
    if state.is_sick {
        return false;
    }
    let cfg = config();
    if state.hunger >= cfg.low_stat_threshold && state.hygiene >= cfg.low_stat_threshold {
        return false;
    }
    let chance = if state.personality == Personality::Sensitive {
        cfg.sick_chance_sensitive
    } else {
        cfg.sick_chance
    };
    if rng.gen::<f32>() < elapsed_minutes * chance {
        state.is_sick = true;
        state.sick_since = Some(now_ms);
        return true;
    }
    false
}

/// Apply the per-tick cost of being sick: health drain scaled by difficulty,
/// minor drain to the other needs, and the untreated window check.
///
/// Returns true if the illness was fatal this tick (nightmare only).
pub fn apply_sickness(state: &mut PetState, elapsed_minutes: f32, now_ms: TimestampMs) -> bool {
    if !state.is_sick {
        return false;
    }

    let drain = state.difficulty.sickness_drain_per_hour();
    state.health = clamp_stat(state.health - elapsed_minutes * drain / 60.0);

    // Sickness spreads into the other needs
    state.hunger = clamp_stat(state.hunger - elapsed_minutes * 0.2);
    state.happiness = clamp_stat(state.happiness - elapsed_minutes * 0.3);
    state.hygiene = clamp_stat(state.hygiene - elapsed_minutes * 0.15);

    if let Some(since) = state.sick_since {
        let window_ms = state.difficulty.sickness_window_minutes() * MS_PER_MINUTE;
        if now_ms.saturating_sub(since) as f32 > window_ms {
            if state.difficulty == Difficulty::Nightmare {
                state.kill("Died from untreated illness");
                return true;
            }
            state.health = clamp_stat(state.health - 30.0);
        }
    }
    false
}
