//! Critical-event lifecycle: spawn, timeout, ignored penalties
//!
//! Events are time-boxed emergencies. The player answers via tapping
//! (choking, escaped), a resolve action (nightmare, tantrum, fever) or a
//! dismissal; an unanswered event times out and takes the same penalty as a
//! dismissal.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::config;
use crate::core::types::{CriticalEvent, Difficulty, TimestampMs, MS_PER_MINUTE};
use crate::engine::state::{clamp_stat, PetState};

/// Roll for a new critical event. Only one can be active, and a sleeping or
/// dead pet is spared. Returns the spawned event, if any.
pub fn try_spawn(
    state: &mut PetState,
    rng: &mut ChaCha8Rng,
    elapsed_minutes: f32,
    now_ms: TimestampMs,
) -> Option<CriticalEvent> {
    if state.active_event.is_some() || state.is_sleeping || state.is_dead {
        return None;
    }
    if rng.gen::<f32>() >= elapsed_minutes * config().event_chance {
        return None;
    }
    let event = CriticalEvent::ALL[rng.gen_range(0..CriticalEvent::ALL.len())];
    state.active_event = Some(event);
    state.event_started_at = Some(now_ms);
    state.event_taps = 0;
    tracing::debug!(?event, "critical event spawned");
    Some(event)
}

/// Expire an event that has outlived its timeout, applying the ignored
/// penalty. Returns the expired event, if any.
pub fn expire_overdue(state: &mut PetState, now_ms: TimestampMs) -> Option<CriticalEvent> {
    let (event, started) = match (state.active_event, state.event_started_at) {
        (Some(e), Some(s)) => (e, s),
        _ => return None,
    };
    let elapsed_minutes = now_ms.saturating_sub(started) as f32 / MS_PER_MINUTE;
    if elapsed_minutes <= event.timeout_minutes() {
        return None;
    }
    apply_ignored_penalty(state, event, now_ms);
    state.clear_event();
    tracing::debug!(?event, "critical event timed out");
    Some(event)
}

/// The penalty for ignoring an event, shared by timeout and manual dismissal.
///
/// Choking on nightmare difficulty is fatal; fever leaves the pet sick with
/// the earlier onset time preserved if it was already ill.
pub fn apply_ignored_penalty(state: &mut PetState, event: CriticalEvent, now_ms: TimestampMs) {
    match event {
        CriticalEvent::Choking => {
            if state.difficulty == Difficulty::Nightmare {
                state.kill("Choked");
            } else {
                state.health = clamp_stat(state.health - 40.0);
            }
        }
        CriticalEvent::Escaped => {
            state.happiness = clamp_stat(state.happiness - 30.0);
        }
        CriticalEvent::Fever => {
            state.health = clamp_stat(state.health - 20.0);
            state.is_sick = true;
            state.sick_since = Some(state.sick_since.unwrap_or(now_ms));
        }
        CriticalEvent::Tantrum => {
            state.happiness = clamp_stat(state.happiness - 25.0);
        }
        CriticalEvent::Nightmare => {
            state.happiness = clamp_stat(state.happiness - 15.0);
        }
    }
}
