//! Misbehavior lifecycle: teen-only spawn and silent expiry
//!
//! Unlike critical events, an ignored misbehavior costs nothing by itself;
//! only an explicit Ignore response hurts the bond. The discipline action
//! lives with the other player-intent handlers.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::config;
use crate::core::types::{LifeStage, Misbehavior, TimestampMs, MS_PER_MINUTE};
use crate::engine::state::PetState;

/// Roll for a new misbehavior. Teens only, one at a time, never while
/// sleeping or dead.
pub fn try_spawn(
    state: &mut PetState,
    rng: &mut ChaCha8Rng,
    elapsed_minutes: f32,
    now_ms: TimestampMs,
) -> Option<Misbehavior> {
    if state.stage != LifeStage::Teen
        || state.active_misbehavior.is_some()
        || state.is_sleeping
        || state.is_dead
    {
        return None;
    }
    if rng.gen::<f32>() >= elapsed_minutes * config().misbehavior_chance {
        return None;
    }
    let misbehavior = Misbehavior::ALL[rng.gen_range(0..Misbehavior::ALL.len())];
    state.active_misbehavior = Some(misbehavior);
    state.misbehavior_at = Some(now_ms);
    Some(misbehavior)
}

/// Clear a misbehavior nobody responded to. Silent, no penalty.
pub fn expire_overdue(state: &mut PetState, now_ms: TimestampMs) -> Option<Misbehavior> {
    let (misbehavior, started) = match (state.active_misbehavior, state.misbehavior_at) {
        (Some(m), Some(s)) => (m, s),
        _ => return None,
    };
    let elapsed_minutes = now_ms.saturating_sub(started) as f32 / MS_PER_MINUTE;
    if elapsed_minutes <= config().misbehavior_expiry_minutes {
        return None;
    }
    state.clear_misbehavior();
    Some(misbehavior)
}
