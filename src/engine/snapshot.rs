//! Snapshot contract for the persistence adapter
//!
//! The adapter reads a full copy of state at any time (save) and may replace
//! state wholesale with a previously saved copy (load). Restore only accepts
//! snapshots of an adopted pet; anything else is a pristine default the
//! adapter has no business writing back. Schema drift across versions is not
//! handled: a snapshot either deserializes or it does not.

use super::{PetEngine, PetState};
use crate::core::error::{PetError, Result};

impl PetEngine {
    /// Synchronous full-state copy for the persistence adapter
    pub fn snapshot(&self) -> PetState {
        self.state.clone()
    }

    /// Snapshot serialized to JSON
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.state)?)
    }

    /// Bulk state replace from a previously saved snapshot.
    ///
    /// Rejected unless the snapshot was taken after adoption. No validation
    /// beyond that: the engine trusts what the adapter saved.
    pub fn restore(&mut self, snapshot: PetState) -> Result<()> {
        if !snapshot.adopted {
            return Err(PetError::InvalidSnapshot(
                "snapshot is not of an adopted pet".into(),
            ));
        }
        self.state = snapshot;
        Ok(())
    }

    /// Restore from snapshot JSON
    pub fn restore_json(&mut self, json: &str) -> Result<()> {
        let snapshot: PetState = serde_json::from_str(json)?;
        self.restore(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Difficulty, Species};

    #[test]
    fn test_snapshot_restore_round_trip() {
        let mut engine = PetEngine::from_seed(42);
        engine
            .adopt("Ember", Species::Drakeling, Difficulty::Hard, 5_000)
            .unwrap();
        engine.state.hunger = 33.0;
        engine.state.coins = 123;

        let json = engine.snapshot_json().unwrap();

        let mut other = PetEngine::from_seed(7);
        other.restore_json(&json).unwrap();
        assert_eq!(other.state.name, "Ember");
        assert_eq!(other.state.hunger, 33.0);
        assert_eq!(other.state.coins, 123);
        assert_eq!(other.state.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_restore_rejects_unadopted() {
        let mut engine = PetEngine::from_seed(42);
        let pristine = PetState::default();
        assert!(engine.restore(pristine).is_err());
    }

    #[test]
    fn test_restore_rejects_garbage_json() {
        let mut engine = PetEngine::from_seed(42);
        assert!(engine.restore_json("{not json").is_err());
    }
}
