//! Simulation configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other.

/// Configuration for the simulation systems
///
/// These values have been tuned around a 10-second tick cadence so that
/// per-call event probabilities stay small. Changing them will affect
/// gameplay pacing and feel.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    // === TIME ===
    /// Minimum elapsed minutes for a tick to take effect
    ///
    /// Calls closer together than this are absorbed as no-ops, so a tick
    /// loop may fire as often as it likes without double-applying decay.
    pub debounce_minutes: f32,

    /// Minutes between weather rotations
    pub weather_rotation_minutes: f32,

    // === NEED DECAY (per elapsed minute, awake) ===
    /// Hunger lost per minute before multipliers
    pub hunger_decay: f32,

    /// Happiness lost per minute before multipliers
    pub happiness_decay: f32,

    /// Hygiene lost per minute before multipliers
    pub hygiene_decay: f32,

    /// Energy lost per minute before multipliers
    pub energy_decay: f32,

    /// Energy regained per minute while sleeping
    ///
    /// Roughly 13x the awake drain rate, so a full night's sleep is about
    /// 50 minutes of real time. Waking is always a manual action.
    pub sleep_energy_regen: f32,

    // === STOCHASTIC EVENTS (probability per elapsed minute) ===
    /// Chance per minute of a poop appearing
    pub poop_chance: f32,

    /// Poop chance for messy pets (50% more)
    pub poop_chance_messy: f32,

    /// Chance per minute of falling sick while hunger or hygiene is low
    pub sick_chance: f32,

    /// Sick chance for sensitive pets (doubled)
    pub sick_chance_sensitive: f32,

    /// Chance per minute of a critical event spawning
    pub event_chance: f32,

    /// Chance per minute of a teen misbehavior starting
    pub misbehavior_chance: f32,

    /// Minutes before an unanswered misbehavior clears silently
    pub misbehavior_expiry_minutes: f32,

    // === HEALTH PRESSURE ===
    /// Hunger/hygiene level below which health starts to suffer
    pub low_stat_threshold: f32,

    /// Health lost per minute while below the low threshold
    pub low_stat_drain: f32,

    /// Hunger/hygiene level marking outright neglect
    pub critical_stat_threshold: f32,

    /// Extra health lost per minute while below the critical threshold
    ///
    /// Stacks with the low-threshold drain, so a starving filthy pet loses
    /// 1.1 health per minute before sickness is even considered.
    pub critical_stat_drain: f32,

    // === OLD AGE ===
    /// Age in minutes past which a senior pet may pass away peacefully
    pub old_age_minutes: f32,

    /// Chance per minute of a peaceful passing once old enough
    pub old_age_chance: f32,

    // === ECONOMY ===
    /// XP required per level is `level * xp_per_level`
    pub xp_per_level: f32,

    /// Coins a single play session may earn (random, inclusive range)
    pub play_coin_min: u32,
    pub play_coin_max: u32,

    /// Cumulative coin cap from play per rolling hour window
    pub play_coin_hourly_cap: u32,

    /// Energy below which the pet refuses to play
    pub play_energy_floor: f32,

    /// Base cost of a heal; doubled at senior stage
    pub heal_cost: u32,

    /// Coins required to treat a fever event
    pub fever_treatment_cost: u32,

    /// Maximum poops on screen
    pub max_poops: u8,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            debounce_minutes: 0.5,
            weather_rotation_minutes: 60.0,

            hunger_decay: 0.5,
            happiness_decay: 0.3,
            hygiene_decay: 0.2,
            energy_decay: 0.15,
            sleep_energy_regen: 2.0,

            poop_chance: 0.03,
            poop_chance_messy: 0.045,
            sick_chance: 0.004,
            sick_chance_sensitive: 0.008,
            event_chance: 0.003,
            misbehavior_chance: 0.005,
            misbehavior_expiry_minutes: 5.0,

            low_stat_threshold: 30.0,
            low_stat_drain: 0.3,
            critical_stat_threshold: 10.0,
            critical_stat_drain: 0.8,

            old_age_minutes: 30.0 * 24.0 * 60.0,
            old_age_chance: 0.001,

            xp_per_level: 50.0,
            play_coin_min: 5,
            play_coin_max: 14,
            play_coin_hourly_cap: 30,
            play_energy_floor: 10.0,
            heal_cost: 20,
            fever_treatment_cost: 30,
            max_poops: 5,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.debounce_minutes <= 0.0 {
            return Err("debounce_minutes must be positive".into());
        }

        if self.critical_stat_threshold >= self.low_stat_threshold {
            return Err(format!(
                "critical_stat_threshold ({}) should be < low_stat_threshold ({})",
                self.critical_stat_threshold, self.low_stat_threshold
            ));
        }

        if self.play_coin_min > self.play_coin_max {
            return Err(format!(
                "play_coin_min ({}) should be <= play_coin_max ({})",
                self.play_coin_min, self.play_coin_max
            ));
        }

        // Per-minute probabilities must stay in [0,1] for the Bernoulli draws
        for (name, p) in [
            ("poop_chance", self.poop_chance),
            ("poop_chance_messy", self.poop_chance_messy),
            ("sick_chance", self.sick_chance),
            ("sick_chance_sensitive", self.sick_chance_sensitive),
            ("event_chance", self.event_chance),
            ("misbehavior_chance", self.misbehavior_chance),
            ("old_age_chance", self.old_age_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(format!("{} ({}) must be within [0, 1]", name, p));
            }
        }

        if self.hunger_decay <= 0.0 || self.energy_decay <= 0.0 {
            return Err("Decay rates must be positive".into());
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<SimulationConfig> = OnceLock::new();

/// Get the global simulation config (initializes with defaults if not set)
pub fn config() -> &'static SimulationConfig {
    CONFIG.get_or_init(SimulationConfig::default)
}

/// Set the global simulation config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: SimulationConfig) -> Result<(), SimulationConfig> {
    CONFIG.set(config)
}
