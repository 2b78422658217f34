//! Core type definitions used throughout the engine

use serde::{Deserialize, Serialize};

/// Wall-clock timestamp in milliseconds since the Unix epoch.
///
/// The engine never reads the system clock itself; callers pass the current
/// time into every time-sensitive operation. This keeps simulation
/// deterministic under test and leaves room for a monotonic-time wrapper.
pub type TimestampMs = u64;

/// Milliseconds per simulated minute (the tick math works in minutes)
pub const MS_PER_MINUTE: f32 = 60_000.0;

/// Pet species available at adoption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Meowchi,
    Puppup,
    Drakeling,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Meowchi, Species::Puppup, Species::Drakeling];

    pub fn display_name(&self) -> &'static str {
        match self {
            Species::Meowchi => "Meowchi",
            Species::Puppup => "Puppup",
            Species::Drakeling => "Drakeling",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Species::Meowchi => "🐱",
            Species::Puppup => "🐶",
            Species::Drakeling => "🐉",
        }
    }
}

/// Age-derived life phase
///
/// Governs available mechanics (misbehavior only at teen) and decay
/// multipliers (senior energy drain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    Egg,
    Baby,
    Child,
    Teen,
    Adult,
    Senior,
}

impl LifeStage {
    /// Map an age in minutes to its life stage.
    ///
    /// Thresholds in hours: egg < 1/6 (10 minutes), baby < 24, child < 72,
    /// teen < 144, adult < 480, senior beyond.
    pub fn for_age(age_minutes: f32) -> Self {
        let hours = age_minutes / 60.0;
        if hours < 10.0 / 60.0 {
            LifeStage::Egg
        } else if hours < 24.0 {
            LifeStage::Baby
        } else if hours < 72.0 {
            LifeStage::Child
        } else if hours < 144.0 {
            LifeStage::Teen
        } else if hours < 480.0 {
            LifeStage::Adult
        } else {
            LifeStage::Senior
        }
    }
}

/// Care difficulty, fixed at adoption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Nightmare,
}

impl Difficulty {
    /// Health drain per hour while sick
    pub fn sickness_drain_per_hour(&self) -> f32 {
        match self {
            Difficulty::Easy => 5.0,
            Difficulty::Normal => 10.0,
            Difficulty::Hard => 15.0,
            Difficulty::Nightmare => 20.0,
        }
    }

    /// Minutes a sickness may go untreated before it escalates.
    ///
    /// Past the window: nightmare is fatal, everything else takes a flat
    /// health hit each tick until healed.
    pub fn sickness_window_minutes(&self) -> f32 {
        match self {
            Difficulty::Easy => 360.0,
            Difficulty::Normal => 180.0,
            Difficulty::Hard => 120.0,
            Difficulty::Nightmare => 60.0,
        }
    }
}

/// Current weather, rotated roughly hourly by the tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    Sunny,
    Rainy,
    Cold,
    Hot,
    Storm,
}

impl Weather {
    pub const ALL: [Weather; 5] = [
        Weather::Sunny,
        Weather::Rainy,
        Weather::Cold,
        Weather::Hot,
        Weather::Storm,
    ];

    /// Relative spawn weight (weights sum to 100)
    pub fn spawn_weight(&self) -> u32 {
        match self {
            Weather::Sunny => 35,
            Weather::Rainy => 25,
            Weather::Cold => 15,
            Weather::Hot => 15,
            Weather::Storm => 10,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Weather::Sunny => "☀️",
            Weather::Rainy => "🌧️",
            Weather::Cold => "❄️",
            Weather::Hot => "🔥",
            Weather::Storm => "🌪️",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Weather::Sunny => "Sunny",
            Weather::Rainy => "Rainy",
            Weather::Cold => "Cold",
            Weather::Hot => "Hot",
            Weather::Storm => "Storm",
        }
    }

    /// One-line effect description for the UI
    pub fn effect(&self) -> &'static str {
        match self {
            Weather::Sunny => "Happiness decays slower",
            Weather::Rainy => "Pet gets sad faster",
            Weather::Cold => "Hunger increases faster",
            Weather::Hot => "Hygiene drops faster",
            Weather::Storm => "All stats decay 2x for 1hr!",
        }
    }
}

/// Personality trait, assigned randomly at adoption and immutable after
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    Lazy,
    PickyEater,
    Messy,
    Anxious,
    Athletic,
    Sensitive,
    Independent,
}

impl Personality {
    pub const ALL: [Personality; 7] = [
        Personality::Lazy,
        Personality::PickyEater,
        Personality::Messy,
        Personality::Anxious,
        Personality::Athletic,
        Personality::Sensitive,
        Personality::Independent,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Personality::Lazy => "Lazy",
            Personality::PickyEater => "Picky Eater",
            Personality::Messy => "Messy",
            Personality::Anxious => "Anxious",
            Personality::Athletic => "Athletic",
            Personality::Sensitive => "Sensitive",
            Personality::Independent => "Independent",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Personality::Lazy => "😴",
            Personality::PickyEater => "🤢",
            Personality::Messy => "💩",
            Personality::Anxious => "😰",
            Personality::Athletic => "🏃",
            Personality::Sensitive => "🤧",
            Personality::Independent => "😼",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Personality::Lazy => "Energy drains 50% faster",
            Personality::PickyEater => "Rejects basic food",
            Personality::Messy => "Poops 50% more",
            Personality::Anxious => "Happiness drops 30% faster",
            Personality::Athletic => "Needs more playtime",
            Personality::Sensitive => "Gets sick easier",
            Personality::Independent => "Doesn't call for help",
        }
    }

    /// Personalities that earn the evolution score bonus when well cared for
    pub fn has_evolution_affinity(&self) -> bool {
        matches!(
            self,
            Personality::Athletic | Personality::Sensitive | Personality::Independent
        )
    }
}

/// Time-boxed emergency requiring a specific player response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriticalEvent {
    Choking,
    Escaped,
    Nightmare,
    Tantrum,
    Fever,
}

impl CriticalEvent {
    pub const ALL: [CriticalEvent; 5] = [
        CriticalEvent::Choking,
        CriticalEvent::Escaped,
        CriticalEvent::Nightmare,
        CriticalEvent::Tantrum,
        CriticalEvent::Fever,
    ];

    /// Minutes before the event auto-fails with the ignored penalty
    pub fn timeout_minutes(&self) -> f32 {
        match self {
            CriticalEvent::Escaped => 10.0,
            _ => 2.0,
        }
    }

    /// Tap count that resolves the event, for tap-driven events only
    pub fn taps_required(&self) -> Option<u32> {
        match self {
            CriticalEvent::Choking => Some(15),
            CriticalEvent::Escaped => Some(20),
            _ => None,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            CriticalEvent::Choking => "🚨",
            CriticalEvent::Escaped => "🏃",
            CriticalEvent::Nightmare => "😱",
            CriticalEvent::Tantrum => "😤",
            CriticalEvent::Fever => "🤒",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CriticalEvent::Choking => "CHOKING!",
            CriticalEvent::Escaped => "ESCAPED!",
            CriticalEvent::Nightmare => "NIGHTMARE!",
            CriticalEvent::Tantrum => "TANTRUM!",
            CriticalEvent::Fever => "FEVER!",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            CriticalEvent::Choking => "Tap rapidly to save!",
            CriticalEvent::Escaped => "Tap to search! Find within 10 min!",
            CriticalEvent::Nightmare => "Comfort immediately!",
            CriticalEvent::Tantrum => "Calm down or happiness crashes!",
            CriticalEvent::Fever => "Medicine + ice pack needed NOW!",
        }
    }
}

/// Teen-stage disobedience resolved via a disciplinary choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Misbehavior {
    RefusesEat,
    ThrowsToys,
    RunsAround,
    WontSleep,
}

impl Misbehavior {
    pub const ALL: [Misbehavior; 4] = [
        Misbehavior::RefusesEat,
        Misbehavior::ThrowsToys,
        Misbehavior::RunsAround,
        Misbehavior::WontSleep,
    ];

    /// The response that earns the bond reward
    pub fn correct_response(&self) -> DisciplineResponse {
        match self {
            Misbehavior::RefusesEat | Misbehavior::ThrowsToys => DisciplineResponse::Scold,
            Misbehavior::RunsAround | Misbehavior::WontSleep => DisciplineResponse::Praise,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Misbehavior::RefusesEat => "🚫🍔",
            Misbehavior::ThrowsToys => "🧸💥",
            Misbehavior::RunsAround => "🏃💨",
            Misbehavior::WontSleep => "😤💤",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Misbehavior::RefusesEat => "Refuses to eat!",
            Misbehavior::ThrowsToys => "Throwing toys everywhere!",
            Misbehavior::RunsAround => "Won't stay still for cleaning!",
            Misbehavior::WontSleep => "Won't go to sleep!",
        }
    }
}

/// Player response to an active misbehavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisciplineResponse {
    Scold,
    Praise,
    Ignore,
}

/// Cosmetic evolution classification, recomputed on every read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvolutionTier {
    Base,
    Good,
    Great,
    Ultimate,
}

impl EvolutionTier {
    pub fn label(&self) -> &'static str {
        match self {
            EvolutionTier::Base => "Base",
            EvolutionTier::Good => "Evolved",
            EvolutionTier::Great => "Rare",
            EvolutionTier::Ultimate => "Legendary",
        }
    }
}

/// Human-readable age string: "37m", "5h 12m", "3d 4h"
pub fn format_age(age_minutes: f32) -> String {
    let hours = age_minutes / 60.0;
    if hours < 1.0 {
        format!("{}m", age_minutes.floor() as u32)
    } else if hours < 24.0 {
        format!(
            "{}h {}m",
            hours.floor() as u32,
            (age_minutes % 60.0).floor() as u32
        )
    } else {
        let days = (hours / 24.0).floor() as u32;
        let rem_hours = (hours % 24.0).floor() as u32;
        format!("{}d {}h", days, rem_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_thresholds() {
        assert_eq!(LifeStage::for_age(0.0), LifeStage::Egg);
        assert_eq!(LifeStage::for_age(9.9), LifeStage::Egg);
        assert_eq!(LifeStage::for_age(10.0), LifeStage::Baby);
        assert_eq!(LifeStage::for_age(23.0 * 60.0), LifeStage::Baby);
        assert_eq!(LifeStage::for_age(24.0 * 60.0), LifeStage::Child);
        assert_eq!(LifeStage::for_age(100.0 * 60.0), LifeStage::Teen);
        assert_eq!(LifeStage::for_age(200.0 * 60.0), LifeStage::Adult);
        assert_eq!(LifeStage::for_age(480.0 * 60.0), LifeStage::Senior);
    }

    #[test]
    fn test_weather_weights_sum_to_100() {
        let total: u32 = Weather::ALL.iter().map(|w| w.spawn_weight()).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_event_timeouts_and_taps() {
        assert_eq!(CriticalEvent::Escaped.timeout_minutes(), 10.0);
        assert_eq!(CriticalEvent::Choking.timeout_minutes(), 2.0);
        assert_eq!(CriticalEvent::Choking.taps_required(), Some(15));
        assert_eq!(CriticalEvent::Escaped.taps_required(), Some(20));
        assert_eq!(CriticalEvent::Fever.taps_required(), None);
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(37.0), "37m");
        assert_eq!(format_age(5.0 * 60.0 + 12.0), "5h 12m");
        assert_eq!(format_age(3.0 * 24.0 * 60.0 + 4.0 * 60.0), "3d 4h");
    }

    #[test]
    fn test_serde_wire_names() {
        let json = serde_json::to_string(&Personality::PickyEater).unwrap();
        assert_eq!(json, "\"picky_eater\"");
        let back: Personality = serde_json::from_str("\"picky_eater\"").unwrap();
        assert_eq!(back, Personality::PickyEater);
    }
}
