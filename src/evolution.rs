//! Evolution calculator
//!
//! A pure function of species, stage, bond, average care stats and
//! personality. Purely cosmetic: nothing in the simulation reads the tier
//! back, and it is never persisted, only recomputed on every read.

use crate::core::types::{EvolutionTier, LifeStage, Personality, Species};

/// Display data for one evolution form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvolutionInfo {
    pub tier: EvolutionTier,
    pub name: &'static str,
    pub emoji: &'static str,
    pub aura: &'static str,
    pub requirement: &'static str,
}

/// Score bonus for well-kept pets whose personality rewards dedication
const PERSONALITY_BONUS: f32 = 10.0;

/// Minimum average stats for the personality bonus to apply
const BONUS_STAT_FLOOR: f32 = 60.0;

/// Compute the current evolution form.
///
/// Eggs and babies always show the species base form. Otherwise the score is
/// `bond + avg_stats * 0.5 + personality_bonus`, cut at >= 120 ultimate,
/// >= 70 great, >= 35 good.
pub fn evaluate(
    species: Species,
    stage: LifeStage,
    bond: f32,
    avg_stats: f32,
    personality: Personality,
) -> EvolutionInfo {
    let table = species_table(species);
    if stage == LifeStage::Egg || stage == LifeStage::Baby {
        return table[0];
    }

    let personality_bonus = if personality.has_evolution_affinity() && avg_stats > BONUS_STAT_FLOOR
    {
        PERSONALITY_BONUS
    } else {
        0.0
    };
    let score = bond + avg_stats * 0.5 + personality_bonus;

    if score >= 120.0 {
        table[3]
    } else if score >= 70.0 {
        table[2]
    } else if score >= 35.0 {
        table[1]
    } else {
        table[0]
    }
}

/// Fixed base/good/great/ultimate forms per species
fn species_table(species: Species) -> [EvolutionInfo; 4] {
    use EvolutionTier::{Base, Good, Great, Ultimate};
    match species {
        Species::Meowchi => [
            EvolutionInfo { tier: Base, name: "Meowchi", emoji: "🐱", aura: "", requirement: "Starting form" },
            EvolutionInfo { tier: Good, name: "Whiskerion", emoji: "😺", aura: "✨", requirement: "Bond 20+ & decent care" },
            EvolutionInfo { tier: Great, name: "Felionix", emoji: "🦁", aura: "🔥", requirement: "Bond 50+ & great care" },
            EvolutionInfo { tier: Ultimate, name: "Celesticat", emoji: "🐈‍⬛", aura: "👑", requirement: "Bond 80+ & perfect care" },
        ],
        Species::Puppup => [
            EvolutionInfo { tier: Base, name: "Puppup", emoji: "🐶", aura: "", requirement: "Starting form" },
            EvolutionInfo { tier: Good, name: "Barknight", emoji: "🐕", aura: "✨", requirement: "Bond 20+ & decent care" },
            EvolutionInfo { tier: Great, name: "Howlstorm", emoji: "🐺", aura: "⚡", requirement: "Bond 50+ & great care" },
            EvolutionInfo { tier: Ultimate, name: "Aureowolf", emoji: "🦊", aura: "👑", requirement: "Bond 80+ & perfect care" },
        ],
        Species::Drakeling => [
            EvolutionInfo { tier: Base, name: "Drakeling", emoji: "🐉", aura: "", requirement: "Starting form" },
            EvolutionInfo { tier: Good, name: "Wyvernscale", emoji: "🐲", aura: "✨", requirement: "Bond 20+ & decent care" },
            EvolutionInfo { tier: Great, name: "Infernax", emoji: "🔥", aura: "💎", requirement: "Bond 50+ & great care" },
            EvolutionInfo { tier: Ultimate, name: "Celestidrake", emoji: "🌟", aura: "👑", requirement: "Bond 80+ & perfect care" },
        ],
    }
}
