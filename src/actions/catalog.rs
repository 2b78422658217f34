//! Food and store-item catalogs
//!
//! Static data tables expressed as enums with data methods. The UI addresses
//! items by their string ids; `FromStr` covers that boundary.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::PetError;
use crate::engine::state::NeedKind;

/// Food quality band. Picky eaters reject anything basic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodQuality {
    Basic,
    Premium,
}

/// Stat deltas and price of one food item
#[derive(Debug, Clone, Copy)]
pub struct FoodStats {
    pub hunger: f32,
    pub happiness: f32,
    pub health: f32,
    pub cost: u32,
    pub quality: FoodQuality,
}

/// The ten foods on the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodId {
    Bread,
    Milk,
    Apple,
    Burger,
    Pizza,
    Cake,
    Sushi,
    Candy,
    Steak,
    Salad,
}

impl FoodId {
    pub const ALL: [FoodId; 10] = [
        FoodId::Bread,
        FoodId::Milk,
        FoodId::Apple,
        FoodId::Burger,
        FoodId::Pizza,
        FoodId::Cake,
        FoodId::Sushi,
        FoodId::Candy,
        FoodId::Steak,
        FoodId::Salad,
    ];

    pub fn stats(&self) -> FoodStats {
        use FoodQuality::{Basic, Premium};
        match self {
            FoodId::Bread => FoodStats { hunger: 10.0, happiness: 0.0, health: 0.0, cost: 3, quality: Basic },
            FoodId::Milk => FoodStats { hunger: 15.0, happiness: 5.0, health: 0.0, cost: 4, quality: Basic },
            FoodId::Apple => FoodStats { hunger: 20.0, happiness: 0.0, health: 5.0, cost: 5, quality: Basic },
            FoodId::Burger => FoodStats { hunger: 40.0, happiness: 10.0, health: 0.0, cost: 15, quality: Premium },
            FoodId::Pizza => FoodStats { hunger: 50.0, happiness: 15.0, health: 0.0, cost: 25, quality: Premium },
            FoodId::Cake => FoodStats { hunger: 30.0, happiness: 30.0, health: 0.0, cost: 30, quality: Premium },
            FoodId::Sushi => FoodStats { hunger: 60.0, happiness: 20.0, health: 5.0, cost: 50, quality: Premium },
            FoodId::Candy => FoodStats { hunger: 5.0, happiness: 15.0, health: -5.0, cost: 6, quality: Basic },
            FoodId::Steak => FoodStats { hunger: 70.0, happiness: 25.0, health: 10.0, cost: 80, quality: Premium },
            FoodId::Salad => FoodStats { hunger: 25.0, happiness: 5.0, health: 15.0, cost: 10, quality: Premium },
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FoodId::Bread => "Bread",
            FoodId::Milk => "Milk",
            FoodId::Apple => "Apple",
            FoodId::Burger => "Burger",
            FoodId::Pizza => "Pizza",
            FoodId::Cake => "Cake",
            FoodId::Sushi => "Sushi",
            FoodId::Candy => "Candy",
            FoodId::Steak => "Steak",
            FoodId::Salad => "Salad",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            FoodId::Bread => "🍞",
            FoodId::Milk => "🥛",
            FoodId::Apple => "🍎",
            FoodId::Burger => "🍔",
            FoodId::Pizza => "🍕",
            FoodId::Cake => "🍰",
            FoodId::Sushi => "🍣",
            FoodId::Candy => "🍬",
            FoodId::Steak => "🥩",
            FoodId::Salad => "🥗",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            FoodId::Bread => "bread",
            FoodId::Milk => "milk",
            FoodId::Apple => "apple",
            FoodId::Burger => "burger",
            FoodId::Pizza => "pizza",
            FoodId::Cake => "cake",
            FoodId::Sushi => "sushi",
            FoodId::Candy => "candy",
            FoodId::Steak => "steak",
            FoodId::Salad => "salad",
        }
    }
}

impl FromStr for FoodId {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FoodId::ALL
            .iter()
            .copied()
            .find(|f| f.id() == s)
            .ok_or_else(|| PetError::UnknownFood(s.to_string()))
    }
}

/// Store items the external inventory flow can purchase.
///
/// The engine only debits coins and, when an item is later used, applies the
/// declared stat effect; the inventory ledger itself lives with the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreItemId {
    ToyBall,
    PremiumBed,
    Vitamins,
    LuxuryShampoo,
    TreatBag,
    EnergyDrink,
}

impl StoreItemId {
    pub const ALL: [StoreItemId; 6] = [
        StoreItemId::ToyBall,
        StoreItemId::PremiumBed,
        StoreItemId::Vitamins,
        StoreItemId::LuxuryShampoo,
        StoreItemId::TreatBag,
        StoreItemId::EnergyDrink,
    ];

    pub fn cost(&self) -> u32 {
        match self {
            StoreItemId::ToyBall => 30,
            StoreItemId::PremiumBed => 50,
            StoreItemId::Vitamins => 40,
            StoreItemId::LuxuryShampoo => 35,
            StoreItemId::TreatBag => 45,
            StoreItemId::EnergyDrink => 60,
        }
    }

    /// The stat boost granted when the item is used
    pub fn effect(&self) -> (NeedKind, f32) {
        match self {
            StoreItemId::ToyBall => (NeedKind::Happiness, 25.0),
            StoreItemId::PremiumBed => (NeedKind::Energy, 40.0),
            StoreItemId::Vitamins => (NeedKind::Health, 30.0),
            StoreItemId::LuxuryShampoo => (NeedKind::Hygiene, 35.0),
            StoreItemId::TreatBag => (NeedKind::Hunger, 50.0),
            StoreItemId::EnergyDrink => (NeedKind::Energy, 50.0),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StoreItemId::ToyBall => "Toy Ball",
            StoreItemId::PremiumBed => "Premium Bed",
            StoreItemId::Vitamins => "Vitamins",
            StoreItemId::LuxuryShampoo => "Luxury Shampoo",
            StoreItemId::TreatBag => "Treat Bag",
            StoreItemId::EnergyDrink => "Energy Drink",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            StoreItemId::ToyBall => "⚽",
            StoreItemId::PremiumBed => "🛏️",
            StoreItemId::Vitamins => "💊",
            StoreItemId::LuxuryShampoo => "🧴",
            StoreItemId::TreatBag => "🎒",
            StoreItemId::EnergyDrink => "⚡",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            StoreItemId::ToyBall => "toy_ball",
            StoreItemId::PremiumBed => "premium_bed",
            StoreItemId::Vitamins => "vitamins",
            StoreItemId::LuxuryShampoo => "luxury_shampoo",
            StoreItemId::TreatBag => "treat_bag",
            StoreItemId::EnergyDrink => "energy_drink",
        }
    }
}

impl FromStr for StoreItemId {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StoreItemId::ALL
            .iter()
            .copied()
            .find(|i| i.id() == s)
            .ok_or_else(|| PetError::UnknownItem(s.to_string()))
    }
}
