pub mod catalog;
pub mod handlers;

pub use catalog::{FoodId, FoodQuality, FoodStats, StoreItemId};
pub use handlers::DisciplineOutcome;
