pub mod analysis;
pub mod config;
pub mod nutrition;
pub mod rules;
pub mod table;

// Re-export common types
pub use config::{FoodConfig, ReferenceData, ReferenceDataError};
pub use nutrition::NutritionInfo;
pub use rules::{QuantityRule, QuantityRules};
pub use table::FoodNutritionTable;
