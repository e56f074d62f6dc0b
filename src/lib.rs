pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod food;
pub mod providers;

// Re-export commonly used items
pub use commands::{Session, SessionOutcome};
pub use config::AppConfig;
pub use database::Database;
pub use error::AppError;
pub use food::NutritionInfo;
