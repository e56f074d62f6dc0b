pub mod daily_log;
pub mod database;
pub mod record;

pub use daily_log::{record_intake, GoalSource, IntakeError, IntakeOutcome};
pub use database::Database;
pub use database::DatabaseError;
pub use record::{DailyGoals, NutritionRecord};
