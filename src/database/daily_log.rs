use chrono::NaiveDate;
use thiserror::Error;

use super::database::{Database, DatabaseError};
use super::record::{DailyGoals, NutritionRecord};
use crate::commands::prompts::PromptError;
use crate::food::nutrition::NutritionInfo;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error("could not collect daily goals: {0}")]
    Goals(#[from] PromptError),
}

/// Supplies goals for a user's first entry of the day.
pub trait GoalSource {
    fn daily_goals(&mut self) -> Result<DailyGoals, PromptError>;
}

impl GoalSource for DailyGoals {
    fn daily_goals(&mut self) -> Result<DailyGoals, PromptError> {
        Ok(*self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntakeOutcome {
    pub record: NutritionRecord,
    pub remaining: NutritionInfo,
    /// True when this entry started a new day's record.
    pub created: bool,
}

/// Adds `intake` to the user's record for `date`, creating the record with
/// goals from `goals` when this is the first entry that day.
pub async fn record_intake(
    db: &Database,
    user_id: &str,
    date: NaiveDate,
    intake: NutritionInfo,
    goals: &mut dyn GoalSource,
) -> Result<IntakeOutcome, IntakeError> {
    match db.find_record(user_id, date).await? {
        Some(mut record) => {
            record.add(intake);
            db.update_consumed(user_id, date, record.consumed).await?;
            log::info!("Updated {}'s record for {}", user_id, date);

            Ok(IntakeOutcome {
                remaining: record.remaining(),
                record,
                created: false,
            })
        }
        None => {
            let goals = goals.daily_goals()?;
            let record = NutritionRecord::new(user_id, date, intake, goals);
            db.insert_record(&record).await?;
            log::info!("Created {}'s record for {}", user_id, date);

            Ok(IntakeOutcome {
                remaining: record.remaining(),
                record,
                created: true,
            })
        }
    }
}
