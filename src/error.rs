use thiserror::Error;

use crate::commands::prompts::PromptError;
use crate::config::ConfigError;
use crate::database::{DatabaseError, IntakeError};
use crate::food::config::ReferenceDataError;
use crate::providers::traits::VisionError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Reference data error: {0}")]
    ReferenceData(#[from] ReferenceDataError),
    #[error("Vision service error: {0}")]
    Vision(#[from] VisionError),
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
    #[error("Failed to record intake: {0}")]
    Intake(#[from] IntakeError),
    #[error("Input error: {0}")]
    Prompt(#[from] PromptError),
}
