use chrono::NaiveDate;
use std::path::PathBuf;

use crate::database::daily_log::{record_intake, IntakeOutcome};
use crate::database::Database;
use crate::error::AppError;
use crate::food::analysis::{analyze_image, AnalysisOutcome};
use crate::food::config::ReferenceData;
use crate::providers::traits::{ImageDescriber, TextRecognizer};

pub mod prompts;
pub mod report;

use prompts::{collect_entry_request, GoalPrompt, LineReader};

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Recorded {
        analysis: AnalysisOutcome,
        intake: IntakeOutcome,
    },
    /// The image gave nothing to log.
    NothingFound(AnalysisOutcome),
}

/// One user, one image: prompt, analyze, persist, report.
pub struct Session<'a> {
    pub recognizer: &'a dyn TextRecognizer,
    pub describer: &'a dyn ImageDescriber,
    pub reference: &'a ReferenceData,
    pub db: &'a Database,
    pub history_days: u32,
}

impl Session<'_> {
    pub async fn run(
        &self,
        reader: &mut dyn LineReader,
        user_id: Option<String>,
        image_path: Option<PathBuf>,
        today: NaiveDate,
    ) -> Result<SessionOutcome, AppError> {
        let request = collect_entry_request(reader, user_id, image_path)?;

        let analysis = analyze_image(
            &request.image_path,
            self.recognizer,
            self.describer,
            self.reference,
        )
        .await?;
        report::print_analysis(&analysis);

        let Some(nutrition) = analysis.nutrition() else {
            return Ok(SessionOutcome::NothingFound(analysis));
        };

        let mut goals = GoalPrompt::new(reader);
        let intake = record_intake(self.db, &request.user_id, today, nutrition, &mut goals).await?;
        report::print_intake(&intake);

        if self.history_days > 0 {
            let history = self
                .db
                .records_for_user(&request.user_id, self.history_days)
                .await?;
            report::print_history(&history);
        }

        Ok(SessionOutcome::Recorded { analysis, intake })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::nutrition::NutritionInfo;
    use crate::providers::traits::VisionError;
    use async_trait::async_trait;
    use prompts::ScriptedReader;
    use std::path::Path;

    struct FakeVision {
        text: &'static str,
        caption: &'static str,
    }

    #[async_trait]
    impl TextRecognizer for FakeVision {
        async fn recognize_text(&self, _image_path: &Path) -> Result<String, VisionError> {
            Ok(self.text.to_string())
        }
    }

    #[async_trait]
    impl ImageDescriber for FakeVision {
        async fn describe_image(&self, _image_path: &Path) -> Result<String, VisionError> {
            Ok(self.caption.to_string())
        }
    }

    struct Unreachable;

    #[async_trait]
    impl TextRecognizer for Unreachable {
        async fn recognize_text(&self, _image_path: &Path) -> Result<String, VisionError> {
            Err(VisionError::ServiceSubmission("connection refused".to_string()))
        }
    }

    #[async_trait]
    impl ImageDescriber for Unreachable {
        async fn describe_image(&self, _image_path: &Path) -> Result<String, VisionError> {
            Err(VisionError::ServiceSubmission("connection refused".to_string()))
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn test_first_label_of_the_day_asks_for_goals() {
        let db = Database::in_memory().await.unwrap();
        let reference = ReferenceData::builtin();
        let vision = FakeVision {
            text: "Calories 250\nTotal Fat 10g\nProtein 5g\nCarbohydrate 30g",
            caption: "",
        };
        let session = Session {
            recognizer: &vision,
            describer: &vision,
            reference: &reference,
            db: &db,
            history_days: 3,
        };

        let mut reader = ScriptedReader::new(["u1", "label.jpg", "2000", "70", "50", "260"]);
        let outcome = session.run(&mut reader, None, None, today()).await.unwrap();

        match outcome {
            SessionOutcome::Recorded { intake, .. } => {
                assert!(intake.created);
                assert_eq!(intake.remaining, NutritionInfo::new(1750.0, 60.0, 45.0, 230.0));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(reader.prompts.len(), 6);
    }

    #[tokio::test]
    async fn test_later_entry_adds_without_prompting_goals() {
        let db = Database::in_memory().await.unwrap();
        let reference = ReferenceData::builtin();
        let vision = FakeVision {
            text: "Best before 2025",
            caption: "a group of apples on a table",
        };
        let session = Session {
            recognizer: &vision,
            describer: &vision,
            reference: &reference,
            db: &db,
            history_days: 0,
        };

        let mut first = ScriptedReader::new(["2000", "70", "50", "260"]);
        session
            .run(&mut first, Some("u1".to_string()), Some("a.jpg".into()), today())
            .await
            .unwrap();

        let mut second = ScriptedReader::default();
        let outcome = session
            .run(&mut second, Some("u1".to_string()), Some("b.jpg".into()), today())
            .await
            .unwrap();

        match outcome {
            SessionOutcome::Recorded { intake, .. } => {
                assert!(!intake.created);
                // Five apples per image, two images.
                assert_eq!(intake.record.consumed.calories, 950.0);
                assert_eq!(intake.remaining.calories, 1050.0);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(second.prompts.is_empty());
    }

    #[tokio::test]
    async fn test_nothing_found_writes_nothing() {
        let db = Database::in_memory().await.unwrap();
        let reference = ReferenceData::builtin();
        let vision = FakeVision {
            text: "",
            caption: "a street sign",
        };
        let session = Session {
            recognizer: &vision,
            describer: &vision,
            reference: &reference,
            db: &db,
            history_days: 0,
        };

        let mut reader = ScriptedReader::default();
        let outcome = session
            .run(&mut reader, Some("u1".to_string()), Some("sign.jpg".into()), today())
            .await
            .unwrap();

        assert!(matches!(outcome, SessionOutcome::NothingFound(_)));
        assert!(db.find_record("u1", today()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_vision_failure_is_an_error() {
        let db = Database::in_memory().await.unwrap();
        let reference = ReferenceData::builtin();
        let session = Session {
            recognizer: &Unreachable,
            describer: &Unreachable,
            reference: &reference,
            db: &db,
            history_days: 0,
        };

        let mut reader = ScriptedReader::default();
        let err = session
            .run(&mut reader, Some("u1".to_string()), Some("x.jpg".into()), today())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Vision(VisionError::ServiceSubmission(_))
        ));
    }
}
