use std::path::Path;

use super::aggregator::aggregate_nutrition;
use super::extractor::extract_nutrition;
use super::identifier::{identify_items, IdentifiedItem};
use crate::food::config::ReferenceData;
use crate::food::nutrition::NutritionInfo;
use crate::providers::traits::{ImageDescriber, TextRecognizer, VisionError};

/// What the image analysis found.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// Values read directly off a nutrition label.
    Label {
        text: String,
        nutrition: NutritionInfo,
    },
    /// Label had nothing usable; values estimated from the foods in the
    /// image description.
    Estimated {
        description: String,
        items: Vec<IdentifiedItem>,
        nutrition: NutritionInfo,
    },
    /// Neither the label nor the description gave anything to record.
    NothingFound { description: String },
}

impl AnalysisOutcome {
    pub fn nutrition(&self) -> Option<NutritionInfo> {
        match self {
            AnalysisOutcome::Label { nutrition, .. }
            | AnalysisOutcome::Estimated { nutrition, .. } => Some(*nutrition),
            AnalysisOutcome::NothingFound { .. } => None,
        }
    }
}

/// Reads the label first and only asks for a description when the label
/// parse comes back all zero.
pub async fn analyze_image(
    image_path: &Path,
    recognizer: &dyn TextRecognizer,
    describer: &dyn ImageDescriber,
    reference: &ReferenceData,
) -> Result<AnalysisOutcome, VisionError> {
    log::info!("Analyzing image: {}", image_path.display());

    let text = recognizer.recognize_text(image_path).await?;
    let nutrition = extract_nutrition(&text);
    if !nutrition.is_zero() {
        log::info!("Nutrition label found: {}", nutrition);
        return Ok(AnalysisOutcome::Label { text, nutrition });
    }

    log::info!("No nutrition label in recognized text, estimating from image description");
    let description = describer.describe_image(image_path).await?;
    let items = identify_items(&description, &reference.table, &reference.rules);
    if items.is_empty() {
        return Ok(AnalysisOutcome::NothingFound { description });
    }

    let nutrition = aggregate_nutrition(&items, &reference.table);
    Ok(AnalysisOutcome::Estimated {
        description,
        items,
        nutrition,
    })
}
