use lazy_static::lazy_static;
use regex::Regex;

use crate::food::nutrition::NutritionInfo;

lazy_static! {
    static ref CALORIES_RE: Regex = Regex::new(r"(?i)\bcalories\s*:?\s*(\d+)").unwrap();
    static ref FAT_RE: Regex = Regex::new(r"(?i)\btotal\s+fat\s*:?\s*(\d+)").unwrap();
    static ref PROTEIN_RE: Regex = Regex::new(r"(?i)\bprotein\s*:?\s*(\d+)").unwrap();
    static ref CARBS_RE: Regex = Regex::new(r"(?i)\bcarbohydrates?\s*:?\s*(\d+)").unwrap();
}

/// Parses label text for the four nutrition fields. Fields that don't appear
/// are zero, so a text with none of them yields [`NutritionInfo::default`].
pub fn extract_nutrition(text: &str) -> NutritionInfo {
    NutritionInfo {
        calories: first_number(&CALORIES_RE, text),
        fat: first_number(&FAT_RE, text),
        protein: first_number(&PROTEIN_RE, text),
        carbs: first_number(&CARBS_RE, text),
    }
}

fn first_number(re: &Regex, text: &str) -> f64 {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}
