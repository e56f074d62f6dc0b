use colored::{ColoredString, Colorize};

use crate::database::daily_log::IntakeOutcome;
use crate::database::record::NutritionRecord;
use crate::food::analysis::{AnalysisOutcome, IdentifiedItem};
use crate::food::nutrition::NutritionInfo;

pub fn print_analysis(outcome: &AnalysisOutcome) {
    match outcome {
        AnalysisOutcome::Label { nutrition, .. } => {
            println!("\n🏷️ Nutrition label found");
            println!("  {}", nutrition.to_string().bright_green());
        }
        AnalysisOutcome::Estimated {
            description,
            items,
            nutrition,
        } => {
            println!("\n🔍 No label found, estimating from image: \"{}\"", description.bright_yellow());
            println!("  Items: {}", format_items(items));
            println!("  {}", nutrition.to_string().bright_green());
        }
        AnalysisOutcome::NothingFound { description } => {
            println!("\n🔍 Image described as: \"{}\"", description.bright_yellow());
            println!("{}", "No recognizable food items found, nothing was logged.".yellow());
        }
    }
}

pub fn print_intake(outcome: &IntakeOutcome) {
    let record = &outcome.record;
    let verb = if outcome.created { "Started" } else { "Updated" };
    println!(
        "\n✅ {} today's log for {} ({})",
        verb,
        record.user_id.bright_cyan(),
        record.date
    );
    println!("  Consumed:  {}", record.consumed);
    println!("  Goals:     {}", format_goals(record));
    println!("  Remaining: {}", format_remaining(&outcome.remaining));
}

pub fn print_history(records: &[NutritionRecord]) {
    if records.is_empty() {
        return;
    }
    println!("\n📅 Recent days:");
    for record in records {
        println!(
            "  {}  {:.0} / {:.0} kcal",
            record.date, record.consumed.calories, record.goals.calories
        );
    }
}

pub fn format_items(items: &[IdentifiedItem]) -> String {
    items
        .iter()
        .map(|i| format!("{} ×{}", i.name, i.count))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_goals(record: &NutritionRecord) -> String {
    NutritionInfo::new(
        record.goals.calories,
        record.goals.fat,
        record.goals.protein,
        record.goals.carbs,
    )
    .to_string()
}

fn format_remaining(remaining: &NutritionInfo) -> String {
    [
        paint(remaining.calories, "kcal"),
        paint(remaining.fat, "g fat"),
        paint(remaining.protein, "g protein"),
        paint(remaining.carbs, "g carbs"),
    ]
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join(", ")
}

// Over-goal amounts in red.
fn paint(value: f64, unit: &str) -> ColoredString {
    let text = format!("{:.1} {}", value, unit);
    if value < 0.0 {
        text.red()
    } else {
        text.green()
    }
}
