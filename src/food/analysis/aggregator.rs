use crate::food::nutrition::NutritionInfo;
use crate::food::table::FoodNutritionTable;

use super::identifier::IdentifiedItem;

/// Sums per-unit nutrition × count over the identified items. Items missing
/// from the table contribute nothing.
pub fn aggregate_nutrition(items: &[IdentifiedItem], table: &FoodNutritionTable) -> NutritionInfo {
    items
        .iter()
        .fold(NutritionInfo::default(), |total, item| match table.get(&item.name) {
            Some(per_unit) => total + *per_unit * item.count,
            None => {
                log::debug!("No nutrition facts for '{}', skipping", item.name);
                total
            }
        })
}
