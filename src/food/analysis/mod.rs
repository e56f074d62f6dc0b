pub mod aggregator;
pub mod extractor;
pub mod identifier;
pub mod nutrition;

pub use aggregator::aggregate_nutrition;
pub use extractor::extract_nutrition;
pub use identifier::{identify_items, IdentifiedItem};
pub use nutrition::{analyze_image, AnalysisOutcome};
