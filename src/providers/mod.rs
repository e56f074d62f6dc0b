pub mod azure;
pub mod traits;
pub mod utils;

pub use traits::{ImageDescriber, TextRecognizer, VisionError};
