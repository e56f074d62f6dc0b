pub mod azure;
pub mod models;

pub use azure::AzureVisionProvider;
