use crate::error::ClonalgError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), ClonalgError>;

    /// Build a configuration error tagged with this section's name
    fn invalid(message: &str) -> ClonalgError {
        ClonalgError::Configuration(format!("[{}] {}", Self::section_name(), message))
    }
}
