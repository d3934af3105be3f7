use super::traits::ConfigSection;
use crate::error::ClonalgError;
use crate::types::ReplacementOrder;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClonalgConfig {
    /// The loop runs `maximum_iterations - 1` generations
    pub maximum_iterations: usize,
    /// Fraction of the initial population selected each generation
    pub percent_high_affinity: f64,
    /// Fraction of the initial population replaced each generation
    pub percent_low_affinity: f64,
    /// Memory size; defaults to the number of high-affinity antibodies
    pub memory_capacity: Option<usize>,
    pub replacement_order: ReplacementOrder,
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
    /// Suffix of `memoryCells<suffix>.json`; antibody size when unset or zero
    pub output_index: Option<usize>,
}

impl Default for ClonalgConfig {
    fn default() -> Self {
        Self {
            maximum_iterations: 100,
            percent_high_affinity: 0.2,
            percent_low_affinity: 0.1,
            memory_capacity: None,
            replacement_order: ReplacementOrder::AscendingAffinity,
            seed: None,
            output_dir: PathBuf::from("."),
            output_index: None,
        }
    }
}

impl ConfigSection for ClonalgConfig {
    fn section_name() -> &'static str {
        "clonalg"
    }

    fn validate(&self) -> Result<(), ClonalgError> {
        if !(0.0..=1.0).contains(&self.percent_high_affinity) {
            return Err(Self::invalid("percent_high_affinity must be between 0 and 1"));
        }
        if !(0.0..=1.0).contains(&self.percent_low_affinity) {
            return Err(Self::invalid("percent_low_affinity must be between 0 and 1"));
        }
        if self.memory_capacity == Some(0) {
            return Err(Self::invalid("memory_capacity must be positive when set"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_bounds() {
        let config = ClonalgConfig {
            percent_high_affinity: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ClonalgConfig {
            percent_low_affinity: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_memory_capacity_rejected() {
        let config = ClonalgConfig {
            memory_capacity: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
