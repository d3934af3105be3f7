use super::traits::ConfigSection;
use crate::error::ClonalgError;
use crate::types::BioSequenceType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub bio_sequence_type: BioSequenceType,
    /// Fixed number of symbols in every antibody
    pub antibody_size: usize,
    /// Inclusive lower bound on a randomly sized population
    pub min_antibodies: usize,
    /// Inclusive upper bound on a randomly sized population
    pub max_antibodies: usize,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            bio_sequence_type: BioSequenceType::Dna,
            antibody_size: 20,
            min_antibodies: 50,
            max_antibodies: 100,
        }
    }
}

impl ConfigSection for PopulationConfig {
    fn section_name() -> &'static str {
        "population"
    }

    fn validate(&self) -> Result<(), ClonalgError> {
        if self.antibody_size == 0 {
            return Err(Self::invalid("Antibody size must be positive"));
        }
        if self.min_antibodies == 0 {
            return Err(Self::invalid("Population needs at least one antibody"));
        }
        if self.min_antibodies > self.max_antibodies {
            return Err(Self::invalid(&format!(
                "min_antibodies ({}) exceeds max_antibodies ({})",
                self.min_antibodies, self.max_antibodies
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PopulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = PopulationConfig {
            min_antibodies: 10,
            max_antibodies: 5,
            ..Default::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[population]"));
    }

    #[test]
    fn test_fixed_bounds_allowed() {
        let config = PopulationConfig {
            min_antibodies: 5,
            max_antibodies: 5,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
