use super::{
    alphabet::AlphabetConfig,
    clonalg::ClonalgConfig,
    population::PopulationConfig,
    traits::ConfigSection,
};
use crate::engines::generation::clonalg_engine::EngineConfig;
use crate::error::ClonalgError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `CLONALG__CLONALG__SEED=7`
pub const ENV_PREFIX: &str = "CLONALG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub alphabet: AlphabetConfig,
    pub population: PopulationConfig,
    pub clonalg: ClonalgConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ClonalgError> {
        self.alphabet.validate()?;
        self.population.validate()?;
        self.clonalg.validate()?;
        Ok(())
    }

    /// Flatten the sections into what the engine consumes
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            bio_sequence_type: self.population.bio_sequence_type,
            symbols: self
                .alphabet
                .symbols(self.population.bio_sequence_type)
                .to_vec(),
            gaps: self.alphabet.gap_symbols().to_vec(),
            antibody_size: self.population.antibody_size,
            min_antibodies: self.population.min_antibodies,
            max_antibodies: self.population.max_antibodies,
            maximum_iterations: self.clonalg.maximum_iterations,
            percent_high_affinity: self.clonalg.percent_high_affinity,
            percent_low_affinity: self.clonalg.percent_low_affinity,
            memory_capacity: self.clonalg.memory_capacity,
            replacement_order: self.clonalg.replacement_order,
            seed: self.clonalg.seed,
            output_dir: self.clonalg.output_dir.clone(),
            output_index: self.clonalg.output_index,
        }
    }
}

#[derive(Debug, Default)]
pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ClonalgError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ClonalgError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| ClonalgError::Toml(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        self.config = config;
        Ok(())
    }

    /// Load a file (TOML or JSON by extension), then apply environment overrides
    pub fn load_layered<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ClonalgError> {
        let config: AppConfig = ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        log::debug!("Loaded layered config from {}", path.as_ref().display());

        self.config = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ClonalgError> {
        let toml_str = toml::to_string_pretty(&self.config)
            .map_err(|e| ClonalgError::Toml(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    /// Apply an edit, keeping the previous config if the result is invalid
    pub fn update<F>(&mut self, f: F) -> Result<(), ClonalgError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}
