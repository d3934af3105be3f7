use crate::config::AlphabetConfig;
use crate::error::{ClonalgError, Result};
use crate::types::BioSequenceType;
use rand::Rng;

/// Draws single symbols uniformly from one alphabet
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    kind: BioSequenceType,
    symbols: Vec<u8>,
}

impl SequenceGenerator {
    pub fn new(kind: BioSequenceType, symbols: Vec<u8>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(ClonalgError::Configuration(format!(
                "No symbols configured for {}",
                kind
            )));
        }
        Ok(Self { kind, symbols })
    }

    pub fn from_alphabet(kind: BioSequenceType, alphabet: &AlphabetConfig) -> Result<Self> {
        Self::new(kind, alphabet.symbols(kind).to_vec())
    }

    pub fn kind(&self) -> BioSequenceType {
        self.kind
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> u8 {
        self.symbols[rng.gen_range(0..self.symbols.len())]
    }

    pub fn generate_sequence<R: Rng>(&self, length: usize, rng: &mut R) -> Vec<u8> {
        (0..length).map(|_| self.generate(rng)).collect()
    }
}
