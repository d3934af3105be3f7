use super::traits::ConfigSection;
use crate::error::ClonalgError;
use crate::types::BioSequenceType;
use serde::{Deserialize, Serialize};

pub const DNA: &str = "ACGT";
pub const RNA: &str = "ACGU";
pub const AMINO_ACIDS: &str = "ACDEFGHIKLMNPQRSTVWY";
pub const GAPS: &str = "-";

/// Symbol sets for each bio-sequence type, plus the gap symbols
/// excluded from length accounting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphabetConfig {
    pub dna: String,
    pub rna: String,
    pub amino_acids: String,
    pub gaps: String,
}

impl Default for AlphabetConfig {
    fn default() -> Self {
        Self {
            dna: DNA.to_string(),
            rna: RNA.to_string(),
            amino_acids: AMINO_ACIDS.to_string(),
            gaps: GAPS.to_string(),
        }
    }
}

impl AlphabetConfig {
    pub fn symbols(&self, kind: BioSequenceType) -> &[u8] {
        match kind {
            BioSequenceType::Dna => self.dna.as_bytes(),
            BioSequenceType::Rna => self.rna.as_bytes(),
            BioSequenceType::Protein => self.amino_acids.as_bytes(),
        }
    }

    pub fn gap_symbols(&self) -> &[u8] {
        self.gaps.as_bytes()
    }
}

impl ConfigSection for AlphabetConfig {
    fn section_name() -> &'static str {
        "alphabet"
    }

    fn validate(&self) -> Result<(), ClonalgError> {
        for (name, symbols) in [
            ("dna", &self.dna),
            ("rna", &self.rna),
            ("amino_acids", &self.amino_acids),
        ] {
            if symbols.is_empty() {
                return Err(Self::invalid(&format!("{} alphabet must not be empty", name)));
            }
            if !symbols.is_ascii() {
                return Err(Self::invalid(&format!("{} alphabet must be ASCII", name)));
            }
        }
        if !self.gaps.is_ascii() {
            return Err(Self::invalid("gap symbols must be ASCII"));
        }
        Ok(())
    }
}
