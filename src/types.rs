use serde::{Deserialize, Serialize};
use std::fmt;

/// Which alphabet antibodies are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BioSequenceType {
    #[default]
    Dna,
    Rna,
    Protein,
}

impl BioSequenceType {
    /// Parse a type name. Unknown names fall back to DNA.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "DNA" => BioSequenceType::Dna,
            "RNA" => BioSequenceType::Rna,
            "PROTEIN" => BioSequenceType::Protein,
            other => {
                log::warn!("Unknown bio-sequence type {:?}, using DNA", other);
                BioSequenceType::Dna
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BioSequenceType::Dna => "DNA",
            BioSequenceType::Rna => "RNA",
            BioSequenceType::Protein => "PROTEIN",
        }
    }
}

impl From<String> for BioSequenceType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<BioSequenceType> for String {
    fn from(kind: BioSequenceType) -> Self {
        kind.name().to_string()
    }
}

impl fmt::Display for BioSequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How Replacement decides which antibodies are the worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementOrder {
    /// Lowest raw affinity values are replaced. Only meaningful when higher is better.
    #[default]
    AscendingAffinity,
    /// The tail of the metric's best-first ordering is replaced.
    MetricWorst,
}

/// A candidate pattern scored against the antigen space.
///
/// `length` is the non-gap symbol count taken when the antibody was created.
/// Hypermutation overwrites symbols without refreshing it, and every rate
/// computation reads this stored value. Use [`Antibody::viable_length`] for
/// the current count.
#[derive(Debug, Clone, PartialEq)]
pub struct Antibody {
    sequence: Vec<u8>,
    length: usize,
    affinity: f64,
}

impl Antibody {
    pub fn new(sequence: Vec<u8>, gaps: &[u8]) -> Self {
        let length = count_viable(&sequence, gaps);
        Self {
            sequence,
            length,
            affinity: 0.0,
        }
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn sequence_mut(&mut self) -> &mut [u8] {
        &mut self.sequence
    }

    /// Length at creation
    pub fn length(&self) -> usize {
        self.length
    }

    /// Non-gap symbol count of the sequence as it is now
    pub fn viable_length(&self, gaps: &[u8]) -> usize {
        count_viable(&self.sequence, gaps)
    }

    pub fn affinity(&self) -> f64 {
        self.affinity
    }

    pub fn set_affinity(&mut self, affinity: f64) {
        self.affinity = affinity;
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn to_sequence_string(&self) -> String {
        String::from_utf8_lossy(&self.sequence).into_owned()
    }
}

fn count_viable(sequence: &[u8], gaps: &[u8]) -> usize {
    sequence.iter().filter(|s| !gaps.contains(s)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_excludes_gaps() {
        let antibody = Antibody::new(b"AC-GT-".to_vec(), b"-");
        assert_eq!(antibody.length(), 4);
        assert_eq!(antibody.affinity(), 0.0);
    }

    #[test]
    fn test_length_is_not_refreshed_after_edit() {
        let mut antibody = Antibody::new(b"ACGT".to_vec(), b"-");
        antibody.sequence_mut()[0] = b'-';

        assert_eq!(antibody.length(), 4);
        assert_eq!(antibody.viable_length(b"-"), 3);
    }

    #[test]
    fn test_clone_owns_its_sequence() {
        let source = Antibody::new(b"AAAA".to_vec(), b"-");
        let mut copy = source.clone();
        copy.sequence_mut()[1] = b'T';

        assert_eq!(source.sequence(), b"AAAA");
        assert_eq!(copy.sequence(), b"ATAA");
    }

    #[test]
    fn test_bio_sequence_type_fallback() {
        assert_eq!(BioSequenceType::from_name("rna"), BioSequenceType::Rna);
        assert_eq!(BioSequenceType::from_name(" Protein "), BioSequenceType::Protein);
        assert_eq!(BioSequenceType::from_name("xna"), BioSequenceType::Dna);
    }

    #[test]
    fn test_bio_sequence_type_serde() {
        let kind: BioSequenceType = serde_json::from_str("\"PROTEIN\"").unwrap();
        assert_eq!(kind, BioSequenceType::Protein);

        let unknown: BioSequenceType = serde_json::from_str("\"plasmid\"").unwrap();
        assert_eq!(unknown, BioSequenceType::Dna);

        assert_eq!(serde_json::to_string(&BioSequenceType::Rna).unwrap(), "\"RNA\"");
    }
}
