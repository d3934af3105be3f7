use super::sequence::SequenceGenerator;
use crate::types::Antibody;
use rand::Rng;

/// Builds populations of random antibodies with a fixed sequence length
#[derive(Debug, Clone)]
pub struct PopulationInitializer {
    generator: SequenceGenerator,
    gaps: Vec<u8>,
    antibody_size: usize,
    min_antibodies: usize,
    max_antibodies: usize,
}

impl PopulationInitializer {
    pub fn new(
        generator: SequenceGenerator,
        gaps: Vec<u8>,
        antibody_size: usize,
        min_antibodies: usize,
        max_antibodies: usize,
    ) -> Self {
        Self {
            generator,
            gaps,
            antibody_size,
            min_antibodies,
            max_antibodies,
        }
    }

    pub fn generator(&self) -> &SequenceGenerator {
        &self.generator
    }

    pub fn gaps(&self) -> &[u8] {
        &self.gaps
    }

    pub fn antibody_size(&self) -> usize {
        self.antibody_size
    }

    /// Create `amount` antibodies; zero draws the amount from the
    /// configured `[min, max]` bounds.
    pub fn initialize<R: Rng>(&self, amount: usize, rng: &mut R) -> Vec<Antibody> {
        let amount = if amount == 0 {
            rng.gen_range(self.min_antibodies..=self.max_antibodies)
        } else {
            amount
        };

        (0..amount)
            .map(|_| {
                let sequence = self.generator.generate_sequence(self.antibody_size, rng);
                Antibody::new(sequence, &self.gaps)
            })
            .collect()
    }
}
