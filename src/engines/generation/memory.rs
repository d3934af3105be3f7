use crate::engines::evaluation::AffinityMetric;
use crate::types::Antibody;

/// Bounded set of the best antibodies seen during a run.
///
/// Each candidate replaces the first cell (in cell order) that it beats, or is
/// discarded. This is first-fit, so the replaced cell is not necessarily the
/// worst one.
///
/// Without an explicit capacity, the first non-empty insertion is copied in
/// whole and its size becomes the capacity, so memory never grows afterwards.
/// An explicit capacity lets candidates fill free cells before replacement
/// starts.
#[derive(Debug, Clone, Default)]
pub struct MemoryCells {
    cells: Vec<Antibody>,
    capacity: Option<usize>,
}

impl MemoryCells {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            cells: Vec::new(),
            capacity,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(Some(capacity))
    }

    /// Insert candidates, returning how many were stored
    pub fn insert<M: AffinityMetric>(&mut self, candidates: Vec<Antibody>, metric: &M) -> usize {
        if candidates.is_empty() {
            return 0;
        }

        let capacity = match self.capacity {
            Some(capacity) => capacity,
            None => {
                let stored = candidates.len();
                self.capacity = Some(stored);
                self.cells = candidates;
                log::debug!("Memory initialised with {} cells", stored);
                return stored;
            }
        };
        let mut stored = 0;

        for candidate in candidates {
            if self.cells.len() < capacity {
                self.cells.push(candidate);
                stored += 1;
                continue;
            }

            if let Some(cell) = self
                .cells
                .iter_mut()
                .find(|cell| metric.is_better_affinity(candidate.affinity(), cell.affinity()))
            {
                *cell = candidate;
                stored += 1;
            }
        }

        log::debug!("Memory stored {} candidates, {} cells", stored, self.cells.len());
        stored
    }

    pub fn cells(&self) -> &[Antibody] {
        &self.cells
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Best affinity currently held, as judged by the metric
    pub fn best_affinity<M: AffinityMetric>(&self, metric: &M) -> Option<f64> {
        metric
            .order(&self.cells)
            .first()
            .map(|&i| self.cells[i].affinity())
    }

    /// Sequences of the non-empty cells, in cell order
    pub fn export(&self) -> Vec<String> {
        self.cells
            .iter()
            .filter(|cell| !cell.is_empty())
            .map(Antibody::to_sequence_string)
            .collect()
    }
}
