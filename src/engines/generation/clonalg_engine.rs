use crate::data::MemoryCellStore;
use crate::engines::evaluation::AffinityMetric;
use crate::engines::generation::{
    memory::MemoryCells,
    operators::{clone_population, evaluate_affinity, hypermutate, replace, select},
    population::PopulationInitializer,
    sequence::SequenceGenerator,
};
use crate::error::ClonalgError;
use crate::types::{BioSequenceType, ReplacementOrder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub bio_sequence_type: BioSequenceType,
    pub symbols: Vec<u8>,
    pub gaps: Vec<u8>,
    pub antibody_size: usize,
    pub min_antibodies: usize,
    pub max_antibodies: usize,
    pub maximum_iterations: usize,
    pub percent_high_affinity: f64,
    pub percent_low_affinity: f64,
    pub memory_capacity: Option<usize>,
    pub replacement_order: ReplacementOrder,
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
    pub output_index: Option<usize>,
}

impl EngineConfig {
    fn validate(&self) -> Result<(), ClonalgError> {
        if self.symbols.is_empty() {
            return Err(ClonalgError::Configuration(format!(
                "No symbols configured for {}",
                self.bio_sequence_type
            )));
        }
        if self.antibody_size == 0 {
            return Err(ClonalgError::Configuration("Antibody size must be positive".to_string()));
        }
        if self.min_antibodies == 0 || self.min_antibodies > self.max_antibodies {
            return Err(ClonalgError::Configuration(format!(
                "Invalid population bounds [{}, {}]",
                self.min_antibodies, self.max_antibodies
            )));
        }
        for fraction in [self.percent_high_affinity, self.percent_low_affinity] {
            if !(0.0..=1.0).contains(&fraction) {
                return Err(ClonalgError::Configuration(
                    "Affinity fractions must be between 0 and 1".to_string(),
                ));
            }
        }
        if self.memory_capacity == Some(0) {
            return Err(ClonalgError::Configuration(
                "Memory capacity must be positive when set".to_string(),
            ));
        }
        Ok(())
    }

    /// Suffix for the exported file name
    pub fn output_suffix(&self) -> usize {
        match self.output_index {
            Some(index) if index > 0 => index,
            _ => self.antibody_size,
        }
    }
}

/// Counts fixed at the start of a run, plus its outcome
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub generations: usize,
    pub initial_population: usize,
    pub number_high_affinity: usize,
    pub number_low_affinity: usize,
    pub best_affinity: Option<f64>,
}

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_affinity: Option<f64>, memory_size: usize);
}

/// Clonal selection loop over a pluggable affinity metric.
///
/// Each generation scores the population, clones the best
/// `numberHighAffinity`, hypermutates and rescores the clones, keeps the best
/// of those in memory, and carries them forward with the weakest
/// `numberLowAffinity` swapped for fresh random antibodies. Both counts come
/// from the initial population size and stay fixed for the run.
pub struct ClonalgEngine<M: AffinityMetric> {
    config: EngineConfig,
    metric: M,
    initializer: PopulationInitializer,
    memory: MemoryCells,
    memory_cells: Vec<String>,
    last_run: Option<RunSummary>,
    rng: StdRng,
}

impl<M: AffinityMetric> ClonalgEngine<M> {
    pub fn new(config: EngineConfig, metric: M) -> Result<Self, ClonalgError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let initializer = PopulationInitializer::new(
            SequenceGenerator::new(config.bio_sequence_type, config.symbols.clone())?,
            config.gaps.clone(),
            config.antibody_size,
            config.min_antibodies,
            config.max_antibodies,
        );

        Ok(Self {
            memory: MemoryCells::new(config.memory_capacity),
            config,
            metric,
            initializer,
            memory_cells: Vec::new(),
            last_run: None,
            rng,
        })
    }

    /// Run the generational loop and return the exported memory cells
    pub fn run<C: ProgressCallback>(&mut self, mut callback: C) -> Result<Vec<String>, ClonalgError> {
        let mut antibodies = self.initializer.initialize(0, &mut self.rng);
        let initial_population = antibodies.len();
        let number_high_affinity =
            (self.config.percent_high_affinity * initial_population as f64).round_ties_even() as usize;
        let number_low_affinity =
            (self.config.percent_low_affinity * initial_population as f64).round_ties_even() as usize;

        self.memory = MemoryCells::new(self.config.memory_capacity);

        log::info!(
            "Starting CLONALG-PR: {} antibodies of {} {} symbols, select {}, replace {}",
            initial_population,
            self.config.antibody_size,
            self.config.bio_sequence_type,
            number_high_affinity,
            number_low_affinity
        );

        let mut generations = 0;
        for generation in 1..self.config.maximum_iterations {
            callback.on_generation_start(generation);

            let evaluated = evaluate_affinity(antibodies, &self.metric, &mut self.rng)?;
            let selected = select(&evaluated, number_high_affinity, &self.metric);

            let clones = clone_population(&selected, &self.metric);
            let mutated = hypermutate(clones, &self.metric, self.initializer.generator(), &mut self.rng);
            let mutated = evaluate_affinity(mutated, &self.metric, &mut self.rng)?;
            let reselected = select(&mutated, number_high_affinity, &self.metric);

            // reselected is best-first
            let best_affinity = reselected.first().map(|antibody| antibody.affinity());
            self.memory.insert(reselected.clone(), &self.metric);

            antibodies = replace(
                reselected,
                number_low_affinity,
                self.config.replacement_order,
                &self.metric,
                &self.initializer,
                &mut self.rng,
            );

            generations += 1;
            callback.on_generation_complete(generation, best_affinity, self.memory.len());
        }

        self.memory_cells = self.memory.export();
        self.last_run = Some(RunSummary {
            generations,
            initial_population,
            number_high_affinity,
            number_low_affinity,
            best_affinity: self.memory.best_affinity(&self.metric),
        });

        log::info!(
            "CLONALG-PR finished after {} generations with {} memory cells",
            generations,
            self.memory_cells.len()
        );
        Ok(self.memory_cells.clone())
    }

    /// Run, then persist the memory cells. Nothing is written when memory is
    /// empty, in which case `None` is returned.
    pub fn execute<C: ProgressCallback>(&mut self, callback: C) -> Result<Option<PathBuf>, ClonalgError> {
        self.run(callback)?;

        if self.memory_cells.is_empty() {
            log::warn!("No memory cells to persist");
            return Ok(None);
        }

        let path = MemoryCellStore::save(
            &self.config.output_dir,
            self.config.output_suffix(),
            &self.memory_cells,
        )?;
        Ok(Some(path))
    }

    /// Sequences exported by the last run, in memory-cell order
    pub fn memory_cells(&self) -> &[String] {
        &self.memory_cells
    }

    pub fn memory(&self) -> &MemoryCells {
        &self.memory
    }

    pub fn last_run(&self) -> Option<&RunSummary> {
        self.last_run.as_ref()
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::cell::Cell;

    struct Constant;

    impl AffinityMetric for Constant {
        fn sequence_space_size(&self) -> usize {
            64
        }
        fn score(&self, _sequence: &[u8], _offset: usize, _length: usize) -> f64 {
            1.0
        }
        fn clone_rate(&self, _affinity: f64, _length: usize) -> f64 {
            1.0
        }
        fn mutation_rate(&self, _affinity: f64, _length: usize) -> f64 {
            0.0
        }
        fn is_better_affinity(&self, a: f64, b: f64) -> bool {
            a > b
        }
    }

    fn config() -> EngineConfig {
        let mut app = AppConfig::default();
        app.population.antibody_size = 10;
        app.population.min_antibodies = 5;
        app.population.max_antibodies = 5;
        app.clonalg.maximum_iterations = 2;
        app.clonalg.percent_high_affinity = 0.4;
        app.clonalg.percent_low_affinity = 0.2;
        app.clonalg.seed = Some(42);
        app.engine_config()
    }

    #[test]
    fn test_output_suffix() {
        let mut config = config();
        assert_eq!(config.output_suffix(), 10);

        config.output_index = Some(0);
        assert_eq!(config.output_suffix(), 10);

        config.output_index = Some(3);
        assert_eq!(config.output_suffix(), 3);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut bad = config();
        bad.min_antibodies = 9;
        assert!(ClonalgEngine::new(bad, Constant).is_err());

        let mut bad = config();
        bad.symbols.clear();
        assert!(ClonalgEngine::new(bad, Constant).is_err());
    }

    #[test]
    fn test_single_iteration_runs_no_generations() {
        let mut config = config();
        config.maximum_iterations = 1;

        let mut engine = ClonalgEngine::new(config, Constant).unwrap();
        let cells = engine.run(()).unwrap();

        assert!(cells.is_empty());
        assert_eq!(engine.last_run().unwrap().generations, 0);
    }

    #[test]
    fn test_run_summary_counts() {
        let mut engine = ClonalgEngine::new(config(), Constant).unwrap();
        engine.run(()).unwrap();

        let summary = engine.last_run().unwrap();
        assert_eq!(summary.generations, 1);
        assert_eq!(summary.initial_population, 5);
        assert_eq!(summary.number_high_affinity, 2);
        assert_eq!(summary.number_low_affinity, 1);
        assert_eq!(summary.best_affinity, Some(1.0));
    }

    #[test]
    fn test_selection_counts_round_half_to_even() {
        let mut config = config();
        config.percent_high_affinity = 0.5;
        config.percent_low_affinity = 0.1;

        let mut engine = ClonalgEngine::new(config, Constant).unwrap();
        engine.run(()).unwrap();

        // 2.5 -> 2 and 0.5 -> 0
        let summary = engine.last_run().unwrap();
        assert_eq!(summary.number_high_affinity, 2);
        assert_eq!(summary.number_low_affinity, 0);
    }

    /// One clone in total for the first generation, two per antibody after
    struct GrowingClones {
        clone_calls: Cell<usize>,
    }

    impl AffinityMetric for GrowingClones {
        fn sequence_space_size(&self) -> usize {
            64
        }
        fn score(&self, _sequence: &[u8], _offset: usize, _length: usize) -> f64 {
            1.0
        }
        fn clone_rate(&self, _affinity: f64, _length: usize) -> f64 {
            let call = self.clone_calls.get();
            self.clone_calls.set(call + 1);
            // antibody_size is 10
            match call {
                0 => 0.1,
                1 => 0.0,
                _ => 0.2,
            }
        }
        fn mutation_rate(&self, _affinity: f64, _length: usize) -> f64 {
            0.0
        }
        fn is_better_affinity(&self, a: f64, b: f64) -> bool {
            a > b
        }
    }

    #[derive(Default)]
    struct MemorySizes(Vec<usize>);

    impl ProgressCallback for MemorySizes {
        fn on_generation_start(&mut self, _generation: usize) {}
        fn on_generation_complete(&mut self, _generation: usize, _best: Option<f64>, memory_size: usize) {
            self.0.push(memory_size);
        }
    }

    fn growing_clones() -> GrowingClones {
        GrowingClones {
            clone_calls: Cell::new(0),
        }
    }

    #[test]
    fn test_unset_capacity_fixed_by_first_generation() {
        let mut config = config();
        config.maximum_iterations = 4;

        let mut engine = ClonalgEngine::new(config, growing_clones()).unwrap();
        let mut sizes = MemorySizes::default();
        engine.run(&mut sizes).unwrap();

        assert_eq!(engine.last_run().unwrap().number_high_affinity, 2);
        assert_eq!(sizes.0, vec![1, 1, 1]);
        assert_eq!(engine.memory().capacity(), Some(1));
    }

    #[test]
    fn test_explicit_capacity_fills_over_generations() {
        let mut config = config();
        config.maximum_iterations = 4;
        config.memory_capacity = Some(2);

        let mut engine = ClonalgEngine::new(config, growing_clones()).unwrap();
        let mut sizes = MemorySizes::default();
        engine.run(&mut sizes).unwrap();

        assert_eq!(sizes.0, vec![1, 2, 2]);
    }

    #[test]
    fn test_range_error_aborts_run() {
        struct Tiny;
        impl AffinityMetric for Tiny {
            fn sequence_space_size(&self) -> usize {
                4
            }
            fn score(&self, _s: &[u8], _o: usize, _l: usize) -> f64 {
                0.0
            }
            fn clone_rate(&self, _a: f64, _l: usize) -> f64 {
                0.0
            }
            fn mutation_rate(&self, _a: f64, _l: usize) -> f64 {
                0.0
            }
            fn is_better_affinity(&self, a: f64, b: f64) -> bool {
                a > b
            }
        }

        let mut engine = ClonalgEngine::new(config(), Tiny).unwrap();
        assert!(matches!(engine.run(()), Err(ClonalgError::Range { .. })));
    }
}
