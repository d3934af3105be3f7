pub mod sequence;
pub mod population;
pub mod operators;
pub mod memory;
pub mod clonalg_engine;
pub mod progress;

pub use sequence::SequenceGenerator;
pub use population::PopulationInitializer;
pub use memory::MemoryCells;
pub use clonalg_engine::{ClonalgEngine, EngineConfig, ProgressCallback, RunSummary};
pub use progress::{ChannelProgressCallback, LogProgressCallback, ProgressMessage};
