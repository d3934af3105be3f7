pub mod traits;
pub mod alphabet;
pub mod population;
pub mod clonalg;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use alphabet::AlphabetConfig;
pub use population::PopulationConfig;
pub use clonalg::ClonalgConfig;
pub use traits::ConfigSection;
