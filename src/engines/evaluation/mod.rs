pub mod metric;

pub use metric::AffinityMetric;
