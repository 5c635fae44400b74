pub mod sample;
pub mod summary;

// re-export for cleaner imports
pub use self::sample::Sample;
pub use self::summary::{RatioSet, RegionCounts, SexLabel, SummaryRow};
