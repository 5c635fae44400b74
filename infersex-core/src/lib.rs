//! Genetic sex inference from read-mapping density.
//!
//! For every BAM file in a cohort the reads mapped and paired on chr19
//! (an autosome baseline), chrX and chrY are counted with samtools, turned
//! into X/19, Y/19 and Y/X ratios and labelled `probable_XX` or
//! `probable_XY`:
//!
//! - [`RegionReadCounter`] subsets one BAM to one region and reads the count
//! - [`classify`] computes the ratios and applies the threshold rule
//! - [`CohortAggregator`] drives both over a list of BAMs and merges the
//!   per-sample summaries into `sampleSummary.txt`
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use infersex_core::{CohortAggregator, InferSexConfig};
//!
//! let config = InferSexConfig::default();
//! let report = CohortAggregator::from_config(&config)
//!     .run(Path::new("bams.txt"), Path::new("results"))
//!     .unwrap();
//!
//! println!("{} succeeded, {} failed", report.succeeded(), report.failed());
//! ```

pub mod classify;
pub mod cohort;
pub mod collaborators;
pub mod config;
pub mod consts;
pub mod counter;
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use classify::classify;
pub use cohort::{CohortAggregator, CohortReport, MergeOutcome, SampleOutcome, merge_summaries};
pub use collaborators::{RegionSubsetter, SamtoolsStats, SamtoolsSubsetter, StatsCollector};
pub use config::{InferSexConfig, RegionNames, Thresholds};
pub use counter::RegionReadCounter;
pub use errors::{InferSexError, PipelineStep, ToolError};
