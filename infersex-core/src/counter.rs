use std::path::Path;

use log::debug;

use crate::collaborators::{RegionSubsetter, StatsCollector};
use crate::consts::READS_MAPPED_AND_PAIRED;
use crate::errors::{InferSexError, PipelineStep, ToolError};

///
/// Counts the reads mapped and paired on one region of one BAM file by
/// subsetting the BAM to the region and collecting statistics on the subset.
///
pub struct RegionReadCounter<S, C> {
    subsetter: S,
    stats: C,
}

impl<S: RegionSubsetter, C: StatsCollector> RegionReadCounter<S, C> {
    pub fn new(subsetter: S, stats: C) -> Self {
        RegionReadCounter { subsetter, stats }
    }

    ///
    /// Count reads mapped and paired on `region`.
    ///
    /// The region subset is written to a temporary file inside `work_dir`
    /// which is removed when this returns, on success or failure. A missing
    /// statistic counts as 0.
    ///
    /// # Arguments
    /// - sample: sample name, used to identify failures
    /// - bam: path to the (indexed) alignment file
    /// - region: chromosome name, e.g. `chr19`
    /// - work_dir: scratch directory for the subset file
    ///
    pub fn count(
        &self,
        sample: &str,
        bam: &Path,
        region: &str,
        work_dir: &Path,
    ) -> Result<u64, InferSexError> {
        let failure = |step: PipelineStep, source: ToolError| InferSexError::CollaboratorFailure {
            sample: sample.to_string(),
            region: region.to_string(),
            step,
            source,
        };

        let scratch = |source: std::io::Error| InferSexError::ScratchFile {
            sample: sample.to_string(),
            region: region.to_string(),
            source,
        };

        let subset = tempfile::Builder::new()
            .prefix(&format!("{}_bam_subset", region))
            .suffix(".bam")
            .tempfile_in(work_dir)
            .map_err(scratch)?;

        self.subsetter
            .subset_by_region(bam, region, subset.path())
            .map_err(|e| failure(PipelineStep::Subset, e))?;

        let stats = self
            .stats
            .stats_for(subset.path())
            .map_err(|e| failure(PipelineStep::Stats, e))?;

        let count = match stats.get(READS_MAPPED_AND_PAIRED) {
            Some(value) => value.parse::<u64>().map_err(|_| {
                failure(
                    PipelineStep::Stats,
                    ToolError::UnreadableOutput(format!(
                        "`{}` is not a read count: {:?}",
                        READS_MAPPED_AND_PAIRED, value
                    )),
                )
            })?,
            None => {
                debug!(
                    "No `{}` statistic for {} on {}, counting 0",
                    READS_MAPPED_AND_PAIRED, sample, region
                );
                0
            }
        };

        subset.close().map_err(scratch)?;

        Ok(count)
    }
}
