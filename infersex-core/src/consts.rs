pub const AUTOSOME_REGION: &str = "chr19";
pub const X_REGION: &str = "chrX";
pub const Y_REGION: &str = "chrY";

pub const DEFAULT_SAMTOOLS: &str = "samtools";

/// Statistic scanned for in the `SN` section of a `samtools stats` report.
pub const READS_MAPPED_AND_PAIRED: &str = "reads mapped and paired";
pub const STATS_MARKER: &str = "SN";

pub const MIN_X_AUTOSOME_RATIO: f64 = 0.5;
pub const MAX_Y_AUTOSOME_RATIO: f64 = 0.01;
pub const MAX_Y_X_RATIO: f64 = 0.01;

pub const BAM_EXTENSION: &str = ".bam";
pub const SUMMARY_SUFFIX: &str = "_summary.tsv";
pub const MERGED_SUMMARY_FILE: &str = "sampleSummary.txt";

pub const SUMMARY_HEADER: [&str; 8] = [
    "sample",
    "chr19",
    "chrX",
    "chrY",
    "X/19",
    "Y/19",
    "Y/X",
    "sex_prediction",
];
