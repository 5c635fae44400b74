use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use walkdir::WalkDir;

use crate::collaborators::{RegionSubsetter, SamtoolsStats, SamtoolsSubsetter, StatsCollector};
use crate::config::{InferSexConfig, RegionNames, Thresholds};
use crate::consts::{MERGED_SUMMARY_FILE, SUMMARY_SUFFIX};
use crate::counter::RegionReadCounter;
use crate::errors::InferSexError;
use crate::models::{RegionCounts, Sample, SummaryRow};
use crate::utils::{get_dynamic_reader, read_bam_list};

#[derive(Debug)]
pub enum SampleOutcome {
    Succeeded(SummaryRow),
    Failed {
        sample: String,
        bam: PathBuf,
        error: InferSexError,
    },
}

#[derive(Debug, PartialEq)]
pub enum MergeOutcome {
    Merged { path: PathBuf, files: usize, rows: usize },
    NoSummaries,
}

#[derive(Debug)]
pub struct CohortReport {
    pub outcomes: Vec<SampleOutcome>,
    pub merge: MergeOutcome,
}

impl CohortReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, SampleOutcome::Succeeded(_)))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn rows(&self) -> impl Iterator<Item = &SummaryRow> {
        self.outcomes.iter().filter_map(|o| match o {
            SampleOutcome::Succeeded(row) => Some(row),
            SampleOutcome::Failed { .. } => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &InferSexError)> {
        self.outcomes.iter().filter_map(|o| match o {
            SampleOutcome::Failed { sample, error, .. } => Some((sample.as_str(), error)),
            SampleOutcome::Succeeded(_) => None,
        })
    }
}

///
/// Runs the per-sample count-and-classify pipeline over a list of BAM files
/// and merges the per-sample summaries into one cohort table.
///
pub struct CohortAggregator<S, C> {
    counter: RegionReadCounter<S, C>,
    regions: RegionNames,
    thresholds: Thresholds,
    show_progress: bool,
}

impl CohortAggregator<SamtoolsSubsetter, SamtoolsStats> {
    pub fn from_config(config: &InferSexConfig) -> Self {
        let counter = RegionReadCounter::new(
            SamtoolsSubsetter::new(&config.samtools),
            SamtoolsStats::new(&config.samtools),
        );
        CohortAggregator::new(counter, config.regions.clone(), config.thresholds)
    }
}

impl<S: RegionSubsetter, C: StatsCollector> CohortAggregator<S, C> {
    pub fn new(
        counter: RegionReadCounter<S, C>,
        regions: RegionNames,
        thresholds: Thresholds,
    ) -> Self {
        CohortAggregator {
            counter,
            regions,
            thresholds,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    ///
    /// Process every BAM in `bam_list`, then merge the summaries found
    /// under `out_dir`.
    ///
    /// A failing sample is recorded in the report and does not stop the
    /// run. Only list, output directory and merge errors are returned.
    ///
    /// # Arguments
    /// - bam_list: newline-delimited list of BAM paths
    /// - out_dir: destination directory
    ///
    pub fn run(&self, bam_list: &Path, out_dir: &Path) -> Result<CohortReport> {
        let bams = read_bam_list(bam_list)?;
        info!("Found {} BAM file(s) in {:?}", bams.len(), bam_list);

        fs::create_dir_all(out_dir).with_context(|| {
            format!(
                "There was an error creating the output directory: {:?}",
                out_dir
            )
        })?;

        let pb = if self.show_progress {
            ProgressBar::new(bams.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} samples ({eta}) {msg}",
                )?
                .progress_chars("##-"),
        );

        let mut seen: HashSet<String> = HashSet::new();
        let mut outcomes = Vec::with_capacity(bams.len());

        for bam in bams {
            let sample = Sample::from_bam(&bam);
            pb.set_message(sample.name.clone());

            if !seen.insert(sample.name.clone()) {
                warn!(
                    "Sample name {} appears more than once; {:?} overwrites the earlier summary",
                    sample.name, sample.bam
                );
            }

            let outcome = match self.process_sample(&sample, out_dir) {
                Ok(row) => {
                    info!("{}: {}", sample.name, row.label);
                    SampleOutcome::Succeeded(row)
                }
                Err(e) => {
                    error!("Sample {} failed: {}", sample, e);
                    SampleOutcome::Failed {
                        sample: sample.name,
                        bam: sample.bam,
                        error: e,
                    }
                }
            };
            outcomes.push(outcome);

            pb.inc(1);
        }

        pb.finish_and_clear();
        info!("all samples processed, waiting merge.");

        let merge = merge_summaries(out_dir)?;

        Ok(CohortReport { outcomes, merge })
    }

    ///
    /// Count, classify and write `<out_dir>/<sample>/<sample>_summary.tsv`.
    ///
    pub fn process_sample(
        &self,
        sample: &Sample,
        out_dir: &Path,
    ) -> Result<SummaryRow, InferSexError> {
        if sample.name.is_empty() {
            return Err(InferSexError::EmptySampleName(sample.bam.clone()));
        }

        let sample_dir = sample.dir(out_dir);
        fs::create_dir_all(&sample_dir)?;

        // drop any summary from an earlier run
        let summary_path = sample.summary_path(out_dir);
        match fs::remove_file(&summary_path) {
            Ok(()) => debug!("Removed previous summary {:?}", summary_path),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let [autosome, x, y] = self.regions.ordered();
        let counts = RegionCounts {
            autosome: self.counter.count(&sample.name, &sample.bam, autosome, &sample_dir)?,
            x: self.counter.count(&sample.name, &sample.bam, x, &sample_dir)?,
            y: self.counter.count(&sample.name, &sample.bam, y, &sample_dir)?,
        };

        let (ratios, label) = self.thresholds.classify(&counts);
        let row = SummaryRow {
            sample: sample.name.clone(),
            counts,
            ratios,
            label,
        };

        write_summary(&row, &summary_path)?;

        Ok(row)
    }
}

///
/// Write the header and a single data row.
///
pub fn write_summary(row: &SummaryRow, path: &Path) -> Result<(), InferSexError> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", SummaryRow::header())?;
    writeln!(writer, "{}", row)?;
    writer.flush()?;
    Ok(())
}

///
/// Find every `*_summary.tsv` under `out_dir` and concatenate them into
/// `<out_dir>/sampleSummary.txt`.
///
/// The header comes from the first file found; the first line of every
/// other file is skipped. Directories are walked in file-name order so the
/// merged table is reproducible. Nothing is written when there is nothing
/// to merge.
///
pub fn merge_summaries(out_dir: &Path) -> Result<MergeOutcome> {
    let summary_files: Vec<PathBuf> = WalkDir::new(out_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_string_lossy().ends_with(SUMMARY_SUFFIX))
        .map(|e| e.into_path())
        .collect();

    if summary_files.is_empty() {
        warn!("No summary files found to merge.");
        return Ok(MergeOutcome::NoSummaries);
    }

    let merged_path = out_dir.join(MERGED_SUMMARY_FILE);
    let file = File::create(&merged_path)
        .with_context(|| format!("Couldn't create merged summary: {:?}", merged_path))?;
    let mut writer = BufWriter::new(file);

    let mut header: Option<String> = None;
    let mut rows = 0;

    for summary in summary_files.iter() {
        let reader = get_dynamic_reader(summary)?;

        for (index, line) in reader.lines().enumerate() {
            let line = line
                .with_context(|| format!("Error reading line {} of {:?}", index + 1, summary))?;

            if index == 0 {
                if let Some(first) = &header {
                    if *first != line {
                        warn!("Header of {:?} differs from the first summary file", summary);
                    }
                } else {
                    writeln!(writer, "{}", line)?;
                    header = Some(line);
                }
                continue;
            }

            if line.trim().is_empty() {
                continue;
            }

            writeln!(writer, "{}", line)?;
            rows += 1;
        }
    }

    writer.flush()?;
    info!("Summaries merged into {:?}", merged_path);

    Ok(MergeOutcome::Merged {
        path: merged_path,
        files: summary_files.len(),
        rows,
    })
}
