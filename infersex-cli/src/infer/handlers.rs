use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use infersex_core::{CohortAggregator, CohortReport, MergeOutcome};

use crate::common::load_config;

pub fn run_infer(matches: &ArgMatches) -> Result<CohortReport> {
    let bam_list = matches
        .get_one::<String>("bam_list")
        .expect("A path to a BAM list is required.");

    let out_dir = matches
        .get_one::<String>("out_dir")
        .expect("An output directory is required.");

    let mut config = load_config(matches.get_one::<String>("config"))?;
    if let Some(samtools) = matches.get_one::<String>("samtools") {
        config.samtools = samtools.to_string();
        config.validate()?;
    }

    let report = CohortAggregator::from_config(&config)
        .with_progress(true)
        .run(Path::new(bam_list), Path::new(out_dir))?;

    println!("all samples processed, waiting merge.");
    match &report.merge {
        MergeOutcome::Merged { path, .. } => println!("Summaries merged into {}", path.display()),
        MergeOutcome::NoSummaries => println!("No summary files found to merge."),
    }

    for (sample, error) in report.failures() {
        eprintln!("FAILED {}: {}", sample, error);
    }
    println!(
        "Done: {} sample(s) succeeded, {} failed.",
        report.succeeded(),
        report.failed()
    );

    Ok(report)
}

///
/// Process exit code for a cohort run: 1 when any sample failed.
///
pub fn exit_code(report: &CohortReport) -> i32 {
    if report.failed() > 0 { 1 } else { 0 }
}
