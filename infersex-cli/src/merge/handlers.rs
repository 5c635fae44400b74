use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use infersex_core::{MergeOutcome, merge_summaries};

pub fn run_merge(matches: &ArgMatches) -> Result<()> {
    let out_dir = matches
        .get_one::<String>("out_dir")
        .expect("An output directory is required.");

    match merge_summaries(Path::new(out_dir))? {
        MergeOutcome::Merged { path, files, .. } => {
            println!("Summaries from {} file(s) merged into {}", files, path.display())
        }
        MergeOutcome::NoSummaries => println!("No summary files found to merge."),
    }

    Ok(())
}
