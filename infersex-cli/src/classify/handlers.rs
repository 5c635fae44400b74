use anyhow::Result;
use clap::ArgMatches;

use infersex_core::models::{RegionCounts, SummaryRow};

use crate::common::load_config;

pub fn run_classify(matches: &ArgMatches) -> Result<()> {
    let counts = RegionCounts {
        autosome: *matches.get_one::<u64>("chr19").expect("A chr19 count is required."),
        x: *matches.get_one::<u64>("chrX").expect("A chrX count is required."),
        y: *matches.get_one::<u64>("chrY").expect("A chrY count is required."),
    };

    let default_sample = "-".to_string();
    let sample = matches.get_one::<String>("sample").unwrap_or(&default_sample);

    let config = load_config(matches.get_one::<String>("config"))?;
    let (ratios, label) = config.thresholds.classify(&counts);

    let row = SummaryRow {
        sample: sample.to_string(),
        counts,
        ratios,
        label,
    };

    println!("{}", SummaryRow::header());
    println!("{}", row);

    Ok(())
}
