use clap::{Arg, Command};

pub const MERGE_CMD: &str = "merge";

pub fn create_merge_cli() -> Command {
    Command::new(MERGE_CMD)
        .author("infersex")
        .about("Merge every *_summary.tsv under a directory into sampleSummary.txt.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("out_dir")
                .long("out_dir")
                .value_name("OUT_DIR")
                .required(true)
                .help("Directory holding the per-sample summaries"),
        )
}
