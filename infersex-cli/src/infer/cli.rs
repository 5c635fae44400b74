use clap::{Arg, Command, arg};

pub const INFER_CMD: &str = "infer";

pub fn create_infer_cli() -> Command {
    Command::new(INFER_CMD)
        .author("infersex")
        .about("Predict the genetic sex of every BAM in a list from chr19/chrX/chrY read counts.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("bam_list")
                .long("bam_list")
                .value_name("BAM_LIST")
                .required(true)
                .help("Text file with one BAM path per line"),
        )
        .arg(
            Arg::new("out_dir")
                .long("out_dir")
                .value_name("OUT_DIR")
                .required(true)
                .help("Directory where all results are stored"),
        )
        .arg(
            arg!(-c --config <config> "TOML file with samtools path, region names and thresholds")
                .required(false),
        )
        .arg(
            arg!(--samtools <samtools> "samtools binary to use (overrides the config file)")
                .required(false),
        )
}
