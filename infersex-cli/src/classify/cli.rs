use clap::{Arg, Command, arg, value_parser};

pub const CLASSIFY_CMD: &str = "classify";

pub fn create_classify_cli() -> Command {
    Command::new(CLASSIFY_CMD)
        .author("infersex")
        .about("Classify a sample from already known chr19, chrX and chrY read counts.")
        .arg_required_else_help(true)
        .arg(Arg::new("chr19").required(true).value_parser(value_parser!(u64)))
        .arg(Arg::new("chrX").required(true).value_parser(value_parser!(u64)))
        .arg(Arg::new("chrY").required(true).value_parser(value_parser!(u64)))
        .arg(
            arg!(-s --sample <sample> "Sample name printed in the row")
                .required(false),
        )
        .arg(
            arg!(-c --config <config> "TOML file with classification thresholds")
                .required(false),
        )
}
