mod classify;
mod common;
mod infer;
mod merge;

use anyhow::Result;
use clap::Command;
use env_logger::Env;
use log::error;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "infersex";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Infer genetic sex from BAM files by comparing read-mapping density on chr19, chrX and chrY.")
        .subcommand_required(true)
        .subcommand(infer::cli::create_infer_cli())
        .subcommand(merge::cli::create_merge_cli())
        .subcommand(classify::cli::create_classify_cli())
}

///
/// Returns the process exit code: 1 when any sample failed.
///
fn run() -> Result<i32> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // FULL COHORT RUN
        //
        Some((infer::cli::INFER_CMD, matches)) => {
            let report = infer::handlers::run_infer(matches)?;
            return Ok(infer::handlers::exit_code(&report));
        }

        //
        // MERGE ONLY
        //
        Some((merge::cli::MERGE_CMD, matches)) => {
            merge::handlers::run_merge(matches)?;
        }

        //
        // CLASSIFY KNOWN COUNTS
        //
        Some((classify::cli::CLASSIFY_CMD, matches)) => {
            classify::handlers::run_classify(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(0)
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(1);
        }
    }
}
