use std::fmt::{self, Display};
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

///
/// The collaborator step of the per-region pipeline that failed.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStep {
    Subset,
    Stats,
}

impl Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PipelineStep::Subset => "region subsetting",
            PipelineStep::Stats => "alignment statistics",
        };
        write!(f, "{}", s)
    }
}

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Couldn't launch `{tool}`: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{tool}` exited with {status}: {stderr}")]
    ExitStatus {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Expected output file is missing: {0:?}")]
    MissingOutput(PathBuf),

    #[error("Unreadable tool output: {0}")]
    UnreadableOutput(String),
}

#[derive(Error, Debug)]
pub enum InferSexError {
    #[error("{step} failed for sample {sample} on region {region}: {source}")]
    CollaboratorFailure {
        sample: String,
        region: String,
        step: PipelineStep,
        #[source]
        source: ToolError,
    },

    #[error("Scratch file for sample {sample} on region {region}: {source}")]
    ScratchFile {
        sample: String,
        region: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't derive a sample name from BAM path {0:?}")]
    EmptySampleName(PathBuf),

    #[error("Can't read BAM list: {0}")]
    BamListRead(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
