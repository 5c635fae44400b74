use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

use crate::consts::SUMMARY_SUFFIX;
use crate::utils::sample_name_from_path;

///
/// One BAM file from the input list and the name it is reported under.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Sample {
    pub name: String,
    pub bam: PathBuf,
}

impl Sample {
    pub fn from_bam(bam: &Path) -> Self {
        Sample {
            name: sample_name_from_path(bam),
            bam: bam.to_path_buf(),
        }
    }

    ///
    /// Per-sample working directory: `<out_dir>/<sample>`
    ///
    pub fn dir(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(&self.name)
    }

    ///
    /// Per-sample summary file: `<out_dir>/<sample>/<sample>_summary.tsv`
    ///
    pub fn summary_path(&self, out_dir: &Path) -> PathBuf {
        self.dir(out_dir)
            .join(format!("{}{}", self.name, SUMMARY_SUFFIX))
    }
}

impl Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.bam.display())
    }
}
