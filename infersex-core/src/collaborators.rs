//! External alignment tooling.
//!
//! The counting pipeline only talks to the [`RegionSubsetter`] and
//! [`StatsCollector`] traits; the samtools-backed implementations live
//! here as well.

use std::collections::HashMap;
use std::path::Path;
use std::process::{Command, Output};

use log::debug;

use crate::consts::STATS_MARKER;
use crate::errors::ToolError;

///
/// Extracts the reads overlapping a named region into a new alignment file.
///
pub trait RegionSubsetter {
    fn subset_by_region(&self, bam: &Path, region: &str, dest: &Path) -> Result<(), ToolError>;
}

///
/// Produces summary statistics (name -> value) for an alignment file.
///
pub trait StatsCollector {
    fn stats_for(&self, bam: &Path) -> Result<HashMap<String, String>, ToolError>;
}

///
/// `samtools view -b -o <dest> <bam> <region>`
///
/// Region queries need an index (`.bai`/`.csi`) next to the input BAM.
///
#[derive(Debug, Clone)]
pub struct SamtoolsSubsetter {
    pub samtools: String,
}

///
/// `samtools stats <bam>`, parsed from stdout.
///
#[derive(Debug, Clone)]
pub struct SamtoolsStats {
    pub samtools: String,
}

impl SamtoolsSubsetter {
    pub fn new(samtools: &str) -> Self {
        SamtoolsSubsetter {
            samtools: samtools.to_string(),
        }
    }
}

impl SamtoolsStats {
    pub fn new(samtools: &str) -> Self {
        SamtoolsStats {
            samtools: samtools.to_string(),
        }
    }
}

impl RegionSubsetter for SamtoolsSubsetter {
    fn subset_by_region(&self, bam: &Path, region: &str, dest: &Path) -> Result<(), ToolError> {
        let mut command = Command::new(&self.samtools);
        command
            .arg("view")
            .arg("-b")
            .arg("-o")
            .arg(dest)
            .arg(bam)
            .arg(region);

        run_tool(&self.samtools, &mut command)?;

        // `dest` is created empty beforehand; a BAM always carries at least a BGZF header
        let written = dest.metadata().map(|m| m.len()).unwrap_or(0);
        if written == 0 {
            return Err(ToolError::MissingOutput(dest.to_path_buf()));
        }

        Ok(())
    }
}

impl StatsCollector for SamtoolsStats {
    fn stats_for(&self, bam: &Path) -> Result<HashMap<String, String>, ToolError> {
        let mut command = Command::new(&self.samtools);
        command.arg("stats").arg(bam);

        let output = run_tool(&self.samtools, &mut command)?;
        let report = String::from_utf8(output.stdout).map_err(|e| {
            ToolError::UnreadableOutput(format!("stats report is not valid UTF-8: {}", e))
        })?;

        Ok(parse_stats_report(&report))
    }
}

fn run_tool(tool: &str, command: &mut Command) -> Result<Output, ToolError> {
    debug!("Running {:?}", command);

    let output = command.output().map_err(|source| ToolError::Spawn {
        tool: tool.to_string(),
        source,
    })?;

    if !output.status.success() {
        return Err(ToolError::ExitStatus {
            tool: tool.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output)
}

///
/// Parse the summary-number section of a `samtools stats` report.
///
/// Only lines starting with the `SN` marker are kept. The remainder is
/// tab-separated: the statistic name (trailing `:` removed) and its value.
/// Trailing comment fields are ignored.
///
pub fn parse_stats_report(report: &str) -> HashMap<String, String> {
    let mut stats = HashMap::new();

    for line in report.lines() {
        let mut fields = line.split('\t');
        if fields.next() != Some(STATS_MARKER) {
            continue;
        }

        if let (Some(name), Some(value)) = (fields.next(), fields.next()) {
            let name = name.trim().trim_end_matches(':');
            stats.insert(name.to_string(), value.trim().to_string());
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn stats_report() -> &'static str {
        "# This file was produced by samtools stats\n\
         CHK\t4f2a1b3c\t8d9e0f1a\t2b3c4d5e\n\
         # Summary Numbers.\n\
         SN\traw total sequences:\t2104\n\
         SN\treads mapped:\t2080\n\
         SN\treads mapped and paired:\t2064\t# paired-end technology bit set + both mates mapped\n\
         SN\terror rate:\t2.155e-03\t# mismatches / bases mapped (cigar)\n\
         FFQ\t1\t0\t0\t12\n"
    }

    #[rstest]
    fn test_parse_stats_report(stats_report: &str) {
        let stats = parse_stats_report(stats_report);

        assert_eq!(stats.len(), 4);
        assert_eq!(
            stats.get("reads mapped and paired").map(String::as_str),
            Some("2064")
        );
        assert_eq!(stats.get("reads mapped").map(String::as_str), Some("2080"));
        assert_eq!(stats.get("error rate").map(String::as_str), Some("2.155e-03"));
    }

    #[rstest]
    fn test_parse_stats_report_ignores_other_sections() {
        let stats = parse_stats_report("CHK\treads mapped and paired:\t12\nSNX\tfoo:\t1\nSN\tlonely\n");
        assert!(stats.is_empty());
    }

    #[cfg(unix)]
    #[rstest]
    fn test_subset_without_output_is_missing_output() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let fake_samtools = dir.path().join("samtools");
        std::fs::write(&fake_samtools, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&fake_samtools, std::fs::Permissions::from_mode(0o755)).unwrap();

        let dest = dir.path().join("chr19_bam_subset.bam");
        std::fs::File::create(&dest).unwrap();

        let subsetter = SamtoolsSubsetter::new(&fake_samtools.to_string_lossy());
        let res = subsetter.subset_by_region(&dir.path().join("in.bam"), "chr19", &dest);

        assert!(matches!(res, Err(ToolError::MissingOutput(path)) if path == dest));
    }

    #[cfg(unix)]
    #[rstest]
    fn test_failing_samtools_reports_exit_status() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let fake_samtools = dir.path().join("samtools");
        std::fs::write(&fake_samtools, "#!/bin/sh\necho 'no index' >&2\nexit 1\n").unwrap();
        std::fs::set_permissions(&fake_samtools, std::fs::Permissions::from_mode(0o755)).unwrap();

        let stats = SamtoolsStats::new(&fake_samtools.to_string_lossy());
        let res = stats.stats_for(&dir.path().join("in.bam"));

        match res {
            Err(ToolError::ExitStatus { stderr, .. }) => assert_eq!(stderr, "no index"),
            other => panic!("expected an exit status failure, got {:?}", other),
        }
    }

    #[rstest]
    fn test_missing_samtools_binary() {
        let dir = tempfile::tempdir().unwrap();
        let subsetter = SamtoolsSubsetter::new("definitely-not-a-real-samtools-binary");

        let res = subsetter.subset_by_region(
            &dir.path().join("in.bam"),
            "chr19",
            &dir.path().join("out.bam"),
        );

        assert!(matches!(res, Err(ToolError::Spawn { .. })));
    }
}
