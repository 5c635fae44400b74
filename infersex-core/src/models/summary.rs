use std::fmt::{self, Display};

use crate::consts::SUMMARY_HEADER;

///
/// Reads mapped and paired on the autosome reference, chrX and chrY
/// for one sample.
///
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct RegionCounts {
    pub autosome: u64,
    pub x: u64,
    pub y: u64,
}

///
/// X/19, Y/19 and Y/X read ratios. When either the autosome or the chrX
/// count is zero all three ratios are 0.0.
///
#[derive(PartialEq, Debug, Clone, Copy, Default)]
pub struct RatioSet {
    pub x_autosome: f64,
    pub y_autosome: f64,
    pub y_x: f64,
}

impl RatioSet {
    pub fn from_counts(counts: &RegionCounts) -> Self {
        if counts.autosome == 0 || counts.x == 0 {
            return RatioSet::default();
        }

        RatioSet {
            x_autosome: counts.x as f64 / counts.autosome as f64,
            y_autosome: counts.y as f64 / counts.autosome as f64,
            y_x: counts.y as f64 / counts.x as f64,
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum SexLabel {
    ProbableXX,
    ProbableXY,
}

impl Display for SexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SexLabel::ProbableXX => "probable_XX",
            SexLabel::ProbableXY => "probable_XY",
        };
        write!(f, "{}", s)
    }
}

///
/// One row of the summary table.
///
#[derive(PartialEq, Debug, Clone)]
pub struct SummaryRow {
    pub sample: String,
    pub counts: RegionCounts,
    pub ratios: RatioSet,
    pub label: SexLabel,
}

impl SummaryRow {
    pub fn header() -> String {
        SUMMARY_HEADER.join("\t")
    }

    ///
    /// Get the tab-separated row, ratios formatted to 4 decimal places
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{:.4}\t{:.4}\t{:.4}\t{}",
            self.sample,
            self.counts.autosome,
            self.counts.x,
            self.counts.y,
            self.ratios.x_autosome,
            self.ratios.y_autosome,
            self.ratios.y_x,
            self.label
        )
    }
}

impl Display for SummaryRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_header() {
        assert_eq!(
            SummaryRow::header(),
            "sample\tchr19\tchrX\tchrY\tX/19\tY/19\tY/X\tsex_prediction"
        );
    }

    #[rstest]
    fn test_row_formatting() {
        let counts = RegionCounts {
            autosome: 1000,
            x: 520,
            y: 2,
        };
        let row = SummaryRow {
            sample: "NA12878".to_string(),
            counts,
            ratios: RatioSet::from_counts(&counts),
            label: SexLabel::ProbableXX,
        };

        assert_eq!(
            row.to_string(),
            "NA12878\t1000\t520\t2\t0.5200\t0.0020\t0.0038\tprobable_XX"
        );
    }

    #[rstest]
    #[case(RegionCounts { autosome: 0, x: 0, y: 0 }, (0.0, 0.0, 0.0))]
    #[case(RegionCounts { autosome: 0, x: 40, y: 2 }, (0.0, 0.0, 0.0))]
    #[case(RegionCounts { autosome: 100, x: 0, y: 3 }, (0.0, 0.0, 0.0))]
    #[case(RegionCounts { autosome: 100, x: 40, y: 0 }, (0.4, 0.0, 0.0))]
    #[case(RegionCounts { autosome: 200, x: 100, y: 50 }, (0.5, 0.25, 0.5))]
    fn test_ratios_zero_denominator(#[case] counts: RegionCounts, #[case] expected: (f64, f64, f64)) {
        let ratios = RatioSet::from_counts(&counts);
        assert_eq!(
            (ratios.x_autosome, ratios.y_autosome, ratios.y_x),
            expected
        );
    }
}
