use crate::config::Thresholds;
use crate::models::{RatioSet, RegionCounts, SexLabel};

impl Thresholds {
    ///
    /// `probable_XX` iff X/19 >= min_x_autosome, Y/19 <= max_y_autosome
    /// and Y/X <= max_y_x; `probable_XY` otherwise.
    ///
    pub fn label(&self, ratios: &RatioSet) -> SexLabel {
        if ratios.x_autosome >= self.min_x_autosome
            && ratios.y_autosome <= self.max_y_autosome
            && ratios.y_x <= self.max_y_x
        {
            SexLabel::ProbableXX
        } else {
            SexLabel::ProbableXY
        }
    }

    pub fn classify(&self, counts: &RegionCounts) -> (RatioSet, SexLabel) {
        let ratios = RatioSet::from_counts(counts);
        let label = self.label(&ratios);
        (ratios, label)
    }
}

///
/// Compute the three ratios from the chr19, chrX and chrY counts and
/// label the sample with the default thresholds.
///
/// A zero chr19 or chrX count sets every ratio to 0.0, which sends such
/// samples to `probable_XY`. There is no low-coverage label.
///
pub fn classify(autosome: u64, x: u64, y: u64) -> (RatioSet, SexLabel) {
    Thresholds::default().classify(&RegionCounts { autosome, x, y })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_typical_xx() {
        let (ratios, label) = classify(1000, 520, 2);

        assert_eq!(format!("{:.4}", ratios.x_autosome), "0.5200");
        assert_eq!(format!("{:.4}", ratios.y_autosome), "0.0020");
        assert_eq!(format!("{:.4}", ratios.y_x), "0.0038");
        assert_eq!(label, SexLabel::ProbableXX);
    }

    #[rstest]
    fn test_typical_xy() {
        let (ratios, label) = classify(1000, 480, 450);

        assert_eq!(ratios.x_autosome, 0.48);
        assert_eq!(label, SexLabel::ProbableXY);
    }

    #[rstest]
    fn test_all_zero_counts() {
        let (ratios, label) = classify(0, 0, 0);

        assert_eq!(ratios, RatioSet::default());
        assert_eq!(label, SexLabel::ProbableXY);
    }

    #[rstest]
    #[case(100, 0, 3)]
    #[case(0, 40, 2)]
    fn test_any_zero_denominator_zeroes_all_ratios(
        #[case] autosome: u64,
        #[case] x: u64,
        #[case] y: u64,
    ) {
        let (ratios, label) = classify(autosome, x, y);

        assert_eq!(ratios, RatioSet::default());
        assert_eq!(label, SexLabel::ProbableXY);
    }

    #[rstest]
    #[case(1000, 500, 0, SexLabel::ProbableXX)] // X/19 == 0.5
    #[case(1000, 1000, 10, SexLabel::ProbableXX)] // Y/19 == 0.01, Y/X == 0.01
    #[case(1000, 499, 0, SexLabel::ProbableXY)]
    #[case(1000, 1000, 11, SexLabel::ProbableXY)]
    #[case(1000, 600, 7, SexLabel::ProbableXY)] // Y/X just above 0.01
    #[case(1000, 700, 7, SexLabel::ProbableXX)] // Y/X == 0.01
    #[case(0, 40, 0, SexLabel::ProbableXY)]
    fn test_inclusive_boundaries(
        #[case] autosome: u64,
        #[case] x: u64,
        #[case] y: u64,
        #[case] expected: SexLabel,
    ) {
        let (_, label) = classify(autosome, x, y);
        assert_eq!(label, expected);
    }

    #[rstest]
    fn test_label_from_ratios() {
        let thresholds = Thresholds::default();
        let ratios = RatioSet {
            x_autosome: 0.5,
            y_autosome: 0.01,
            y_x: 0.01,
        };

        assert_eq!(thresholds.label(&ratios), SexLabel::ProbableXX);
        assert_eq!(
            thresholds.label(&RatioSet {
                y_x: 0.0100001,
                ..ratios
            }),
            SexLabel::ProbableXY
        );
    }

    #[rstest]
    fn test_custom_thresholds() {
        let thresholds = Thresholds {
            min_x_autosome: 0.4,
            ..Thresholds::default()
        };
        let (_, label) = thresholds.classify(&RegionCounts {
            autosome: 1000,
            x: 450,
            y: 1,
        });

        assert_eq!(label, SexLabel::ProbableXX);
    }
}
