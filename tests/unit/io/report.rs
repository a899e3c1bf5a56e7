//! Tests for the printed run summary

#[cfg(test)]
mod tests {
    use jigsaw::algorithm::bitset::CellMask;
    use jigsaw::algorithm::scanner::OrientationScan;
    use jigsaw::io::report::{OrientationReport, Report};
    use jigsaw::spatial::picture::Picture;
    use jigsaw::spatial::transform::Orientation;
    use ndarray::array;

    fn scan(orientation: Orientation, matches: usize, roughness: usize) -> OrientationScan {
        OrientationScan {
            orientation,
            matches,
            roughness,
            covered: CellMask::new(2, 2),
        }
    }

    fn picture() -> Picture {
        Picture::new(array![[true, false], [true, true]])
    }

    // Tests only orientations with matches are kept, in scan order
    // Verified by keeping every scanned orientation
    #[test]
    fn test_report_keeps_matching_orientations() {
        let scans = [
            scan(Orientation::new(0, false), 0, 3),
            scan(Orientation::new(1, false), 2, 1),
            scan(Orientation::new(3, true), 1, 2),
        ];
        let report = Report::new(42, picture(), &scans);

        assert_eq!(
            report.orientations,
            vec![
                OrientationReport {
                    orientation: Orientation::new(1, false),
                    matches: 2,
                    roughness: 1,
                },
                OrientationReport::from(&scan(Orientation::new(3, true), 1, 2)),
            ]
        );
        assert_eq!(report.roughness(), Some(1));
    }

    // Tests the printed layout: product, picture, then counts per orientation
    // Verified by printing roughness before the match count
    #[test]
    fn test_report_display() {
        let scans = [scan(Orientation::new(2, false), 2, 273)];
        let report = Report::new(20_899_048_083_289, picture(), &scans);

        assert_eq!(
            report.to_string(),
            "20899048083289\n#.\n##\nmonsters: 2\nroughness: 273\n"
        );
    }

    // Tests a report without matches prints no counts
    // Verified by printing zero counts
    #[test]
    fn test_report_without_matches() {
        let scans = [scan(Orientation::IDENTITY, 0, 3)];
        let report = Report::new(1, picture(), &scans);

        assert!(report.orientations.is_empty());
        assert_eq!(report.roughness(), None);
        assert_eq!(report.to_string(), "1\n#.\n##\n");
    }
}
