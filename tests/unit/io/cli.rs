//! Tests for command-line parsing and the end-to-end runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use jigsaw::PuzzleError;
    use jigsaw::io::cli::{Cli, PuzzleRunner};
    use jigsaw::io::configuration::DEFAULT_INPUT;
    use std::fs;
    use std::path::{Path, PathBuf};

    const SAMPLE: &str = include_str!("../../data/sample.txt");

    fn runner_for(input: &Path, extra: &[&str]) -> PuzzleRunner {
        let mut args = vec!["jigsaw", "--quiet"];
        args.extend_from_slice(extra);
        let mut cli = Cli::parse_from(args);
        cli.input = input.to_path_buf();
        PuzzleRunner::new(cli)
    }

    // Tests defaults when no arguments are given
    // Verified by changing the default input path
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["jigsaw"]);

        assert_eq!(cli.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(cli.tile_width, None);
        assert_eq!(cli.marker, None);
        assert_eq!(cli.export, None);
        assert!(!cli.first_match);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
        assert!(cli.should_show_progress());
    }

    // Tests parsing with every long flag
    // Verified by renaming the long flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "jigsaw",
            "puzzle.txt",
            "--tile-width",
            "12",
            "--marker",
            "shape.txt",
            "--export",
            "out.png",
            "--first-match",
            "--quiet",
            "--verbose",
        ]);

        assert_eq!(cli.input, PathBuf::from("puzzle.txt"));
        assert_eq!(cli.tile_width, Some(12));
        assert_eq!(cli.marker, Some(PathBuf::from("shape.txt")));
        assert_eq!(cli.export, Some(PathBuf::from("out.png")));
        assert!(cli.first_match);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.verbose, 1);
    }

    // Tests short flags and repeated verbosity
    // Verified by counting -v as a boolean
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["jigsaw", "-w", "8", "-f", "-q", "-vvv"]);

        assert_eq!(cli.tile_width, Some(8));
        assert!(cli.first_match);
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 3);
    }

    // Tests tile widths outside the supported range are rejected
    // Verified by dropping the lower bound
    #[test]
    fn test_validate_tile_width() {
        assert!(Cli::parse_from(["jigsaw", "-w", "10"]).validate().is_ok());
        assert!(Cli::parse_from(["jigsaw"]).validate().is_ok());

        for width in ["2", "65"] {
            let result = Cli::parse_from(["jigsaw", "-w", width]).validate();
            assert!(matches!(
                result,
                Err(PuzzleError::InvalidParameter {
                    parameter: "tile-width",
                    ..
                })
            ));
        }
    }

    // Tests a full run over the 3x3 example
    // Verified by reporting the product of all ids
    #[test]
    fn test_run_sample() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input");
        fs::write(&input, SAMPLE).unwrap();

        let runner = runner_for(&input, &[]);
        assert_eq!(runner.cli().input, input);
        let report = runner.run().unwrap();

        assert_eq!(report.corner_product, 20_899_048_083_289);
        assert_eq!(report.orientations.len(), 1);
        assert_eq!(report.roughness(), Some(273));
    }

    // Tests an explicit width that disagrees with the input fails parsing
    // Verified by ignoring the width argument
    #[test]
    fn test_run_wrong_width() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input");
        fs::write(&input, SAMPLE).unwrap();

        let result = runner_for(&input, &["-w", "9"]).run();
        assert!(matches!(result, Err(PuzzleError::Format { block: 1, .. })));
    }

    // Tests a custom marker file replaces the sea monster
    // Verified by always loading the built-in marker
    #[test]
    fn test_run_custom_marker() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input");
        fs::write(&input, SAMPLE).unwrap();
        let marker = dir.path().join("marker.txt");
        fs::write(&marker, "#\n").unwrap();

        let marker_arg = marker.to_string_lossy().to_string();
        let report = runner_for(&input, &["--marker", &marker_arg, "--first-match"])
            .run()
            .unwrap();

        // A single-cell marker covers every set cell in the first orientation
        assert_eq!(report.orientations.len(), 1);
        assert_eq!(report.orientations.first().map(|found| found.matches), Some(303));
        assert_eq!(report.roughness(), Some(0));
    }

    // Tests the PNG export writes a file scaled from the picture
    // Verified by skipping the export step
    #[test]
    fn test_run_exports_png() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input");
        fs::write(&input, SAMPLE).unwrap();
        let output = dir.path().join("nested").join("picture.png");

        let output_arg = output.to_string_lossy().to_string();
        runner_for(&input, &["--export", &output_arg]).run().unwrap();

        assert!(output.exists());
        let exported = image::open(&output).unwrap();
        assert_eq!(exported.width(), 24 * 4);
        assert_eq!(exported.height(), 24 * 4);
    }

    // Tests missing files surface as file system errors
    // Verified by unwrapping the read result
    #[test]
    fn test_run_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");

        let result = runner_for(&missing, &[]).run();
        assert!(matches!(result, Err(PuzzleError::FileSystem { .. })));

        let input = dir.path().join("input");
        fs::write(&input, SAMPLE).unwrap();
        let missing_marker = missing.to_string_lossy().to_string();
        let result = runner_for(&input, &["-m", &missing_marker]).run();
        assert!(matches!(
            result,
            Err(PuzzleError::FileSystem {
                operation: "read marker",
                ..
            })
        ));
    }
}
