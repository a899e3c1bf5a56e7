//! Tests for default paths, the built-in marker, and export settings

#[cfg(test)]
mod tests {
    use jigsaw::io::configuration::{
        DEFAULT_INPUT, EXPORT_CELL_PIXELS, MARKER_COLOUR, MATCHES_LABEL, PROGRESS_BAR_WIDTH,
        ROUGHNESS_LABEL, SEA_MONSTER, SET_COLOUR, UNSET_COLOUR,
    };

    // Tests the default input file name
    // Verified by changing the constant
    #[test]
    fn test_default_input() {
        assert_eq!(DEFAULT_INPUT, "input");
    }

    // Tests the sea monster rows share one width and hold fifteen cells
    // Verified by trimming trailing spaces from the first row
    #[test]
    fn test_sea_monster_shape() {
        assert!(SEA_MONSTER.iter().all(|row| row.len() == 20));
        let cells: usize = SEA_MONSTER
            .iter()
            .map(|row| row.chars().filter(|&cell| cell == '#').count())
            .sum();
        assert_eq!(cells, 15);
    }

    // Tests report labels match the printed output format
    // Verified by swapping the labels
    #[test]
    fn test_report_labels() {
        assert_eq!(MATCHES_LABEL, "monsters");
        assert_eq!(ROUGHNESS_LABEL, "roughness");
    }

    // Tests export colours are distinct and sizes match the defaults
    // Verified by reusing the set colour for markers
    #[test]
    fn test_export_settings() {
        assert_ne!(MARKER_COLOUR, SET_COLOUR);
        assert_ne!(SET_COLOUR, UNSET_COLOUR);
        assert_eq!(MARKER_COLOUR.get(3), Some(&255));
        assert_eq!(EXPORT_CELL_PIXELS, 4);
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
    }
}
