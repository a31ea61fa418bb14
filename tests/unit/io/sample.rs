//! Tests for text grid parsing and writing

#[cfg(test)]
mod tests {
    use ndarray::array;
    use tilecollapse::CollapseError;
    use tilecollapse::io::sample::{
        grid_to_text, load_sample, load_seed, parse_rows, parse_sample, parse_seed,
        snapshot_to_text, write_grid_text,
    };

    // Tests CRLF endings and trailing blank lines are dropped
    #[test]
    fn test_parse_rows_line_endings() {
        let rows = parse_rows("AB\r\nBA\r\n\r\n\n");
        assert_eq!(rows, vec![vec!['A', 'B'], vec!['B', 'A']]);
    }

    // Tests interior blank lines surface as ragged rows
    #[test]
    fn test_parse_sample_rejects_ragged() {
        assert!(matches!(
            parse_sample("AB\n\nAB\n"),
            Err(CollapseError::InvalidInput { .. })
        ));
        assert!(parse_sample("").is_err());
        assert!(parse_sample("ABC\nAB\n").is_err());
    }

    // Tests the superposition symbol reads as an open cell
    #[test]
    fn test_parse_seed_placeholders() {
        let seed = parse_seed("A*\n*B\n").expect("valid seed");
        assert_eq!(seed, array![[Some('A'), None], [None, Some('B')]]);
    }

    // Tests text rendering of grids and masked snapshots
    #[test]
    fn test_grid_text_rendering() {
        assert_eq!(grid_to_text(&array![['A', 'B'], ['C', 'D']]), "AB\nCD\n");
        assert_eq!(
            snapshot_to_text(&array![[Some('A'), None], [None, None]]),
            "A*\n**\n"
        );
    }

    // Tests written grids read back as samples
    // Verified by dropping the trailing newline per row
    #[test]
    fn test_write_and_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out").join("grid.txt");
        let grid = array![['x', 'y', 'x'], ['y', 'x', 'y']];

        write_grid_text(&grid, &path).expect("write");
        let rows = load_sample(&path).expect("load");
        assert_eq!(rows, vec![vec!['x', 'y', 'x'], vec!['y', 'x', 'y']]);

        let seed = load_seed(&path).expect("load seed");
        assert!(seed.iter().all(Option::is_some));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_sample(&dir.path().join("nope.txt")).expect_err("missing");
        assert!(matches!(err, CollapseError::FileSystem { operation: "read grid", .. }));
    }
}
