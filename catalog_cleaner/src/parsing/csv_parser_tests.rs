#[cfg(test)]
mod tests {
    use crate::error::CleanerError;
    use crate::parsing::csv_parser::{
        is_missing_token, parse_catalog_csv, standardize_missing, write_catalog_csv,
    };
    use polars::prelude::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    /// Helper to create a temp CSV file
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_parse_reads_every_column_as_string() {
        let temp_file = create_temp_csv(
            "show_id,Type,Release_Year\ns1,Movie,2020\ns2,TV Show,2021\n",
        );

        let df = parse_catalog_csv(temp_file.path()).unwrap();
        assert_eq!(df.shape(), (2, 3));
        for column in df.get_columns() {
            assert_eq!(column.dtype(), &DataType::String);
        }

        let years = df.column("Release_Year").unwrap().str().unwrap();
        assert_eq!(years.get(0), Some("2020"));
    }

    #[test]
    fn test_parse_keeps_original_header() {
        let temp_file = create_temp_csv(" Date Added ,Title\n\"January 1, 2020\",x\n");
        let df = parse_catalog_csv(temp_file.path()).unwrap();
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec![" Date Added ".to_string(), "Title".to_string()]);
    }

    #[test]
    fn test_blank_and_na_cells_become_null() {
        let temp_file = create_temp_csv(
            "title,director\nA,\nB,   \nC,NaN\nD,N/A\nE,Jane Doe\n",
        );

        let df = parse_catalog_csv(temp_file.path()).unwrap();
        let directors = df.column("director").unwrap();
        assert_eq!(directors.null_count(), 4);
        assert_eq!(directors.str().unwrap().get(4), Some("Jane Doe"));
    }

    #[test]
    fn test_padded_na_tokens_are_kept_as_text() {
        let temp_file = create_temp_csv("title,director\nA, NaN \nB,NULL\n");

        let df = parse_catalog_csv(temp_file.path()).unwrap();
        let directors = df.column("director").unwrap();
        assert_eq!(directors.null_count(), 1);
        assert_eq!(directors.str().unwrap().get(0), Some(" NaN "));
    }

    #[test]
    fn test_non_missing_values_are_not_trimmed() {
        let temp_file = create_temp_csv("title\n  a tale \n");
        let df = parse_catalog_csv(temp_file.path()).unwrap();
        let titles = df.column("title").unwrap().str().unwrap();
        assert_eq!(titles.get(0), Some("  a tale "));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = parse_catalog_csv(std::path::Path::new("/no/such/dir/titles.csv"));
        assert!(matches!(result, Err(CleanerError::Io { .. })));
    }

    #[test]
    fn test_ragged_rows_are_parse_errors() {
        let temp_file = create_temp_csv("a,b\n1,2,3,4\n");
        let result = parse_catalog_csv(temp_file.path());
        assert!(matches!(result, Err(CleanerError::Parse(_))));
    }

    #[test]
    fn test_missing_tokens() {
        assert!(is_missing_token(""));
        assert!(is_missing_token("  "));
        assert!(is_missing_token("NULL"));
        assert!(is_missing_token("nan"));
        assert!(!is_missing_token(" nan "));
        assert!(!is_missing_token(" NULL "));
        assert!(!is_missing_token("Unknown"));
        assert!(!is_missing_token("Nancy"));
    }

    #[test]
    fn test_standardize_missing_leaves_clean_frames_alone() {
        let df = df!("title" => ["A", "B"]).unwrap();
        let out = standardize_missing(df.clone()).unwrap();
        assert!(out.equals_missing(&df));
    }

    #[test]
    fn test_write_has_header_and_empty_nulls() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut df = df!(
            "title" => ["A", "B"],
            "director" => [Some("X"), None],
        )
        .unwrap();

        write_catalog_csv(&mut df, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines, vec!["title,director", "A,X", "B,"]);
    }

    #[test]
    fn test_write_to_missing_directory_is_io_error() {
        let mut df = df!("title" => ["A"]).unwrap();
        let result = write_catalog_csv(&mut df, std::path::Path::new("/no/such/dir/out.csv"));
        assert!(matches!(result, Err(CleanerError::Io { .. })));
    }
}
