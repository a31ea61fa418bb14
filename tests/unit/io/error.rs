//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use tilecollapse::CollapseError;
    use tilecollapse::io::error::{invalid_input, invalid_parameter, validate_rectangular};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = CollapseError::FileSystem {
            path: "/tmp/sample.txt".into(),
            operation: "read grid",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("read grid"));
        assert!(error.to_string().contains("/tmp/sample.txt"));
    }

    // Tests exhaustion reports the number of attempts
    #[test]
    fn test_exhausted_attempts_message() {
        let error = CollapseError::ExhaustedAttempts { attempts: 7 };
        assert!(error.to_string().contains("all 7 attempts"));
        assert!(error.source().is_none());
    }

    // Tests divergence names the attempt, step and cell
    #[test]
    fn test_divergence_message() {
        let error = CollapseError::Divergence {
            attempt: 2,
            step: 14,
            position: [3, 5],
        };
        let message = error.to_string();
        assert!(message.contains("Attempt 2"));
        assert!(message.contains("step 14"));
        assert!(message.contains("(3, 5)"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("scale", &0, &"must be at least 1");
        let message = error.to_string();
        assert!(message.contains("scale"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be at least 1"));
    }

    #[test]
    fn test_invalid_input_error() {
        let error = invalid_input(&"seed grid has no cells");
        assert!(matches!(error, CollapseError::InvalidInput { .. }));
        assert_eq!(error.to_string(), "Invalid input grid: seed grid has no cells");
    }

    // Tests io errors convert through the question mark operator
    #[test]
    fn test_from_io_error() {
        let error: CollapseError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(error, CollapseError::FileSystem { .. }));
    }

    // Tests shape validation of row-based grids
    #[test]
    fn test_validate_rectangular() {
        assert_eq!(
            validate_rectangular(&[vec![1, 2, 3], vec![4, 5, 6]], "sample").ok(),
            Some((2, 3))
        );

        let empty: Vec<Vec<u8>> = Vec::new();
        assert!(
            validate_rectangular(&empty, "seed")
                .is_err_and(|e| e.to_string().contains("seed grid has no rows"))
        );
        assert!(validate_rectangular(&[Vec::<u8>::new()], "sample").is_err());
    }
}
