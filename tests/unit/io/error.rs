//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use patterncard::PatternError;
    use patterncard::io::error::{WithPath, invalid_parameter, invalid_target, io_error};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = PatternError::FileSystem {
            path: "/tmp/request.json".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/request.json"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("tile_size", &-1.0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("tile_size"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be positive"));
        assert!(error.source().is_none());
    }

    // Tests serialization errors keep their serde source
    // Verified by discarding the source in the From impl
    #[test]
    fn test_serialization_error() {
        let parse = serde_json::from_str::<serde_json::Value>("{");
        if let Err(source) = parse {
            let error = PatternError::from(source);
            assert!(matches!(error, PatternError::Serialization { .. }));
            assert!(error.source().is_some());
        }
    }

    // Tests the path extension attaches path and operation
    // Verified by dropping the operation from the error
    #[test]
    fn test_with_path() {
        let path = Path::new("/nonexistent/dir/request.json");
        let result = std::fs::read_to_string(path).with_path(path, "read");

        match result {
            Err(PatternError::FileSystem {
                path: failed,
                operation,
                ..
            }) => {
                assert_eq!(failed, PathBuf::from("/nonexistent/dir/request.json"));
                assert_eq!(operation, "read");
            }
            _ => unreachable!("reading a missing file must fail"),
        }
    }

    // Tests target and generic I/O helpers
    // Verified by swapping the reason and path in the message
    #[test]
    fn test_target_and_io_helpers() {
        let error = invalid_target(Path::new("cards.txt"), &"not a request");
        assert_eq!(error.to_string(), "Invalid target 'cards.txt': not a request");

        let error = io_error("no file name");
        assert!(error.to_string().contains("no file name"));
        assert!(error.source().is_some());
    }
}
