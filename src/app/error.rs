use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "store file missing");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("store file missing"));
    }

    #[test]
    fn test_json_error_carries_parser_message() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{a:").unwrap_err();
        let message = parse_err.to_string();
        let app_err: AppError = parse_err.into();
        assert!(app_err.to_string().contains(&message));
    }
}
