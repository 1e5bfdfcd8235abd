//! Application-level errors.
//!
//! The simulation itself cannot fail; only the terminal host and argument
//! parsing produce errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<(), AppError> {
            Err::<(), _>(std::io::Error::new(std::io::ErrorKind::Other, "boom"))?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.to_string(), "terminal I/O failed: boom");
    }

    #[test]
    fn test_unknown_argument_message() {
        let err = AppError::UnknownArgument("--fly".to_string());
        assert_eq!(err.to_string(), "unknown argument: --fly");
    }
}
