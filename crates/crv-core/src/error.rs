use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurveError {
    #[error("Invalid radius: {0} (must be at least {eps})", eps = crate::Tolerance::EPS)]
    InvalidRadius(f64),

    #[error("Invalid helix step: {0} (magnitude must be at least {eps})", eps = crate::Tolerance::EPS)]
    InvalidStep(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CurveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CurveError::InvalidRadius(-2.0);
        assert_eq!(
            err.to_string(),
            "Invalid radius: -2 (must be at least 0.000001)"
        );

        let err = CurveError::InvalidStep(0.0);
        assert!(err.to_string().starts_with("Invalid helix step: 0"));
    }

    #[test]
    fn test_io_error_conversion() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(CurveError::Io(_))));
    }
}
