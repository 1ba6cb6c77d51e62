//! Error type shared by the fallible core operations.

/// Errors raised by the interaction state machines.
///
/// None of these are fatal: the UI layer logs them and keeps the previous
/// state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SiteError {
    #[error("carousel index {index} is out of range for {len} items")]
    CarouselIndexOutOfRange { index: usize, len: usize },

    #[error("carousel has no items")]
    EmptyCarousel,

    #[error("intersection threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),
}

pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SiteError::CarouselIndexOutOfRange { index: 9, len: 8 };
        assert_eq!(err.to_string(), "carousel index 9 is out of range for 8 items");

        assert_eq!(SiteError::EmptyCarousel.to_string(), "carousel has no items");
        assert_eq!(
            SiteError::InvalidThreshold(1.5).to_string(),
            "intersection threshold 1.5 is outside [0, 1]"
        );
    }
}
