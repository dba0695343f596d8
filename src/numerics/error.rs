use thiserror::Error;

/// Failure of a checked vector operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsError {
    /// The two operands do not hold the same number of elements.
    #[error("Length mismatch: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, MetricsError>;

impl MetricsError {
    /// Ok when both lengths agree, a [`MetricsError::LengthMismatch`] otherwise.
    pub fn check_same_len(left: usize, right: usize) -> Result<()> {
        if left == right {
            Ok(())
        } else {
            Err(MetricsError::LengthMismatch { left, right })
        }
    }
}
