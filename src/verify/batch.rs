//! Splitting the URL list into dispatch batches.

use crate::error::ConfigError;

/// Split `urls` into consecutive, non-overlapping batches of at most `batch_size`.
///
/// Order is preserved and only the last batch may be shorter. An empty input
/// yields no batches.
///
/// # Errors
///
/// [`ConfigError::InvalidArgument`] if `batch_size` is zero.
pub fn partition<T>(urls: &[T], batch_size: usize) -> Result<Vec<&[T]>, ConfigError> {
    if batch_size == 0 {
        return Err(ConfigError::InvalidArgument(
            "batch size must be greater than zero".to_string(),
        ));
    }
    Ok(urls.chunks(batch_size).collect())
}
