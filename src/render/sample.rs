//! Random demo data plotted inside each cell.

use crate::error::{ChartGridError, Result};

/// Sample values fall in `[0, SAMPLE_RANGE)`, inside the axis range.
pub const SAMPLE_RANGE: u32 = 20;

/// `cell_count` series of `cell_count` points each.
///
/// # Errors
/// Returns `ChartGridError::Random` if the platform random source fails, or
/// `ChartGridError::Other` if `cell_count * cell_count` overflows `usize`.
pub fn random_series(cell_count: usize) -> Result<Vec<Vec<u32>>> {
    let len = cell_count
        .checked_mul(cell_count)
        .ok_or_else(|| {
            ChartGridError::Other(format!("{cell_count} cells is too many to sample"))
        })?;
    let mut bytes = vec![0u8; len];
    getrandom::getrandom(&mut bytes)?;
    Ok(bytes
        .chunks(cell_count.max(1))
        .take(cell_count)
        .map(|chunk| {
            chunk
                .iter()
                .map(|&b| u32::from(b) % SAMPLE_RANGE)
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_shape_and_range() {
        let data = random_series(7).unwrap();
        assert_eq!(data.len(), 7);
        assert!(data.iter().all(|series| series.len() == 7));
        assert!(data.iter().flatten().all(|&v| v < SAMPLE_RANGE));
    }

    #[test]
    fn test_oversized_grid_is_an_error() {
        let err = random_series(usize::MAX).unwrap_err();
        assert!(matches!(err, ChartGridError::Other(_)));
    }

    #[test]
    fn test_empty() {
        assert!(random_series(0).unwrap().is_empty());
    }
}
