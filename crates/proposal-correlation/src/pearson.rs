//! Pairwise-complete Pearson correlation over Polars float columns.

use polars::prelude::cov::pearson_corr;
use polars::prelude::{ChunkAgg, ChunkFilter, Float64Chunked, PolarsResult, polars_ensure};

/// Pearson correlation of `x` and `y` over the rows where both are present.
///
/// Returns `None` when fewer than two complete pairs remain or when either
/// side is constant over those pairs. The result is clamped to [-1, 1].
pub fn pearson(x: &Float64Chunked, y: &Float64Chunked) -> PolarsResult<Option<f64>> {
    polars_ensure!(
        x.len() == y.len(),
        ShapeMismatch: "cannot correlate {} rows with {} rows", x.len(), y.len()
    );
    let complete = &x.is_not_null() & &y.is_not_null();
    if complete.num_trues() < 2 {
        return Ok(None);
    }
    let x = x.filter(&complete)?;
    let y = y.filter(&complete)?;
    if is_constant(&x) || is_constant(&y) {
        return Ok(None);
    }
    Ok(pearson_corr(&x, &y)
        .filter(|r| r.is_finite())
        .map(|r| r.clamp(-1.0, 1.0)))
}

fn is_constant(values: &Float64Chunked) -> bool {
    values.min() == values.max()
}

#[cfg(test)]
mod tests {
    use polars::prelude::NamedFrom;

    use super::*;

    fn column(values: &[Option<f64>]) -> Float64Chunked {
        Float64Chunked::new("x".into(), values)
    }

    fn full(values: &[f64]) -> Float64Chunked {
        Float64Chunked::new("x".into(), values)
    }

    #[test]
    fn perfect_positive_and_negative() {
        let x = full(&[1.0, 2.0, 3.0, 4.0]);
        let up = full(&[10.0, 20.0, 30.0, 40.0]);
        let down = full(&[8.0, 6.0, 4.0, 2.0]);
        assert!((pearson(&x, &up).unwrap().unwrap() - 1.0).abs() < 1e-12);
        assert!((pearson(&x, &down).unwrap().unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn known_value() {
        let x = full(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let y = full(&[2.0, 4.0, 5.0, 4.0, 5.0]);
        // r = 6 / sqrt(10 * 6)
        let expected = 6.0 / 60.0_f64.sqrt();
        assert!((pearson(&x, &y).unwrap().unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn missing_values_are_excluded_pairwise() {
        let x = column(&[Some(1.0), None, Some(3.0), Some(4.0)]);
        let y = column(&[Some(2.0), Some(100.0), Some(6.0), None]);
        // Complete pairs: (1, 2), (3, 6)
        assert!((pearson(&x, &y).unwrap().unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn undefined_cases() {
        assert_eq!(pearson(&full(&[]), &full(&[])).unwrap(), None);
        assert_eq!(pearson(&full(&[1.0]), &full(&[2.0])).unwrap(), None);
        assert_eq!(
            pearson(&full(&[1.0, 1.0, 1.0]), &full(&[1.0, 2.0, 3.0])).unwrap(),
            None
        );
        assert_eq!(
            pearson(
                &column(&[Some(1.0), None, Some(2.0)]),
                &column(&[None, Some(1.0), Some(3.0)])
            )
            .unwrap(),
            None
        );
    }

    #[test]
    fn constant_after_pair_filtering_is_undefined() {
        // Only rows 0 and 2 are complete; x is 5.0 on both.
        let x = column(&[Some(5.0), Some(9.0), Some(5.0)]);
        let y = column(&[Some(1.0), None, Some(2.0)]);
        assert_eq!(pearson(&x, &y).unwrap(), None);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        assert!(pearson(&full(&[1.0, 2.0]), &full(&[1.0, 2.0, 3.0])).is_err());
    }
}
