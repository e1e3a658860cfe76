use crate::{StatsError, StatsResult, ensure_finite};

/// Whisker reach in multiples of the interquartile range.
pub const WHISKER_IQR: f64 = 1.5;

/// Percentile of an ascending-sorted slice, `q` in `[0, 100]`, with linear
/// interpolation between closest ranks.
pub fn percentile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    let pos = (q / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Box-and-whisker summary of one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub n: usize,
}

impl BoxStats {
    /// Whiskers end at the most extreme observations within
    /// `WHISKER_IQR * IQR` of the box, never inside the box.
    pub fn from_sample(sample: &[f64]) -> StatsResult<Self> {
        if sample.is_empty() {
            return Err(StatsError::Empty);
        }
        ensure_finite(sample)?;

        let mut sorted = sample.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = percentile(&sorted, 25.0);
        let median = percentile(&sorted, 50.0);
        let q3 = percentile(&sorted, 75.0);
        let iqr = q3 - q1;
        let lo_limit = q1 - WHISKER_IQR * iqr;
        let hi_limit = q3 + WHISKER_IQR * iqr;

        let whisker_low = sorted
            .iter()
            .copied()
            .find(|v| *v >= lo_limit)
            .filter(|v| *v <= q1)
            .unwrap_or(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|v| *v <= hi_limit)
            .filter(|v| *v >= q3)
            .unwrap_or(q3);

        Ok(Self {
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            n: sorted.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_interpolates() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&xs, 0.0), 1.0);
        assert_eq!(percentile(&xs, 100.0), 4.0);
        assert_eq!(percentile(&xs, 50.0), 2.5);
        assert_eq!(percentile(&xs, 25.0), 1.75);
    }

    #[test]
    fn two_point_box() {
        let b = BoxStats::from_sample(&[3.0, 1.0]).unwrap();
        assert_eq!(b.median, 2.0);
        assert_eq!(b.q1, 1.5);
        assert_eq!(b.q3, 2.5);
        assert_eq!(b.whisker_low, 1.0);
        assert_eq!(b.whisker_high, 3.0);
        assert_eq!(b.n, 2);
    }

    #[test]
    fn outliers_are_beyond_whiskers() {
        let b = BoxStats::from_sample(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
        assert!(b.whisker_high < 100.0);
        assert_eq!(b.whisker_high, 5.0);
        assert_eq!(b.whisker_low, 1.0);
    }

    #[test]
    fn single_observation_collapses() {
        let b = BoxStats::from_sample(&[5.0]).unwrap();
        assert_eq!(b.q1, 5.0);
        assert_eq!(b.whisker_low, 5.0);
        assert_eq!(b.whisker_high, 5.0);
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(BoxStats::from_sample(&[]).unwrap_err(), StatsError::Empty);
    }
}
