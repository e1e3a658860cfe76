use std::f64::consts::PI;

use crate::{StatsError, StatsResult, ensure_finite};

/// Number of support points per violin.
pub const DEFAULT_GRIDSIZE: usize = 100;

/// How far past the extreme observations the support extends, in bandwidths.
pub const DEFAULT_CUT: f64 = 2.0;

/// Univariate Gaussian kernel density estimate.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    sample: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Fits with Scott's rule: `n^(-1/5)` times the sample standard deviation.
    pub fn new(sample: &[f64]) -> StatsResult<Self> {
        ensure_finite(sample)?;
        if sample.len() < 2 {
            return Err(StatsError::TooFewObservations {
                needed: 2,
                got: sample.len(),
            });
        }

        let sd = sample_std(sample);
        if sd <= 0.0 {
            return Err(StatsError::ZeroVariance);
        }

        Ok(Self {
            sample: sample.to_vec(),
            bandwidth: scott_factor(sample.len()) * sd,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.sample.len() as f64;
        let norm = 1.0 / (n * self.bandwidth * (2.0 * PI).sqrt());
        self.sample
            .iter()
            .map(|xi| {
                let z = (x - xi) / self.bandwidth;
                (-0.5 * z * z).exp()
            })
            .sum::<f64>()
            * norm
    }
}

pub fn scott_factor(n: usize) -> f64 {
    (n as f64).powf(-0.2)
}

/// Standard deviation with one delta degree of freedom.
fn sample_std(sample: &[f64]) -> f64 {
    let n = sample.len() as f64;
    let mean = sample.iter().sum::<f64>() / n;
    let ss: f64 = sample.iter().map(|v| (v - mean).powi(2)).sum();
    (ss / (n - 1.0)).sqrt()
}

/// Density along a violin's vertical axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Density {
    pub support: Vec<f64>,
    pub density: Vec<f64>,
}

impl Density {
    /// One support point: a single observation or a constant sample.
    pub fn is_degenerate(&self) -> bool {
        self.support.len() == 1
    }

    pub fn max(&self) -> f64 {
        self.density.iter().copied().fold(0.0, f64::max)
    }
}

pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            (0..n).map(|i| lo + step * i as f64).collect()
        }
    }
}

/// Evaluates the KDE of `sample` on `gridsize` points spanning the data
/// extended by `cut` bandwidths on each side.
pub fn violin_density(sample: &[f64], gridsize: usize, cut: f64) -> StatsResult<Density> {
    if sample.is_empty() {
        return Err(StatsError::Empty);
    }
    ensure_finite(sample)?;

    let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if sample.len() == 1 || min == max {
        return Ok(Density {
            support: vec![min],
            density: vec![1.0],
        });
    }

    let kde = GaussianKde::new(sample)?;
    let bw = kde.bandwidth();
    let support = linspace(min - cut * bw, max + cut * bw, gridsize);
    let density = support.iter().map(|&x| kde.evaluate(x)).collect();
    Ok(Density { support, density })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scott_bandwidth_matches_hand_computation() {
        // std([1, 3], ddof=1) = sqrt(2); factor = 2^-0.2
        let kde = GaussianKde::new(&[1.0, 3.0]).unwrap();
        let expected = 2f64.sqrt() * 2f64.powf(-0.2);
        assert!((kde.bandwidth() - expected).abs() < 1e-12);
    }

    #[test]
    fn kde_rejects_constant_sample() {
        assert_eq!(
            GaussianKde::new(&[2.0, 2.0]).unwrap_err(),
            StatsError::ZeroVariance
        );
        assert!(matches!(
            GaussianKde::new(&[2.0]),
            Err(StatsError::TooFewObservations { needed: 2, got: 1 })
        ));
    }

    #[test]
    fn linspace_endpoints() {
        let xs = linspace(0.0, 1.0, 5);
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn density_is_symmetric_for_symmetric_sample() {
        let d = violin_density(&[-1.0, 0.0, 1.0], 101, DEFAULT_CUT).unwrap();
        let n = d.density.len();
        for i in 0..n / 2 {
            assert!((d.density[i] - d.density[n - 1 - i]).abs() < 1e-12);
        }
        assert_eq!(d.support.len(), 101);
    }

    #[test]
    fn single_observation_is_degenerate() {
        let d = violin_density(&[5.0], DEFAULT_GRIDSIZE, DEFAULT_CUT).unwrap();
        assert!(d.is_degenerate());
        assert_eq!(d.support, vec![5.0]);
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(matches!(
            violin_density(&[1.0, f64::NAN], DEFAULT_GRIDSIZE, DEFAULT_CUT),
            Err(StatsError::NonFinite { .. })
        ));
    }
}
