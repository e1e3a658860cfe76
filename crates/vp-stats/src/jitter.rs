use rand::Rng;

/// Uniform offsets in `[-half_width, half_width]`, one per observation.
pub fn jitter<R: Rng + ?Sized>(n: usize, half_width: f64, rng: &mut R) -> Vec<f64> {
    if half_width <= 0.0 {
        return vec![0.0; n];
    }
    (0..n)
        .map(|_| rng.random_range(-half_width..=half_width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn offsets_stay_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        let offsets = jitter(500, 0.08, &mut rng);
        assert_eq!(offsets.len(), 500);
        assert!(offsets.iter().all(|o| o.abs() <= 0.08));
        assert!(offsets.iter().any(|o| *o != 0.0));
    }

    #[test]
    fn zero_width_means_no_jitter() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(jitter(3, 0.0, &mut rng), vec![0.0; 3]);
    }

    #[test]
    fn same_seed_same_offsets() {
        let a = jitter(10, 0.1, &mut StdRng::seed_from_u64(42));
        let b = jitter(10, 0.1, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
