//! Statistical check that the draw shuffle picks every ordering equally often.
use drinkdraw_game::fisher_yates;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use std::collections::HashMap;

/// Largest pool whose orderings are enumerated (7! = 5040 cells).
pub const MAX_POOL_SIZE: usize = 7;

#[derive(Debug, Clone, Serialize)]
pub struct UniformityReport {
    pub seed: u64,
    pub pool_size: usize,
    pub samples: usize,
    pub orderings: usize,
    pub orderings_seen: usize,
    pub chi_square: f64,
    pub degrees_of_freedom: usize,
    pub critical_value: f64,
    /// Share of samples in which item `i` landed first; ideally `1 / pool_size`.
    pub first_position_rates: Vec<f64>,
    pub passed: bool,
}

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

/// Upper critical value of the chi-square distribution at p = 0.001.
///
/// Wilson–Hilferty approximation; accurate to a fraction of a percent from ~10 dof upward.
#[must_use]
pub fn chi_square_critical(degrees_of_freedom: usize) -> f64 {
    // z for the 0.999 quantile of the standard normal
    const Z: f64 = 3.090_232;
    #[allow(clippy::cast_precision_loss)]
    let k = degrees_of_freedom.max(1) as f64;
    let term = 2.0 / (9.0 * k);
    k * (1.0 - term + Z * term.sqrt()).powi(3)
}

#[allow(clippy::cast_precision_loss)]
fn statistic(counts: &HashMap<Vec<u8>, usize>, categories: usize, samples: usize) -> f64 {
    let expected = samples as f64 / categories as f64;
    let observed: f64 = counts
        .values()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum();
    let missing = categories.saturating_sub(counts.len()) as f64;
    observed + missing * expected
}

/// Shuffle `0..pool_size` `samples` times and test the ordering histogram.
///
/// `pool_size` is clamped to `2..=MAX_POOL_SIZE`.
#[must_use]
pub fn run_uniformity(pool_size: usize, samples: usize, seed: u64) -> UniformityReport {
    let pool_size = pool_size.clamp(2, MAX_POOL_SIZE);
    let orderings = factorial(pool_size);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut counts: HashMap<Vec<u8>, usize> = HashMap::with_capacity(orderings);
    let mut first = vec![0_usize; pool_size];

    let items: Vec<u8> = (0..pool_size).filter_map(|i| u8::try_from(i).ok()).collect();
    for _ in 0..samples {
        let mut shuffled = items.clone();
        fisher_yates(&mut shuffled, &mut rng);
        if let Some(&head) = shuffled.first() {
            first[usize::from(head)] += 1;
        }
        *counts.entry(shuffled).or_default() += 1;
    }

    let degrees_of_freedom = orderings - 1;
    let chi_square = statistic(&counts, orderings, samples.max(1));
    let critical_value = chi_square_critical(degrees_of_freedom);
    #[allow(clippy::cast_precision_loss)]
    let first_position_rates = first
        .iter()
        .map(|&hits| hits as f64 / samples.max(1) as f64)
        .collect();

    log::debug!(
        "uniformity seed={seed} n={pool_size} samples={samples} chi2={chi_square:.2} critical={critical_value:.2}"
    );

    UniformityReport {
        seed,
        pool_size,
        samples,
        orderings,
        orderings_seen: counts.len(),
        chi_square,
        degrees_of_freedom,
        critical_value,
        first_position_rates,
        passed: chi_square < critical_value,
    }
}

/// Samples needed for roughly `per_cell` expected hits per ordering.
#[must_use]
pub fn recommended_samples(pool_size: usize, per_cell: usize) -> usize {
    factorial(pool_size.clamp(2, MAX_POOL_SIZE)) * per_cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_values_track_the_table() {
        // Table values at p = 0.001.
        assert!((chi_square_critical(23) - 49.73).abs() < 0.5);
        assert!((chi_square_critical(119) - 172.4).abs() < 1.0);
        assert!(chi_square_critical(5) > chi_square_critical(1));
    }

    #[test]
    fn four_item_pool_is_uniform() {
        let report = run_uniformity(4, recommended_samples(4, 1000), 0x5EED);
        assert_eq!(report.orderings, 24);
        assert_eq!(report.orderings_seen, 24);
        assert_eq!(report.degrees_of_freedom, 23);
        assert!(report.passed, "chi-square {:.2}", report.chi_square);
        for rate in &report.first_position_rates {
            assert!((rate - 0.25).abs() < 0.02, "first-position rate {rate}");
        }
    }

    #[test]
    fn pool_size_is_clamped() {
        let report = run_uniformity(50, 100, 1);
        assert_eq!(report.pool_size, MAX_POOL_SIZE);
        let report = run_uniformity(0, 100, 1);
        assert_eq!(report.pool_size, 2);
        assert_eq!(report.orderings, 2);
    }
}
