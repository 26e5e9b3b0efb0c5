//! Statistical tests backing the selectors.
//!
//! Test statistics are computed directly on the sample vectors; p-values
//! come from the matching `statrs` distributions. Undefined outcomes
//! (constant input, zero pooled variance) surface as NaN, which no
//! selection filter accepts.

use statrs::distribution::{ContinuousCDF, FisherSnedecor, Normal, StudentsT};

/// Outcome of a group-comparison test.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TestOutcome {
    pub statistic: f64,
    pub p_value: f64,
}

/// Pearson coefficient with its two-sided p-value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Correlation {
    pub r: f64,
    pub p_value: f64,
}

/// Pearson product-moment correlation between two equally long samples.
///
/// The p-value uses the Student-t transform on n - 2 degrees of freedom,
/// so at least 3 observations are required; fewer, or a constant input,
/// yield NaN.
pub(crate) fn pearson(x: &[f64], y: &[f64]) -> Correlation {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len();
    if n < 3 {
        return Correlation {
            r: f64::NAN,
            p_value: f64::NAN,
        };
    }

    let nf = n as f64;
    let mean_x = x.iter().sum::<f64>() / nf;
    let mean_y = y.iter().sum::<f64>() / nf;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= 0.0 || var_y <= 0.0 {
        return Correlation {
            r: f64::NAN,
            p_value: f64::NAN,
        };
    }

    let r = (cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0);
    let df = nf - 2.0;
    let p_value = if 1.0 - r * r <= f64::EPSILON {
        // Perfectly collinear samples.
        0.0
    } else {
        let t = r * (df / (1.0 - r * r)).sqrt();
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0),
            Err(_) => f64::NAN,
        }
    };

    Correlation { r, p_value }
}

/// Two-sided Mann-Whitney U test.
///
/// Normal approximation with midrank ties, tie-corrected variance and
/// continuity correction. The statistic is U of the first sample.
pub(crate) fn mann_whitney_u(a: &[f64], b: &[f64]) -> TestOutcome {
    if a.is_empty() || b.is_empty() {
        return TestOutcome {
            statistic: f64::NAN,
            p_value: f64::NAN,
        };
    }

    let n1 = a.len() as f64;
    let n2 = b.len() as f64;
    let n = n1 + n2;
    let (rank_sum_a, tie_term) = pooled_midranks(a, b);

    let u1 = rank_sum_a - n1 * (n1 + 1.0) / 2.0;
    let mean_u = n1 * n2 / 2.0;
    let variance = n1 * n2 / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)));
    if variance <= 0.0 {
        // Every pooled value tied: the ranking carries no information.
        return TestOutcome {
            statistic: u1,
            p_value: f64::NAN,
        };
    }

    let z = ((u1 - mean_u).abs() - 0.5).max(0.0) / variance.sqrt();
    let p_value = match Normal::new(0.0, 1.0) {
        Ok(dist) => (2.0 * (1.0 - dist.cdf(z))).clamp(0.0, 1.0),
        Err(_) => f64::NAN,
    };

    TestOutcome {
        statistic: u1,
        p_value,
    }
}

/// Classic one-way ANOVA F-test across `groups`.
pub(crate) fn one_way_anova(groups: &[Vec<f64>]) -> TestOutcome {
    let k = groups.len();
    let n_total: usize = groups.iter().map(Vec::len).sum();
    if k < 2 || n_total <= k || groups.iter().any(Vec::is_empty) {
        return TestOutcome {
            statistic: f64::NAN,
            p_value: f64::NAN,
        };
    }

    let grand_mean = groups.iter().flatten().sum::<f64>() / n_total as f64;
    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for group in groups {
        let mean = group.iter().sum::<f64>() / group.len() as f64;
        ss_between += group.len() as f64 * (mean - grand_mean).powi(2);
        ss_within += group.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    }

    let df_between = (k - 1) as f64;
    let df_within = (n_total - k) as f64;
    let ms_between = ss_between / df_between;
    let ms_within = ss_within / df_within;

    if ms_within <= 0.0 {
        // No within-group variance: perfect separation, or all values
        // identical everywhere.
        return if ms_between > 0.0 {
            TestOutcome {
                statistic: f64::INFINITY,
                p_value: 0.0,
            }
        } else {
            TestOutcome {
                statistic: f64::NAN,
                p_value: f64::NAN,
            }
        };
    }

    let f_stat = ms_between / ms_within;
    let p_value = match FisherSnedecor::new(df_between, df_within) {
        Ok(dist) => (1.0 - dist.cdf(f_stat)).clamp(0.0, 1.0),
        Err(_) => f64::NAN,
    };

    TestOutcome {
        statistic: f_stat,
        p_value,
    }
}

/// Rank the pooled samples with midranks for ties.
///
/// Returns the rank sum of the first sample and the tie correction term
/// `sum(t^3 - t)` over tie groups of size `t`.
fn pooled_midranks(a: &[f64], b: &[f64]) -> (f64, f64) {
    let mut pooled: Vec<(f64, bool)> = a
        .iter()
        .map(|v| (*v, true))
        .chain(b.iter().map(|v| (*v, false)))
        .collect();
    pooled.sort_by(|x, y| x.0.partial_cmp(&y.0).unwrap_or(std::cmp::Ordering::Equal));

    let n = pooled.len();
    let mut rank_sum_a = 0.0;
    let mut tie_term = 0.0;
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && pooled[j + 1].0 == pooled[i].0 {
            j += 1;
        }
        // 1-based average rank of positions i..=j.
        let rank = (i + j) as f64 / 2.0 + 1.0;
        for entry in &pooled[i..=j] {
            if entry.1 {
                rank_sum_a += rank;
            }
        }
        let count = (j - i + 1) as f64;
        if count > 1.0 {
            tie_term += count * count * count - count;
        }
        i = j + 1;
    }
    (rank_sum_a, tie_term)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== pearson tests ====================

    #[test]
    fn test_pearson_perfect_positive() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        let result = pearson(&x, &y);
        assert!(result.r > 0.9999);
        assert!(result.p_value < 1e-9);
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [10.0, 8.0, 6.0, 4.0, 2.0];
        let result = pearson(&x, &y);
        assert!(result.r < -0.9999);
        assert!(result.p_value < 1e-9);
    }

    #[test]
    fn test_pearson_zero_correlation() {
        // Covariance is exactly zero for this pairing.
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.0, 2.0, 1.0, 2.0, 1.0];
        let result = pearson(&x, &y);
        assert!(result.r.abs() < 1e-12);
        assert!((result.p_value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pearson_moderate_correlation() {
        // r = 12 / sqrt(10 * 21.2) ~= 0.8242, t ~= 2.52 on 3 df,
        // two-sided p ~= 0.086.
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 1.0, 4.0, 3.0, 7.0];
        let result = pearson(&x, &y);
        assert!((result.r - 0.8242).abs() < 1e-3);
        assert!(result.p_value > 0.05 && result.p_value < 0.13);
    }

    #[test]
    fn test_pearson_constant_input_is_nan() {
        let x = [3.0, 3.0, 3.0, 3.0];
        let y = [1.0, 2.0, 3.0, 4.0];
        let result = pearson(&x, &y);
        assert!(result.r.is_nan());
        assert!(result.p_value.is_nan());
    }

    #[test]
    fn test_pearson_too_few_observations_is_nan() {
        let result = pearson(&[1.0, 2.0], &[2.0, 4.0]);
        assert!(result.r.is_nan());
        assert!(result.p_value.is_nan());
    }

    // ==================== mann_whitney_u tests ====================

    #[test]
    fn test_mann_whitney_clear_shift() {
        let a: Vec<f64> = (1..=10).map(|v| v as f64).collect();
        let b: Vec<f64> = (101..=110).map(|v| v as f64).collect();
        let result = mann_whitney_u(&a, &b);
        // Complete separation: U of the first sample is 0.
        assert_eq!(result.statistic, 0.0);
        assert!(result.p_value < 0.001);
    }

    #[test]
    fn test_mann_whitney_identical_samples() {
        let a = [1.0, 2.0, 3.0];
        let b = [1.0, 2.0, 3.0];
        let result = mann_whitney_u(&a, &b);
        assert!((result.p_value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_mann_whitney_small_shift_two_sided() {
        // n1 = n2 = 6, complete separation: z = (18 - 0.5) / sqrt(39),
        // two-sided p ~= 0.0051.
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = [101.0, 102.0, 103.0, 104.0, 105.0, 106.0];
        let result = mann_whitney_u(&a, &b);
        assert!((result.p_value - 0.0051).abs() < 5e-4);
    }

    #[test]
    fn test_mann_whitney_all_tied_is_nan() {
        let a = [5.0, 5.0];
        let b = [5.0, 5.0];
        let result = mann_whitney_u(&a, &b);
        assert!(result.p_value.is_nan());
    }

    // ==================== one_way_anova tests ====================

    #[test]
    fn test_anova_identical_groups() {
        let groups = vec![
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
        ];
        let result = one_way_anova(&groups);
        assert!(result.statistic.abs() < 1e-12);
        assert!((result.p_value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_anova_strong_separation() {
        let groups = vec![
            vec![0.9, 1.0, 1.1],
            vec![4.9, 5.0, 5.1],
            vec![8.9, 9.0, 9.1],
        ];
        let result = one_way_anova(&groups);
        assert!(result.statistic > 100.0);
        assert!(result.p_value < 1e-6);
    }

    #[test]
    fn test_anova_zero_within_variance() {
        let groups = vec![vec![1.0, 1.0], vec![2.0, 2.0]];
        let result = one_way_anova(&groups);
        assert_eq!(result.p_value, 0.0);
        assert!(result.statistic.is_infinite());
    }

    #[test]
    fn test_anova_single_group_is_nan() {
        let groups = vec![vec![1.0, 2.0, 3.0]];
        let result = one_way_anova(&groups);
        assert!(result.p_value.is_nan());
    }

    // ==================== pooled_midranks tests ====================

    #[test]
    fn test_midranks_without_ties() {
        // a = {1, 3}, b = {2, 4}: ranks of a are 1 and 3.
        let (rank_sum_a, tie_term) = pooled_midranks(&[1.0, 3.0], &[2.0, 4.0]);
        assert_eq!(rank_sum_a, 4.0);
        assert_eq!(tie_term, 0.0);
    }

    #[test]
    fn test_midranks_with_ties() {
        // Pooled sorted: 1, 2, 2, 3 -> the tied pair shares rank 2.5.
        let (rank_sum_a, tie_term) = pooled_midranks(&[1.0, 2.0], &[2.0, 3.0]);
        assert_eq!(rank_sum_a, 3.5);
        assert_eq!(tie_term, 6.0);
    }
}
