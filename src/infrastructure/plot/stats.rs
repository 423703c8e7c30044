// ============================================================
// SERIES STATISTICS
// ============================================================
// Binning and kernel density math backing histogram/density charts

/// A single histogram bin: [start, end) and its count
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Bin `values` into `bin_count` equal-width bins.
///
/// A constant series gets its range padded by 0.5 on each side so the
/// single occupied bin still has a drawable width.
pub fn histogram_bins(values: &[f64], bin_count: usize) -> Vec<Bin> {
    if values.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min == max {
        min -= 0.5;
        max += 0.5;
    }

    let width = (max - min) / bin_count as f64;
    let mut counts = vec![0usize; bin_count];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bin_count - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

/// Normalized bin heights so the histogram integrates to 1
pub fn bin_densities(bins: &[Bin], total: usize) -> Vec<(f64, f64, f64)> {
    bins.iter()
        .map(|b| {
            let width = b.end - b.start;
            let density = if total == 0 || width == 0.0 {
                0.0
            } else {
                b.count as f64 / (total as f64 * width)
            };
            (b.start, b.end, density)
        })
        .collect()
}

/// Gaussian kernel density estimate sampled at `points` positions.
///
/// Bandwidth follows Scott's rule, `std * n^(-1/5)`, with a floor for
/// constant series.
pub fn kde_curve(values: &[f64], points: usize) -> Vec<(f64, f64)> {
    if values.is_empty() || points < 2 {
        return Vec::new();
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();
    let bandwidth = (std * n.powf(-0.2)).max(1e-3);

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    let lo = min - 3.0 * bandwidth;
    let hi = max + 3.0 * bandwidth;
    let step = (hi - lo) / (points - 1) as f64;

    let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    (0..points)
        .map(|i| {
            let x = lo + i as f64 * step;
            let y = values
                .iter()
                .map(|&v| {
                    let t = (x - v) / bandwidth;
                    (-0.5 * t * t).exp()
                })
                .sum::<f64>()
                * norm;
            (x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bins_cover_all_values() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let bins = histogram_bins(&values, 4);
        assert_eq!(bins.len(), 4);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        // Max value lands in the last bin, not out of range
        assert_eq!(bins.last().unwrap().count, 1);
    }

    #[test]
    fn test_constant_series_gets_padded_range() {
        let bins = histogram_bins(&[2.0, 2.0, 2.0], 3);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
        assert!(bins[0].start < 2.0 && bins.last().unwrap().end > 2.0);
    }

    #[test]
    fn test_densities_integrate_to_one() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let bins = histogram_bins(&values, 10);
        let area: f64 = bin_densities(&bins, values.len())
            .iter()
            .map(|(s, e, d)| (e - s) * d)
            .sum();
        assert!((area - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_kde_is_positive_and_peaks_near_data() {
        let values = [0.0, 0.1, -0.1, 0.05];
        let curve = kde_curve(&values, 101);
        assert_eq!(curve.len(), 101);
        assert!(curve.iter().all(|(_, y)| *y >= 0.0));
        let peak = curve
            .iter()
            .cloned()
            .fold((0.0, f64::NEG_INFINITY), |acc, p| {
                if p.1 > acc.1 {
                    p
                } else {
                    acc
                }
            });
        assert!(peak.0.abs() < 0.5);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(histogram_bins(&[], 10).is_empty());
        assert!(kde_curve(&[], 100).is_empty());
    }
}
