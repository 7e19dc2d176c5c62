//! Small numeric helpers for building figure data.

/// `n` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Index of the smallest value. NaNs are never selected.
pub fn argmin(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
}

/// Ordinary least-squares line through the points, as `(slope, intercept)`.
///
/// `None` when fewer than two points are given or all x values coincide.
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Option<(f64, f64)> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }
    let count = n as f64;
    let mean_x = xs[..n].iter().sum::<f64>() / count;
    let mean_y = ys[..n].iter().sum::<f64>() / count;

    let (sxy, sxx) = xs[..n]
        .iter()
        .zip(&ys[..n])
        .fold((0.0, 0.0), |(sxy, sxx), (&x, &y)| {
            let dx = x - mean_x;
            (dx.mul_add(y - mean_y, sxy), dx.mul_add(dx, sxx))
        });

    if sxx.abs() < f64::EPSILON {
        return None;
    }
    let slope = sxy / sxx;
    Some((slope, slope.mul_add(-mean_x, mean_y)))
}
