//! Index-based thinning of a recorded series.

/// Reduce `series` to at most `target` samples.
///
/// The first and last samples are always kept; interior sample `i` comes from
/// index `round(i·(n−1)/(k−1))`. Series already within the target are returned
/// unchanged.
pub fn downsample<T: Clone>(series: Vec<T>, target: usize) -> Vec<T> {
    let n = series.len();
    let target = target.max(2);
    if n <= target {
        return series;
    }

    let step = (n - 1) as f64 / (target - 1) as f64;
    let mut out = Vec::with_capacity(target);
    out.push(series[0].clone());
    for i in 1..target - 1 {
        let idx = ((i as f64) * step).round() as usize;
        out.push(series[idx.min(n - 1)].clone());
    }
    out.push(series[n - 1].clone());
    out
}
