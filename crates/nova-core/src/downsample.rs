// File: crates/nova-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets downsampling for long points/lines series.

/// Indices kept by LTTB over the paired `x`/`y` slices: the first and last points plus the
/// point of each bucket spanning the largest triangle with its neighbours. At most
/// `threshold` indices are returned, in increasing order.
pub fn lttb_indices(x: &[f64], y: &[f64], threshold: usize) -> Vec<usize> {
    let n = x.len().min(y.len());
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return (0..n).collect(); }
    if threshold == 1 { return vec![0]; }
    if threshold == 2 { return vec![0, n - 1]; }

    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let mut kept = Vec::with_capacity(threshold);
    kept.push(0);

    let mut a = 0usize;
    for i in 0..(threshold - 2) {
        let start = (1.0 + i as f64 * bucket_size).floor() as usize;
        let end = ((1.0 + (i + 1) as f64 * bucket_size).floor() as usize).min(n - 1);

        // average of the next bucket
        let next_end = ((1.0 + (i + 2) as f64 * bucket_size).floor() as usize).min(n - 1);
        let rs = end.max(1);
        let re = next_end.max(rs + 1).min(n);
        let count = (re - rs) as f64;
        let avg_x = x[rs..re].iter().sum::<f64>() / count;
        let avg_y = y[rs..re].iter().sum::<f64>() / count;

        let (ax, ay) = (x[a], y[a]);
        let mut max_area = -1.0f64;
        let mut max_idx = start;
        for k in start..end.max(start + 1) {
            let area = ((ax - x[k]) * (avg_y - ay) - (ax - avg_x) * (y[k] - ay)).abs();
            if area > max_area {
                max_area = area;
                max_idx = k;
            }
        }
        kept.push(max_idx);
        a = max_idx;
    }

    kept.push(n - 1);
    kept
}

/// LTTB over `(x, y)` pairs; returns up to `threshold` points preserving the overall shape.
pub fn lttb(points: &[(f64, f64)], threshold: usize) -> Vec<(f64, f64)> {
    let (x, y): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
    lttb_indices(&x, &y, threshold).into_iter().map(|i| points[i]).collect()
}
