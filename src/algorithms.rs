use ncollide2d::na::RealField;

/// Finds the index `i` of the last value in a sorted slice such that `slice[i] <= test_value`,
/// clamped to 0 when the value precedes the whole slice. Used to locate the bracketing segment
/// for linear interpolation.
pub fn preceding_index_search<N: RealField + Copy>(slice: &[N], test_value: N) -> usize {
    if slice.len() <= 1 || slice[1] > test_value {
        return 0;
    }

    let mut a = 1;
    let mut b = slice.len() - 1;
    if slice[b] <= test_value {
        return b;
    }

    while b > a + 1 {
        let check = (a + b) / 2;
        if test_value >= slice[check] {
            a = check;
        } else {
            b = check;
        }
    }
    a
}

/// Linearly interpolates `y` at `x` over samples sorted by increasing `xs`. Values outside the
/// sampled range are clamped to the end values.
pub fn interpolate(xs: &[f64], ys: &[f64], x: f64) -> Option<f64> {
    let (first, last) = (*xs.first()?, *xs.last()?);
    if x <= first {
        return ys.first().copied();
    }
    if x >= last {
        return ys.last().copied();
    }

    let i = preceding_index_search(xs, x);
    let span = xs[i + 1] - xs[i];
    if span <= 0.0 {
        return Some(ys[i]);
    }

    let f = (x - xs[i]) / span;
    Some(ys[i] + f * (ys[i + 1] - ys[i]))
}

/// `n` evenly spaced values from `start` to `stop` inclusive. The last value is exactly `stop`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = stop;
            values
        }
    }
}

/// `n` values from `start` to `stop` clustered towards both ends with a half-cosine
pub fn cosine_space(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let span = stop - start;
            let mut values: Vec<f64> = (0..n)
                .map(|i| {
                    let beta = std::f64::consts::PI * i as f64 / (n - 1) as f64;
                    start + span * 0.5 * (1.0 - beta.cos())
                })
                .collect();
            values[n - 1] = stop;
            values
        }
    }
}
