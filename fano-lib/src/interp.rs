/// Piecewise-linear interpolation (numpy.interp semantics).
///
/// Interpolates values from `(xp, fp)` at points `x`. Values outside the
/// tabulated range are clamped to the boundary values.
pub fn interp(x: &[f64], xp: &[f64], fp: &[f64]) -> Vec<f64> {
    x.iter().map(|&xi| interp_one(xi, xp, fp)).collect()
}

/// Interpolate a single value.
///
/// `xp` must be strictly increasing with at least two points and `fp` of the
/// same length. A query equal to a knot returns that knot's value exactly;
/// NaN propagates.
pub fn interp_one(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    debug_assert!(xp.len() >= 2 && xp.len() == fp.len());

    if x.is_nan() {
        return f64::NAN;
    }
    let last = xp.len() - 1;
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[last] {
        return fp[last];
    }

    // First knot at or above x; xp[0] < x < xp[last] keeps it in 1..=last.
    let hi = xp.partition_point(|&v| v < x);
    if xp[hi] == x {
        return fp[hi];
    }

    let lo = hi - 1;
    let t = (x - xp[lo]) / (xp[hi] - xp[lo]);
    fp[lo] + t * (fp[hi] - fp[lo])
}
