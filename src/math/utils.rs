/// Clamps `val` to `[lo, hi]`. A NaN `val` passes through unchanged, and
/// `lo > hi` is not checked: values below `lo` still map to `lo`.
#[inline]
pub fn fclamp(val: f64, lo: f64, hi: f64) -> f64 {
    if val < lo {
        lo
    } else if val > hi {
        hi
    } else {
        val
    }
}

/// Smaller of `a` and `b`. Unlike [`f64::min`], a NaN operand makes the
/// result NaN, and `-0.0` is smaller than `0.0`. Negative infinity wins over
/// NaN.
#[inline]
pub fn fmin(a: f64, b: f64) -> f64 {
    if a == f64::NEG_INFINITY || b == f64::NEG_INFINITY {
        f64::NEG_INFINITY
    } else if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a == 0.0 && a == b {
        if a.is_sign_negative() { a } else { b }
    } else if a < b {
        a
    } else {
        b
    }
}

/// Larger of `a` and `b`, with the same NaN and signed zero rules as
/// [`fmin`]. Positive infinity wins over NaN.
#[inline]
pub fn fmax(a: f64, b: f64) -> f64 {
    if a == f64::INFINITY || b == f64::INFINITY {
        f64::INFINITY
    } else if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a == 0.0 && a == b {
        if a.is_sign_negative() { b } else { a }
    } else if a > b {
        a
    } else {
        b
    }
}
