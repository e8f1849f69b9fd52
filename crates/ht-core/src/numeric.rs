use crate::HtError;

/// Pass `v` through when it is finite.
pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, HtError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HtError::NonFinite { what, value: v })
    }
}

/// Check that `v` is finite and lies in the closed interval `[min, max]`.
pub fn ensure_in_range(v: f64, min: f64, max: f64, what: &'static str) -> Result<f64, HtError> {
    let v = ensure_finite(v, what)?;
    if v < min || v > max {
        return Err(HtError::OutOfRange {
            what,
            value: v,
            min,
            max,
        });
    }
    Ok(v)
}
