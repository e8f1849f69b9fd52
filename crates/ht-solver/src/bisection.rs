//! Bracketing bisection for a decreasing scalar function.

use tracing::{debug, trace};

/// Bisection solver configuration.
#[derive(Clone, Debug)]
pub struct BisectionConfig {
    /// Maximum bisection iterations
    pub max_iterations: usize,
    /// Absolute tolerance on |f(mid)|
    pub tolerance: f64,
    /// Initial distance of the upper bound above the lower bound
    pub initial_span: f64,
    /// Factor applied to the upper bound while f(upper) stays positive
    pub expansion_factor: f64,
    /// Upper bound stops expanding once it is this far above the lower bound
    pub max_span: f64,
}

impl Default for BisectionConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-3,
            initial_span: 1000.0,
            expansion_factor: 1.5,
            max_span: 5000.0,
        }
    }
}

/// Bisection result.
#[derive(Clone, Debug)]
pub struct BisectionResult {
    /// Best estimate of the root
    pub root: f64,
    /// f(root)
    pub residual: f64,
    /// Number of midpoint evaluations
    pub iterations: usize,
    /// Converged flag (false when the iteration cap was hit)
    pub converged: bool,
}

/// Push the upper bound up until `f(upper) <= 0` or the span cap is reached.
///
/// The bound is scaled multiplicatively, so it can overshoot the cap by one
/// expansion step.
pub fn expand_upper_bound<F>(f: &F, lower: f64, config: &BisectionConfig) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut upper = lower + config.initial_span;
    let cap = lower + config.max_span;
    while f(upper) > 0.0 && upper < cap {
        upper *= config.expansion_factor;
        debug!(upper, "expanding equilibrium bracket");
    }
    upper
}

/// Bisection on `[lower, upper]` for a function positive below its root and
/// non-positive above it.
///
/// Never fails: if the tolerance is not met within `max_iterations`, the
/// midpoint of the final bracket is returned with `converged == false`.
pub fn bisect<F>(f: F, mut lower: f64, mut upper: f64, config: &BisectionConfig) -> BisectionResult
where
    F: Fn(f64) -> f64,
{
    for iter in 0..config.max_iterations {
        let mid = 0.5 * (lower + upper);
        let value = f(mid);
        trace!(iter, mid, value, "bisection step");

        if value.abs() < config.tolerance {
            return BisectionResult {
                root: mid,
                residual: value,
                iterations: iter + 1,
                converged: true,
            };
        }

        if value > 0.0 {
            lower = mid;
        } else {
            upper = mid;
        }
    }

    let root = 0.5 * (lower + upper);
    debug!(
        root,
        max_iterations = config.max_iterations,
        "bisection hit iteration cap, returning bracket midpoint"
    );
    BisectionResult {
        root,
        residual: f(root),
        iterations: config.max_iterations,
        converged: false,
    }
}
