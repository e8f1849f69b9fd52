//! Fixed-step time integrators.

use crate::model::TransientModel;

/// Trait for time integrators.
pub trait Integrator {
    /// Advance state by one time step using the transient model.
    fn step<M: TransientModel>(&self, model: &M, t: f64, x: &M::State, dt: f64) -> M::State;
}

/// Forward Euler (explicit, 1st order).
/// Calls rhs() once per step.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<M: TransientModel>(&self, model: &M, t: f64, x: &M::State, dt: f64) -> M::State {
        let xdot = model.rhs(t, x);
        model.add(x, &model.scale(&xdot, dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Decay;

    impl TransientModel for Decay {
        type State = f64;

        fn initial_state(&self) -> f64 {
            1.0
        }

        fn rhs(&self, _t: f64, x: &f64) -> f64 {
            -x
        }

        fn add(&self, a: &f64, b: &f64) -> f64 {
            a + b
        }

        fn scale(&self, a: &f64, scale: f64) -> f64 {
            a * scale
        }
    }

    #[test]
    fn euler_step_is_x_plus_dt_rhs() {
        let x1 = ForwardEuler.step(&Decay, 0.0, &1.0, 0.1);
        assert!((x1 - 0.9).abs() < 1e-15);
    }

    #[test]
    fn euler_converges_to_exponential() {
        let dt = 1e-4;
        let mut x = Decay.initial_state();
        let mut t = 0.0;
        while t < 1.0 - 0.5 * dt {
            x = ForwardEuler.step(&Decay, t, &x, dt);
            t += dt;
        }
        assert!((x - (-1.0_f64).exp()).abs() < 1e-4);
    }
}
