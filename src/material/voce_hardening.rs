use super::{ScalarInternalVariable, ScalarVariableState};
use crate::tensor::Symmetric;

/// Implements Voce isotropic hardening for a scalar internal variable
///
/// The variable saturates towards R with plastic flow:
///
/// ```text
/// ratep = δ (R - h)
/// ```
pub struct VoceHardening {
    /// Name of the state variable
    name: String,

    /// Saturation speed δ
    delta: f64,

    /// Saturated value R
    rs: f64,

    /// Initial value
    h0: f64,
}

impl VoceHardening {
    /// Allocates a new instance
    pub fn new(name: &str, delta: f64, rs: f64, h0: f64) -> Self {
        VoceHardening {
            name: name.to_string(),
            delta,
            rs,
            h0,
        }
    }
}

impl ScalarInternalVariable for VoceHardening {
    fn name(&self) -> &str {
        &self.name
    }

    fn initial_value(&self) -> f64 {
        self.h0
    }

    fn ratep(&self, state: &ScalarVariableState) -> f64 {
        self.delta * (self.rs - state.h)
    }

    fn d_ratep_d_h(&self, _state: &ScalarVariableState) -> f64 {
        -self.delta
    }

    fn d_ratep_d_a(&self, _state: &ScalarVariableState) -> f64 {
        0.0
    }

    fn d_ratep_d_adot(&self, _state: &ScalarVariableState) -> f64 {
        0.0
    }

    fn d_ratep_d_stress(&self, _state: &ScalarVariableState) -> Symmetric {
        Symmetric::zero()
    }

    fn d_ratep_d_direction(&self, _state: &ScalarVariableState) -> Symmetric {
        Symmetric::zero()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::VoceHardening;
    use crate::material::{ScalarInternalVariable, ScalarVariableState};
    use crate::state::History;
    use crate::tensor::SymmetricRef;
    use crate::StrError;
    use russell_lab::{approx_eq, deriv1_central5};

    fn sample_state<'a>(h: f64, stress: &'a [f64; 6], direction: &'a [f64; 6]) -> ScalarVariableState<'a> {
        ScalarVariableState {
            h,
            a: 0.05,
            adot: 0.01,
            stress: SymmetricRef::new(stress),
            direction: SymmetricRef::new(direction),
            temperature: 600.0,
        }
    }

    #[test]
    fn rate_saturates_at_rs() {
        let law = VoceHardening::new("iso", 10.0, 150.0, 0.0);
        let stress = [0.0; 6];
        let direction = [0.0; 6];
        let at_zero = sample_state(0.0, &stress, &direction);
        approx_eq(law.ratep(&at_zero), 1500.0, 1e-12);
        let at_saturation = sample_state(150.0, &stress, &direction);
        approx_eq(law.ratep(&at_saturation), 0.0, 1e-12);
    }

    #[test]
    fn derivative_matches_finite_differences() {
        let law = VoceHardening::new("iso", 10.0, 150.0, 0.0);
        let stress = [1.0, 2.0, 3.0, 0.1, 0.2, 0.3];
        let direction = [0.5, -0.5, 0.0, 0.1, 0.0, 0.0];
        let h0 = 40.0;
        let ana = law.d_ratep_d_h(&sample_state(h0, &stress, &direction));
        struct Args {}
        let mut args = Args {};
        let num = deriv1_central5(h0, &mut args, |h_at, _| {
            let state = sample_state(h_at, &stress, &direction);
            Ok(VoceHardening::new("iso", 10.0, 150.0, 0.0).ratep(&state))
        })
        .unwrap();
        approx_eq(ana, num, 1e-9);
    }

    #[test]
    fn history_cycle_works() -> Result<(), StrError> {
        let law = VoceHardening::new("iso", 10.0, 150.0, 25.0);
        let mut history = History::new();
        law.populate_history(&mut history)?;
        law.init_history(&mut history)?;
        assert_eq!(*history.get::<f64>("iso")?, 25.0);
        Ok(())
    }
}
