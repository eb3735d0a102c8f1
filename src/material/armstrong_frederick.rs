use super::{SymmetricInternalVariable, SymmetricVariableState};
use crate::tensor::Symmetric;
use russell_lab::Matrix;

/// Implements Armstrong-Frederick evolution of a back-stress tensor
///
/// The back stress X grows along the flow direction and relaxes towards zero
/// with further plastic flow (dynamic recovery):
///
/// ```text
/// ratep = ⅔ C g - γ X
/// ```
pub struct ArmstrongFrederick {
    /// Name of the state variable
    name: String,

    /// Hardening modulus C
    cc: f64,

    /// Dynamic recovery coefficient γ
    gamma: f64,
}

impl ArmstrongFrederick {
    /// Allocates a new instance
    pub fn new(name: &str, cc: f64, gamma: f64) -> Self {
        ArmstrongFrederick {
            name: name.to_string(),
            cc,
            gamma,
        }
    }
}

impl SymmetricInternalVariable for ArmstrongFrederick {
    fn name(&self) -> &str {
        &self.name
    }

    fn initial_value(&self) -> Symmetric {
        Symmetric::zero()
    }

    fn ratep(&self, state: &SymmetricVariableState) -> Symmetric {
        let g = state.direction.to_owned();
        let x = state.h.to_owned();
        let mut rate = [0.0; 6];
        for m in 0..6 {
            rate[m] = 2.0 / 3.0 * self.cc * g.as_data()[m] - self.gamma * x.as_data()[m];
        }
        Symmetric::from_mandel(rate)
    }

    fn d_ratep_d_h(&self, _state: &SymmetricVariableState) -> Matrix {
        let mut dd = Matrix::new(6, 6);
        for m in 0..6 {
            dd.set(m, m, -self.gamma);
        }
        dd
    }

    fn d_ratep_d_a(&self, _state: &SymmetricVariableState) -> Symmetric {
        Symmetric::zero()
    }

    fn d_ratep_d_adot(&self, _state: &SymmetricVariableState) -> Symmetric {
        Symmetric::zero()
    }

    fn d_ratep_d_stress(&self, _state: &SymmetricVariableState) -> Matrix {
        Matrix::new(6, 6)
    }

    fn d_ratep_d_direction(&self, _state: &SymmetricVariableState) -> Matrix {
        let mut dd = Matrix::new(6, 6);
        for m in 0..6 {
            dd.set(m, m, 2.0 / 3.0 * self.cc);
        }
        dd
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
