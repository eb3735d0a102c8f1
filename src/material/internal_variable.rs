use crate::state::History;
use crate::tensor::{Symmetric, SymmetricRef};
use crate::StrError;
use russell_lab::Matrix;

/// Holds the inputs a scalar internal-variable rate law sees at a material point
pub struct ScalarVariableState<'a> {
    /// Current value of the variable
    pub h: f64,

    /// Equivalent plastic strain
    pub a: f64,

    /// Equivalent plastic strain rate
    pub adot: f64,

    /// Stress tensor σ
    pub stress: SymmetricRef<'a>,

    /// Plastic flow direction g
    pub direction: SymmetricRef<'a>,

    /// Temperature
    pub temperature: f64,
}

/// Holds the inputs a symmetric internal-variable rate law sees at a material point
pub struct SymmetricVariableState<'a> {
    /// Current value of the variable
    pub h: SymmetricRef<'a>,

    /// Equivalent plastic strain
    pub a: f64,

    /// Equivalent plastic strain rate
    pub adot: f64,

    /// Stress tensor σ
    pub stress: SymmetricRef<'a>,

    /// Plastic flow direction g
    pub direction: SymmetricRef<'a>,

    /// Temperature
    pub temperature: f64,
}

/// Specifies the evolution of a scalar internal variable
///
/// The total rate decomposes into three contributions
///
/// ```text
/// ḣ = ratep · ȧ + ratet + ratetemp · Ṫ
/// ```
///
/// where ratep scales with the plastic strain rate, ratet is the static
/// (time) recovery term, and ratetemp scales with the temperature rate. The
/// time and temperature families default to zero since most hardening laws
/// only evolve with plastic flow.
pub trait ScalarInternalVariable {
    /// Returns the name of the state variable owned by this law
    fn name(&self) -> &str;

    /// Returns the initial value of the variable
    fn initial_value(&self) -> f64;

    /// Declares this law's variable into the history (setup phase)
    fn populate_history(&self, history: &mut History) -> Result<(), StrError> {
        history.declare::<f64>(self.name())
    }

    /// Writes the initial value into this law's own slot
    fn init_history(&self, history: &mut History) -> Result<(), StrError> {
        *history.get_mut::<f64>(self.name())? = self.initial_value();
        Ok(())
    }

    /// Rate contribution per unit equivalent plastic strain
    fn ratep(&self, state: &ScalarVariableState) -> f64;

    /// Derivative of ratep with respect to the variable itself
    fn d_ratep_d_h(&self, state: &ScalarVariableState) -> f64;

    /// Derivative of ratep with respect to the equivalent plastic strain
    fn d_ratep_d_a(&self, state: &ScalarVariableState) -> f64;

    /// Derivative of ratep with respect to the equivalent plastic strain rate
    fn d_ratep_d_adot(&self, state: &ScalarVariableState) -> f64;

    /// Derivative of ratep with respect to the stress
    fn d_ratep_d_stress(&self, state: &ScalarVariableState) -> Symmetric;

    /// Derivative of ratep with respect to the flow direction
    fn d_ratep_d_direction(&self, state: &ScalarVariableState) -> Symmetric;

    /// Static recovery rate (zero by default)
    fn ratet(&self, _state: &ScalarVariableState) -> f64 {
        0.0
    }

    /// Derivative of ratet with respect to the variable itself
    fn d_ratet_d_h(&self, _state: &ScalarVariableState) -> f64 {
        0.0
    }

    /// Derivative of ratet with respect to the equivalent plastic strain
    fn d_ratet_d_a(&self, _state: &ScalarVariableState) -> f64 {
        0.0
    }

    /// Derivative of ratet with respect to the equivalent plastic strain rate
    fn d_ratet_d_adot(&self, _state: &ScalarVariableState) -> f64 {
        0.0
    }

    /// Derivative of ratet with respect to the stress
    fn d_ratet_d_stress(&self, _state: &ScalarVariableState) -> Symmetric {
        Symmetric::zero()
    }

    /// Derivative of ratet with respect to the flow direction
    fn d_ratet_d_direction(&self, _state: &ScalarVariableState) -> Symmetric {
        Symmetric::zero()
    }

    /// Rate contribution per unit temperature change (zero by default)
    fn ratetemp(&self, _state: &ScalarVariableState) -> f64 {
        0.0
    }

    /// Derivative of ratetemp with respect to the variable itself
    fn d_ratetemp_d_h(&self, _state: &ScalarVariableState) -> f64 {
        0.0
    }

    /// Derivative of ratetemp with respect to the equivalent plastic strain
    fn d_ratetemp_d_a(&self, _state: &ScalarVariableState) -> f64 {
        0.0
    }

    /// Derivative of ratetemp with respect to the equivalent plastic strain rate
    fn d_ratetemp_d_adot(&self, _state: &ScalarVariableState) -> f64 {
        0.0
    }

    /// Derivative of ratetemp with respect to the stress
    fn d_ratetemp_d_stress(&self, _state: &ScalarVariableState) -> Symmetric {
        Symmetric::zero()
    }

    /// Derivative of ratetemp with respect to the flow direction
    fn d_ratetemp_d_direction(&self, _state: &ScalarVariableState) -> Symmetric {
        Symmetric::zero()
    }
}

/// Specifies the evolution of a symmetric-tensor internal variable
///
/// Same rate decomposition as [ScalarInternalVariable]; derivatives with
/// respect to symmetric tensors are 6×6 matrices in the Mandel basis.
pub trait SymmetricInternalVariable {
    /// Returns the name of the state variable owned by this law
    fn name(&self) -> &str;

    /// Returns the initial value of the variable
    fn initial_value(&self) -> Symmetric;

    /// Declares this law's variable into the history (setup phase)
    fn populate_history(&self, history: &mut History) -> Result<(), StrError> {
        history.declare::<Symmetric>(self.name())
    }

    /// Writes the initial value into this law's own slot
    fn init_history(&self, history: &mut History) -> Result<(), StrError> {
        let value = self.initial_value();
        history.get_mut::<Symmetric>(self.name())?.set_from(&value);
        Ok(())
    }

    /// Rate contribution per unit equivalent plastic strain
    fn ratep(&self, state: &SymmetricVariableState) -> Symmetric;

    /// Derivative of ratep with respect to the variable itself (6×6, Mandel)
    fn d_ratep_d_h(&self, state: &SymmetricVariableState) -> Matrix;

    /// Derivative of ratep with respect to the equivalent plastic strain
    fn d_ratep_d_a(&self, state: &SymmetricVariableState) -> Symmetric;

    /// Derivative of ratep with respect to the equivalent plastic strain rate
    fn d_ratep_d_adot(&self, state: &SymmetricVariableState) -> Symmetric;

    /// Derivative of ratep with respect to the stress (6×6, Mandel)
    fn d_ratep_d_stress(&self, state: &SymmetricVariableState) -> Matrix;

    /// Derivative of ratep with respect to the flow direction (6×6, Mandel)
    fn d_ratep_d_direction(&self, state: &SymmetricVariableState) -> Matrix;

    /// Static recovery rate (zero by default)
    fn ratet(&self, _state: &SymmetricVariableState) -> Symmetric {
        Symmetric::zero()
    }

    /// Derivative of ratet with respect to the variable itself (6×6, Mandel)
    fn d_ratet_d_h(&self, _state: &SymmetricVariableState) -> Matrix {
        Matrix::new(6, 6)
    }

    /// Derivative of ratet with respect to the equivalent plastic strain
    fn d_ratet_d_a(&self, _state: &SymmetricVariableState) -> Symmetric {
        Symmetric::zero()
    }

    /// Derivative of ratet with respect to the equivalent plastic strain rate
    fn d_ratet_d_adot(&self, _state: &SymmetricVariableState) -> Symmetric {
        Symmetric::zero()
    }

    /// Derivative of ratet with respect to the stress (6×6, Mandel)
    fn d_ratet_d_stress(&self, _state: &SymmetricVariableState) -> Matrix {
        Matrix::new(6, 6)
    }

    /// Derivative of ratet with respect to the flow direction (6×6, Mandel)
    fn d_ratet_d_direction(&self, _state: &SymmetricVariableState) -> Matrix {
        Matrix::new(6, 6)
    }

    /// Rate contribution per unit temperature change (zero by default)
    fn ratetemp(&self, _state: &SymmetricVariableState) -> Symmetric {
        Symmetric::zero()
    }

    /// Derivative of ratetemp with respect to the variable itself (6×6, Mandel)
    fn d_ratetemp_d_h(&self, _state: &SymmetricVariableState) -> Matrix {
        Matrix::new(6, 6)
    }

    /// Derivative of ratetemp with respect to the equivalent plastic strain
    fn d_ratetemp_d_a(&self, _state: &SymmetricVariableState) -> Symmetric {
        Symmetric::zero()
    }

    /// Derivative of ratetemp with respect to the equivalent plastic strain rate
    fn d_ratetemp_d_adot(&self, _state: &SymmetricVariableState) -> Symmetric {
        Symmetric::zero()
    }

    /// Derivative of ratetemp with respect to the stress (6×6, Mandel)
    fn d_ratetemp_d_stress(&self, _state: &SymmetricVariableState) -> Matrix {
        Matrix::new(6, 6)
    }

    /// Derivative of ratetemp with respect to the flow direction (6×6, Mandel)
    fn d_ratetemp_d_direction(&self, _state: &SymmetricVariableState) -> Matrix {
        Matrix::new(6, 6)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
