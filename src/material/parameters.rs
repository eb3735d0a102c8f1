use super::{ArmstrongFrederick, ScalarInternalVariable, SigmoidTransformation, SlipPlaneDamage};
use super::{SymmetricInternalVariable, TransformationFunction, VoceHardening, WorkPlaneDamage};
use serde::{Deserialize, Serialize};

/// Holds parameters for slip-plane damage laws
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum ParamPlaneDamage {
    /// Accumulated plastic work on the plane
    Work,
}

/// Holds parameters for damage transformation functions
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum ParamTransformation {
    /// Sigmoid map: d=0 → 0, d=c → 1, β controls the smoothing
    Sigmoid {
        /// Critical damage
        c: f64,

        /// Smoothing exponent
        beta: f64,
    },
}

/// Holds parameters for crystallographic damage models
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamDamageModel {
    /// Number of slip planes
    pub nplanes: usize,

    /// Plane-level damage law
    pub plane_damage: ParamPlaneDamage,

    /// Map from damage values to degradation factors
    pub transformation: ParamTransformation,
}

/// Holds parameters for scalar internal-variable rate laws
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum ParamScalarVariable {
    /// Voce isotropic hardening
    Voce {
        /// Saturation speed
        delta: f64,

        /// Saturated value
        rs: f64,

        /// Initial value
        h0: f64,
    },
}

/// Holds parameters for symmetric-tensor internal-variable rate laws
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum ParamSymmetricVariable {
    /// Armstrong-Frederick back-stress evolution
    ArmstrongFrederick {
        /// Hardening modulus
        cc: f64,

        /// Dynamic recovery coefficient
        gamma: f64,
    },
}

/// Allocates a slip-plane damage law from a parameter set
pub fn new_plane_damage(param: &ParamPlaneDamage) -> Box<dyn SlipPlaneDamage> {
    match param {
        ParamPlaneDamage::Work => Box::new(WorkPlaneDamage::new()),
    }
}

/// Allocates a transformation function from a parameter set
pub fn new_transformation(param: &ParamTransformation) -> Box<dyn TransformationFunction> {
    match *param {
        ParamTransformation::Sigmoid { c, beta } => Box::new(SigmoidTransformation::new(c, beta)),
    }
}

/// Allocates a scalar internal-variable rate law from a parameter set
pub fn new_scalar_variable(name: &str, param: &ParamScalarVariable) -> Box<dyn ScalarInternalVariable> {
    match *param {
        ParamScalarVariable::Voce { delta, rs, h0 } => Box::new(VoceHardening::new(name, delta, rs, h0)),
    }
}

/// Allocates a symmetric-tensor internal-variable rate law from a parameter set
pub fn new_symmetric_variable(name: &str, param: &ParamSymmetricVariable) -> Box<dyn SymmetricInternalVariable> {
    match *param {
        ParamSymmetricVariable::ArmstrongFrederick { cc, gamma } => Box::new(ArmstrongFrederick::new(name, cc, gamma)),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{new_scalar_variable, new_transformation};
    use super::{ParamDamageModel, ParamPlaneDamage, ParamScalarVariable, ParamTransformation};

    #[test]
    fn factories_allocate_the_requested_laws() {
        let transformation = new_transformation(&ParamTransformation::Sigmoid { c: 1.0, beta: 2.0 });
        assert_eq!(transformation.map(1.0, 0.0), 1.0);
        let law = new_scalar_variable("iso", &ParamScalarVariable::Voce {
            delta: 10.0,
            rs: 150.0,
            h0: 0.0,
        });
        assert_eq!(law.name(), "iso");
        assert_eq!(law.initial_value(), 0.0);
    }

    #[test]
    fn serde_round_trip_works() {
        let param = ParamDamageModel {
            nplanes: 4,
            plane_damage: ParamPlaneDamage::Work,
            transformation: ParamTransformation::Sigmoid { c: 1.0, beta: 2.0 },
        };
        let json = serde_json::to_string(&param).unwrap();
        let read: ParamDamageModel = serde_json::from_str(&json).unwrap();
        assert_eq!(read.nplanes, 4);
        match read.transformation {
            ParamTransformation::Sigmoid { c, beta } => {
                assert_eq!(c, 1.0);
                assert_eq!(beta, 2.0);
            }
        }
    }
}
