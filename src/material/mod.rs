//! Implements constitutive-model components that evolve named state variables

mod armstrong_frederick;
mod damage_model;
mod internal_variable;
mod parameters;
mod plane_damage;
mod transformation;
mod voce_hardening;
pub use crate::material::armstrong_frederick::*;
pub use crate::material::damage_model::*;
pub use crate::material::internal_variable::*;
pub use crate::material::parameters::*;
pub use crate::material::plane_damage::*;
pub use crate::material::transformation::*;
pub use crate::material::voce_hardening::*;
