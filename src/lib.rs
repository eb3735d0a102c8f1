/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

mod material;
mod state;
mod tensor;
pub use crate::material::*;
pub use crate::state::*;
pub use crate::tensor::*;
