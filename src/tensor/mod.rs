//! Implements fixed-size tensorial value types and their buffer views

mod orientation;
mod rank_two;
mod skew;
mod symmetric;
mod vector3;
pub use crate::tensor::orientation::*;
pub use crate::tensor::rank_two::*;
pub use crate::tensor::skew::*;
pub use crate::tensor::symmetric::*;
pub use crate::tensor::vector3::*;
