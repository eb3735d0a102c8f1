//! Implements the named state-variable store shared by all material models

mod history;
mod storage_kind;
mod variable;
pub use crate::state::history::*;
pub use crate::state::storage_kind::*;
pub use crate::state::variable::*;
