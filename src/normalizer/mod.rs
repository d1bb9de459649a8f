//! Result Normalizer subsystem
//!
//! Makes heterogeneous stored values safe to serialize back to the grid:
//! row-identifier extraction plus type coercion for everything a grid cell
//! renderer cannot display.

mod errors;
mod normalizer;
mod value;

pub use errors::{NormalizeError, NormalizeResult};
pub use normalizer::{normalize, ROW_ID_FIELD};
pub use value::ValueKind;
