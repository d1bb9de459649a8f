//! Grid protocol wire types
//!
//! The fixed request/response JSON shape spoken by server-processing
//! data-grid clients: columns, global search, order, paging window, and the
//! draw token. Parsing is strict and happens once at the boundary; the rest
//! of the crate works on the validated [`GridRequest`].

mod errors;
mod request;
mod response;

pub use errors::{ProtocolResult, RequestError};
pub use request::{DrawToken, GridRequest, PageLength, UNLIMITED_SENTINEL};
pub use response::{GridResponse, GridRow};
