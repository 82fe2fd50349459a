#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod operation;
mod request;

pub use error::{GatewayError, Result};
pub use operation::Operation;
pub use request::GatewayJson;
