//! HTTP inbound adapter exposing the directory REST endpoints.

pub mod error;
pub mod health;
pub mod query_params;
pub mod state;
pub mod universities;
mod validation;

pub use error::ApiResult;
