//! University directory service library.
//!
//! The [`domain`] module holds the record store and the filtering engine;
//! adapters under [`inbound`] and [`outbound`] connect it to HTTP and to the
//! reference dataset.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
