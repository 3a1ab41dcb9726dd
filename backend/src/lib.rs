//! Blog backend library: domain services, adapters, and HTTP surface.
//!
//! The binary in `main.rs` wires these together; integration tests drive the
//! domain services through the in-memory store.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
