//! API Module
//!
//! HTTP handlers and routing for the proxy's REST surface. Each endpoint
//! mirrors one JADX-AI plugin resource; the paginated ones accept
//! `offset`/`count` and serve through the list cache.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
