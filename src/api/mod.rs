//! API layer - HTTP endpoints and middleware

pub mod doc;
pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;
pub mod usuarios;

pub use doc::ApiDoc;
pub use middleware::RequireToken;
pub use router::{create_router, create_router_with_metrics};
pub use state::AppState;
