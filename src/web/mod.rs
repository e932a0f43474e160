//! Web server module
//!
//! JSON endpoints for the home, list and details screens.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
