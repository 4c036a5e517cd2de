//! Session HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use handlers::SessionHandlers;
pub use routes::session_routes;
