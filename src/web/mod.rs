pub mod api;
pub mod assets;
pub mod error;
pub mod server;


pub use error::ApiError;
pub use server::{create_router, AppState, WebServer};
