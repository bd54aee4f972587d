//! Cupcake API: a small JSON REST service over one SQLite table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::ApiError;
pub use model::{Cupcake, CupcakePatch, NewCupcake, DEFAULT_IMAGE_URL};
pub use routes::{app_router, common_routes, cupcake_routes};
pub use service::CupcakeService;
pub use state::AppState;
pub use store::{connect, ensure_schema};
