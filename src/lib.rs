pub mod database;
pub mod errors;
pub mod services;

pub mod app_context;
pub use app_context::AppContext;
