//! Application state domain module.

mod model;
mod repository;

pub use model::AppState;
pub use repository::StateRepository;
