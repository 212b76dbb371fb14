//! Account domain module.

mod model;
mod repository;

pub use model::{Account, Role, StoredAccount};
pub use repository::AccountRepository;
