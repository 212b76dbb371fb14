//! Friend domain module.

mod model;
mod repository;

pub use model::{Friend, FriendRequest};
pub use repository::{FriendRepository, FriendRequestRepository};
