//! Application services layer - Use cases and business logic.
//!
//! Services sit behind traits so handlers depend on abstractions and
//! tests can swap implementations.

mod user_service;

pub use user_service::{InMemoryUserStore, UserService};
