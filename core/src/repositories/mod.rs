//! Repository contracts for external persistence collaborators.

pub mod user;

pub use user::{ListUsersQuery, MockUserRepository, UserRepository};
