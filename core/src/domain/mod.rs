//! Domain layer containing business entities and value objects.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::{Claims, OtpRecord, User, UNASSIGNED_USER_ID};
pub use value_objects::AuthResponse;
