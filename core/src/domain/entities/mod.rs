//! Domain entities representing core business objects.

pub mod otp;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use otp::OtpRecord;
pub use token::Claims;
pub use user::{User, UNASSIGNED_USER_ID};
