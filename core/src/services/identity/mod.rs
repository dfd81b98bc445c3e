//! Phone-number identity resolution
//!
//! Maps verified phone numbers to user accounts. First contact with a
//! phone number registers an account; later logins resolve to the same
//! record. Account lookups and listing for administrative surfaces
//! live here too.

mod resolver;

pub use resolver::IdentityResolver;
