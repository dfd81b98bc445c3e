//! User repository trait defining the interface for user persistence.
//!
//! The user store is an external collaborator (a relational database in
//! production); this core only depends on the narrow find/create/list
//! contract below and never interprets storage-specific error codes beyond
//! the "not found" and "duplicate" cases.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::AuthError;
use pa_shared::types::Pagination;

/// Query parameters for listing users
#[derive(Debug, Clone, Default)]
pub struct ListUsersQuery {
    /// Page selection, normalized by the caller
    pub pagination: Pagination,

    /// Optional phone-number substring filter
    pub search: Option<String>,
}

impl ListUsersQuery {
    /// Creates a query for a page without a search filter
    pub fn page(pagination: Pagination) -> Self {
        Self {
            pagination,
            search: None,
        }
    }

    /// Sets the search filter
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while keeping the
/// abstraction boundary between domain and infrastructure layers. Failures
/// other than "not found" and "duplicate" should be reported as
/// [`AuthError::Internal`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their canonical phone number
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that phone number
    /// * `Err(AuthError)` - Storage failure
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, AuthError>;

    /// Find a user by their store-assigned id
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that id
    /// * `Err(AuthError)` - Storage failure
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AuthError>;

    /// Create a new user
    ///
    /// The store assigns the id; the returned record is authoritative.
    ///
    /// # Returns
    /// * `Ok(User)` - The persisted user with store-assigned fields
    /// * `Err(AuthError::UserAlreadyExists)` - Phone number already registered
    /// * `Err(AuthError)` - Other storage failure
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// List users page by page, optionally filtered by phone substring
    ///
    /// # Returns
    /// * `Ok((users, total))` - One page of users plus the total match count
    /// * `Err(AuthError)` - Storage failure
    async fn list(&self, query: ListUsersQuery) -> Result<(Vec<User>, u64), AuthError>;
}
