//! Account resolution against the user repository

use std::sync::Arc;

use pa_shared::types::{PaginatedResponse, Pagination};
use tracing::info;

use crate::clock::Clock;
use crate::domain::entities::User;
use crate::errors::{AuthError, AuthResult};
use crate::repositories::user::{ListUsersQuery, UserRepository};

/// Resolves phone numbers to accounts, registering new accounts on
/// first contact.
pub struct IdentityResolver<U: UserRepository> {
    repository: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<U: UserRepository> IdentityResolver<U> {
    /// Creates a resolver over a user repository
    pub fn new(repository: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Finds the account for a phone number, registering one if absent
    ///
    /// # Returns
    /// The resolved user and a flag that is `true` when this call
    /// created the account. A concurrent registration of the same
    /// number surfaces as [`AuthError::UserAlreadyExists`]; retrying
    /// is left to the caller since the login that raced us already
    /// holds the account.
    pub async fn resolve_or_create(&self, phone_number: &str) -> AuthResult<(User, bool)> {
        if let Some(user) = self.repository.find_by_phone(phone_number).await? {
            return Ok((user, false));
        }

        let user = self
            .repository
            .create(User::new(phone_number, self.clock.now()))
            .await?;
        info!(
            user_id = user.id,
            event = "user_registered",
            "Registered new user"
        );

        Ok((user, true))
    }

    /// Fetches a single user by id
    ///
    /// # Returns
    /// * `Ok(User)` - The account
    /// * `Err(AuthError::UserNotFound)` - No account with that id
    pub async fn get_user(&self, user_id: i64) -> AuthResult<User> {
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    /// Lists accounts page by page, optionally filtered by phone substring
    ///
    /// Page selection is normalized before it reaches the repository:
    /// zero values fall back to the defaults and the page size is
    /// capped.
    pub async fn list_users(
        &self,
        pagination: Pagination,
        search: Option<String>,
    ) -> AuthResult<PaginatedResponse<User>> {
        let pagination = pagination.normalize();

        let mut query = ListUsersQuery::page(pagination);
        if let Some(search) = search {
            query = query.with_search(search);
        }

        let (users, total) = self.repository.list(query).await?;
        Ok(PaginatedResponse::new(users, pagination, total))
    }
}
