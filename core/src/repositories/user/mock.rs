//! In-memory implementation of UserRepository for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::AuthError;

use super::trait_::{ListUsersQuery, UserRepository};

/// Mock user repository backed by a vector
///
/// Assigns sequential ids on create and enforces phone-number uniqueness,
/// mirroring the relational store's behavior closely enough for tests.
pub struct MockUserRepository {
    users: RwLock<Vec<User>>,
    next_id: AtomicI64,
}

impl MockUserRepository {
    /// Create an empty mock repository
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the repository holds no users
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, AuthError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.phone_number == phone_number)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AuthError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, AuthError> {
        let mut users = self.users.write().await;

        // Uniqueness check and insert under one write guard
        if users.iter().any(|u| u.phone_number == user.phone_number) {
            return Err(AuthError::UserAlreadyExists);
        }

        let mut created = user;
        created.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        users.push(created.clone());
        Ok(created)
    }

    async fn list(&self, query: ListUsersQuery) -> Result<(Vec<User>, u64), AuthError> {
        let users = self.users.read().await;

        let mut matches: Vec<&User> = users
            .iter()
            .filter(|u| match &query.search {
                Some(needle) => u.phone_number.contains(needle.as_str()),
                None => true,
            })
            .collect();
        matches.sort_by_key(|u| u.id);

        let total = matches.len() as u64;
        let page = matches
            .into_iter()
            .skip(query.pagination.offset() as usize)
            .take(query.pagination.limit() as usize)
            .cloned()
            .collect();

        Ok((page, total))
    }
}
