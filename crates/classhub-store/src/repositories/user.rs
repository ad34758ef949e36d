//! User repository implementation.

use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use classhub_core::error::AppError;
use classhub_core::result::AppResult;
use classhub_entity::user::model::{CreateUser, UpdateUser};
use classhub_entity::user::User;

/// Repository for account CRUD and query operations.
///
/// Emails are unique case-insensitively. The index keys are lowercased
/// emails, and uniqueness is claimed through the index entry before the
/// account document is written.
#[derive(Debug, Default)]
pub struct UserRepository {
    users: DashMap<Uuid, User>,
    email_index: DashMap<String, Uuid>,
}

impl UserRepository {
    /// Create an empty user repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let key = email.to_lowercase();
        // Copy the id out so the index guard is released before `users` is
        // touched; guards on both maps must never be held at once.
        let id = match self.email_index.get(&key) {
            Some(entry) => *entry.value(),
            None => return Ok(None),
        };
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    /// Insert a new account, enforcing email uniqueness.
    pub async fn create(&self, create: CreateUser) -> AppResult<User> {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            first_name: create.first_name,
            last_name: create.last_name,
            email: create.email,
            phone: create.phone,
            password_hash: create.password_hash,
            role: create.role,
            created_at: now,
            updated_at: now,
        };

        match self.email_index.entry(user.email.to_lowercase()) {
            Entry::Occupied(_) => {
                return Err(AppError::duplicate_email(format!(
                    "Email '{}' is already registered",
                    user.email
                )));
            }
            Entry::Vacant(entry) => {
                entry.insert(user.id);
            }
        }

        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    /// Apply a partial update to an account. Changing the email re-checks
    /// uniqueness against the index.
    ///
    /// The index reservation is resolved before the account document is
    /// locked, so `email_index` and `users` guards are never held together
    /// (`find_by_email` acquires them in the same order).
    pub async fn update(&self, id: Uuid, update: UpdateUser) -> AppResult<User> {
        let new_email = match update.email {
            Some(email) => {
                let old_key = self
                    .users
                    .get(&id)
                    .map(|u| u.email.to_lowercase())
                    .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

                let new_key = email.to_lowercase();
                if new_key != old_key {
                    match self.email_index.entry(new_key) {
                        Entry::Occupied(_) => {
                            return Err(AppError::duplicate_email(format!(
                                "Email '{email}' is already registered"
                            )));
                        }
                        Entry::Vacant(entry) => {
                            entry.insert(id);
                        }
                    }
                    self.email_index.remove(&old_key);
                }
                Some(email)
            }
            None => None,
        };

        let mut user = self
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

        if let Some(email) = new_email {
            user.email = email;
        }
        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name;
        }
        if let Some(phone) = update.phone {
            user.phone = phone;
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }
}
