use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{NewUser, ProfileChanges, User, UserId},
    ports::outgoing::{UserRepository, UserRepositoryError},
};
use crate::shared::storage::{keys, StateStore};
use crate::shared::validation::same_email;

/// Users persisted as one JSON array under `users`.
#[derive(Clone)]
pub struct UserRepositoryStore {
    store: StateStore,
}

impl UserRepositoryStore {
    pub fn new(store: StateStore) -> Self {
        Self { store }
    }

    async fn all(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.store.read_or_default(keys::USERS).await?)
    }

    async fn modify<F>(&self, user_id: UserId, f: F) -> Result<User, UserRepositoryError>
    where
        F: FnOnce(&[User], &mut User) -> Result<(), UserRepositoryError> + Send,
    {
        self.store
            .update(keys::USERS, move |users: &mut Vec<User>| {
                let index = users
                    .iter()
                    .position(|u| u.id == user_id)
                    .ok_or(UserRepositoryError::UserNotFound)?;

                let mut user = users[index].clone();
                f(users, &mut user)?;
                users[index] = user.clone();

                Ok(user)
            })
            .await
    }
}

fn email_taken_by_other(users: &[User], email: &str, user_id: Option<UserId>) -> bool {
    users
        .iter()
        .any(|u| Some(u.id) != user_id && same_email(&u.email, email))
}

#[async_trait]
impl UserRepository for UserRepositoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .all()
            .await?
            .into_iter()
            .find(|u| same_email(&u.email, email)))
    }

    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.all().await?.into_iter().find(|u| u.id == user_id))
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepositoryError> {
        let user = self
            .store
            .update(keys::USERS, move |users: &mut Vec<User>| {
                if email_taken_by_other(users, &new_user.email, None) {
                    return Err(UserRepositoryError::EmailAlreadyExists);
                }

                let user = new_user.into_user(users.is_empty());
                users.push(user.clone());
                Ok(user)
            })
            .await?;

        tracing::info!(user_id = %user.id, is_admin = user.is_admin, "User created");
        Ok(user)
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<User, UserRepositoryError> {
        self.modify(user_id, move |users, user| {
            if let Some(email) = &changes.email {
                if email_taken_by_other(users, email, Some(user_id)) {
                    return Err(UserRepositoryError::EmailAlreadyExists);
                }
            }

            changes.apply_to(user);
            Ok(())
        })
        .await
    }

    async fn update_password(
        &self,
        user_id: UserId,
        new_password_hash: String,
    ) -> Result<User, UserRepositoryError> {
        self.modify(user_id, move |_, user| {
            user.password = new_password_hash;
            Ok(())
        })
        .await
    }
}
