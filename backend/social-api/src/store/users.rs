use std::collections::HashSet;

use chrono::Utc;

use super::{SocialStore, StoreError, StoreResult};
use crate::domain::models::{User, UserUpdate};

impl SocialStore {
    /// Register a new user. Always succeeds; allocates the next id and
    /// starts every derived counter at zero.
    pub fn create_user(&self, username: String, email: String, display_name: String) -> User {
        let mut state = self.inner.write();
        state.next_user_id += 1;
        let id = state.next_user_id;

        let now = Utc::now();
        let user = User {
            id,
            username,
            email,
            display_name,
            bio: String::new(),
            created_at: now,
            updated_at: now,
            post_count: 0,
            follower_count: 0,
            following_count: 0,
        };

        state.users.insert(id, user.clone());
        state.followers.insert(id, HashSet::new());
        state.following.insert(id, HashSet::new());
        user
    }

    pub fn get_user(&self, id: i64) -> StoreResult<User> {
        self.inner
            .read()
            .users
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { entity: "user", id })
    }

    pub fn list_users(&self) -> Vec<User> {
        self.inner.read().users.values().cloned().collect()
    }

    /// Apply a partial profile update and refresh the update timestamp.
    /// The updatable field set is fixed by `UserUpdate`.
    pub fn update_user(&self, id: i64, update: UserUpdate) -> StoreResult<User> {
        let mut state = self.inner.write();
        let user = state
            .users
            .get_mut(&id)
            .ok_or(StoreError::NotFound { entity: "user", id })?;

        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(display_name) = update.display_name {
            user.display_name = display_name;
        }
        if let Some(bio) = update.bio {
            user.bio = bio;
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }
}
