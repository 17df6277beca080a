use super::{SocialStore, StoreError, StoreResult};
use crate::domain::models::User;

impl SocialStore {
    /// Record a follow edge. Both directions of the edge and both derived
    /// counters are updated under one guard.
    pub fn follow(&self, follower_id: i64, following_id: i64) -> StoreResult<()> {
        if follower_id == following_id {
            return Err(StoreError::SelfFollow);
        }

        let mut state = self.inner.write();
        if !state
            .followers
            .entry(following_id)
            .or_default()
            .insert(follower_id)
        {
            return Err(StoreError::AlreadyFollowing);
        }
        state
            .following
            .entry(follower_id)
            .or_default()
            .insert(following_id);

        if let Some(user) = state.users.get_mut(&following_id) {
            user.follower_count += 1;
        }
        if let Some(user) = state.users.get_mut(&follower_id) {
            user.following_count += 1;
        }
        Ok(())
    }

    pub fn unfollow(&self, follower_id: i64, following_id: i64) -> StoreResult<()> {
        let mut state = self.inner.write();
        let removed = state
            .followers
            .get_mut(&following_id)
            .map(|set| set.remove(&follower_id))
            .unwrap_or(false);
        if !removed {
            return Err(StoreError::NotFollowing);
        }
        if let Some(set) = state.following.get_mut(&follower_id) {
            set.remove(&following_id);
        }

        if let Some(user) = state.users.get_mut(&following_id) {
            if user.follower_count > 0 {
                user.follower_count -= 1;
            }
        }
        if let Some(user) = state.users.get_mut(&follower_id) {
            if user.following_count > 0 {
                user.following_count -= 1;
            }
        }
        Ok(())
    }

    /// Resolve the follower id set to user records, dropping ids that no
    /// longer resolve.
    pub fn followers(&self, user_id: i64) -> Vec<User> {
        let state = self.inner.read();
        state
            .followers
            .get(&user_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.users.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }
}
