use std::collections::HashSet;

use chrono::Utc;

use super::{SocialStore, StoreError, StoreResult};
use crate::domain::models::Post;

impl SocialStore {
    /// Publish a post. The owner's post count is bumped under the same
    /// guard; if the owner id does not resolve the post is still stored and
    /// only the counter update is skipped.
    pub fn create_post(&self, user_id: i64, content: String) -> Post {
        let mut state = self.inner.write();
        state.next_post_id += 1;
        let id = state.next_post_id;

        let now = Utc::now();
        let post = Post {
            id,
            user_id,
            content,
            created_at: now,
            updated_at: now,
            like_count: 0,
            comment_count: 0,
            views: 0,
        };

        state.posts.insert(id, post.clone());
        if let Some(user) = state.users.get_mut(&user_id) {
            user.post_count += 1;
        }
        post
    }

    /// Fetch a post by id. View tracking makes every successful read a
    /// write, so this takes the write guard.
    pub fn get_post(&self, id: i64) -> StoreResult<Post> {
        let mut state = self.inner.write();
        let post = state
            .posts
            .get_mut(&id)
            .ok_or(StoreError::NotFound { entity: "post", id })?;
        post.views += 1;
        Ok(post.clone())
    }

    pub fn posts_by_user(&self, user_id: i64) -> Vec<Post> {
        self.inner
            .read()
            .posts
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Reverse-chronological union of the user's own posts and posts by
    /// users they follow, truncated to `limit`. Equal timestamps fall back
    /// to descending id.
    pub fn feed(&self, user_id: i64, limit: usize) -> Vec<Post> {
        let state = self.inner.read();
        let empty = HashSet::new();
        let following = state.following.get(&user_id).unwrap_or(&empty);

        let mut feed: Vec<Post> = state
            .posts
            .values()
            .filter(|p| p.user_id == user_id || following.contains(&p.user_id))
            .cloned()
            .collect();

        feed.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        feed.truncate(limit);
        feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_user(store: &SocialStore, name: &str) -> i64 {
        store
            .create_user(name.into(), format!("{name}@example.com"), name.into())
            .id
    }

    #[test]
    fn create_post_increments_owner_post_count() {
        let store = SocialStore::new();
        let user_id = seed_user(&store, "alice");

        store.create_post(user_id, "first".into());
        store.create_post(user_id, "second".into());

        assert_eq!(store.get_user(user_id).unwrap().post_count, 2);
        assert_eq!(store.posts_by_user(user_id).len(), 2);
    }

    #[test]
    fn create_post_with_unknown_owner_still_stores_the_post() {
        let store = SocialStore::new();
        let post = store.create_post(999, "orphan".into());

        assert_eq!(store.get_post(post.id).unwrap().user_id, 999);
    }

    #[test]
    fn get_post_increments_views_on_every_read() {
        let store = SocialStore::new();
        let user_id = seed_user(&store, "alice");
        let post = store.create_post(user_id, "views".into());

        for expected in 1..=3 {
            assert_eq!(store.get_post(post.id).unwrap().views, expected);
        }
    }

    #[test]
    fn get_post_unknown_id_is_not_found() {
        let store = SocialStore::new();
        assert_eq!(
            store.get_post(5),
            Err(StoreError::NotFound {
                entity: "post",
                id: 5
            })
        );
    }

    #[test]
    fn feed_draws_only_from_self_and_followees() {
        let store = SocialStore::new();
        let alice = seed_user(&store, "alice");
        let bob = seed_user(&store, "bob");
        let carol = seed_user(&store, "carol");

        store.follow(alice, bob).unwrap();

        let own = store.create_post(alice, "mine".into());
        let followed = store.create_post(bob, "bob's".into());
        store.create_post(carol, "unrelated".into());

        let feed = store.feed(alice, 20);
        let ids: Vec<i64> = feed.iter().map(|p| p.id).collect();

        assert_eq!(feed.len(), 2);
        assert!(ids.contains(&own.id));
        assert!(ids.contains(&followed.id));
    }

    #[test]
    fn feed_is_newest_first_and_truncated() {
        let store = SocialStore::new();
        let alice = seed_user(&store, "alice");

        let ids: Vec<i64> = (0..5)
            .map(|i| store.create_post(alice, format!("post {i}")).id)
            .collect();

        let feed = store.feed(alice, 2);

        assert_eq!(feed.len(), 2);
        // Posts created back-to-back may share a timestamp; the id
        // tie-break keeps the order deterministic.
        assert_eq!(feed[0].id, ids[4]);
        assert_eq!(feed[1].id, ids[3]);
    }

    #[test]
    fn feed_of_unknown_user_is_empty() {
        let store = SocialStore::new();
        assert!(store.feed(123, 20).is_empty());
    }
}
