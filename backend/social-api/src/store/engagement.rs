use chrono::Utc;

use super::{SocialStore, StoreError, StoreResult};
use crate::domain::models::Comment;

impl SocialStore {
    /// Attach a comment to a post. If the post id does not resolve the
    /// comment is still stored and only the counter update is skipped.
    pub fn add_comment(&self, post_id: i64, user_id: i64, text: String) -> Comment {
        let mut state = self.inner.write();
        state.next_comment_id += 1;
        let id = state.next_comment_id;

        let comment = Comment {
            id,
            post_id,
            user_id,
            text,
            created_at: Utc::now(),
            like_count: 0,
        };

        state.comments.insert(id, comment.clone());
        if let Some(post) = state.posts.get_mut(&post_id) {
            post.comment_count += 1;
        }
        comment
    }

    pub fn comments_for_post(&self, post_id: i64) -> Vec<Comment> {
        self.inner
            .read()
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect()
    }

    /// Record a like. At most one like per (post, user) pair; the count is
    /// bumped under the same guard as the membership insert.
    pub fn like_post(&self, post_id: i64, user_id: i64) -> StoreResult<()> {
        let mut state = self.inner.write();
        if !state.likes.insert((post_id, user_id)) {
            return Err(StoreError::AlreadyLiked);
        }
        if let Some(post) = state.posts.get_mut(&post_id) {
            post.like_count += 1;
        }
        Ok(())
    }

    pub fn unlike_post(&self, post_id: i64, user_id: i64) -> StoreResult<()> {
        let mut state = self.inner.write();
        if !state.likes.remove(&(post_id, user_id)) {
            return Err(StoreError::NotLiked);
        }
        if let Some(post) = state.posts.get_mut(&post_id) {
            if post.like_count > 0 {
                post.like_count -= 1;
            }
        }
        Ok(())
    }

    pub fn is_liked(&self, post_id: i64, user_id: i64) -> bool {
        self.inner.read().likes.contains(&(post_id, user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_post(store: &SocialStore) -> (i64, i64) {
        let user = store.create_user("alice".into(), "a@example.com".into(), "Alice".into());
        let post = store.create_post(user.id, "hello".into());
        (post.id, user.id)
    }

    #[test]
    fn like_unlike_cycle_keeps_count_honest() {
        let store = SocialStore::new();
        let (post_id, user_id) = seed_post(&store);

        assert_eq!(store.like_post(post_id, user_id), Ok(()));
        assert_eq!(
            store.like_post(post_id, user_id),
            Err(StoreError::AlreadyLiked)
        );
        assert!(store.is_liked(post_id, user_id));
        assert_eq!(store.get_post(post_id).unwrap().like_count, 1);

        assert_eq!(store.unlike_post(post_id, user_id), Ok(()));
        assert_eq!(
            store.unlike_post(post_id, user_id),
            Err(StoreError::NotLiked)
        );
        assert!(!store.is_liked(post_id, user_id));
        assert_eq!(store.get_post(post_id).unwrap().like_count, 0);
    }

    #[test]
    fn like_count_matches_distinct_likers() {
        let store = SocialStore::new();
        let (post_id, _) = seed_post(&store);

        for user_id in 10..15 {
            store.like_post(post_id, user_id).unwrap();
        }

        assert_eq!(store.get_post(post_id).unwrap().like_count, 5);
    }

    #[test]
    fn add_comment_increments_post_comment_count() {
        let store = SocialStore::new();
        let (post_id, user_id) = seed_post(&store);

        store.add_comment(post_id, user_id, "first!".into());
        store.add_comment(post_id, user_id, "second!".into());

        assert_eq!(store.get_post(post_id).unwrap().comment_count, 2);
        assert_eq!(store.comments_for_post(post_id).len(), 2);
    }

    #[test]
    fn comments_are_scoped_to_their_post() {
        let store = SocialStore::new();
        let (post_id, user_id) = seed_post(&store);
        let other = store.create_post(user_id, "other".into());

        store.add_comment(post_id, user_id, "on first".into());
        store.add_comment(other.id, user_id, "on second".into());

        let comments = store.comments_for_post(post_id);
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].text, "on first");
    }

    #[test]
    fn comment_on_unknown_post_is_stored_without_counter() {
        let store = SocialStore::new();
        let comment = store.add_comment(404, 1, "into the void".into());

        let stored = store.comments_for_post(404);
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, comment.id);
    }
}
