//! In-memory social graph store.
//!
//! All state lives behind a single `RwLock`: every operation takes the lock
//! exactly once, so each call is atomic and concurrent callers observe a
//! sequential history. Counter updates happen under the same guard as the
//! relationship mutation they derive from.
//!
//! Feed and listing queries are linear scans over the backing maps. That is
//! the known algorithmic ceiling at benchmark scale; secondary indices
//! (user -> posts, post -> comments) could be added without changing
//! observable behavior.

mod engagement;
mod graph;
mod posts;
mod users;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use crate::domain::models::{Comment, Post, User};

/// Errors surfaced by store operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("post already liked")]
    AlreadyLiked,

    #[error("post not liked")]
    NotLiked,

    #[error("users cannot follow themselves")]
    SelfFollow,

    #[error("already following")]
    AlreadyFollowing,

    #[error("not following")]
    NotFollowing,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Backing state. Identifiers are allocated monotonically and never reused
/// within a process lifetime; entities are never deleted.
#[derive(Default)]
struct State {
    users: HashMap<i64, User>,
    posts: HashMap<i64, Post>,
    comments: HashMap<i64, Comment>,
    /// (post_id, user_id) membership set
    likes: HashSet<(i64, i64)>,
    /// user -> users following them
    followers: HashMap<i64, HashSet<i64>>,
    /// user -> users they follow
    following: HashMap<i64, HashSet<i64>>,
    next_user_id: i64,
    next_post_id: i64,
    next_comment_id: i64,
}

/// Handle to the in-memory social graph.
///
/// Cloning is cheap; all clones share the same underlying state. Constructed
/// once per process and handed to request handlers via `web::Data`.
#[derive(Clone, Default)]
pub struct SocialStore {
    inner: Arc<RwLock<State>>,
}

impl SocialStore {
    pub fn new() -> Self {
        Self::default()
    }
}
