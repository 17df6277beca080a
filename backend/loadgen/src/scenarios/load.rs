//! Sequential load scenario: realistic write mix followed by read traffic.

use std::time::Instant;

use anyhow::Result;

use crate::client::ApiClient;
use crate::report::{ops_per_sec, Phase};

const USERS: usize = 100;
const POSTS: usize = 500;
const COMMENTS: usize = 1000;
const LIKES: usize = 2000;
const FOLLOWS: usize = 500;
const FEED_READS: usize = 100;
const POST_READS: usize = 100;

pub async fn run(client: &ApiClient) -> Result<()> {
    tracing::info!("=== load scenario ===");
    let started = Instant::now();
    let mut requests = 0usize;

    let phase = Phase::start("creating users");
    let mut user_ids = Vec::with_capacity(USERS);
    for i in 0..USERS {
        let id = client
            .create_user(&format!("user{i}"), &format!("User {i}"))
            .await?;
        user_ids.push(id);
    }
    requests += USERS;
    phase.finish(USERS);

    let phase = Phase::start("creating posts");
    let mut post_ids = Vec::with_capacity(POSTS);
    for i in 0..POSTS {
        let user_id = user_ids[i % user_ids.len()];
        let id = client
            .create_post(user_id, &format!("Post #{i} - Lorem ipsum dolor sit amet"))
            .await?;
        post_ids.push(id);
    }
    requests += POSTS;
    phase.finish(POSTS);

    let phase = Phase::start("adding comments");
    for i in 0..COMMENTS {
        let post_id = post_ids[i % post_ids.len()];
        let user_id = user_ids[i % user_ids.len()];
        client
            .add_comment(post_id, user_id, &format!("Comment #{i} - Great post!"))
            .await?;
    }
    requests += COMMENTS;
    phase.finish(COMMENTS);

    let phase = Phase::start("liking posts");
    let mut liked = 0usize;
    for i in 0..LIKES {
        let post_id = post_ids[i % post_ids.len()];
        let user_id = user_ids[(i + 1) % user_ids.len()];
        if client.like_post(post_id, user_id).await? {
            liked += 1;
        }
    }
    requests += LIKES;
    phase.finish(LIKES);
    tracing::info!("{liked}/{LIKES} likes accepted (rest were duplicates)");

    let phase = Phase::start("creating follow edges");
    let mut followed = 0usize;
    for i in 0..FOLLOWS {
        let follower = user_ids[i % user_ids.len()];
        let following = user_ids[(i + 1) % user_ids.len()];
        if client.follow(follower, following).await? {
            followed += 1;
        }
    }
    requests += FOLLOWS;
    phase.finish(FOLLOWS);
    tracing::info!("{followed}/{FOLLOWS} follow edges created");

    let phase = Phase::start("fetching feeds");
    for i in 0..FEED_READS {
        client.get_feed(user_ids[i % user_ids.len()]).await?;
    }
    requests += FEED_READS;
    phase.finish(FEED_READS);

    let phase = Phase::start("fetching posts with comments");
    for i in 0..POST_READS {
        let post_id = post_ids[i % post_ids.len()];
        client.get_post(post_id).await?;
        client.get_comments(post_id).await?;
    }
    requests += POST_READS * 2;
    phase.finish(POST_READS * 2);

    let elapsed_ms = started.elapsed().as_millis() as u64;
    tracing::info!(
        "load scenario finished: {} requests in {}ms ({:.0} req/sec)",
        requests,
        elapsed_ms,
        ops_per_sec(requests, elapsed_ms)
    );
    Ok(())
}
