//! Concurrency scenario: parallel reads, parallel writes, and a mixed
//! operation burst, each fired as one joined batch.

use anyhow::Result;
use futures::future::join_all;

use crate::client::ApiClient;
use crate::report::Phase;

const SEED_USERS: usize = 50;
const SEED_POSTS: usize = 100;
const PARALLEL_READS: usize = 200;
const PARALLEL_WRITES: usize = 100;
const MIXED_OPS: usize = 300;

pub async fn run(client: &ApiClient) -> Result<()> {
    tracing::info!("=== concurrent scenario ===");

    let phase = Phase::start("seeding test data");
    let mut user_ids = Vec::with_capacity(SEED_USERS);
    for i in 0..SEED_USERS {
        let id = client
            .create_user(&format!("concurrent{i}"), &format!("Concurrent User {i}"))
            .await?;
        user_ids.push(id);
    }
    let mut post_ids = Vec::with_capacity(SEED_POSTS);
    for i in 0..SEED_POSTS {
        let user_id = user_ids[i % user_ids.len()];
        post_ids.push(client.create_post(user_id, &format!("Post {i}")).await?);
    }
    phase.finish(SEED_USERS + SEED_POSTS);

    let phase = Phase::start("parallel reads");
    let reads = join_all((0..PARALLEL_READS).map(|i| {
        let client = client.clone();
        let user_id = user_ids[i % user_ids.len()];
        async move { client.get_user(user_id).await }
    }))
    .await;
    let failed = reads.iter().filter(|r| r.is_err()).count();
    phase.finish(PARALLEL_READS);
    if failed > 0 {
        tracing::warn!("{failed} parallel reads failed");
    }

    let phase = Phase::start("parallel writes");
    let writes = join_all((0..PARALLEL_WRITES).map(|i| {
        let client = client.clone();
        let user_id = user_ids[i % user_ids.len()];
        async move {
            client
                .create_post(user_id, &format!("Concurrent post {i}"))
                .await
        }
    }))
    .await;
    let failed = writes.iter().filter(|r| r.is_err()).count();
    phase.finish(PARALLEL_WRITES);
    if failed > 0 {
        tracing::warn!("{failed} parallel writes failed");
    }

    let phase = Phase::start("mixed operations");
    let mixed = join_all((0..MIXED_OPS).map(|i| {
        let client = client.clone();
        let post_id = post_ids[i % post_ids.len()];
        let user_id = user_ids[i % user_ids.len()];
        async move {
            match i % 4 {
                0 => client
                    .add_comment(post_id, user_id, &format!("Mixed comment {i}"))
                    .await
                    .map(|_| ()),
                1 => client.like_post(post_id, user_id).await.map(|_| ()),
                2 => client.get_user(user_id).await,
                _ => client.get_feed(user_id).await.map(|_| ()),
            }
        }
    }))
    .await;
    let failed = mixed.iter().filter(|r| r.is_err()).count();
    phase.finish(MIXED_OPS);
    if failed > 0 {
        tracing::warn!("{failed} mixed operations failed");
    }

    tracing::info!("concurrent scenario finished");
    Ok(())
}
