//! Stress scenario: rapid sequential creation in large phases.

use anyhow::Result;

use crate::client::ApiClient;
use crate::report::Phase;

const USERS: usize = 500;
const POSTS: usize = 2000;
const COMMENTS: usize = 5000;

pub async fn run(client: &ApiClient) -> Result<()> {
    tracing::info!("=== stress scenario ===");

    let phase = Phase::start("rapid user creation");
    let mut user_ids = Vec::with_capacity(USERS);
    for i in 0..USERS {
        let id = client
            .create_user(&format!("stressuser{i}"), &format!("Stress User {i}"))
            .await?;
        user_ids.push(id);
    }
    phase.finish(USERS);

    let phase = Phase::start("rapid post creation");
    let mut post_ids = Vec::with_capacity(POSTS);
    for i in 0..POSTS {
        let user_id = user_ids[i % user_ids.len()];
        let id = client.create_post(user_id, &format!("Stress post {i}")).await?;
        post_ids.push(id);
    }
    phase.finish(POSTS);

    let phase = Phase::start("mass comment addition");
    for i in 0..COMMENTS {
        let post_id = post_ids[i % post_ids.len()];
        let user_id = user_ids[i % user_ids.len()];
        client
            .add_comment(post_id, user_id, &format!("Spam comment {i}"))
            .await?;
    }
    phase.finish(COMMENTS);

    tracing::info!("stress scenario finished");
    Ok(())
}
