//! Featured user joined with their posts.

use aggra_client::{Post, UpstreamApi, User};
use aggra_core::cache::keys;
use aggra_core::{Error, TtlCache};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{cached, map_upstream, store};

/// The `/Nicholas` aggregate: one user plus every post they own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithPosts {
    pub user: User,
    pub posts: Vec<Post>,
}

/// Fetch the user with the configured id and join their posts.
///
/// Zero matching users is a not-found; two or more sharing the id is a
/// data-integrity conflict in the upstream source. An empty posts list is a
/// perfectly valid result.
pub async fn user_with_posts_impl(
    cache: &TtlCache, upstream: &dyn UpstreamApi, ttl: Duration, user_id: u64,
) -> Result<UserWithPosts, Error> {
    if let Some(hit) = cached(cache, keys::NICHOLAS) {
        return Ok(hit);
    }

    let users = upstream.users().await.map_err(map_upstream)?;
    let mut matches: Vec<User> = users.into_iter().filter(|u| u.id == user_id).collect();

    match matches.len() {
        0 => Err(Error::NotFound(format!("no user exists for id {user_id}"))),
        1 => {
            let user = matches.remove(0);
            let posts: Vec<Post> = upstream
                .posts()
                .await
                .map_err(map_upstream)?
                .into_iter()
                .filter(|p| p.user_id == user_id)
                .collect();

            let result = UserWithPosts { user, posts };
            store(cache, keys::NICHOLAS, &result, ttl);
            Ok(result)
        }
        _ => Err(Error::Conflict("User Conflict, multiple users exists on same ID!".into())),
    }
}
