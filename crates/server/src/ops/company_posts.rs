//! Posts of everyone working at matching companies.

use aggra_client::{Post, UpstreamApi};
use aggra_core::cache::keys;
use aggra_core::{Error, TtlCache};
use std::collections::HashSet;
use std::time::Duration;

use super::{cached, map_upstream, store};

/// Collect the ids of users whose company name contains `needle`, then keep
/// every post owned by one of them. Post order is the upstream order, not
/// grouped by user.
pub async fn company_posts_impl(
    cache: &TtlCache, upstream: &dyn UpstreamApi, ttl: Duration, needle: &str,
) -> Result<Vec<Post>, Error> {
    if let Some(hit) = cached(cache, keys::ROMAGUERA) {
        return Ok(hit);
    }

    let users = upstream.users().await.map_err(map_upstream)?;
    let company_user_ids: HashSet<u64> =
        users.iter().filter(|u| u.company.name.contains(needle)).map(|u| u.id).collect();

    let posts: Vec<Post> = upstream
        .posts()
        .await
        .map_err(map_upstream)?
        .into_iter()
        .filter(|p| company_user_ids.contains(&p.user_id))
        .collect();

    store(cache, keys::ROMAGUERA, &posts, ttl);
    Ok(posts)
}
