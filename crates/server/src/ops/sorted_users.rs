//! City-sorted users minus excluded website domains.

use aggra_client::{UpstreamApi, User};
use aggra_core::cache::keys;
use aggra_core::{Error, TtlCache};
use std::time::Duration;

use super::{cached, map_upstream, store};

/// Sort users ascending by lowercased city, then drop everyone whose website
/// contains one of the excluded domain suffixes. Sorting happens first, so
/// the final order is the sort order restricted to the survivors.
pub async fn sorted_users_impl(
    cache: &TtlCache, upstream: &dyn UpstreamApi, ttl: Duration, excluded: &[String],
) -> Result<Vec<User>, Error> {
    if let Some(hit) = cached(cache, keys::SORTED_USERS) {
        return Ok(hit);
    }

    let mut users = upstream.users().await.map_err(map_upstream)?;
    users.sort_by_cached_key(|u| u.address.city.to_lowercase());

    let users: Vec<User> = users
        .into_iter()
        .filter(|u| !excluded.iter().any(|domain| u.website.contains(domain.as_str())))
        .collect();

    store(cache, keys::SORTED_USERS, &users, ttl);
    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::testing::{MockUpstream, user};
    use std::sync::atomic::Ordering;

    const TTL: Duration = Duration::from_secs(10);

    fn excluded() -> Vec<String> {
        vec![".com".into(), ".net".into(), ".org".into()]
    }

    #[tokio::test]
    async fn test_sorts_by_city_case_insensitively() {
        let cache = TtlCache::new();
        let upstream = MockUpstream {
            users: vec![
                user(1, "zurich", "a.io", "X"),
                user(2, "Amsterdam", "b.io", "X"),
                user(3, "Berlin", "c.io", "X"),
            ],
            ..MockUpstream::new()
        };

        let users = sorted_users_impl(&cache, &upstream, TTL, &excluded()).await.unwrap();
        let cities: Vec<&str> = users.iter().map(|u| u.address.city.as_str()).collect();
        assert_eq!(cities, vec!["Amsterdam", "Berlin", "zurich"]);
    }

    #[tokio::test]
    async fn test_excluded_domains_never_survive() {
        let cache = TtlCache::new();
        let upstream = MockUpstream {
            users: vec![
                user(1, "A", "one.com", "X"),
                user(2, "B", "two.io", "X"),
                user(3, "C", "three.net", "X"),
                user(4, "D", "four.org", "X"),
                user(5, "E", "five.info", "X"),
            ],
            ..MockUpstream::new()
        };

        let users = sorted_users_impl(&cache, &upstream, TTL, &excluded()).await.unwrap();
        let ids: Vec<u64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 5]);
        for u in &users {
            assert!(!u.website.contains(".com") && !u.website.contains(".net") && !u.website.contains(".org"));
        }
    }

    #[tokio::test]
    async fn test_survivors_keep_sort_order() {
        let cache = TtlCache::new();
        let upstream = MockUpstream {
            users: vec![
                user(1, "Delta", "keep.io", "X"),
                user(2, "alpha", "drop.com", "X"),
                user(3, "Charlie", "keep.info", "X"),
                user(4, "bravo", "keep.biz", "X"),
            ],
            ..MockUpstream::new()
        };

        let users = sorted_users_impl(&cache, &upstream, TTL, &excluded()).await.unwrap();
        let cities: Vec<&str> = users.iter().map(|u| u.address.city.as_str()).collect();
        assert_eq!(cities, vec!["bravo", "Charlie", "Delta"]);
    }

    #[tokio::test]
    async fn test_empty_exclusion_list_keeps_everyone() {
        let cache = TtlCache::new();
        let upstream = MockUpstream {
            users: vec![user(1, "B", "a.com", "X"), user(2, "A", "b.net", "X")],
            ..MockUpstream::new()
        };

        let users = sorted_users_impl(&cache, &upstream, TTL, &[]).await.unwrap();
        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn test_second_call_within_ttl_hits_cache() {
        let cache = TtlCache::new();
        let upstream = MockUpstream { users: vec![user(1, "A", "a.io", "X")], ..MockUpstream::new() };

        sorted_users_impl(&cache, &upstream, TTL, &excluded()).await.unwrap();
        sorted_users_impl(&cache, &upstream, TTL, &excluded()).await.unwrap();

        assert_eq!(upstream.users_calls.load(Ordering::SeqCst), 1);
    }
}
