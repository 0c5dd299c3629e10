//! Photo pagination.
//!
//! The raw, unsliced collection is what gets cached, so pagination requests
//! with different windows share one upstream fetch inside the TTL.

use aggra_client::{Photo, UpstreamApi};
use aggra_core::cache::keys;
use aggra_core::{Error, TtlCache};
use std::time::Duration;

use super::{cached, map_upstream, store};
use crate::validation::PageParams;

/// One page of photos: `size` elements starting at `offset * size`, or the
/// shorter remainder near the end of the collection.
pub async fn page_impl(
    cache: &TtlCache, upstream: &dyn UpstreamApi, ttl: Duration, params: PageParams,
) -> Result<Vec<Photo>, Error> {
    let photos: Vec<Photo> = match cached(cache, keys::IMAGES) {
        Some(hit) => hit,
        None => {
            let fetched = upstream.photos().await.map_err(map_upstream)?;
            store(cache, keys::IMAGES, &fetched, ttl);
            fetched
        }
    };

    Ok(page_slice(&photos, params))
}

/// Slice out the requested window. Values that do not form a valid window
/// (negative, or starting past the end) produce an empty page.
fn page_slice(photos: &[Photo], params: PageParams) -> Vec<Photo> {
    let (Ok(size), Ok(offset)) = (usize::try_from(params.size), usize::try_from(params.offset)) else {
        return Vec::new();
    };
    let start = offset.saturating_mul(size);
    photos.iter().skip(start).take(size).cloned().collect()
}
