//! Keyed query cache with explicit invalidation
//!
//! One entry per resource identifier, each a small state machine:
//! `Idle -> Loading -> {Success, Error}`, re-entering `Loading` only via an
//! explicit invalidation or a fresh read. There is no timer-based expiry;
//! staleness is driven solely by successful mutations.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use chrono::DateTime;
use chrono::Utc;
use dashmap::DashMap;
use futures::FutureExt;
use futures::future::BoxFuture;
use futures::future::Shared;
use futures::future::WeakShared;
use log::debug;

use crate::error::SyncError;
use crate::model::Row;

use super::DataSource;

/// Lifecycle state of a cached resource query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStatus {
    /// No read has been issued yet.
    #[default]
    Idle,
    /// A fetch is in flight (or was abandoned mid-flight).
    Loading,
    /// The last fetch completed with data.
    Success,
    /// The last fetch failed.
    Error,
}

/// Point-in-time snapshot of a cache entry, for rendering.
#[derive(Debug, Clone, Default)]
pub struct QueryCacheEntry {
    /// Where the entry is in its lifecycle.
    pub status: QueryStatus,
    /// The last successfully fetched row set, if any.
    pub data: Option<Arc<Vec<Row>>>,
    /// The last fetch failure reason, if the entry is in its error state.
    pub error: Option<String>,
    /// When the data was fetched.
    pub fetched_at: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct EntryState {
    status: QueryStatus,
    data: Option<Arc<Vec<Row>>>,
    error: Option<String>,
    fetched_at: Option<DateTime<Utc>>,
    /// Bumped on every invalidation. A completing fetch applies its result
    /// only if the epoch it started under is still current.
    epoch: u64,
    stale: bool,
}

type FetchResult = Result<Arc<Vec<Row>>, SyncError>;
type SharedFetch = Shared<BoxFuture<'static, FetchResult>>;
type WeakFetch = WeakShared<BoxFuture<'static, FetchResult>>;

/// A joinable in-flight fetch. The sequence number distinguishes it from
/// any fetch that later replaces it under the same resource key, so a
/// superseded fetch's completion cleanup never evicts its replacement.
struct InflightFetch {
    seq: u64,
    handle: WeakFetch,
}

/// Keyed cache over a [`DataSource`].
///
/// Cheap to clone (`Arc` internally) and shareable across tasks. Concurrent
/// `fetch` calls for the same resource collapse into one in-flight remote
/// request; a successful `mutate` invalidates the entry before the call
/// returns, so the next read observes fresh remote truth.
///
/// # Example
///
/// ```ignore
/// let cache = QueryCache::new(Arc::new(my_source));
///
/// let rows = cache.fetch("employee").await?;
/// cache.mutate("employee", serde_json::to_value(&payload)?).await?;
/// let fresh = cache.fetch("employee").await?; // re-reads the remote source
/// ```
#[derive(Clone)]
pub struct QueryCache {
    inner: Arc<CacheInner>,
}

struct CacheInner {
    source: Arc<dyn DataSource>,
    entries: DashMap<String, EntryState>,
    inflight: Mutex<HashMap<String, InflightFetch>>,
    fetch_seq: AtomicU64,
}

impl QueryCache {
    /// Creates a cache over a data source.
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                source,
                entries: DashMap::new(),
                inflight: Mutex::new(HashMap::new()),
                fetch_seq: AtomicU64::new(0),
            }),
        }
    }

    /// Returns a snapshot of the cache entry for a resource.
    ///
    /// A resource that has never been read reports `Idle`.
    pub fn entry(&self, resource: &str) -> QueryCacheEntry {
        self.inner
            .entries
            .get(resource)
            .map(|entry| QueryCacheEntry {
                status: entry.status,
                data: entry.data.clone(),
                error: entry.error.clone(),
                fetched_at: entry.fetched_at,
            })
            .unwrap_or_default()
    }

    /// Reads the canonical row set for a resource.
    ///
    /// Returns the cached data without a remote call when the entry is
    /// fresh. Otherwise joins the in-flight fetch for the resource if one
    /// exists, or starts one; concurrent reads of the same resource share
    /// a single remote list request. A fetch superseded by an invalidation
    /// may still be draining, but no new reader joins it and its result is
    /// discarded. If every caller of an in-flight fetch detaches before it
    /// resolves, the fetch is dropped without touching the entry and a
    /// later read starts cleanly.
    pub async fn fetch(&self, resource: &str) -> FetchResult {
        if let Some(entry) = self.inner.entries.get(resource) {
            if entry.status == QueryStatus::Success && !entry.stale {
                if let Some(data) = &entry.data {
                    return Ok(data.clone());
                }
            }
        }
        self.join_or_start(resource).await
    }

    /// Sends a create request for a resource.
    ///
    /// On success the cache entry is invalidated before this returns, so a
    /// subsequent `fetch` re-reads the remote source; the created row is
    /// returned to the caller but never inserted into the canonical set.
    /// On failure the cache is left untouched.
    pub async fn mutate(
        &self,
        resource: &str,
        payload: serde_json::Value,
    ) -> Result<Row, SyncError> {
        match self.inner.source.create(resource, payload).await {
            Ok(row) => {
                debug!("create succeeded for `{resource}`, invalidating cache entry");
                self.invalidate(resource);
                Ok(row)
            }
            Err(err) => Err(SyncError::mutation(resource, err.to_string())),
        }
    }

    /// Marks a resource's entry stale so the next read re-fetches.
    ///
    /// Bumps the entry's epoch, which makes any fetch still in flight
    /// discard its result instead of resurrecting pre-invalidation data,
    /// and detaches that fetch from the join map so readers arriving after
    /// the invalidation start a fresh remote read rather than joining it.
    pub fn invalidate(&self, resource: &str) {
        if let Some(mut entry) = self.inner.entries.get_mut(resource) {
            entry.stale = true;
            entry.epoch += 1;
            debug!("cache entry for `{resource}` invalidated");
        }
        lock(&self.inner.inflight).remove(resource);
    }

    fn join_or_start(&self, resource: &str) -> SharedFetch {
        let mut inflight = lock(&self.inner.inflight);
        if let Some(entry) = inflight.get(resource) {
            if let Some(shared) = entry.handle.upgrade() {
                return shared;
            }
        }
        let seq = self.inner.fetch_seq.fetch_add(1, Ordering::Relaxed);
        let shared = self.start_fetch(resource, seq);
        if let Some(handle) = shared.downgrade() {
            inflight.insert(resource.to_string(), InflightFetch { seq, handle });
        }
        shared
    }

    fn start_fetch(&self, resource: &str, seq: u64) -> SharedFetch {
        let epoch = {
            let mut entry = self.inner.entries.entry(resource.to_string()).or_default();
            entry.status = QueryStatus::Loading;
            entry.epoch
        };
        debug!("fetch started for `{resource}`");

        let inner = self.inner.clone();
        let key = resource.to_string();
        async move {
            let result = inner.source.list(&key).await;
            {
                // Only clear our own join-map entry; an invalidation may
                // already have replaced it with a newer fetch.
                let mut inflight = lock(&inner.inflight);
                if inflight.get(&key).is_some_and(|entry| entry.seq == seq) {
                    inflight.remove(&key);
                }
            }
            match result {
                Ok(rows) => {
                    let rows = Arc::new(rows);
                    inner.apply_success(&key, epoch, &rows);
                    Ok(rows)
                }
                Err(source_err) => {
                    let err = SyncError::fetch(&key, source_err.to_string());
                    inner.apply_error(&key, epoch, &err);
                    Err(err)
                }
            }
        }
        .boxed()
        .shared()
    }
}

impl CacheInner {
    fn apply_success(&self, resource: &str, epoch: u64, rows: &Arc<Vec<Row>>) {
        let Some(mut entry) = self.entries.get_mut(resource) else {
            return;
        };
        if entry.epoch != epoch {
            debug!("discarding stale fetch result for `{resource}`");
            return;
        }
        entry.status = QueryStatus::Success;
        entry.data = Some(rows.clone());
        entry.error = None;
        entry.fetched_at = Some(Utc::now());
        entry.stale = false;
    }

    fn apply_error(&self, resource: &str, epoch: u64, err: &SyncError) {
        let Some(mut entry) = self.entries.get_mut(resource) else {
            return;
        };
        if entry.epoch != epoch {
            debug!("discarding stale fetch failure for `{resource}`");
            return;
        }
        entry.status = QueryStatus::Error;
        entry.error = Some(err.to_string());
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
