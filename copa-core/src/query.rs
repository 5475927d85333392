//! Keyed request cache shared by every screen.
//!
//! Results are kept per [`QueryKey`] and reused while fresh. Concurrent
//! fetches of one key share a single in-flight request, transient failures
//! are retried, and mutations invalidate by exact key or by prefix.

use crate::config::ClientConfig;
use crate::error::ApiError;
use chrono::{DateTime, TimeDelta, Utc};
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

/// Ordered key parts, e.g. `["classification", "5"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    /// Append one part.
    #[must_use]
    pub fn with(mut self, part: impl fmt::Display) -> Self {
        self.0.push(part.to_string());
        self
    }

    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

/// What a screen knows about one query.
#[derive(Debug)]
pub enum QueryState<T> {
    /// Disabled: the query has no key yet.
    Idle,
    Loading,
    Success(Rc<T>),
    Failed(ApiError),
}

impl<T> QueryState<T> {
    #[must_use]
    pub fn from_result(result: Result<Rc<T>, ApiError>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Failed(err),
        }
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Loading => Self::Loading,
            Self::Success(data) => Self::Success(Rc::clone(data)),
            Self::Failed(err) => Self::Failed(err.clone()),
        }
    }
}

impl<T: PartialEq> PartialEq for QueryState<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Idle, Self::Idle) | (Self::Loading, Self::Loading) => true,
            (Self::Success(a), Self::Success(b)) => Rc::ptr_eq(a, b) || a == b,
            (Self::Failed(a), Self::Failed(b)) => a == b,
            _ => false,
        }
    }
}

type AnyData = Rc<dyn Any>;
type SharedFetch = Shared<LocalBoxFuture<'static, Result<AnyData, ApiError>>>;
type Clock = Rc<dyn Fn() -> DateTime<Utc>>;

#[derive(Default)]
struct Entry {
    data: Option<(AnyData, DateTime<Utc>)>,
    error: Option<ApiError>,
    in_flight: Option<SharedFetch>,
}

pub struct QueryCache {
    entries: RefCell<HashMap<QueryKey, Entry>>,
    stale_time: TimeDelta,
    retry_count: u8,
    now: Clock,
}

impl QueryCache {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            stale_time: config.stale_time(),
            retry_count: config.retry_count,
            now: Rc::new(Utc::now),
        }
    }

    /// Replace the wall clock, for deterministic staleness.
    #[must_use]
    pub fn with_clock(mut self, now: impl Fn() -> DateTime<Utc> + 'static) -> Self {
        self.now = Rc::new(now);
        self
    }

    /// Fresh cached data for `key`, or the result of `fetcher`.
    ///
    /// A fetch already running for `key` is joined instead of repeated.
    ///
    /// # Errors
    ///
    /// Returns the last failure once the retry budget is spent. Only
    /// transient failures are retried.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<Rc<T>, ApiError>
    where
        T: 'static,
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let shared = {
            let mut entries = self.entries.borrow_mut();
            let entry = entries.entry(key.clone()).or_default();
            if let Some((data, fetched_at)) = &entry.data {
                if (self.now)() - *fetched_at < self.stale_time {
                    if let Ok(data) = Rc::clone(data).downcast::<T>() {
                        log::trace!("cache hit for {key}");
                        return Ok(data);
                    }
                }
            }
            if let Some(in_flight) = &entry.in_flight {
                log::trace!("joining in-flight fetch for {key}");
                in_flight.clone()
            } else {
                let fetch = Self::start(key.clone(), fetcher, self.retry_count);
                entry.in_flight = Some(fetch.clone());
                fetch
            }
        };

        let result = shared.clone().await;
        self.settle(&key, &shared, &result);
        result.and_then(|data| {
            data.downcast::<T>()
                .map_err(|_| ApiError::Decode(format!("cached value for {key} has another type")))
        })
    }

    fn start<T, F, Fut>(key: QueryKey, fetcher: F, retries: u8) -> SharedFetch
    where
        T: 'static,
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        async move {
            let mut attempt = 0;
            loop {
                match fetcher().await {
                    Ok(value) => return Ok(Rc::new(value) as AnyData),
                    Err(err) if err.is_transient() && attempt < retries => {
                        attempt += 1;
                        log::debug!("retrying {key} after {err}");
                    }
                    Err(err) => {
                        log::warn!("query {key} failed: {err}");
                        return Err(err);
                    }
                }
            }
        }
        .boxed_local()
        .shared()
    }

    // Every awaiter reaches this; only the first one for the current fetch records it.
    fn settle(&self, key: &QueryKey, fetch: &SharedFetch, result: &Result<AnyData, ApiError>) {
        let mut entries = self.entries.borrow_mut();
        let Some(entry) = entries.get_mut(key) else {
            return;
        };
        if !entry
            .in_flight
            .as_ref()
            .is_some_and(|current| current.ptr_eq(fetch))
        {
            return;
        }
        entry.in_flight = None;
        match result {
            Ok(data) => {
                entry.data = Some((Rc::clone(data), (self.now)()));
                entry.error = None;
            }
            Err(err) => entry.error = Some(err.clone()),
        }
    }

    /// Cached data regardless of freshness.
    #[must_use]
    pub fn peek<T: 'static>(&self, key: &QueryKey) -> Option<Rc<T>> {
        let entries = self.entries.borrow();
        let (data, _) = entries.get(key)?.data.as_ref()?;
        Rc::clone(data).downcast::<T>().ok()
    }

    /// Last recorded failure for `key`, cleared by the next success.
    #[must_use]
    pub fn last_error(&self, key: &QueryKey) -> Option<ApiError> {
        self.entries.borrow().get(key)?.error.clone()
    }

    /// Forget `key`; the next fetch goes to the network.
    pub fn invalidate(&self, key: &QueryKey) {
        if self.entries.borrow_mut().remove(key).is_some() {
            log::debug!("invalidated {key}");
        }
    }

    /// Forget every key starting with `prefix`.
    pub fn invalidate_prefix(&self, prefix: &QueryKey) {
        self.entries
            .borrow_mut()
            .retain(|key, _| !key.starts_with(prefix));
        log::debug!("invalidated {prefix}/*");
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

/// Keys of the lists shared between screens.
pub mod keys {
    use super::QueryKey;

    #[must_use]
    pub fn competitions() -> QueryKey {
        QueryKey::new(["competitions"])
    }

    #[must_use]
    pub fn schools() -> QueryKey {
        QueryKey::new(["schools"])
    }

    #[must_use]
    pub fn recent_games(limit: u32) -> QueryKey {
        QueryKey::new(["recent-games"]).with(limit)
    }

    #[must_use]
    pub fn my_teams() -> QueryKey {
        QueryKey::new(["my-teams"])
    }

    #[must_use]
    pub fn my_games() -> QueryKey {
        QueryKey::new(["my-games"])
    }

    /// Prefix of every admin list.
    #[must_use]
    pub fn admin() -> QueryKey {
        QueryKey::new(["admin"])
    }

    #[must_use]
    pub fn admin_list(name: &str) -> QueryKey {
        admin().with(name)
    }
}
