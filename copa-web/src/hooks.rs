//! Data-fetching hooks over the shared request cache.

use crate::app::state::{Api, use_app_context};
use copa_core::error::ApiError;
use copa_core::query::{QueryCache, QueryKey, QueryState};
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

/// State of one cached query plus a way to force a refetch.
pub struct QueryHandle<T> {
    pub state: QueryState<T>,
    /// Invalidate this key and fetch again.
    pub reload: Callback<()>,
}

/// Initial state before the effect has run: cached data when present.
fn initial_state<T: 'static>(
    key: Option<&QueryKey>,
    peek: impl Fn(&QueryKey) -> Option<Rc<T>>,
) -> QueryState<T> {
    match key {
        None => QueryState::Idle,
        Some(key) => peek(key).map_or(QueryState::Loading, QueryState::Success),
    }
}

/// Run one query through the cache. A disabled query (`None`) resolves to
/// `None` without calling the fetcher.
pub async fn run_query<T, F, Fut>(
    cache: Rc<QueryCache>,
    api: Rc<Api>,
    key: Option<QueryKey>,
    fetcher: Rc<F>,
) -> Option<Result<Rc<T>, ApiError>>
where
    T: 'static,
    F: Fn(Rc<Api>) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let key = key?;
    Some(cache.fetch(key, move || (*fetcher)(Rc::clone(&api))).await)
}

/// Fetch `key` through the cache; `None` disables the query.
///
/// Only the latest request for this component updates the state, so a slow
/// answer for an old key never overwrites a newer one.
#[hook]
pub fn use_query<T, F, Fut>(key: Option<QueryKey>, fetcher: F) -> QueryHandle<T>
where
    T: 'static,
    F: Fn(Rc<Api>) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let ctx = use_app_context();
    let cache = ctx.cache();
    let state = {
        let cache = Rc::clone(&cache);
        let key = key.clone();
        use_state(move || initial_state(key.as_ref(), |k| cache.peek::<T>(k)))
    };
    let generation = use_mut_ref(|| 0_u64);
    let version = use_state(|| 0_u32);
    let fetcher = Rc::new(fetcher);

    {
        let state = state.clone();
        let api = ctx.api();
        let cache = Rc::clone(&cache);
        use_effect_with((key.clone(), *version), move |(key, _)| {
            let current = {
                let mut latest = generation.borrow_mut();
                *latest += 1;
                *latest
            };
            match key {
                None => state.set(QueryState::Idle),
                Some(key) if cache.peek::<T>(key).is_none() => state.set(QueryState::Loading),
                Some(_) => {}
            }
            let key = key.clone();
            yew::platform::spawn_local(async move {
                let Some(result) = run_query(cache, api, key, fetcher).await else {
                    return;
                };
                if *generation.borrow() == current {
                    state.set(QueryState::from_result(result));
                }
            });
            || ()
        });
    }

    let reload = {
        let version = version.clone();
        Callback::from(move |()| {
            if let Some(key) = key.as_ref() {
                cache.invalidate(key);
            }
            version.set(version.wrapping_add(1));
        })
    };

    QueryHandle {
        state: (*state).clone(),
        reload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_uses_cached_data() {
        let key = QueryKey::new(["schools"]);
        let cached = Rc::new(vec![1_u8]);
        let hit = initial_state(Some(&key), |_| Some(Rc::clone(&cached)));
        assert_eq!(hit, QueryState::Success(cached));
        let miss = initial_state::<Vec<u8>>(Some(&key), |_| None);
        assert_eq!(miss, QueryState::Loading);
        let idle = initial_state::<Vec<u8>>(None, |_| None);
        assert_eq!(idle, QueryState::Idle);
    }
}
