use std::future::Future;

use leptos::*;

use crate::{
    fetch::Fetch, fetch_executor::spawn, FetchError, FetchState, FetchValue, Instant,
    ScrollAnchor,
};

/// Reactive handle returned by [`use_api_fetch()`](crate::use_api_fetch()).
///
/// Render [`error`](Self::error) before [`loading`](Self::loading); [`FetchState::view`] does this for you.
pub struct ApiFetch<V: FetchValue> {
    /// Full snapshot of the hook.
    pub state: Signal<FetchState<V>>,
    /// Loaded value. `None` until the first success.
    pub data: Signal<Option<V>>,
    /// First fetch of the current configuration is running.
    pub loading: Signal<bool>,
    /// An additional page is loading.
    pub loading_more: Signal<bool>,
    /// Existing data is being refetched.
    pub refetching: Signal<bool>,
    /// Last failure, if any.
    pub error: Signal<Option<FetchError>>,
    /// Whether a "Load more" control should be offered.
    pub has_more: Signal<bool>,
    /// When the data was last written.
    pub refresh_at: Signal<Option<Instant>>,
    pub(crate) fetch: Fetch<V>,
}

impl<V: FetchValue> Clone for ApiFetch<V> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            data: self.data,
            loading: self.loading,
            loading_more: self.loading_more,
            refetching: self.refetching,
            error: self.error,
            has_more: self.has_more,
            refresh_at: self.refresh_at,
            fetch: self.fetch.clone(),
        }
    }
}

impl<V: FetchValue> ApiFetch<V> {
    pub(crate) fn new(state: RwSignal<FetchState<V>>, fetch: Fetch<V>) -> Self {
        Self {
            state: state.into(),
            data: Signal::derive(move || state.with(|s| s.data.clone())),
            loading: Signal::derive(move || state.with(|s| s.loading)),
            loading_more: Signal::derive(move || state.with(|s| s.loading_more)),
            refetching: Signal::derive(move || state.with(|s| s.refetching)),
            error: Signal::derive(move || state.with(|s| s.error.clone())),
            has_more: Signal::derive(move || state.with(|s| s.has_more)),
            refresh_at: Signal::derive(move || state.with(|s| s.updated_at)),
            fetch,
        }
    }

    /// Replaces the data immediately.
    ///
    /// Use after a mutation whose outcome is already known, to skip a round trip.
    pub fn set_data(&self, data: V) {
        self.fetch.set_data(data);
    }

    /// Mutates the loaded data in place. Returns false if nothing is loaded yet.
    pub fn update_data(&self, updater: impl FnOnce(&mut V)) -> bool {
        self.fetch.update_data(updater)
    }

    /// Fetches one more page with `loader` and merges it into the data.
    ///
    /// `loader` encodes the cursor itself, typically by closing over the last item's
    /// timestamp or id. Pass an `anchor` to keep the scroll position steady while
    /// rows are inserted.
    ///
    /// Ignored while nothing is loaded or another request is running.
    pub fn load_more<Fu>(
        &self,
        loader: impl FnOnce() -> Fu + 'static,
        anchor: Option<ScrollAnchor>,
    ) where
        Fu: Future<Output = Result<V, FetchError>> + 'static,
    {
        let mark = anchor.and_then(ScrollAnchor::measure);
        let fetch = self.fetch.clone();
        spawn(async move {
            if fetch.load_more(loader).await {
                if let Some(mark) = mark {
                    mark.restore();
                }
            }
        });
    }

    /// Runs the loader again and replaces the data wholesale.
    ///
    /// Does nothing if a fetch of the current configuration is already running.
    pub fn refetch(&self) {
        let fetch = self.fetch.clone();
        spawn(async move {
            fetch.execute().await;
        });
    }
}
