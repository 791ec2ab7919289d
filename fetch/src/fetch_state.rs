use crate::{FetchError, FetchValue, Instant};

/// Snapshot of a fetch hook.
///
/// `loading` only covers the first fetch of a configuration. Later requests use
/// `refetching` or `loading_more`, so existing `data` stays visible while they run.
#[derive(Clone, PartialEq)]
pub struct FetchState<V> {
    /// Latest loaded value. `None` until the first success or a manual [`set_data`](crate::ApiFetch::set_data).
    pub data: Option<V>,
    /// First fetch is in flight.
    pub loading: bool,
    /// Additional page is in flight.
    pub loading_more: bool,
    /// Refetch of existing data is in flight.
    pub refetching: bool,
    /// Last failure. Cleared by the next success.
    pub error: Option<FetchError>,
    /// Whether another page probably exists.
    ///
    /// A heuristic: the backend does not report totals, so a full page is taken to mean more may follow.
    pub has_more: bool,
    /// When `data` was last written.
    pub updated_at: Option<Instant>,
}

impl<V> Default for FetchState<V> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            loading_more: false,
            refetching: false,
            error: None,
            has_more: false,
            updated_at: None,
        }
    }
}

/// Coarse lifecycle position of a [`FetchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// Nothing requested yet.
    Pristine,
    /// First fetch running.
    Loading,
    /// Data available, nothing running.
    Loaded,
    /// Last request failed.
    Errored,
    /// Data available, next page running.
    LoadingMore,
}

/// What a view should render, in priority order: error, then loading, then empty, then data.
#[derive(Debug, PartialEq)]
pub enum FetchView<'a, V> {
    /// Show an error state.
    Error(&'a FetchError),
    /// Show a loading placeholder.
    Loading,
    /// Fetch completed with an empty collection. Show a "no records" state.
    Empty,
    /// Render the data.
    Ready(&'a V),
}

impl<V> FetchState<V> {
    /// Where this state sits in the fetch lifecycle.
    pub fn status(&self) -> FetchStatus {
        if self.error.is_some() {
            FetchStatus::Errored
        } else if self.loading {
            FetchStatus::Loading
        } else if self.loading_more {
            FetchStatus::LoadingMore
        } else if self.data.is_some() {
            FetchStatus::Loaded
        } else {
            FetchStatus::Pristine
        }
    }

    /// Any request in flight.
    pub fn is_busy(&self) -> bool {
        self.loading || self.loading_more || self.refetching
    }

    pub(crate) fn reset(&mut self) {
        *self = FetchState::default();
    }
}

impl<V: FetchValue> FetchState<V> {
    /// Picks what to render.
    ///
    /// A state that was never fetched renders as loading. This is the case on the
    /// server, where effects do not run.
    pub fn view(&self) -> FetchView<'_, V> {
        if let Some(error) = self.error.as_ref() {
            return FetchView::Error(error);
        }
        match self.data.as_ref() {
            None => FetchView::Loading,
            Some(_) if self.loading => FetchView::Loading,
            Some(data) if data.page_len() == Some(0) => FetchView::Empty,
            Some(data) => FetchView::Ready(data),
        }
    }
}

impl<V> std::fmt::Debug for FetchState<V>
where
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchState")
            .field("data", &self.data)
            .field("loading", &self.loading)
            .field("loading_more", &self.loading_more)
            .field("refetching", &self.refetching)
            .field("error", &self.error)
            .field("has_more", &self.has_more)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_takes_precedence_over_loading() {
        let state = FetchState::<Vec<u32>> {
            loading: true,
            error: Some(FetchError::new("boom")),
            ..FetchState::default()
        };
        assert_eq!(state.view(), FetchView::Error(&FetchError::new("boom")));
        assert_eq!(state.status(), FetchStatus::Errored);
    }

    #[test]
    fn pristine_renders_as_loading() {
        let state = FetchState::<Vec<u32>>::default();
        assert_eq!(state.view(), FetchView::Loading);
        assert_eq!(state.status(), FetchStatus::Pristine);
    }

    #[test]
    fn empty_collection_renders_empty() {
        let state = FetchState {
            data: Some(Vec::<u32>::new()),
            ..FetchState::default()
        };
        assert_eq!(state.view(), FetchView::Empty);

        let record = FetchState {
            data: Some(0_u32),
            ..FetchState::default()
        };
        assert_eq!(record.view(), FetchView::Ready(&0));
    }

    #[test]
    fn loading_more_keeps_data_visible() {
        let state = FetchState {
            data: Some(vec![1, 2]),
            loading_more: true,
            ..FetchState::default()
        };
        assert_eq!(state.view(), FetchView::Ready(&vec![1, 2]));
        assert_eq!(state.status(), FetchStatus::LoadingMore);
        assert!(state.is_busy());
    }
}
