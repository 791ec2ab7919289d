use std::future::Future;
use std::rc::Rc;

use leptos::*;

use crate::{
    fetch::{boxed_loader, Fetch},
    fetch_executor::spawn,
    util::use_interval,
    ApiFetch, FetchError, FetchOptions, FetchValue,
};

/// Fetches data with `loader` and tracks loading, error and pagination state.
///
/// A fetch hook provides:
/// - Loading and error flags, with errors caught instead of thrown into the view
/// - Cursor pagination through [`ApiFetch::load_more`]
/// - Manual and interval-driven refetching
/// - Suppression of responses that arrive after the view is gone
///
/// Example
/// ```
/// use leptos::*;
/// use leptos_api_fetch::*;
///
/// #[derive(Debug, Clone)]
/// struct Trade {
///     id: u64,
/// }
///
/// async fn get_trades(before: Option<u64>) -> Result<Vec<Trade>, FetchError> {
///     todo!()
/// }
///
/// #[component]
/// fn TradeHistory() -> impl IntoView {
///     let trades = use_api_fetch(
///         || get_trades(None),
///         FetchOptions::default().set_query_limit(Some(50)),
///     );
///
///     let older = {
///         let trades = trades.clone();
///         move |_| {
///             let before = trades
///                 .data
///                 .with_untracked(|data| data.as_ref().and_then(|d| d.last()).map(|t| t.id));
///             trades.load_more(move || get_trades(before), None);
///         }
///     };
///
///     let has_more = trades.has_more;
///     view! {
///         <button on:click=older disabled=move || !has_more.get()>
///             "Load older"
///         </button>
///     }
/// }
/// ```
pub fn use_api_fetch<V, Fu>(
    loader: impl Fn() -> Fu + 'static,
    options: FetchOptions<V>,
) -> ApiFetch<V>
where
    V: FetchValue,
    Fu: Future<Output = Result<V, FetchError>> + 'static,
{
    use_api_fetch_with(|| (), move |()| loader(), options)
}

/// Like [`use_api_fetch`], but the loader is parameterized by a reactive `source`.
///
/// Whenever `source` changes (e.g. the user switches symbols), the hook starts over:
/// data is cleared, a new first fetch runs, and responses still in flight for the
/// previous source are discarded.
pub fn use_api_fetch_with<S, V, Fu>(
    source: impl Fn() -> S + 'static,
    loader: impl Fn(S) -> Fu + 'static,
    options: FetchOptions<V>,
) -> ApiFetch<V>
where
    S: PartialEq + Clone + 'static,
    V: FetchValue,
    Fu: Future<Output = Result<V, FetchError>> + 'static,
{
    let fetch = Fetch::new(options.validate());
    let state = RwSignal::new(fetch.state());
    let listener = fetch.add_listener(move |next| state.set(next.clone()));

    // Memo so that an unchanged source does not restart the cycle.
    let source = create_memo(move |_| source());
    let loader = Rc::new(loader);

    create_effect({
        let fetch = fetch.clone();
        move |_| {
            let source = source.get();
            let loader = loader.clone();
            fetch.configure(boxed_loader(move || loader(source.clone())));

            let fetch = fetch.clone();
            spawn(async move {
                fetch.execute().await;
            });
        }
    });

    if let Some(interval) = fetch.options().refetch_interval {
        let fetch = fetch.clone();
        use_interval(
            move || {
                let fetch = fetch.clone();
                spawn(async move {
                    fetch.poll().await;
                });
            },
            interval,
        );
    }

    on_cleanup({
        let fetch = fetch.clone();
        move || {
            if !fetch.remove_listener(listener) {
                logging::debug_warn!("Failed to remove fetch listener.");
            }
            fetch.detach();
        }
    });

    ApiFetch::new(state, fetch)
}

#[cfg(all(test, not(any(feature = "csr", feature = "hydrate", feature = "ssr"))))]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{FetchPhase, FetchView};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
    }

    fn items(ids: &[u32]) -> Vec<Item> {
        ids.iter().map(|&id| Item { id }).collect()
    }

    // Without a rendering feature, spawned work completes before `spawn` returns.

    #[test]
    fn initial_fetch_populates_signals() {
        let _ = create_runtime();

        let fetch = use_api_fetch(
            || async { Ok::<_, FetchError>(items(&[1, 2, 3])) },
            FetchOptions::default().set_query_limit(Some(3)),
        );

        assert_eq!(fetch.data.get_untracked().map(|d| d.len()), Some(3));
        assert!(fetch.has_more.get_untracked());
        assert!(!fetch.loading.get_untracked());
        assert!(fetch.refresh_at.get_untracked().is_some());

        let fetch = use_api_fetch(
            || async { Ok::<_, FetchError>(items(&[1, 2, 3])) },
            FetchOptions::default().set_query_limit(Some(5)),
        );
        assert!(!fetch.has_more.get_untracked());
    }

    #[test]
    fn rejection_is_caught() {
        let _ = create_runtime();

        let fetch = use_api_fetch(
            || async { Err::<Vec<Item>, _>(FetchError::new("network down")) },
            FetchOptions::default(),
        );

        let error = fetch.error.get_untracked().expect("error should be set");
        assert_eq!(error.message(), "network down");
        assert_eq!(error.phase(), FetchPhase::Initial);
        assert!(!fetch.loading.get_untracked());
        assert_eq!(fetch.data.get_untracked(), None);
        fetch
            .state
            .with_untracked(|state| assert!(matches!(state.view(), FetchView::Error(_))));
    }

    #[test]
    fn load_more_and_set_data() {
        let _ = create_runtime();

        let fetch = use_api_fetch(
            || async { Ok::<_, FetchError>(items(&[1, 2])) },
            FetchOptions::default().set_query_limit(Some(2)),
        );

        fetch.load_more(|| async { Ok::<_, FetchError>(items(&[3, 4])) }, None);
        let ids = || {
            fetch
                .data
                .get_untracked()
                .unwrap_or_default()
                .iter()
                .map(|i| i.id)
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(), vec![1, 2, 3, 4]);
        assert!(fetch.has_more.get_untracked());

        fetch.set_data(items(&[9]));
        assert_eq!(ids(), vec![9]);

        assert!(fetch.update_data(|data| data.push(Item { id: 10 })));
        assert_eq!(ids(), vec![9, 10]);
    }

    #[test]
    fn refetch_replaces_data() {
        let _ = create_runtime();

        let calls = Rc::new(Cell::new(0_u32));
        let fetch = use_api_fetch(
            {
                let calls = calls.clone();
                move || {
                    calls.set(calls.get() + 1);
                    let call = calls.get();
                    async move { Ok::<_, FetchError>(items(&[call])) }
                }
            },
            FetchOptions::default(),
        );
        assert_eq!(fetch.data.get_untracked(), Some(items(&[1])));

        fetch.refetch();
        assert_eq!(calls.get(), 2);
        assert_eq!(fetch.data.get_untracked(), Some(items(&[2])));
        assert!(!fetch.refetching.get_untracked());
    }

    #[test]
    fn source_change_restarts_cycle() {
        let _ = create_runtime();

        let symbol = RwSignal::new("BTC");
        let fetch = use_api_fetch_with(
            move || symbol.get(),
            |symbol: &'static str| async move { Ok::<_, FetchError>(symbol.to_string()) },
            FetchOptions::default(),
        );
        assert_eq!(fetch.data.get_untracked().as_deref(), Some("BTC"));

        symbol.set("ETH");
        assert_eq!(fetch.data.get_untracked().as_deref(), Some("ETH"));
    }
}
