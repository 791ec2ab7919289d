use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use leptos::logging;

use crate::{
    fetch_executor::RequestGuard,
    fetch_observer::{FetchObserver, ListenerKey},
    FetchError, FetchOptions, FetchPhase, FetchState, FetchValue, Instant,
};

pub(crate) type Loader<V> = Rc<dyn Fn() -> Pin<Box<dyn Future<Output = Result<V, FetchError>>>>>;

pub(crate) fn boxed_loader<V, Fu>(loader: impl Fn() -> Fu + 'static) -> Loader<V>
where
    V: FetchValue,
    Fu: Future<Output = Result<V, FetchError>> + 'static,
{
    Rc::new(move || Box::pin(loader()) as Pin<Box<dyn Future<Output = Result<V, FetchError>>>>)
}

/// Framework-agnostic core of a fetch hook.
///
/// Holds the state, the loader of the current configuration and the request guard.
/// The reactive layer in [`use_api_fetch`](crate::use_api_fetch()) mirrors the state into signals
/// through a listener.
pub(crate) struct Fetch<V: FetchValue> {
    state: Rc<RefCell<FetchState<V>>>,
    loader: Rc<RefCell<Option<Loader<V>>>>,
    guard: RequestGuard,
    observer: FetchObserver<V>,
    options: Rc<FetchOptions<V>>,
}

impl<V: FetchValue> Clone for Fetch<V> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            loader: self.loader.clone(),
            guard: self.guard.clone(),
            observer: self.observer.clone(),
            options: self.options.clone(),
        }
    }
}

impl<V: FetchValue> Fetch<V> {
    pub fn new(options: FetchOptions<V>) -> Self {
        Self {
            state: Rc::new(RefCell::new(FetchState::default())),
            loader: Rc::new(RefCell::new(None)),
            guard: RequestGuard::default(),
            observer: FetchObserver::default(),
            options: Rc::new(options),
        }
    }

    pub fn options(&self) -> &FetchOptions<V> {
        &self.options
    }

    pub fn state(&self) -> FetchState<V> {
        self.with_state(FetchState::clone)
    }

    pub fn with_state<R>(&self, func: impl FnOnce(&FetchState<V>) -> R) -> R {
        let state = self.state.try_borrow().expect("with_state borrow");
        func(&state)
    }

    /// Applies `update_fn` and notifies listeners.
    /// The borrow is released before listeners run, so they may read the state again.
    fn update_state<R>(&self, update_fn: impl FnOnce(&mut FetchState<V>) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.state.try_borrow_mut().expect("update_state borrow_mut");
            let result = update_fn(&mut state);
            (result, state.clone())
        };
        self.observer.notify(&snapshot);
        result
    }

    pub fn add_listener(&self, listener: impl Fn(&FetchState<V>) + 'static) -> ListenerKey {
        self.observer.add_listener(listener)
    }

    pub fn remove_listener(&self, key: ListenerKey) -> bool {
        self.observer.remove_listener(key)
    }

    /// Installs the loader of a new configuration.
    /// Restarts the lifecycle at pristine. Responses from the previous configuration are ignored.
    pub fn configure(&self, loader: Loader<V>) {
        self.guard.invalidate();
        *self.loader.try_borrow_mut().expect("configure borrow_mut") = Some(loader);
        self.update_state(FetchState::reset);
    }

    /// Called when the owning view goes away. Nothing in flight may write afterwards.
    pub fn detach(&self) {
        self.guard.invalidate();
        self.loader.try_borrow_mut().expect("detach borrow_mut").take();
    }

    fn loader(&self) -> Option<Loader<V>> {
        self.loader.try_borrow().expect("loader borrow").clone()
    }

    /**
     * Execution.
     */

    /// Runs the configured loader and replaces the data with its result.
    ///
    /// Used for the initial fetch and for refetches. At most one runs per configuration:
    /// while one is in flight, further calls return immediately. A page request in flight
    /// is superseded. Returns whether the outcome was written to state.
    pub async fn execute(&self) -> bool {
        let Some(loader) = self.loader() else {
            logging::debug_warn!("Fetch has no loader. It was detached or never configured.");
            return false;
        };

        if self.with_state(|state| state.loading || state.refetching) {
            logging::debug_warn!("Fetch already running for this configuration. Joining it.");
            return false;
        }

        let ticket = self.guard.issue();
        let phase = self.update_state(|state| {
            // A page request in flight was just superseded.
            state.loading_more = false;
            if state.data.is_some() {
                state.refetching = true;
                FetchPhase::Refetch
            } else {
                state.loading = true;
                FetchPhase::Initial
            }
        });

        let result = loader().await;

        if !ticket.is_current() {
            logging::debug_warn!("Discarding stale {phase} response.");
            return false;
        }

        let options = self.options.clone();
        self.update_state(|state| {
            state.loading = false;
            state.refetching = false;
            match result {
                Ok(data) => {
                    state.has_more = options.has_more_for(&data);
                    state.data = Some(data);
                    state.error = None;
                    state.updated_at = Some(Instant::now());
                }
                Err(error) => state.error = Some(error.in_phase(phase)),
            }
        });
        true
    }

    /// Timer tick of a refetch interval. Skipped while any request is running,
    /// so a slow loader is never restarted by the clock.
    pub async fn poll(&self) -> bool {
        if self.with_state(FetchState::is_busy) {
            return false;
        }
        self.execute().await
    }

    /// Loads one additional page and merges it into the data.
    ///
    /// Ignored unless data is loaded and no other request is running.
    /// Returns whether a page was merged.
    pub async fn load_more<Fu>(&self, loader: impl FnOnce() -> Fu) -> bool
    where
        Fu: Future<Output = Result<V, FetchError>>,
    {
        let blocked = self.with_state(|state| {
            if state.loading {
                Some("initial fetch is still running")
            } else if state.data.is_none() {
                Some("nothing is loaded yet")
            } else if state.loading_more {
                Some("a page is already loading")
            } else if state.refetching {
                Some("data is being refetched")
            } else {
                None
            }
        });
        if let Some(reason) = blocked {
            logging::debug_warn!("Ignoring load_more: {}.", reason);
            return false;
        }

        let ticket = self.guard.current();
        self.update_state(|state| state.loading_more = true);

        let result = loader().await;

        if !ticket.is_current() {
            logging::debug_warn!("Discarding stale {} response.", FetchPhase::LoadMore);
            return false;
        }

        let options = self.options.clone();
        self.update_state(|state| {
            state.loading_more = false;
            match result {
                Ok(page) => {
                    state.has_more = options.has_more_for(&page);
                    if let Some(data) = state.data.as_mut() {
                        data.merge_page(page, &options.page_merge());
                    }
                    state.error = None;
                    state.updated_at = Some(Instant::now());
                    true
                }
                Err(error) => {
                    state.error = Some(error.in_phase(FetchPhase::LoadMore));
                    false
                }
            }
        })
    }

    /**
     * Local writes.
     */

    /// Replaces the data without a round trip. Requests in flight are left alone.
    pub fn set_data(&self, data: V) {
        self.update_state(|state| {
            state.data = Some(data);
            state.updated_at = Some(Instant::now());
        });
    }

    /// Mutates loaded data in place. Returns false if nothing is loaded.
    pub fn update_data(&self, updater: impl FnOnce(&mut V)) -> bool {
        self.update_state(|state| match state.data.as_mut() {
            Some(data) => {
                updater(data);
                state.updated_at = Some(Instant::now());
                true
            }
            None => false,
        })
    }
}
