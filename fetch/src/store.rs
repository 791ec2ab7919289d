use leptos::*;

/// A named state transition for a [`Store`].
///
/// Stores can be read from anywhere, but they only change through actions. Keeping
/// every write in a type makes the set of possible transitions explicit.
pub trait StoreAction<S> {
    /// Applies this action to the state.
    fn apply(self, state: &mut S);
}

/// Application state shared through context, e.g. which dialog is open or cached session data.
pub struct Store<S: 'static> {
    state: RwSignal<S>,
}

impl<S: 'static> Clone for Store<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for Store<S> {}

impl<S: 'static> std::fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

/// Provides a [`Store`] holding `initial` to the current scope.
pub fn provide_store<S: 'static>(initial: S) -> Store<S> {
    let store = Store {
        state: RwSignal::new(initial),
    };
    provide_context(store);
    store
}

/// Retrieves the [`Store`] of type `S` from the current scope.
pub fn use_store<S: 'static>() -> Store<S> {
    use_context::<Store<S>>().expect("Store Missing.")
}

impl<S: 'static> Store<S> {
    /// Reactive view of one part of the state. Dependents rerun only when the selected value changes.
    pub fn select<T>(&self, selector: impl Fn(&S) -> T + 'static) -> Memo<T>
    where
        T: PartialEq + 'static,
    {
        let state = self.state;
        create_memo(move |_| state.with(&selector))
    }

    /// Reads one part of the state without subscribing.
    pub fn get_with<T>(&self, selector: impl FnOnce(&S) -> T) -> T {
        self.state.with_untracked(selector)
    }

    /// Applies `action` and notifies subscribers.
    pub fn dispatch(&self, action: impl StoreAction<S>) {
        self.state.update(|state| action.apply(state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Dialogs {
        open: Option<&'static str>,
        opened: u32,
    }

    struct Open(&'static str);

    impl StoreAction<Dialogs> for Open {
        fn apply(self, state: &mut Dialogs) {
            state.open = Some(self.0);
            state.opened += 1;
        }
    }

    struct Close;

    impl StoreAction<Dialogs> for Close {
        fn apply(self, state: &mut Dialogs) {
            state.open = None;
        }
    }

    #[test]
    fn dispatch_updates_selectors() {
        let _ = create_runtime();

        provide_store(Dialogs::default());
        let store = use_store::<Dialogs>();
        let open = store.select(|d| d.open);

        assert_eq!(open.get_untracked(), None);

        store.dispatch(Open("strategy"));
        assert_eq!(open.get_untracked(), Some("strategy"));

        store.dispatch(Close);
        assert_eq!(open.get_untracked(), None);
        assert_eq!(store.get_with(|d| d.opened), 1);
    }

    #[test]
    fn stores_are_keyed_by_type() {
        let _ = create_runtime();

        provide_store(Dialogs::default());
        provide_store(42_u32);

        assert_eq!(use_store::<u32>().get_with(|n| *n), 42);
        assert_eq!(use_store::<Dialogs>().get_with(|d| d.opened), 0);
    }
}
