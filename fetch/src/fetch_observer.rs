use std::{cell::RefCell, rc::Rc};

use slotmap::{new_key_type, SlotMap};

use crate::FetchState;

new_key_type! {
    pub(crate) struct ListenerKey;
}

type Listener<V> = Box<dyn Fn(&FetchState<V>)>;

/// Fan-out of state changes to subscribed listeners.
pub(crate) struct FetchObserver<V> {
    listeners: Rc<RefCell<SlotMap<ListenerKey, Listener<V>>>>,
}

impl<V> Clone for FetchObserver<V> {
    fn clone(&self) -> Self {
        Self {
            listeners: self.listeners.clone(),
        }
    }
}

impl<V> Default for FetchObserver<V> {
    fn default() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(SlotMap::with_key())),
        }
    }
}

impl<V> std::fmt::Debug for FetchObserver<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchObserver")
            .field("listeners", &self.len())
            .finish()
    }
}

impl<V> FetchObserver<V> {
    pub fn notify(&self, state: &FetchState<V>) {
        let listeners = self.listeners.try_borrow().expect("notify borrow");
        for listener in listeners.values() {
            listener(state);
        }
    }

    pub fn add_listener(&self, listener: impl Fn(&FetchState<V>) + 'static) -> ListenerKey {
        self.listeners
            .try_borrow_mut()
            .expect("add_listener borrow_mut")
            .insert(Box::new(listener))
    }

    pub fn remove_listener(&self, key: ListenerKey) -> bool {
        self.listeners
            .try_borrow_mut()
            .expect("remove_listener borrow_mut")
            .remove(key)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.listeners.try_borrow().map(|l| l.len()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn removed_listener_is_not_notified() {
        let observer = FetchObserver::<u32>::default();
        let calls = Rc::new(Cell::new(0));

        let key = observer.add_listener({
            let calls = calls.clone();
            move |_| calls.set(calls.get() + 1)
        });
        observer.notify(&FetchState::default());
        assert_eq!(calls.get(), 1);

        assert!(observer.remove_listener(key));
        assert!(!observer.remove_listener(key), "key should already be gone");
        observer.notify(&FetchState::default());
        assert_eq!(calls.get(), 1);
        assert_eq!(observer.len(), 0);
    }
}
