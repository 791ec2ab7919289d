use std::{cell::Cell, future::Future, rc::Rc};

/// Hands out tickets for requests so that only the latest configuration may write state.
///
/// There is no network-level cancellation. A superseded request keeps running
/// until its loader resolves. Its ticket is simply no longer current.
#[derive(Clone, Default, Debug)]
pub(crate) struct RequestGuard {
    generation: Rc<Cell<u64>>,
}

/// Proof that a request was issued under a given generation.
#[derive(Debug)]
pub(crate) struct Ticket {
    issued: u64,
    generation: Rc<Cell<u64>>,
}

impl RequestGuard {
    /// Starts a new generation. Every outstanding ticket becomes stale.
    pub fn issue(&self) -> Ticket {
        self.invalidate();
        self.current()
    }

    /// Ticket for the current generation, without superseding anything.
    pub fn current(&self) -> Ticket {
        Ticket {
            issued: self.generation.get(),
            generation: self.generation.clone(),
        }
    }

    pub fn invalidate(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.issued
    }
}

/// Drives `fut` on the local task queue.
pub(crate) fn spawn(fut: impl Future<Output = ()> + 'static) {
    cfg_if::cfg_if! {
        if #[cfg(any(feature = "hydrate", feature = "csr", feature = "ssr"))] {
            leptos::spawn_local(fut);
        } else {
            leptos::logging::debug_warn!("You are missing a Cargo feature for leptos_api_fetch. Please enable one of 'ssr', 'hydrate', or 'csr'.");
            futures::executor::block_on(fut);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issuing_supersedes_outstanding_tickets() {
        let guard = RequestGuard::default();
        let first = guard.issue();
        let page = guard.current();
        assert!(first.is_current());
        assert!(page.is_current());

        let second = guard.issue();
        assert!(!first.is_current());
        assert!(!page.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn invalidate_detaches_everything() {
        let guard = RequestGuard::default();
        let ticket = guard.current();
        guard.clone().invalidate();
        assert!(!ticket.is_current(), "clones share a generation");
    }
}
