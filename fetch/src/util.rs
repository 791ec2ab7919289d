use std::time::Duration;

/// Calls `callback` every `interval` until the current owner is cleaned up.
/// Only browsers get a timer. On the server polling is meaningless.
pub(crate) fn use_interval(callback: impl Fn() + 'static, interval: Duration) {
    cfg_if::cfg_if! {
        if #[cfg(any(feature = "hydrate", feature = "csr"))] {
            let millis = u32::try_from(interval.as_millis()).unwrap_or(u32::MAX);
            let handle = gloo_timers::callback::Interval::new(millis, callback);
            leptos::on_cleanup(move || drop(handle));
        } else {
            let _ = callback;
            let _ = interval;
        }
    }
}
