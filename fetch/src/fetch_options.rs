use std::{cmp::Ordering, rc::Rc, time::Duration};

use crate::{FetchValue, ItemIdentity, ItemOrder, PageMerge, PagePlacement};

/// App-wide defaults for every fetch hook under the current owner.
/// Only differs from [`FetchOptions`] in that it holds no item callbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultFetchOptions {
    /// Polling interval. `None` disables polling.
    pub refetch_interval: Option<Duration>,
    /// Page size used to infer whether more pages exist.
    pub query_limit: Option<usize>,
    /// Placement of pages loaded with `load_more`.
    pub placement: PagePlacement,
}

/// Provides [`DefaultFetchOptions`] to the current scope.
pub fn provide_fetch_defaults(options: DefaultFetchOptions) {
    leptos::provide_context(options);
}

/// Retrieves the provided [`DefaultFetchOptions`], falling back to the built-in defaults.
pub fn use_fetch_defaults() -> DefaultFetchOptions {
    leptos::use_context::<DefaultFetchOptions>().unwrap_or_default()
}

/// Options for [`use_api_fetch()`](crate::use_api_fetch()).
pub struct FetchOptions<V: FetchValue> {
    /// Refetch the data on this interval. `None` means no polling.
    pub refetch_interval: Option<Duration>,
    /// Expected page size.
    /// When a result is a collection with at least this many items, `has_more` is set.
    /// Without a limit `has_more` is always false.
    pub query_limit: Option<usize>,
    /// Whether pages from `load_more` go after or before the existing items.
    pub placement: PagePlacement,
    /// Ordering re-applied after each merged page.
    pub order: Option<ItemOrder<V::Item>>,
    /// Drops items of a merged page that are already loaded.
    pub same_item: Option<ItemIdentity<V::Item>>,
}

impl<V: FetchValue> FetchOptions<V> {
    /// Set the refetch interval.
    pub fn set_refetch_interval(self, refetch_interval: Option<Duration>) -> Self {
        FetchOptions {
            refetch_interval,
            ..self
        }
    }

    /// Set the refetch interval in whole seconds.
    pub fn set_refetch_secs(self, seconds: u64) -> Self {
        self.set_refetch_interval(Some(Duration::from_secs(seconds)))
    }

    /// Set the page size.
    pub fn set_query_limit(self, query_limit: Option<usize>) -> Self {
        FetchOptions {
            query_limit,
            ..self
        }
    }

    /// Set where loaded pages are placed.
    pub fn set_placement(self, placement: PagePlacement) -> Self {
        FetchOptions { placement, ..self }
    }

    /// Keep merged data sorted with `order`.
    pub fn set_order(self, order: impl Fn(&V::Item, &V::Item) -> Ordering + 'static) -> Self {
        FetchOptions {
            order: Some(Rc::new(order)),
            ..self
        }
    }

    /// Skip incoming items for which `same_item` matches a loaded item.
    pub fn set_same_item(self, same_item: impl Fn(&V::Item, &V::Item) -> bool + 'static) -> Self {
        FetchOptions {
            same_item: Some(Rc::new(same_item)),
            ..self
        }
    }

    /// Drops settings that would make the heuristics meaningless.
    pub fn validate(self) -> Self {
        let query_limit = match self.query_limit {
            Some(0) => {
                leptos::logging::debug_warn!(
                    "query_limit of 0 would always report more pages. Ignoring it."
                );
                None
            }
            limit => limit,
        };
        let refetch_interval = match self.refetch_interval {
            Some(interval) if interval.is_zero() => {
                leptos::logging::debug_warn!("refetch_interval of 0 disables polling.");
                None
            }
            interval => interval,
        };
        FetchOptions {
            query_limit,
            refetch_interval,
            ..self
        }
    }

    /// True iff a page size is configured and `value` is a collection at least that large.
    pub fn has_more_for(&self, value: &V) -> bool {
        match (self.query_limit, value.page_len()) {
            (Some(limit), Some(len)) => len >= limit,
            _ => false,
        }
    }

    pub(crate) fn page_merge(&self) -> PageMerge<V::Item> {
        PageMerge {
            placement: self.placement,
            order: self.order.clone(),
            same_item: self.same_item.clone(),
        }
    }
}

impl<V: FetchValue> Default for FetchOptions<V> {
    fn default() -> Self {
        let defaults = use_fetch_defaults();
        Self {
            refetch_interval: defaults.refetch_interval,
            query_limit: defaults.query_limit,
            placement: defaults.placement,
            order: None,
            same_item: None,
        }
        .validate()
    }
}

impl<V: FetchValue> Clone for FetchOptions<V> {
    fn clone(&self) -> Self {
        Self {
            refetch_interval: self.refetch_interval,
            query_limit: self.query_limit,
            placement: self.placement,
            order: self.order.clone(),
            same_item: self.same_item.clone(),
        }
    }
}

impl<V: FetchValue> std::fmt::Debug for FetchOptions<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchOptions")
            .field("refetch_interval", &self.refetch_interval)
            .field("query_limit", &self.query_limit)
            .field("placement", &self.placement)
            .field("order", &self.order.as_ref().map(|_| "..."))
            .field("same_item", &self.same_item.as_ref().map(|_| "..."))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(query_limit: Option<usize>) -> FetchOptions<Vec<u32>> {
        FetchOptions {
            refetch_interval: None,
            query_limit,
            placement: PagePlacement::Append,
            order: None,
            same_item: None,
        }
    }

    #[test]
    fn has_more_when_page_is_full() {
        let page = vec![1, 2, 3];
        assert!(options(Some(3)).has_more_for(&page));
        assert!(options(Some(2)).has_more_for(&page));
        assert!(!options(Some(5)).has_more_for(&page));
    }

    #[test]
    fn no_limit_never_has_more() {
        assert!(!options(None).has_more_for(&vec![1, 2, 3]));
    }

    #[test]
    fn records_never_have_more() {
        let options = FetchOptions::<String> {
            refetch_interval: None,
            query_limit: Some(1),
            placement: PagePlacement::Append,
            order: None,
            same_item: None,
        };
        assert!(!options.has_more_for(&"a record".to_string()));
    }

    #[test]
    fn validate_drops_zero_values() {
        let validated = options(Some(0))
            .set_refetch_interval(Some(Duration::ZERO))
            .validate();
        assert_eq!(validated.query_limit, None, "query_limit of 0 should be ignored");
        assert_eq!(validated.refetch_interval, None, "zero interval should disable polling");

        let untouched = options(Some(25)).set_refetch_secs(30).validate();
        assert_eq!(untouched.query_limit, Some(25));
        assert_eq!(untouched.refetch_interval, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_default() {
        let _ = leptos::create_runtime();

        provide_fetch_defaults(DefaultFetchOptions {
            refetch_interval: Some(Duration::from_secs(3)),
            query_limit: Some(50),
            placement: PagePlacement::Prepend,
        });

        let default_options: FetchOptions<Vec<u32>> = Default::default();

        assert_eq!(
            default_options.refetch_interval,
            Some(Duration::from_secs(3)),
            "Default refetch_interval should match the provided defaults"
        );
        assert_eq!(
            default_options.query_limit,
            Some(50),
            "Default query_limit should match the provided defaults"
        );
        assert_eq!(
            default_options.placement,
            PagePlacement::Prepend,
            "Default placement should match the provided defaults"
        );
        assert!(default_options.order.is_none());
    }
}
