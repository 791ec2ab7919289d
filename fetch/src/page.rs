use std::{cmp::Ordering, collections::VecDeque, rc::Rc};

/// Where a newly loaded page is placed relative to the existing data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PagePlacement {
    /// After the existing items. Typical for "older records below" lists.
    #[default]
    Append,
    /// Before the existing items. Typical for chat-like or chart-history views.
    Prepend,
}

/// Stable ordering applied after a page is merged.
pub type ItemOrder<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

/// Identity check used to drop incoming items that are already loaded.
pub type ItemIdentity<T> = Rc<dyn Fn(&T, &T) -> bool>;

/// How a page is merged into existing data.
pub struct PageMerge<T> {
    /// Placement of the new page.
    pub placement: PagePlacement,
    /// Ordering re-applied after merging.
    pub order: Option<ItemOrder<T>>,
    /// Identity used for de-duplication.
    pub same_item: Option<ItemIdentity<T>>,
}

impl<T> Clone for PageMerge<T> {
    fn clone(&self) -> Self {
        Self {
            placement: self.placement,
            order: self.order.clone(),
            same_item: self.same_item.clone(),
        }
    }
}

impl<T> Default for PageMerge<T> {
    fn default() -> Self {
        Self {
            placement: PagePlacement::default(),
            order: None,
            same_item: None,
        }
    }
}

impl<T> std::fmt::Debug for PageMerge<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageMerge")
            .field("placement", &self.placement)
            .field("order", &self.order.as_ref().map(|_| "..."))
            .field("same_item", &self.same_item.as_ref().map(|_| "..."))
            .finish()
    }
}

impl<T> PageMerge<T> {
    /// Removes items from `page` that match an item in `existing` or an earlier item in `page`.
    fn dedupe<'a>(&self, existing: impl Iterator<Item = &'a T> + Clone, page: Vec<T>) -> Vec<T>
    where
        T: 'a,
    {
        let Some(same) = self.same_item.as_ref() else {
            return page;
        };
        let mut unique: Vec<T> = Vec::with_capacity(page.len());
        for item in page {
            let seen = existing.clone().any(|known| same(known, &item))
                || unique.iter().any(|known| same(known, &item));
            if !seen {
                unique.push(item);
            }
        }
        unique
    }
}

/// A value that a fetch hook can hold.
///
/// Collection types report their length, which drives the `has_more` heuristic,
/// and know how to merge an additional page. Record-like values report no
/// length and are replaced wholesale when a "page" arrives.
///
/// Implementing it for your own record type only needs the associated type:
///
/// ```
/// use leptos_api_fetch::FetchValue;
///
/// #[derive(Clone)]
/// struct Balance {
///     usd: f64,
/// }
///
/// impl FetchValue for Balance {
///     type Item = Self;
/// }
/// ```
pub trait FetchValue: Clone + 'static {
    /// Element type of a collection, or `Self` for record-like values.
    type Item;

    /// Number of items, or `None` when the value is not a collection.
    fn page_len(&self) -> Option<usize> {
        None
    }

    /// Merges a freshly loaded page into `self`.
    fn merge_page(&mut self, page: Self, merge: &PageMerge<Self::Item>) {
        let _ = merge;
        *self = page;
    }
}

impl<T: Clone + 'static> FetchValue for Vec<T> {
    type Item = T;

    fn page_len(&self) -> Option<usize> {
        Some(self.len())
    }

    fn merge_page(&mut self, page: Self, merge: &PageMerge<T>) {
        let page = merge.dedupe(self.iter(), page);
        match merge.placement {
            PagePlacement::Append => self.extend(page),
            PagePlacement::Prepend => {
                self.splice(0..0, page);
            }
        }
        if let Some(order) = merge.order.as_ref() {
            self.sort_by(|a, b| order(a, b));
        }
    }
}

impl<T: Clone + 'static> FetchValue for VecDeque<T> {
    type Item = T;

    fn page_len(&self) -> Option<usize> {
        Some(self.len())
    }

    fn merge_page(&mut self, page: Self, merge: &PageMerge<T>) {
        let page = merge.dedupe(self.iter(), page.into_iter().collect());
        match merge.placement {
            PagePlacement::Append => self.extend(page),
            PagePlacement::Prepend => {
                for item in page.into_iter().rev() {
                    self.push_front(item);
                }
            }
        }
        if let Some(order) = merge.order.as_ref() {
            self.make_contiguous().sort_by(|a, b| order(a, b));
        }
    }
}

impl<T: Clone + 'static> FetchValue for Option<T> {
    type Item = Self;
}

macro_rules! record_fetch_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FetchValue for $ty {
                type Item = Self;
            }
        )*
    };
}

record_fetch_value!(
    (),
    bool,
    char,
    String,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
);
