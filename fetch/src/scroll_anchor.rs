/// Keeps the viewport steady while a page is inserted above or below the visible rows.
///
/// Identifies a scroll container and the last item rendered before the page
/// request. After the merge, the container is scrolled by however far that
/// item moved. Without a DOM (`ssr`, native) this does nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollAnchor {
    /// DOM id of the scrolling element.
    pub container_id: String,
    /// DOM id of the last item rendered before loading more.
    pub last_rendered_id: String,
}

impl ScrollAnchor {
    /// Creates an anchor from two DOM ids.
    pub fn new(container_id: impl Into<String>, last_rendered_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            last_rendered_id: last_rendered_id.into(),
        }
    }

    /// Records the anchor item's position before the DOM changes.
    pub(crate) fn measure(self) -> Option<AnchorMark> {
        let top = element_top(&self.last_rendered_id)?;
        Some(AnchorMark { anchor: self, top })
    }
}

/// Position of an anchor item before a page was merged.
#[derive(Debug, Clone)]
#[cfg_attr(not(any(feature = "hydrate", feature = "csr")), allow(dead_code))]
pub(crate) struct AnchorMark {
    anchor: ScrollAnchor,
    top: f64,
}

impl AnchorMark {
    /// Once the new rows are painted, scrolls the container by the anchor item's displacement.
    pub fn restore(self) {
        cfg_if::cfg_if! {
            if #[cfg(any(feature = "hydrate", feature = "csr"))] {
                leptos::request_animation_frame(move || {
                    let Some(after) = element_top(&self.anchor.last_rendered_id) else {
                        leptos::logging::debug_warn!(
                            "Scroll anchor #{} disappeared after loading more.",
                            self.anchor.last_rendered_id
                        );
                        return;
                    };
                    let Some(container) = leptos::document().get_element_by_id(&self.anchor.container_id) else {
                        leptos::logging::error!("Scroll container #{} not found.", self.anchor.container_id);
                        return;
                    };
                    let delta = (after - self.top).round() as i32;
                    container.set_scroll_top(container.scroll_top() + delta);
                });
            } else {
                let _ = self;
            }
        }
    }
}

fn element_top(id: &str) -> Option<f64> {
    cfg_if::cfg_if! {
        if #[cfg(any(feature = "hydrate", feature = "csr"))] {
            let element = leptos::document().get_element_by_id(id)?;
            Some(element.get_bounding_client_rect().top())
        } else {
            let _ = id;
            None
        }
    }
}

#[cfg(all(test, not(any(feature = "csr", feature = "hydrate"))))]
mod tests {
    use super::*;

    #[test]
    fn no_dom_means_no_mark() {
        let anchor = ScrollAnchor::new("trade-list", "trade-42");
        assert_eq!(anchor.container_id, "trade-list");
        assert!(anchor.measure().is_none());
    }
}
