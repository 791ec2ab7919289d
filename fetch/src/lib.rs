#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # About API Fetch
//!
//! Leptos API Fetch gives views a single contract for loading remote data:
//! "fetch one page, optionally paginate further, optionally poll."
//!
//! It replaces the try/catch/loading boilerplate every dashboard view would
//! otherwise repeat.
//!
//! A fetch hook provides:
//! - loading, refetching and load-more flags
//! - caught errors, tagged with the operation that failed
//! - cursor pagination with de-duplication and stable ordering
//! - a `has_more` heuristic driven by the page size
//! - refetch intervals
//! - last-request-wins: stale responses never overwrite newer state
//! - scroll position preservation when rows are inserted
//!
//! ## The main entry points are:
//! - [`use_api_fetch`][crate::use_api_fetch::use_api_fetch()] - Fetches data with a zero-argument loader.
//! - [`use_api_fetch_with`][crate::use_api_fetch::use_api_fetch_with()] - Same, but restarts whenever a reactive source changes.
//! - [`provide_store`][crate::store::provide_store()] - Typed application state with explicit actions.
//!
//! # Feature Flags
//! - `csr` Client-side rendering: Fetch in the browser.
//! - `hydrate` Hydration: Fetch in the browser after server-side rendering.
//! - `ssr` Server-side rendering: Hooks render their loading state; nothing is fetched on the server.
//!
//! # A Simple Example
//!
//! Optionally provide app-wide defaults in the root of your App.
//!
//! ```rust
//! use leptos::*;
//! use leptos_api_fetch::*;
//!
//! #[component]
//! pub fn App() -> impl IntoView {
//!     provide_fetch_defaults(DefaultFetchOptions {
//!         query_limit: Some(50),
//!         ..DefaultFetchOptions::default()
//!     });
//!
//!     // Rest of App...
//! }
//! ```
//!
//! Then fetch inside any component. Render the error first, then the loading state.
//!
//! ```rust
//! use leptos::*;
//! use leptos_api_fetch::*;
//!
//! #[derive(Debug, Clone)]
//! struct Position {
//!     symbol: String,
//! }
//!
//! async fn get_positions() -> Result<Vec<Position>, FetchError> {
//!     todo!()
//! }
//!
//! #[component]
//! fn Positions() -> impl IntoView {
//!     let positions = use_api_fetch(get_positions, FetchOptions::default().set_refetch_secs(30));
//!
//!     move || {
//!         positions.state.with(|state| match state.view() {
//!             FetchView::Error(error) => view! { <p>{error.to_string()}</p> }.into_view(),
//!             FetchView::Loading => view! { <p>"Loading..."</p> }.into_view(),
//!             FetchView::Empty => view! { <p>"No records"</p> }.into_view(),
//!             FetchView::Ready(positions) => positions
//!                 .iter()
//!                 .map(|p| view! { <li>{p.symbol.clone()}</li> })
//!                 .collect_view(),
//!         })
//!     }
//! }
//! ```

mod fetch;
mod fetch_error;
mod fetch_executor;
mod fetch_observer;
mod fetch_options;
mod fetch_result;
mod fetch_state;
mod instant;
mod page;
mod scroll_anchor;
/// Typed application state shared through context.
pub mod store;
mod use_api_fetch;
mod util;

pub use fetch_error::*;
pub use fetch_options::*;
pub use fetch_result::*;
pub use fetch_state::*;
pub use instant::*;
pub use page::*;
pub use scroll_anchor::*;
pub use store::{provide_store, use_store, Store, StoreAction};
pub use use_api_fetch::*;
