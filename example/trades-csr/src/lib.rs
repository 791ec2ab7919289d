use leptos::*;
use leptos_api_fetch::{provide_fetch_defaults, provide_store, DefaultFetchOptions};
use leptos_meta::*;

// Modules
mod api;
mod components;
mod layout;
mod pages;
mod ui_state;

use crate::api::PAGE_SIZE;
use crate::layout::Layout;
use crate::pages::{BalanceCard, DialogHost, TradeHistory};
use crate::ui_state::UiState;

/// Trading dashboard: account balance plus a paginated trade history.
#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // Every hook paginates with the backend's page size unless it says otherwise.
    provide_fetch_defaults(DefaultFetchOptions {
        query_limit: Some(PAGE_SIZE),
        ..DefaultFetchOptions::default()
    });
    provide_store(UiState::default());

    view! {
        <Html lang="en" dir="ltr"/>

        <Title text="Trades"/>

        <Meta charset="UTF-8"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

        <Layout>
            <BalanceCard/>
            <TradeHistory/>
            <DialogHost/>
        </Layout>
    }
}
