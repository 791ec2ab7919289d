use leptos::*;
use leptos_api_fetch::{use_api_fetch, use_api_fetch_with, use_store, FetchOptions, FetchView};

use crate::api::{get_balance, get_trade};
use crate::components::{Dialog, ErrorState, LoadingState};
use crate::ui_state::{self, CloseDialog, UiState};

/// Renders whichever dialog the store says is open.
#[component]
pub fn DialogHost() -> impl IntoView {
    let store = use_store::<UiState>();
    let open = store.select(ui_state::open_dialog);
    let close = Callback::new(move |()| store.dispatch(CloseDialog));

    move || match open.get() {
        Some(ui_state::Dialog::TradeDetails(id)) => {
            view! { <TradeDialog id=id close=close/> }.into_view()
        }
        Some(ui_state::Dialog::Balance) => view! { <BalanceDialog close=close/> }.into_view(),
        None => ().into_view(),
    }
}

#[component]
fn TradeDialog(id: u64, close: Callback<()>) -> impl IntoView {
    let trade = use_api_fetch_with(move || id, get_trade, FetchOptions::default());
    let retry = {
        let trade = trade.clone();
        move |()| trade.refetch()
    };
    let state = trade.state;

    view! {
        <Dialog title=format!("Trade #{id}") close=close>
            {move || {
                state
                    .with(|state| match state.view() {
                        FetchView::Error(error) => {
                            view! { <ErrorState error=error.clone() retry=retry.clone()/> }
                                .into_view()
                        }
                        FetchView::Loading => view! { <LoadingState rows=4/> }.into_view(),
                        FetchView::Empty | FetchView::Ready(None) => {
                            view! { <p>"Trade not found"</p> }.into_view()
                        }
                        FetchView::Ready(Some(trade)) => {
                            view! {
                                <dl class="grid grid-cols-2 gap-2 text-sm">
                                    <dt>"Symbol"</dt>
                                    <dd>{trade.symbol.clone()}</dd>
                                    <dt>"Price"</dt>
                                    <dd>{format!("{:.2}", trade.price)}</dd>
                                    <dt>"Quantity"</dt>
                                    <dd>{format!("{:.4}", trade.quantity)}</dd>
                                    <dt>"Time"</dt>
                                    <dd>{trade.timestamp}</dd>
                                </dl>
                            }
                                .into_view()
                        }
                    })
            }}

        </Dialog>
    }
}

#[component]
fn BalanceDialog(close: Callback<()>) -> impl IntoView {
    let balance = use_api_fetch(get_balance, FetchOptions::default());
    let state = balance.state;

    view! {
        <Dialog title="Balance" close=close>
            {move || {
                state
                    .with(|state| match state.view() {
                        FetchView::Error(error) => view! { <p>{error.to_string()}</p> }.into_view(),
                        FetchView::Loading | FetchView::Empty => {
                            view! { <LoadingState rows=2/> }.into_view()
                        }
                        FetchView::Ready(balance) => {
                            view! {
                                <p>{format!("USD {:.2}", balance.usd)}</p>
                                <p>{format!("BTC {:.8}", balance.btc)}</p>
                            }
                                .into_view()
                        }
                    })
            }}

        </Dialog>
    }
}
