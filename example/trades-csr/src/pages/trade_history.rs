use leptos::*;
use leptos_api_fetch::{
    use_api_fetch_with, use_store, FetchOptions, FetchView, ScrollAnchor, Store,
};

use crate::api::{get_trades, Side, Trade};
use crate::components::{EmptyState, ErrorState, LoadingState};
use crate::ui_state::{self, Dialog, OpenDialog, UiState};

const LIST_ID: &str = "trade-history";

fn row_id(trade: &Trade) -> String {
    format!("trade-{}", trade.id)
}

/// Trade history for the selected symbol, newest first, with "Load older" pagination.
#[component]
pub fn TradeHistory() -> impl IntoView {
    let store = use_store::<UiState>();
    let symbol = store.select(ui_state::symbol);

    let trades = use_api_fetch_with(
        move || symbol.get(),
        |symbol| get_trades(symbol, None),
        FetchOptions::default()
            .set_order(|a: &Trade, b: &Trade| b.timestamp.cmp(&a.timestamp))
            .set_same_item(|a: &Trade, b: &Trade| a.id == b.id),
    );

    let load_older = {
        let trades = trades.clone();
        move |_| {
            let oldest = trades.data.with_untracked(|data| {
                data.as_ref()
                    .and_then(|d| d.last())
                    .map(|t| (t.timestamp, row_id(t)))
            });
            let Some((before, last_row)) = oldest else {
                return;
            };
            let symbol = symbol.get_untracked();
            log::debug!("Loading {symbol} trades before {before}");
            trades.load_more(
                move || get_trades(symbol, Some(before)),
                Some(ScrollAnchor::new(LIST_ID, last_row)),
            );
        }
    };

    let retry = {
        let trades = trades.clone();
        move |()| trades.refetch()
    };

    let state = trades.state;
    let has_more = trades.has_more;
    let loading_more = trades.loading_more;
    let refetching = trades.refetching;

    view! {
        <section class="flex flex-col gap-2">
            <div class="flex items-center gap-2">
                <h2 class="text-2xl font-bold">"Trade history"</h2>
                <Show when=move || refetching.get()>
                    <span class="text-xs text-muted-foreground">"refreshing"</span>
                </Show>
            </div>
            <div id=LIST_ID class="max-h-[32rem] overflow-y-auto border rounded-md">
                {move || {
                    state
                        .with(|state| match state.view() {
                            FetchView::Error(error) if state.data.is_none() => {
                                view! { <ErrorState error=error.clone() retry=retry.clone()/> }
                                    .into_view()
                            }
                            FetchView::Loading => view! { <LoadingState rows=8/> }.into_view(),
                            FetchView::Empty => {
                                view! { <EmptyState message="No trades yet"/> }.into_view()
                            }
                            _ => {
                                let rows = state.data.clone().unwrap_or_default();
                                let error = state.error.clone();
                                view! {
                                    <TradeTable trades=rows store=store/>
                                    {error
                                        .map(|error| {
                                            view! {
                                                <ErrorState error=error retry=retry.clone()/>
                                            }
                                        })}
                                }
                                    .into_view()
                            }
                        })
                }}

            </div>
            <Show when=move || has_more.get()>
                <button
                    class="self-center px-3 py-1 border rounded-md"
                    disabled=move || loading_more.get()
                    on:click=load_older.clone()
                >
                    {move || if loading_more.get() { "Loading..." } else { "Load older" }}
                </button>
            </Show>
        </section>
    }
}

#[component]
fn TradeTable(trades: Vec<Trade>, store: Store<UiState>) -> impl IntoView {
    view! {
        <table class="w-full text-sm">
            <thead>
                <tr class="text-left text-muted-foreground">
                    <th class="p-2">"Side"</th>
                    <th class="p-2">"Price"</th>
                    <th class="p-2">"Quantity"</th>
                </tr>
            </thead>
            <tbody>
                {trades
                    .into_iter()
                    .map(|trade| {
                        let id = trade.id;
                        let side = match trade.side {
                            Side::Buy => "Buy",
                            Side::Sell => "Sell",
                        };
                        view! {
                            <tr
                                id=row_id(&trade)
                                class="border-t cursor-pointer hover:bg-muted"
                                on:click=move |_| store.dispatch(OpenDialog(Dialog::TradeDetails(id)))
                            >
                                <td class="p-2">{side}</td>
                                <td class="p-2">{format!("{:.2}", trade.price)}</td>
                                <td class="p-2">{format!("{:.4}", trade.quantity)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
