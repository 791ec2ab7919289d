use leptos::*;
use leptos_api_fetch::{use_api_fetch, use_store, FetchOptions, FetchView};

use crate::api::get_balance;
use crate::components::{ErrorState, LoadingState};
use crate::ui_state::{Dialog, OpenDialog, UiState};

/// Account balance, polled every 15 seconds.
#[component]
pub fn BalanceCard() -> impl IntoView {
    let store = use_store::<UiState>();
    let balance = use_api_fetch(get_balance, FetchOptions::default().set_refetch_secs(15));

    let retry = {
        let balance = balance.clone();
        move |()| balance.refetch()
    };

    let refetching = balance.refetching;
    let state = balance.state;

    view! {
        <section class="flex flex-col gap-2">
            <div class="flex items-center gap-2">
                <h2 class="text-2xl font-bold">"Balance"</h2>
                <Show when=move || refetching.get()>
                    <span class="text-xs text-muted-foreground">"refreshing"</span>
                </Show>
                <button
                    class="ml-auto underline text-sm"
                    on:click=move |_| store.dispatch(OpenDialog(Dialog::Balance))
                >
                    "Details"
                </button>
            </div>
            {move || {
                state
                    .with(|state| match state.view() {
                        FetchView::Error(error) => {
                            view! { <ErrorState error=error.clone() retry=retry.clone()/> }
                                .into_view()
                        }
                        FetchView::Loading | FetchView::Empty => {
                            view! { <LoadingState rows=1/> }.into_view()
                        }
                        FetchView::Ready(balance) => {
                            view! {
                                <div class="bg-card border rounded-md p-4 flex gap-8">
                                    <span>{format!("USD {:.2}", balance.usd)}</span>
                                    <span>{format!("BTC {:.8}", balance.btc)}</span>
                                </div>
                            }
                                .into_view()
                        }
                    })
            }}

        </section>
    }
}
