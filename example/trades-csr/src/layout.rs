use leptos::*;
use leptos_api_fetch::use_store;

use crate::components::Header;
use crate::ui_state::{self, SelectSymbol, UiState};

const SYMBOLS: [&str; 3] = ["BTC-USD", "ETH-USD", "SOL-USD"];

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let store = use_store::<UiState>();
    let current = store.select(ui_state::symbol);

    view! {
        <main class="container flex flex-col gap-8 py-8">
            <Header symbol=current>
                {SYMBOLS
                    .into_iter()
                    .map(|symbol| {
                        let active = move || current.with(|c| c == symbol);
                        view! {
                            <button
                                class="px-3 py-1 border rounded-md"
                                class=("bg-primary", active)
                                on:click=move |_| {
                                    log::debug!("Switching to {symbol}");
                                    store.dispatch(SelectSymbol(symbol.to_string()));
                                }
                            >

                                {symbol}
                            </button>
                        }
                    })
                    .collect_view()}
            </Header>
            {children()}
        </main>
    }
}
