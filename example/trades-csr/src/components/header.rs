use leptos::*;

/// Page title with the active symbol and the symbol picker passed as children.
#[component]
pub fn Header(#[prop(into)] symbol: Signal<String>, children: Children) -> impl IntoView {
    view! {
        <header class="flex flex-wrap items-end justify-between gap-4 border-b pb-4">
            <div>
                <h1 class="text-4xl font-bold tracking-tight">"Trades"</h1>
                <p class="text-muted-foreground">
                    "Fills for " <span class="font-mono">{move || symbol.get()}</span>
                </p>
            </div>
            <nav class="flex gap-2">{children()}</nav>
        </header>
    }
}
