use leptos::*;
use leptos_api_fetch::FetchError;

/// Placeholder rows shown while the first fetch runs.
#[component]
pub fn LoadingState(#[prop(default = 3)] rows: usize) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2 bg-card border rounded-md p-4" aria-busy="true">
            {(0..rows)
                .map(|row| {
                    let width = if row % 2 == 0 { "w-full" } else { "w-5/6" };
                    let class = format!("h-6 {width} animate-pulse rounded-md bg-primary/10");
                    view! { <div class=class></div> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ErrorState(error: FetchError, #[prop(into)] retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2 border border-destructive rounded-md p-4">
            <p class="font-medium">"Could not load data (" {error.phase().to_string()} ")"</p>
            <p class="text-sm text-muted-foreground">{error.to_string()}</p>
            <button class="underline text-sm self-start" on:click=move |_| retry.call(())>
                "Retry"
            </button>
        </div>
    }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="border rounded-md p-4 text-muted-foreground">{message}</div> }
}
