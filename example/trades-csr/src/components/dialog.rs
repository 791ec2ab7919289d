use leptos::*;

/// Modal frame. Closing is delegated to the owner through `close`.
#[component]
pub fn Dialog(
    #[prop(into)] title: String,
    #[prop(into)] close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50">
            <div class="bg-background border rounded-md p-6 min-w-[24rem] flex flex-col gap-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-xl font-bold">{title}</h2>
                    <button class="text-sm" on:click=move |_| close.call(())>
                        "Close"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
