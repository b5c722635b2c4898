use leptos::prelude::*;

/// Static indicator shown while a lookup is in flight.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12">
            <div class="spinner mb-4"></div>
            <p class="text-github-muted">"Loading GitHub profile..."</p>
        </div>
    }
}

/// Banner for the single current error message.
#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto rounded-lg border border-github-danger bg-github-danger/10 px-4 py-3 text-github-danger">
            <p>{message}</p>
        </div>
    }
}
