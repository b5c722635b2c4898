use leptos::prelude::*;

/// Username search form.
///
/// Submitting with a non-empty trimmed value invokes `on_search` with the
/// trimmed username; empty or whitespace-only submissions do nothing. The
/// clear button is only visible while the input holds text, and clearing
/// never triggers a lookup. The whole input is disabled while `loading` is
/// asserted by the page.
#[component]
pub fn SearchInput(
    /// Called with the trimmed username on submit
    on_search: Callback<String>,
    /// Asserted by the page while a lookup is in flight
    loading: Signal<bool>,
) -> impl IntoView {
    let (username, set_username) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let trimmed = username.get_untracked().trim().to_string();
        if !trimmed.is_empty() {
            on_search.run(trimmed);
        }
    };

    view! {
        <form on:submit=on_submit class="w-full max-w-md mx-auto">
            <div class="relative">
                <input
                    type="text"
                    placeholder="Enter GitHub username..."
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    disabled=move || loading.get()
                    class="search-input w-full h-12 px-4 pr-10 rounded-lg bg-github-card border border-github-border text-github-text placeholder-github-muted focus:border-github-accent focus:outline-none transition-colors"
                />
                {move || {
                    (!username.get().is_empty())
                        .then(|| {
                            view! {
                                <button
                                    type="button"
                                    on:click=move |_| set_username.set(String::new())
                                    class="absolute right-1 top-1/2 -translate-y-1/2 h-8 w-8 rounded text-github-muted hover:bg-github-border"
                                    title="Clear"
                                >
                                    "✕"
                                </button>
                            }
                        })
                }}
            </div>
        </form>
    }
}
