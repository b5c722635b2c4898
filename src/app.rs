use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::GithubApi;
use crate::components::{ErrorMessage, LoadingSpinner, ProfileCard, RepositoryGrid, SearchInput};
use crate::query::{self, QueryState, QueryTickets};

#[component]
pub fn App() -> impl IntoView {
    let (state, set_state) = signal(QueryState::Idle);
    let tickets = RwSignal::new(QueryTickets::default());

    let loading = Signal::derive(move || state.get().is_loading());

    let on_search = Callback::new(move |username: String| {
        // A superseded lookup is not cancelled; its outcome is dropped when
        // its ticket is no longer the latest.
        let ticket = tickets.try_update(|t| t.issue()).unwrap_or_default();
        set_state.set(QueryState::Loading);

        spawn_local(async move {
            web_sys::console::log_1(&format!("looking up '{username}'").into());
            let outcome = query::run_query(&GithubApi, &username).await;
            if tickets.with_untracked(|t| t.is_current(ticket)) {
                set_state.set(outcome);
            }
        });
    });

    view! {
        <div class="min-h-screen bg-github-bg text-github-text flex flex-col">
            <header class="border-b border-github-border bg-github-card sticky top-0 z-50">
                <div class="container mx-auto px-4 py-6">
                    <h1 class="text-3xl font-bold text-center mb-6">"GitHub Profile Viewer"</h1>
                    <SearchInput on_search=on_search loading=loading/>
                </div>
            </header>

            <main class="container mx-auto px-4 py-8 flex-1">
                {move || match state.get() {
                    QueryState::Idle => view! { <EmptyState/> }.into_any(),
                    QueryState::Loading => view! { <LoadingSpinner/> }.into_any(),
                    QueryState::Failed { profile, message } => {
                        view! {
                            <div class="space-y-8">
                                <ErrorMessage message=message/>
                                {profile.map(|profile| view! { <ProfileCard profile=profile/> })}
                            </div>
                        }
                            .into_any()
                    }
                    QueryState::Loaded { profile, repositories } => {
                        let has_repositories = !repositories.is_empty();
                        view! {
                            <div class="space-y-8">
                                <ProfileCard profile=profile/>
                                {has_repositories
                                    .then(|| view! { <RepositoryGrid repositories=repositories/> })}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </main>

            <footer class="border-t border-github-border bg-github-card py-6">
                <div class="container mx-auto px-4 text-center">
                    <p class="text-github-muted text-sm">
                        "Built with Leptos and the GitHub API"
                    </p>
                </div>
            </footer>
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="text-center py-16">
            <h2 class="text-2xl font-semibold text-github-text mb-2">
                "Discover GitHub Profiles"
            </h2>
            <p class="text-github-muted max-w-md mx-auto">
                "Enter a GitHub username above to view their profile, repositories, and contribution statistics."
            </p>
        </div>
    }
}
