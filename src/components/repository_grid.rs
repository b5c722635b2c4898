use leptos::prelude::*;

use crate::format;
use crate::languages;
use crate::models::Repository;

/// Grid of repository cards in the order the API returned them, with a
/// count header.
#[component]
pub fn RepositoryGrid(repositories: Vec<Repository>) -> impl IntoView {
    let count = repositories.len();

    view! {
        <div class="w-full max-w-6xl mx-auto">
            <h3 class="text-xl font-semibold text-github-text mb-6 text-center">
                "Public Repositories (" {count} ")"
            </h3>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                {repositories
                    .into_iter()
                    .map(|repository| view! { <RepositoryCard repository=repository/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn RepositoryCard(repository: Repository) -> impl IntoView {
    let updated = format::short_date(&repository.updated_at);
    let language_badge = repository.language.clone().map(|language| {
        let color = languages::language_color(&language);
        view! {
            <span class="inline-flex items-center gap-1 rounded bg-github-border px-2 py-1 text-xs text-github-text">
                <span class="w-2 h-2 rounded-full" style=format!("background-color: {color}")></span>
                {language}
            </span>
        }
    });

    let Repository {
        name,
        description,
        stargazers_count,
        forks_count,
        html_url,
        ..
    } = repository;

    view! {
        <div class="repo-card rounded-lg border border-github-border bg-github-card p-4 hover:border-github-accent transition-colors">
            <div class="flex items-start justify-between mb-3">
                <h4 class="text-lg font-semibold text-github-text line-clamp-1">{name}</h4>
                <a
                    href=html_url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-github-muted hover:text-github-accent transition-colors"
                    title="Open on GitHub"
                >
                    "↗"
                </a>
            </div>

            // Truncation is display-only (CSS line clamp); the data is untouched.
            {description
                .map(|description| {
                    view! { <p class="text-github-muted text-sm mb-4 line-clamp-2">{description}</p> }
                })}

            <div class="flex items-center justify-between">
                <div class="flex items-center gap-3 text-sm text-github-muted">
                    <span>"★ " {stargazers_count}</span>
                    <span>"⑂ " {forks_count}</span>
                </div>
                {language_badge}
            </div>

            <div class="mt-3 pt-3 border-t border-github-border">
                <p class="text-xs text-github-muted">"Updated " {updated}</p>
            </div>
        </div>
    }
}
