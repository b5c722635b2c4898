use leptos::prelude::*;

use crate::format;
use crate::models::Profile;

/// Profile panel: avatar, names, bio, location/website/join-date row, and
/// the follower/following/repository badges.
#[component]
pub fn ProfileCard(profile: Profile) -> impl IntoView {
    let display_name = profile.display_name().to_string();
    // Bare hosts are linked as https; the visible text stays as stored.
    let website = profile
        .blog_url()
        .map(|blog| (format::website_href(blog), blog.to_string()));
    let joined = format::long_date(&profile.created_at);
    let avatar_alt = format!("{}'s avatar", profile.login);

    let Profile {
        login,
        avatar_url,
        bio,
        location,
        followers,
        following,
        public_repos,
        ..
    } = profile;

    view! {
        <div class="profile-card w-full max-w-2xl mx-auto rounded-lg border border-github-border bg-github-card p-6">
            <div class="flex flex-col md:flex-row gap-6">
                <div class="flex-shrink-0 mx-auto md:mx-0">
                    <img
                        src=avatar_url
                        alt=avatar_alt
                        class="w-24 h-24 rounded-full border-2 border-github-border"
                    />
                </div>

                <div class="flex-1 text-center md:text-left">
                    <div class="mb-3">
                        <h2 class="text-2xl font-bold text-github-text mb-1">{display_name}</h2>
                        <p class="text-github-muted text-sm">"@" {login}</p>
                    </div>

                    {bio.map(|bio| view! { <p class="text-github-text mb-4">{bio}</p> })}

                    <div class="flex flex-wrap gap-3 text-sm text-github-muted mb-4 justify-center md:justify-start">
                        {location.map(|location| view! { <span>"📍 " {location}</span> })}
                        {website
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="hover:text-github-accent transition-colors"
                                    >
                                        "🔗 " {label}
                                    </a>
                                }
                            })}
                        <span>"Joined " {joined}</span>
                    </div>

                    <div class="flex flex-wrap gap-4 justify-center md:justify-start">
                        <span class="stat-badge">{followers} " followers"</span>
                        <span class="stat-badge">{following} " following"</span>
                        <span class="stat-badge">{public_repos} " repositories"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
