//! Tests for the API model projections and their presentation helpers.

use serde_json::json;

use crate::models::{Profile, Repository};

fn profile_json(name: serde_json::Value, blog: serde_json::Value) -> serde_json::Value {
    json!({
        "login": "octocat",
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "name": name,
        "bio": null,
        "location": null,
        "blog": blog,
        "created_at": "2011-01-25T18:44:36Z",
        "followers": 5000,
        "following": 9,
        "public_repos": 8,
        "html_url": "https://github.com/octocat",
    })
}

#[test]
fn profile_deserializes_with_null_optionals() {
    let profile: Profile =
        serde_json::from_value(profile_json(json!(null), json!(null))).unwrap();

    assert_eq!(profile.login, "octocat");
    assert_eq!(profile.name, None);
    assert_eq!(profile.bio, None);
    assert_eq!(profile.location, None);
    assert_eq!(profile.followers, 5000);
    assert_eq!(profile.public_repos, 8);
}

#[test]
fn display_name_falls_back_to_login() {
    let unnamed: Profile =
        serde_json::from_value(profile_json(json!(null), json!(null))).unwrap();
    assert_eq!(unnamed.display_name(), "octocat");

    let empty_name: Profile =
        serde_json::from_value(profile_json(json!(""), json!(null))).unwrap();
    assert_eq!(empty_name.display_name(), "octocat");

    let named: Profile =
        serde_json::from_value(profile_json(json!("The Octocat"), json!(null))).unwrap();
    assert_eq!(named.display_name(), "The Octocat");
}

#[test]
fn empty_blog_is_treated_as_absent() {
    // GitHub serializes an unset blog as "" rather than null.
    let empty: Profile = serde_json::from_value(profile_json(json!(null), json!(""))).unwrap();
    assert_eq!(empty.blog_url(), None);

    let set: Profile =
        serde_json::from_value(profile_json(json!(null), json!("example.com"))).unwrap();
    assert_eq!(set.blog_url(), Some("example.com"));
}

#[test]
fn repository_array_order_is_preserved() {
    let repositories: Vec<Repository> = serde_json::from_value(json!([
        {
            "id": 30, "name": "newest", "description": null, "language": null,
            "stargazers_count": 0, "forks_count": 0,
            "html_url": "https://github.com/octocat/newest",
            "updated_at": "2026-08-01T00:00:00Z",
        },
        {
            "id": 10, "name": "middle", "description": "Still active", "language": "Rust",
            "stargazers_count": 3, "forks_count": 1,
            "html_url": "https://github.com/octocat/middle",
            "updated_at": "2026-07-01T00:00:00Z",
        },
        {
            "id": 20, "name": "oldest", "description": null, "language": "Shell",
            "stargazers_count": 1, "forks_count": 0,
            "html_url": "https://github.com/octocat/oldest",
            "updated_at": "2026-06-01T00:00:00Z",
        },
    ]))
    .unwrap();

    let names: Vec<&str> = repositories.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["newest", "middle", "oldest"]);
    assert_eq!(repositories[1].language.as_deref(), Some("Rust"));
}
