//! Profile-URL recognition in search results.
//!
//! A result page is scanned field-by-field: every item's link first,
//! then every snippet, then every title. Field priority ranks above item
//! order because the link field is the result's canonical URL while
//! snippet and title mentions are circumstantial.

use mailscope_search::SearchResultItem;
use regex::Regex;
use std::sync::OnceLock;

/// Site paths under `github.com/` that are never user profiles.
const GITHUB_RESERVED: [&str; 19] = [
    "about",
    "apps",
    "blog",
    "collections",
    "contact",
    "events",
    "explore",
    "features",
    "join",
    "login",
    "marketplace",
    "orgs",
    "pricing",
    "search",
    "settings",
    "site",
    "sponsors",
    "topics",
    "trending",
];

fn linkedin_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // optional scheme, optional www/country subdomain
        Regex::new(r"(?i)(?:https?://)?(?:[a-z]{2,3}\.)?linkedin\.com/in/([A-Za-z0-9_%\-]+)")
            .expect("valid regex")
    })
}

fn github_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?i)(?:https?://)?(?:www\.)?github\.com/([A-Za-z0-9][A-Za-z0-9\-]*)(/[^\s"'<>]*)?"#,
        )
        .expect("valid regex")
    })
}

/// Extract and normalize a LinkedIn profile URL from a text fragment.
///
/// Matches `linkedin.com/in/<slug>` with optional scheme and country
/// subdomain; the result is always `https://www.linkedin.com/in/<slug>`.
#[must_use]
pub fn linkedin_profile_url(text: &str) -> Option<String> {
    linkedin_regex()
        .captures(text)
        .map(|captures| format!("https://www.linkedin.com/in/{}", &captures[1]))
}

/// Extract and normalize a GitHub profile URL from a text fragment.
///
/// Only single-segment user paths qualify: `github.com/jane` matches,
/// `github.com/jane/dotfiles` and reserved site paths do not. The result
/// is always `https://github.com/<username>`.
#[must_use]
pub fn github_profile_url(text: &str) -> Option<String> {
    for captures in github_regex().captures_iter(text) {
        let username = &captures[1];

        // A path beyond the username means a repository or subpage.
        if let Some(rest) = captures.get(2) {
            if rest.as_str() != "/" {
                continue;
            }
        }

        if GITHUB_RESERVED.contains(&username.to_lowercase().as_str()) {
            continue;
        }

        return Some(format!("https://github.com/{username}"));
    }

    None
}

/// Find a LinkedIn profile URL in a result page, link fields first.
#[must_use]
pub fn find_linkedin_url(items: &[SearchResultItem]) -> Option<String> {
    find_profile_url(items, linkedin_profile_url)
}

/// Find a GitHub profile URL in a result page, link fields first.
#[must_use]
pub fn find_github_url(items: &[SearchResultItem]) -> Option<String> {
    find_profile_url(items, github_profile_url)
}

fn find_profile_url(
    items: &[SearchResultItem],
    matcher: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    items
        .iter()
        .find_map(|item| matcher(&item.link))
        .or_else(|| items.iter().find_map(|item| matcher(&item.snippet)))
        .or_else(|| items.iter().find_map(|item| matcher(&item.title)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linkedin_bare_url() {
        assert_eq!(
            linkedin_profile_url("https://www.linkedin.com/in/janedoe").as_deref(),
            Some("https://www.linkedin.com/in/janedoe")
        );
    }

    #[test]
    fn test_linkedin_country_subdomain_normalized() {
        assert_eq!(
            linkedin_profile_url("https://uk.linkedin.com/in/janedoe").as_deref(),
            Some("https://www.linkedin.com/in/janedoe")
        );
    }

    #[test]
    fn test_linkedin_schemeless_and_mid_sentence() {
        assert_eq!(
            linkedin_profile_url("Find Jane at linkedin.com/in/jane-doe-123, or email her.")
                .as_deref(),
            Some("https://www.linkedin.com/in/jane-doe-123")
        );
    }

    #[test]
    fn test_linkedin_ignores_company_pages() {
        assert!(linkedin_profile_url("https://www.linkedin.com/company/example").is_none());
    }

    #[test]
    fn test_github_single_segment() {
        assert_eq!(
            github_profile_url("https://github.com/janedoe").as_deref(),
            Some("https://github.com/janedoe")
        );
        assert_eq!(
            github_profile_url("https://github.com/janedoe/").as_deref(),
            Some("https://github.com/janedoe")
        );
        assert_eq!(
            github_profile_url("github.com/janedoe").as_deref(),
            Some("https://github.com/janedoe")
        );
    }

    #[test]
    fn test_github_repository_rejected() {
        assert!(github_profile_url("https://github.com/janedoe/dotfiles").is_none());
    }

    #[test]
    fn test_github_reserved_paths_rejected() {
        assert!(github_profile_url("https://github.com/about").is_none());
        assert!(github_profile_url("https://github.com/topics").is_none());
        assert!(github_profile_url("https://github.com/Trending").is_none());
    }

    #[test]
    fn test_github_profile_after_repository_in_same_text() {
        let text = "See https://github.com/janedoe/dotfiles and https://github.com/janedoe";
        assert_eq!(
            github_profile_url(text).as_deref(),
            Some("https://github.com/janedoe")
        );
    }

    #[test]
    fn test_link_field_beats_earlier_snippet() {
        let items = vec![
            SearchResultItem::new(
                "Some blog post",
                "https://blog.example.com/post",
                "mentions linkedin.com/in/from-snippet in passing",
            ),
            SearchResultItem::new(
                "Jane Doe | LinkedIn",
                "https://www.linkedin.com/in/from-link",
                "Jane Doe's profile",
            ),
        ];

        assert_eq!(
            find_linkedin_url(&items).as_deref(),
            Some("https://www.linkedin.com/in/from-link")
        );
    }

    #[test]
    fn test_item_order_within_same_field() {
        let items = vec![
            SearchResultItem::new("First", "https://www.linkedin.com/in/first", ""),
            SearchResultItem::new("Second", "https://www.linkedin.com/in/second", ""),
        ];

        assert_eq!(
            find_linkedin_url(&items).as_deref(),
            Some("https://www.linkedin.com/in/first")
        );
    }

    #[test]
    fn test_snippet_beats_title() {
        let items = vec![SearchResultItem::new(
            "profile at linkedin.com/in/from-title",
            "https://example.com/unrelated",
            "see linkedin.com/in/from-snippet",
        )];

        assert_eq!(
            find_linkedin_url(&items).as_deref(),
            Some("https://www.linkedin.com/in/from-snippet")
        );
    }

    #[test]
    fn test_no_match_is_none() {
        let items = vec![SearchResultItem::new(
            "Nothing here",
            "https://example.com",
            "no profiles mentioned",
        )];

        assert!(find_linkedin_url(&items).is_none());
        assert!(find_github_url(&items).is_none());
    }

    #[test]
    fn test_github_search_results() {
        let items = vec![
            SearchResultItem::new(
                "janedoe/dotfiles",
                "https://github.com/janedoe/dotfiles",
                "Jane's configuration files",
            ),
            SearchResultItem::new(
                "janedoe (Jane Doe) · GitHub",
                "https://github.com/janedoe",
                "Jane Doe has 42 repositories available.",
            ),
        ];

        assert_eq!(
            find_github_url(&items).as_deref(),
            Some("https://github.com/janedoe")
        );
    }
}
