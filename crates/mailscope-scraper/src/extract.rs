//! Display-name extraction heuristics.
//!
//! Given the HTML of a public profile page, try an ordered chain of
//! strategies and return the first non-empty match. Earlier strategies
//! recover an authentic display name; the final one degrades to the
//! username embedded in the URL.

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;

/// Structured selectors in priority order, richest signal first.
const NAME_SELECTOR_SOURCES: [&str; 3] = [".p-name", ".vcard-fullname", r#"[itemprop="name"]"#];

fn name_selectors() -> &'static Vec<Selector> {
    static SELECTORS: OnceLock<Vec<Selector>> = OnceLock::new();
    SELECTORS.get_or_init(|| {
        NAME_SELECTOR_SOURCES
            .iter()
            .map(|source| Selector::parse(source).expect("valid selector"))
            .collect()
    })
}

fn title_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("title").expect("valid selector"))
}

/// Extract a display name from profile-page HTML.
///
/// Strategies, first hit wins:
/// 1. Structured name selectors (`.p-name`, `.vcard-fullname`,
///    `[itemprop="name"]`).
/// 2. Page-title parenthetical: `"<username> (<Full Name>) · <Site>"`.
/// 3. Page-title leading segment: `"<username> · <Site>"`.
/// 4. The URL's final path segment (the username itself).
#[must_use]
pub fn extract_name_from_html(html: &str, profile_url: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for selector in name_selectors() {
        if let Some(element) = document.select(selector).next() {
            if let Some(name) = clean_text(&element.text().collect::<String>()) {
                return Some(name);
            }
        }
    }

    if let Some(title) = document
        .select(title_selector())
        .next()
        .and_then(|el| clean_text(&el.text().collect::<String>()))
    {
        if let Some(name) = name_from_title(&title) {
            return Some(name);
        }
    }

    username_from_url(profile_url)
}

/// Extract a name from a page title.
///
/// Prefers the parenthetical full name; falls back to the segment before
/// the `·` site suffix.
#[must_use]
pub fn name_from_title(title: &str) -> Option<String> {
    static PAREN_REGEX: OnceLock<Regex> = OnceLock::new();
    let paren = PAREN_REGEX.get_or_init(|| Regex::new(r"^\S+\s*\(([^)]+)\)").expect("valid regex"));

    if let Some(captures) = paren.captures(title.trim()) {
        if let Some(name) = clean_text(&captures[1]) {
            return Some(name);
        }
    }

    if !title.contains('·') {
        return None;
    }

    let leading = title.split('·').next()?;
    let leading = leading.split('(').next().unwrap_or(leading);
    clean_text(leading)
}

/// The final path segment of a profile URL, used as a last-resort name.
///
/// Rejects candidates that look like a bare host rather than a username.
#[must_use]
pub fn username_from_url(url: &str) -> Option<String> {
    let candidate = url.trim_end_matches('/').rsplit('/').next()?;

    if candidate.is_empty() || candidate.contains('.') || candidate.contains(':') {
        return None;
    }

    Some(candidate.to_string())
}

/// Collapse runs of whitespace and reject empty results.
fn clean_text(raw: &str) -> Option<String> {
    let cleaned = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE_URL: &str = "https://github.com/janedoe";

    #[test]
    fn test_p_name_selector() {
        let html = r#"
            <html><head><title>janedoe (Jane Doe) · GitHub</title></head>
            <body>
                <span class="p-name vcard-fullname" itemprop="name">
                    Jane Doe
                </span>
            </body></html>
        "#;

        assert_eq!(
            extract_name_from_html(html, PROFILE_URL).as_deref(),
            Some("Jane Doe")
        );
    }

    #[test]
    fn test_vcard_fullname_selector() {
        let html = r#"<html><body><h1 class="vcard-fullname">Grace Hopper</h1></body></html>"#;

        assert_eq!(
            extract_name_from_html(html, PROFILE_URL).as_deref(),
            Some("Grace Hopper")
        );
    }

    #[test]
    fn test_itemprop_selector() {
        let html = r#"<html><body><div itemprop="name">Alan Turing</div></body></html>"#;

        assert_eq!(
            extract_name_from_html(html, PROFILE_URL).as_deref(),
            Some("Alan Turing")
        );
    }

    #[test]
    fn test_selector_priority_order() {
        let html = r#"
            <html><body>
                <div itemprop="name">Wrong Name</div>
                <span class="p-name">Right Name</span>
            </body></html>
        "#;

        assert_eq!(
            extract_name_from_html(html, PROFILE_URL).as_deref(),
            Some("Right Name")
        );
    }

    #[test]
    fn test_empty_selector_falls_through_to_title() {
        let html = r#"
            <html><head><title>janedoe (Jane Doe) · GitHub</title></head>
            <body><span class="p-name">   </span></body></html>
        "#;

        assert_eq!(
            extract_name_from_html(html, PROFILE_URL).as_deref(),
            Some("Jane Doe")
        );
    }

    #[test]
    fn test_title_parenthetical() {
        assert_eq!(
            name_from_title("janedoe (Jane Doe) · GitHub").as_deref(),
            Some("Jane Doe")
        );
    }

    #[test]
    fn test_title_leading_segment() {
        assert_eq!(name_from_title("janedoe · GitHub").as_deref(), Some("janedoe"));
    }

    #[test]
    fn test_title_without_site_suffix_yields_nothing() {
        assert_eq!(name_from_title("Welcome to GitHub"), None);
    }

    #[test]
    fn test_title_empty_parenthetical_uses_leading_segment() {
        assert_eq!(name_from_title("janedoe () · GitHub").as_deref(), Some("janedoe"));
    }

    #[test]
    fn test_url_fallback() {
        let html = "<html><body><p>Nothing useful here</p></body></html>";

        assert_eq!(
            extract_name_from_html(html, "https://github.com/janedoe").as_deref(),
            Some("janedoe")
        );
        assert_eq!(
            extract_name_from_html(html, "https://github.com/janedoe/").as_deref(),
            Some("janedoe")
        );
    }

    #[test]
    fn test_url_fallback_rejects_bare_host() {
        assert_eq!(username_from_url("https://github.com/"), None);
        assert_eq!(username_from_url("https://github.com"), None);
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let html = "<html><body><span class=\"p-name\">\n  Jane\n   Doe \n</span></body></html>";

        assert_eq!(
            extract_name_from_html(html, PROFILE_URL).as_deref(),
            Some("Jane Doe")
        );
    }
}
