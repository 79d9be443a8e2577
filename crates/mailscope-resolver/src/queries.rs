//! Search query templates for the fallback stages.
//!
//! Each stage issues its templates strictly in order and stops at the
//! first query whose result page yields a profile URL. The third
//! email-based template targets pages that publish obfuscated addresses
//! (`jane [at] example.com`).

use mailscope_core::EmailAddress;

/// Queries for finding a LinkedIn profile directly from an email address.
#[must_use]
pub fn direct_linkedin_queries(email: &EmailAddress) -> Vec<String> {
    vec![
        format!("\"{email}\" linkedin.com/in"),
        format!("\"{email}\" linkedin profile"),
        format!(
            "\"{} [at] {}\" linkedin",
            email.local_part(),
            email.domain()
        ),
    ]
}

/// Queries for finding a GitHub profile from an email address.
#[must_use]
pub fn github_queries(email: &EmailAddress) -> Vec<String> {
    vec![
        format!("\"{email}\" site:github.com"),
        format!("{email} github profile"),
        format!(
            "\"{} [at] {}\" site:github.com",
            email.local_part(),
            email.domain()
        ),
    ]
}

/// Queries for finding a LinkedIn profile from an extracted display name.
#[must_use]
pub fn linkedin_by_name_queries(name: &str) -> Vec<String> {
    vec![
        format!("\"{name}\" linkedin.com/in"),
        format!("\"{name}\" linkedin profile"),
        format!("{name} linkedin"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> EmailAddress {
        EmailAddress::new("jane.doe@example.com").expect("valid email")
    }

    #[test]
    fn test_direct_linkedin_queries_order() {
        assert_eq!(
            direct_linkedin_queries(&email()),
            vec![
                "\"jane.doe@example.com\" linkedin.com/in",
                "\"jane.doe@example.com\" linkedin profile",
                "\"jane.doe [at] example.com\" linkedin",
            ]
        );
    }

    #[test]
    fn test_github_queries_order() {
        assert_eq!(
            github_queries(&email()),
            vec![
                "\"jane.doe@example.com\" site:github.com",
                "jane.doe@example.com github profile",
                "\"jane.doe [at] example.com\" site:github.com",
            ]
        );
    }

    #[test]
    fn test_linkedin_by_name_queries_order() {
        assert_eq!(
            linkedin_by_name_queries("Jane Doe"),
            vec![
                "\"Jane Doe\" linkedin.com/in",
                "\"Jane Doe\" linkedin profile",
                "Jane Doe linkedin",
            ]
        );
    }
}
