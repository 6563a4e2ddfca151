use reqwest::Url;

use crate::error::FetchError;

/// Adds `https://` when the scheme is missing and checks the result parses
/// as an http(s) URL.
pub fn normalize_url(raw: &str) -> Result<String, FetchError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FetchError::InvalidUrl {
            url: raw.to_string(),
            reason: "URL is required".to_string(),
        });
    }

    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&candidate).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if parsed.host_str().is_none() {
        return Err(FetchError::InvalidUrl {
            url: raw.to_string(),
            reason: "missing host".to_string(),
        });
    }
    Ok(parsed.to_string())
}

pub fn domain_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.trim_start_matches("www.").to_string()))
}

pub fn is_https(url: &str) -> bool {
    Url::parse(url).map(|u| u.scheme() == "https").unwrap_or(false)
}

/// Relative links, fragments and links back to `domain` count as internal.
pub fn is_internal_link(href: &str, domain: Option<&str>) -> bool {
    let href = href.trim();
    if href.starts_with('/') && !href.starts_with("//") {
        return true;
    }
    if href.starts_with('#') || href.starts_with('?') {
        return true;
    }
    if !href.contains("://") && !href.starts_with("//") && !href.starts_with("mailto:") {
        return !href.starts_with("tel:") && !href.starts_with("javascript:");
    }
    match (domain, domain_of(&absolute(href))) {
        (Some(domain), Some(link_domain)) => {
            link_domain == domain || link_domain.ends_with(&format!(".{}", domain))
        }
        _ => false,
    }
}

fn absolute(href: &str) -> String {
    if href.starts_with("//") {
        format!("https:{}", href)
    } else {
        href.to_string()
    }
}

/// 0-10: shallow path (4), hyphenated words without underscores (3), at least
/// one meaningful segment (3).
pub fn url_structure_score(url: &str) -> f64 {
    let Ok(parsed) = Url::parse(url) else {
        return 0.0;
    };
    let path = parsed.path();
    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();

    let mut score = 0.0;
    if parts.len() <= 3 {
        score += 4.0;
    }
    if path.contains('-') && !path.contains('_') {
        score += 3.0;
    }
    if parts.iter().any(|p| p.len() > 2) {
        score += 3.0;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_prepends_https() {
        assert_eq!(
            normalize_url("example.com/blog").unwrap(),
            "https://example.com/blog"
        );
        assert_eq!(
            normalize_url(" http://example.com ").unwrap(),
            "http://example.com/"
        );
    }

    #[test]
    fn normalize_rejects_empty_and_garbage() {
        assert!(matches!(normalize_url("  "), Err(FetchError::InvalidUrl { .. })));
        assert!(matches!(
            normalize_url("https://"),
            Err(FetchError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn internal_links() {
        let domain = Some("example.com");
        assert!(is_internal_link("/about", domain));
        assert!(is_internal_link("posts/second", domain));
        assert!(is_internal_link("https://www.example.com/x", domain));
        assert!(is_internal_link("https://blog.example.com/x", domain));
        assert!(!is_internal_link("https://other.org/x", domain));
        assert!(!is_internal_link("//cdn.other.org/x", domain));
        assert!(!is_internal_link("mailto:me@example.com", domain));
    }

    #[test]
    fn url_structure() {
        assert_eq!(url_structure_score("https://example.com/blog/my-first-post"), 10.0);
        assert_eq!(url_structure_score("https://example.com/a/b/c/d/e_"), 0.0);
        assert_eq!(url_structure_score("not a url"), 0.0);
    }
}
