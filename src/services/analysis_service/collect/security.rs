use regex::Regex;
use std::sync::LazyLock;

use crate::error::CollectionError;
use crate::models::{AnalysisTarget, SecuritySignals};
use crate::services::analysis_service::extract::headers::{has_header, header_contains, header_equals};
use crate::utils::is_https;

static MIXED_CONTENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:src|href)\s*=\s*["']http://"#).expect("Failed to compile mixed content regex")
});

/// Transport and header hygiene. Needs the response headers; a target
/// without any is treated as missing data.
pub fn collect(target: &AnalysisTarget) -> Result<SecuritySignals, CollectionError> {
    if target.headers.is_empty() {
        return Err(CollectionError::MissingData("response headers"));
    }

    let https = is_https(&target.url);
    let mixed_content_refs = if https {
        MIXED_CONTENT_RE.find_iter(&target.html).count()
    } else {
        0
    };

    Ok(SecuritySignals {
        https,
        hsts: has_header(target, "strict-transport-security"),
        content_security_policy: has_header(target, "content-security-policy"),
        content_type_options: header_equals(target, "x-content-type-options", "nosniff"),
        frame_options: has_header(target, "x-frame-options")
            || header_contains(target, "content-security-policy", "frame-ancestors"),
        referrer_policy: has_header(target, "referrer-policy"),
        mixed_content_refs,
    })
}
