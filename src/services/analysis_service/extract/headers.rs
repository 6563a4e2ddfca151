use crate::models::AnalysisTarget;

pub fn has_header(target: &AnalysisTarget, name: &str) -> bool {
    target.header(name).is_some_and(|v| !v.trim().is_empty())
}

pub fn header_equals(target: &AnalysisTarget, name: &str, expected: &str) -> bool {
    target
        .header(name)
        .is_some_and(|v| v.trim().eq_ignore_ascii_case(expected))
}

pub fn header_contains(target: &AnalysisTarget, name: &str, needle: &str) -> bool {
    target
        .header(name)
        .is_some_and(|v| v.to_ascii_lowercase().contains(&needle.to_ascii_lowercase()))
}
