pub mod file_utils;
pub mod log_utils;
pub mod url_utils;

pub use file_utils::{sanitize_filename, save_report};
pub use log_utils::log_score_breakdown;
pub use url_utils::{domain_of, is_https, is_internal_link, normalize_url, url_structure_score};
