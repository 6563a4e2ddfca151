pub mod handler;

pub use handler::{analyze_get, analyze_post, health, status_for};
