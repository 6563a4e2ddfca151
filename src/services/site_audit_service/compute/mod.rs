pub mod stats;

pub use stats::{compute_sample_stats, font_size_histogram};
