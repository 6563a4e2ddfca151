pub mod lighthouse;

pub use lighthouse::{parse_lighthouse_report, run_lighthouse};
