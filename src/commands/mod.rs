pub mod extract;
pub mod fetch;

pub use extract::run_extract;
pub use fetch::{fetch_citations, run_fetch};
