pub mod fs;
pub mod logging;
pub mod progress;
pub mod types;
pub mod utils;

pub use fs::write_atomic;
pub use logging::*;
pub use progress::create_doi_progress_bar;
pub use types::*;
pub use utils::*;
