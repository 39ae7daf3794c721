pub mod doi;

pub use doi::*;
