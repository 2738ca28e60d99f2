pub mod config;
pub mod version;

pub use config::*;
pub use version::Version;
