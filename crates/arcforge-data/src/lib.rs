pub mod config;
pub mod loader;
pub mod schema;

pub use config::{Config, DataConfig};
pub use loader::{DataLoadError, LoadReport, SkippedFile, load_catalog, load_items};
