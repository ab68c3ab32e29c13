//! Catalog-driven Problem Details.
//!
//! - [`ErrDef`]: static error definitions that render as problem responses
//! - [`CatalogConfig`]: how catalog entries are turned into bodies (type base URL,
//!   extension member names, default headers), loaded in layers
pub mod catalog;
pub mod config;

pub use catalog::ErrDef;
pub use config::CatalogConfig;
