pub mod builtin;
pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use catalog::{Catalog, Dictionary, Entry};
pub use config::{parse_site_toml, parse_site_toml_str};
pub use error::{Error, Result};
pub use types::*;
