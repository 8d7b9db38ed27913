pub mod cli;
pub mod config;
pub mod error;
pub mod schema;
pub mod utils;

pub use cli::{read_source, schema_export, validate_source};
pub use config::{
    render_config, Config, ConfigValidator, FieldFilter, Section, CONTEXT_PREFIX, URLENCODED,
};
pub use error::{ConfigError, ErrorKind, Result};
pub use schema::{filter_config_schema, Schema, SchemaKind};
pub use utils::logging;
