pub mod model;
mod sections;
pub mod validator;

pub use model::{render_config, Config, FieldFilter, Section, CONTEXT_PREFIX, URLENCODED};
pub use validator::ConfigValidator;
