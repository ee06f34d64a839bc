pub mod types;
pub mod loader;
pub mod builder;
pub mod validator;
pub mod templates;
pub mod credentials;

pub use types::{ApiConfig, ClassifierConfig};
pub use loader::{ConfigLoader, DefaultConfigLoader};
pub use builder::ClassifierConfigBuilder;
pub use validator::ConfigValidatorImpl;
pub use templates::{generate_default_config_template, ensure_config_file_exists};
pub use credentials::ApiKey;
