pub mod bundle;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod mode;
pub mod overrides;
pub mod validation;

// Re-export main types
pub use bundle::*;
pub use dev::*;
pub use error::*;
pub use mode::*;
pub use overrides::{ConfigOverrides, DevServerOverrides, HtmlOverrides};

// Re-export discovery and validation
pub use discovery::{discover_overrides, OverrideDiscovery};
pub use validation::{validate_schema, ConfigValidator, SchemaValidator};
