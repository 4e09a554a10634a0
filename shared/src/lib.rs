pub mod codec;
pub mod config;
pub mod registry;
pub mod resolver;
pub mod types;
pub mod utils;

pub use crate::codec::{decode_tenant, encode_tenant, TENANT_HEADER};
pub use crate::config::{load_config, validate_config};
pub use registry::TenantRegistry;
pub use resolver::TenantResolver;
pub use types::*;
pub use utils::*;
