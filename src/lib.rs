pub mod core;
pub mod mapping;

pub use crate::core::error::CatalogError;
pub use crate::core::normalize::normalize;
pub use crate::core::resolve::resolve;
pub use crate::core::types::{DisplayOperation, RawOperation};
pub use crate::mapping::catalog::OperationCatalog;
pub use crate::mapping::query::{SelectionQuery, SelectorConfig};
