mod loader;
mod types;

pub use loader::CatalogError;
pub use types::{AvailabilityBlock, Catalog, Experience, Expert, Project};
